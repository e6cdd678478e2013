//! Flat-file card format: one card per line, `term:definition:mistakes`.
//!
//! There is no escaping. A literal `:` inside a term or definition corrupts
//! the line on both export and import; that is a documented limitation of
//! the format, kept for compatibility with existing card files.

use crate::card::Card;
use crate::error::ParseError;

/// Parse one `term:definition:mistakes` line. `line_number` is 1-based and
/// only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Card, ParseError> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() != 3 {
        return Err(ParseError::MalformedLine { line: line_number });
    }

    let mistakes = fields[2]
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidMistakes {
            line: line_number,
            value: fields[2].to_string(),
        })?;

    Ok(Card::with_mistakes(
        fields[0].to_string(),
        fields[1].to_string(),
        mistakes,
    ))
}

/// Render one card as a storage line.
pub fn format_line(card: &Card) -> String {
    format!("{}:{}:{}", card.term, card.definition, card.mistakes)
}

/// Render cards one line each, in the order given, with a trailing newline.
pub fn serialize<'a>(cards: impl Iterator<Item = &'a Card>) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format_line(card));
        out.push('\n');
    }
    out
}
