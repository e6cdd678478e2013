//! One handler per interactive action.
//!
//! Handlers report everything through the session so prompts, inputs, and
//! responses all land in the transcript. File failures are reported on that
//! same channel and never propagated; only the interactive stream itself
//! can fail a handler.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use cardbox_core::{storage, Card, Deck, Grade};

use crate::session::Session;

const FILE_NOT_FOUND: &str = "File not found.";

/// `add`: prompt for a new term/definition pair, validating each for
/// uniqueness as it is entered. A conflict aborts the whole add with the
/// deck unchanged; a taken term is reported before the definition is ever
/// prompted for.
pub fn add<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
) -> io::Result<()> {
    session.say("The card:")?;
    let term = session.read_line()?;
    if deck.check_term(&term).is_err() {
        session.say(&format!("The card \"{term}\" already exists."))?;
        session.say("The card already exists.")?;
        return Ok(());
    }

    session.say("The definition of the card:")?;
    let definition = session.read_line()?;
    if deck.check_definition(&definition).is_err() {
        session.say(&format!("The definition \"{definition}\" already exists."))?;
        session.say("The definition already exists.")?;
        return Ok(());
    }

    session.say(&format!(
        "The pair (\"{term}\":\"{definition}\") has been added."
    ))?;
    deck.insert(Card::new(term, definition));
    Ok(())
}

/// `remove`: prompt for a term and delete its card if present.
pub fn remove<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
) -> io::Result<()> {
    session.say("The card:")?;
    let term = session.read_line()?;
    if deck.remove(&term).is_ok() {
        session.say("The card has been removed.")?;
    } else {
        session.say(&format!(
            "Can't remove \"{term}\": there is no such card."
        ))?;
    }
    Ok(())
}

fn prompt_file_name<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> io::Result<String> {
    session.say("File Name:")?;
    session.read_line()
}

/// `import` with an interactive file-name prompt.
pub fn import<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
) -> io::Result<()> {
    let file_name = prompt_file_name(session)?;
    import_from(session, deck, Path::new(&file_name))
}

/// Load cards from a file, one `term:definition:mistakes` line each. Cards
/// go through the trusted upsert, so the last line wins on a term
/// collision. A malformed line stops the import at that line; cards loaded
/// from earlier lines are kept. Blank lines are skipped.
pub fn import_from<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
    path: &Path,
) -> io::Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return session.say(FILE_NOT_FOUND),
    };

    let mut count = 0;
    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match storage::parse_line(line, index + 1) {
            Ok(card) => {
                deck.insert(card);
                count += 1;
            }
            Err(err) => {
                session.say(&format!("Import stopped: {err}."))?;
                break;
            }
        }
    }

    debug!(count, path = %path.display(), "cards imported");
    session.say(&format!("{count} cards have been loaded."))
}

/// `export` with an interactive file-name prompt.
pub fn export<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &Deck,
) -> io::Result<()> {
    let file_name = prompt_file_name(session)?;
    export_to(session, deck, Path::new(&file_name))
}

/// Write the whole deck in insertion order.
pub fn export_to<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &Deck,
    path: &Path,
) -> io::Result<()> {
    let content = storage::serialize(deck.iter());
    if fs::write(path, content).is_err() {
        return session.say(FILE_NOT_FOUND);
    }

    debug!(count = deck.len(), path = %path.display(), "cards exported");
    session.say(&format!("{} cards have been saved.", deck.len()))
}

/// `ask`: quiz the user the requested number of times, drawing cards
/// uniformly at random with replacement. Answers are compared verbatim; a
/// wrong answer bumps the asked card's mistake counter, and an answer that
/// is exactly another card's definition names that card.
pub fn ask<R: BufRead, W: Write, G: Rng>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
    rng: &mut G,
) -> io::Result<()> {
    session.say("How many times to ask?")?;
    let raw = session.read_line()?;
    let times: u32 = match raw.trim().parse() {
        Ok(times) => times,
        Err(_) => {
            return session.say(&format!("Can't ask: \"{raw}\" is not a number."));
        }
    };

    if deck.is_empty() {
        return session.say("Can't ask: the deck is empty.");
    }

    for _ in 0..times {
        let term = match deck.choose(rng) {
            Some(card) => card.term.clone(),
            None => break,
        };
        session.say(&format!("Print the definition of \"{term}\":"))?;
        let answer = session.read_line()?;

        match deck.grade(&term, &answer) {
            Ok(Grade::Correct) => session.say("Correct answer.")?,
            Ok(Grade::Wrong {
                correct,
                matched_term: Some(other),
            }) => session.say(&format!(
                "Wrong answer. The correct one is \"{correct}\", \
                 you've just written the definition of \"{other}\"."
            ))?,
            Ok(Grade::Wrong {
                correct,
                matched_term: None,
            }) => session.say(&format!(
                "Wrong answer. The correct one is \"{correct}\"."
            ))?,
            // The term came from this deck a moment ago.
            Err(_) => break,
        }
    }
    Ok(())
}

/// `log`: prompt for a file name and flush the transcript there. The
/// confirmation line is printed after the write, so it is not part of the
/// saved file.
pub fn save_log<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<()> {
    let file_name = prompt_file_name(session)?;
    if session.save_transcript(Path::new(&file_name)).is_err() {
        return session.say(FILE_NOT_FOUND);
    }

    debug!(lines = session.transcript().len(), file = %file_name, "transcript saved");
    session.say("The log has been saved.")
}

/// `hardest card`: report the card or cards tied at the highest nonzero
/// mistake count.
pub fn hardest_card<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &Deck,
) -> io::Result<()> {
    let (hardest, mistakes) = deck.hardest();
    let report = match hardest.as_slice() {
        [] => "There are no cards with errors.".to_string(),
        [card] => format!(
            "The hardest card is \"{}\". You have {mistakes} errors answering it.",
            card.term
        ),
        cards => {
            let terms: Vec<String> =
                cards.iter().map(|c| format!("\"{}\"", c.term)).collect();
            format!(
                "The hardest cards are {}. You have {mistakes} errors answering them.",
                terms.join(", ")
            )
        }
    };
    session.say(&report)
}

/// `reset stats`: zero every mistake counter.
pub fn reset_stats<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    deck: &mut Deck,
) -> io::Result<()> {
    deck.reset_stats();
    session.say("Card statistics has been reset.")
}
