//! Startup argument parsing.
//!
//! The accepted interface is fixed: single-dash pairs `-import <path>` and
//! `-export <path>`, in any order, each optional. Arguments are consumed in
//! strict flag/value pairs and unrecognized pairs are ignored. Single-dash
//! long flags rule out a derive-based parser, so this is a plain pair scan.

/// File paths supplied on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// Card file to load before the loop starts.
    pub import_path: Option<String>,
    /// Card file to write as the last act of `exit`.
    pub export_path: Option<String>,
}

impl Options {
    /// Parse arguments, program name already stripped.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let value = args.next();
            match (flag.as_str(), value) {
                ("-import", Some(path)) => options.import_path = Some(path),
                ("-export", Some(path)) => options.export_path = Some(path),
                _ => {}
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Options {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]), Options::default());
    }

    #[test]
    fn import_and_export_in_either_order() {
        let expected = Options {
            import_path: Some("in.txt".to_string()),
            export_path: Some("out.txt".to_string()),
        };
        assert_eq!(parse(&["-import", "in.txt", "-export", "out.txt"]), expected);
        assert_eq!(parse(&["-export", "out.txt", "-import", "in.txt"]), expected);
    }

    #[test]
    fn unrecognized_pairs_are_ignored() {
        let options = parse(&["-verbose", "yes", "-import", "in.txt"]);
        assert_eq!(options.import_path.as_deref(), Some("in.txt"));
        assert_eq!(options.export_path, None);
    }

    #[test]
    fn flag_without_value_is_ignored() {
        assert_eq!(parse(&["-import"]), Options::default());
    }
}
