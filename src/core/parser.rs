//! Input line tokenizer.
//!
//! Terminal input is split on whitespace: the first word names the command
//! and the remaining words are passed to its handler verbatim. There is no
//! quoting, piping or expansion.

/// A tokenized input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize a line. Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace().map(str::to_string);
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let cmd = parse_input("ls").unwrap();
        assert_eq!(cmd.name, "ls");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_args_collapse_whitespace() {
        let cmd = parse_input("  echo   hello \t world ").unwrap();
        assert_eq!(cmd.name, "echo");
        assert_eq!(cmd.args, vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t"), None);
    }

    #[test]
    fn test_parse_preserves_case() {
        assert_eq!(parse_input("HELP").unwrap().name, "HELP");
    }
}
