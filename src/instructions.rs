use serde::Serialize;
use std::fmt;

/// One non-empty, trimmed segment of a recipe's instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep(String);

impl InstructionStep {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for InstructionStep {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split raw instructions into ordered steps.
///
/// Any run of `\r` / `\n` separates steps; segments that are blank after
/// trimming are dropped. Empty input gives an empty list.
pub fn parse_instructions(raw: &str) -> Vec<InstructionStep> {
    raw.split(['\r', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| InstructionStep(segment.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_with_blank_line() {
        let steps = parse_instructions("Step1\r\nStep2\r\n\r\nStep3");
        assert_eq!(steps, vec!["Step1", "Step2", "Step3"]);
    }

    #[test]
    fn test_mixed_line_endings_and_padding() {
        let steps = parse_instructions("  Boil water.\n\n\rAdd pasta.  \rDrain\n");
        assert_eq!(steps, vec!["Boil water.", "Add pasta.", "Drain"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse_instructions("").is_empty());
        assert!(parse_instructions(" \r\n \n\t").is_empty());
    }

    #[test]
    fn test_single_paragraph_is_one_step() {
        let steps = parse_instructions("Mix everything and bake for 30 minutes.");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].to_string(), "Mix everything and bake for 30 minutes.");
    }
}
