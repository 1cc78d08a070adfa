use serde::{Deserialize, Serialize};

/// Firm to be created from the bulk-add text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmDraft {
    pub name: String,
}

/// One firm per non-blank line, whitespace collapsed, input order kept.
pub fn parse_firm_lines(text: &str) -> Vec<FirmDraft> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|name| !name.is_empty())
        .map(|name| FirmDraft { name })
        .collect()
}
