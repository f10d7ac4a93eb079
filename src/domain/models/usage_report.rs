use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    label: String,
    tokens: u64,
}

impl UsageEntry {
    pub fn new(label: impl Into<String>, tokens: u64) -> Self {
        Self {
            label: label.into(),
            tokens,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }
}

/// Labelled token counts, printed one entry per line.
///
/// There is no metering source behind this yet: [`UsageReport::sample`] is the
/// only producer and its figures are fixed placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    entries: Vec<UsageEntry>,
}

impl UsageReport {
    pub fn new(entries: Vec<UsageEntry>) -> Self {
        Self { entries }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            UsageEntry::new("user1", 1200),
            UsageEntry::new("user2", 980),
            UsageEntry::new("entreprise-X", 3600),
        ])
    }

    pub fn entries(&self) -> &[UsageEntry] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(UsageEntry::tokens).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {} tokens", entry.label, entry.tokens)?;
        }
        Ok(())
    }
}
