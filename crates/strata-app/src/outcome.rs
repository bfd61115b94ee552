use std::fmt;

/// Append-only record of the steps one business operation went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeLog(String);

impl OutcomeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl AsRef<str>) {
        self.0.push_str(step.as_ref());
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OutcomeLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OutcomeLog> for String {
    fn from(log: OutcomeLog) -> Self {
        log.0
    }
}
