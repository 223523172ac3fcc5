use std::fmt;

use crate::error::CheckError;

/// Severity reported to the monitoring supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckState {
    Ok,
    Warning,
    Critical,
}

impl CheckState {
    /// Process exit code understood by Sensu/Nagios-style supervisors.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one check run: a severity plus an optional operator message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub state: CheckState,
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn ok() -> Self {
        Self {
            state: CheckState::Ok,
            message: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            state: CheckState::Warning,
            message: Some(message.into()),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            state: CheckState::Critical,
            message: Some(message.into()),
        }
    }
}

impl From<CheckError> for CheckOutcome {
    fn from(err: CheckError) -> Self {
        Self {
            state: err.state(),
            message: Some(err.to_string()),
        }
    }
}

/// `STATE` or `STATE: message`.
impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.state),
            None => write!(f, "{}", self.state),
        }
    }
}
