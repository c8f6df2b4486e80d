//! Status and confirmation messages for shell feedback.

use std::fmt;

/// A one-line confirmation or error shown after a command.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Success when `changed`, otherwise a failure explaining that nothing
    /// happened.
    pub fn from_change(
        changed: bool,
        done: impl Into<String>,
        unchanged: impl Into<String>,
    ) -> Self {
        if changed {
            Self::success(done)
        } else {
            Self::failure(unchanged)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
