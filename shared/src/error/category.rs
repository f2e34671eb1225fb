use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Area an error code belongs to, taken from its thousands digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Order,
    Catalog,
    /// Storage and rendering faults; logged at error level
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            1 => Self::Auth,
            4 => Self::Order,
            6 => Self::Catalog,
            9.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
