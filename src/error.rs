//! Error types for InvoiceChain
//!
//! Tamper detection is not an error: `Ledger::is_valid` reports it as `false`.
//! Everything here is a caller-recoverable condition around the ledger.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidInput(String),
    ConfigError(String),
    IoError(String),
    SerializationError(String),
    UnknownCommand(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LedgerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LedgerError::IoError(msg) => write!(f, "IO error: {}", msg),
            LedgerError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            LedgerError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(err: toml::de::Error) -> Self {
        LedgerError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::SerializationError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LedgerError::InvalidInput("sender must not be empty".to_string()).to_string(),
            "Invalid input: sender must not be empty"
        );
        assert_eq!(
            LedgerError::UnknownCommand("mine".to_string()).to_string(),
            "Unknown command: mine"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LedgerError = io.into();
        assert!(matches!(err, LedgerError::IoError(ref msg) if msg.contains("pipe closed")));
    }
}
