//! Helper functions for creating specific error types

use super::types::ConsoleError;

impl ConsoleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_permission<S: Into<String>>(value: S) -> Self {
        Self::InvalidPermission(value.into())
    }

    pub fn invalid_role<S: Into<String>>(value: S) -> Self {
        Self::InvalidRole(value.into())
    }
}
