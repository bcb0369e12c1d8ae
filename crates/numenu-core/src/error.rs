//! Error types for numenu.

use std::path::PathBuf;
use thiserror::Error;

/// A violated structural invariant of a [`Menu`](crate::Menu).
///
/// Variants are listed in the order `validate()` checks them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("The number of options ({0}) is less than zero.")]
    NegativeOptionCount(i64),

    #[error("The exit option's number ({exit_on}) is within the range [1, {num_options}].")]
    ExitWithinOptionRange { exit_on: i64, num_options: i64 },

    #[error(
        "The number of options ({num_options}) does not equal the length of the options array ({len})."
    )]
    OptionsLengthMismatch { num_options: i64, len: usize },

    #[error(
        "The number of options ({num_options}) does not equal the length of the chosen array ({len})."
    )]
    ChosenLengthMismatch { num_options: i64, len: usize },

    #[error("The number of options is zero and exiting is not allowed.")]
    NoOptionsWithoutExit,
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid menu: {0}")]
    Structural(#[from] StructuralError),

    #[error("Menu file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Option index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Input closed before a valid selection was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MenuError {
    /// The structural invariant that failed, if this is a structural error.
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            MenuError::Structural(e) => Some(e),
            _ => None,
        }
    }
}
