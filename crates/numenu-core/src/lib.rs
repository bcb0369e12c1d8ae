//! Console numbered-choice menus: state, rendering, input and persistence.

mod error;
mod input;
mod menu;
mod persist;
mod render;

pub use error::{MenuError, StructuralError};
pub use input::{InputSource, TokenReader, PROMPT};
pub use menu::{Menu, MenuParts, NO_CHOICE, ON_OFF, YES_NO};

/// Result type for numenu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
