//! Shared types for numenu.

mod menu_file;

pub use menu_file::*;
