//! numenu command-line library - configuration, logging and the interactive
//! menu loop.
//!
//! Separated from main.rs to enable integration testing.

pub mod config;
pub mod logging;
pub mod runner;
