//! Interactive menu loop.
//!
//! Renders a menu, reads a selection, reports progress, and repeats until
//! the user exits (or, for menus without an exit, until every option has
//! been chosen). Whether an exit is honored before completion is decided
//! here, not by the menu.

use anyhow::{bail, Result};
use numenu_core::{InputSource, Menu, MenuError};
use std::io::Write;
use tracing::{info, warn};

use crate::config::Config;

/// Behavior of a single interactive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Mark options as chosen when selected
    pub track_completion: bool,
    /// Show chosen/unchosen labels next to options
    pub show_completion: bool,
    /// Ignore exit selections until every option has been chosen
    pub require_complete_to_exit: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            track_completion: config.track_completion,
            show_completion: config.show_completion,
            require_complete_to_exit: config.require_complete_to_exit,
        }
    }
}

/// Outcome of an interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of accepted selections, including the exit
    pub selections: usize,
    /// Whether the run ended on an exit selection
    pub exited: bool,
    /// Whether every option had been chosen when the run ended
    pub complete: bool,
}

/// Run `menu` interactively until it is finished or the input closes.
///
/// # Errors
///
/// Fails if the menu is structurally invalid, if it could never finish
/// (no exit and no completion tracking), or on I/O errors.
pub fn run_menu<I, W>(
    menu: &mut Menu,
    input: &mut I,
    out: &mut W,
    options: RunOptions,
) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    W: Write,
{
    menu.validate()?;

    if !menu.is_exit_allowed() && !options.track_completion {
        bail!(
            "menu '{}' has no exit option; enable completion tracking so the run can finish",
            menu.title()
        );
    }

    let gate_exit = options.require_complete_to_exit && options.track_completion;
    let mut selections = 0;

    let exited = loop {
        menu.display(out, options.show_completion)?;

        match menu.acquire(input, out, options.track_completion) {
            Ok(_) => selections += 1,
            Err(MenuError::InputClosed) => {
                warn!(target: "numenu::run", "Input closed; leaving menu '{}'", menu.title());
                writeln!(out)?;
                break false;
            }
            Err(e) => return Err(e.into()),
        }

        if menu.chose_exit() {
            if gate_exit && !menu.is_complete() {
                writeln!(
                    out,
                    "\nChoose every option before leaving ({} left).\n",
                    menu.count_unchosen()
                )?;
                continue;
            }
            break true;
        }

        if options.track_completion {
            if menu.is_complete() && !menu.is_exit_allowed() {
                writeln!(out, "\nAll options chosen.\n")?;
                break false;
            }
            if menu.is_complete() {
                writeln!(out, "\nAll options chosen. You may leave this menu.\n")?;
            } else {
                writeln!(out, "\n{} options left.\n", menu.count_unchosen())?;
            }
        } else if menu.chose_same_as_last() {
            writeln!(out, "\nYou chose the same option as last time.\n")?;
        } else {
            writeln!(out, "\nYou chose option {}.\n", menu.choice())?;
        }
    };

    let summary = RunSummary {
        selections,
        exited,
        complete: menu.is_complete(),
    };
    info!(
        target: "numenu::run",
        "Finished menu '{}': {} selections, exited: {}, complete: {}",
        menu.title(),
        summary.selections,
        summary.exited,
        summary.complete
    );
    Ok(summary)
}
