//! Menu state, structural validation and completion tracking.
//!
//! A [`Menu`] is either built in one validated call ([`Menu::new`],
//! [`Menu::with_exit`], [`Menu::with_tracking`], [`Menu::from_parts`]) or
//! configured incrementally through chained setters and then checked with
//! [`Menu::validate`] before first use.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{MenuError, StructuralError};

/// Two-option preset: "On" / "Off".
pub const ON_OFF: [&str; 2] = ["On", "Off"];

/// Two-option preset: "Yes" / "No".
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// Value of `choice` / `last_choice` before any selection was accepted.
pub const NO_CHOICE: i64 = -1;

/// Configuration values for building a [`Menu`] in one call.
///
/// `num_options` defaults to the length of `options` when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuParts {
    pub title: String,
    pub num_options: Option<i64>,
    pub options: Vec<String>,
    pub exit_allowed: bool,
    pub exit_on: i64,
    pub exit_text: Option<String>,
    pub chosen_text: Option<String>,
    pub unchosen_text: Option<String>,
}

/// A console numbered-choice menu.
///
/// Options are displayed 1-indexed; an optional exit selection uses a
/// caller-chosen number outside `[1, num_options]`. Text labels that were
/// never set are `None` and render as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    num_options: i64,
    options: Vec<String>,
    exit_allowed: bool,
    exit_on: i64,
    exit_text: Option<String>,
    chosen: Vec<bool>,
    chosen_text: Option<String>,
    unchosen_text: Option<String>,
    choice: i64,
    last_choice: i64,
}

fn labels<I, S>(options: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    options.into_iter().map(Into::into).collect()
}

impl Menu {
    /// Create an unexitable menu without completion labels.
    pub fn new<I, S>(title: impl Into<String>, options: I) -> Result<Self, StructuralError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(MenuParts {
            title: title.into(),
            options: labels(options),
            ..MenuParts::default()
        })
    }

    /// Create an exitable menu without completion labels.
    pub fn with_exit<I, S>(
        title: impl Into<String>,
        options: I,
        exit_on: i64,
        exit_text: impl Into<String>,
    ) -> Result<Self, StructuralError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(MenuParts {
            title: title.into(),
            options: labels(options),
            exit_allowed: true,
            exit_on,
            exit_text: Some(exit_text.into()),
            ..MenuParts::default()
        })
    }

    /// Create an unexitable menu that shows completion labels.
    pub fn with_tracking<I, S>(
        title: impl Into<String>,
        options: I,
        chosen_text: impl Into<String>,
        unchosen_text: impl Into<String>,
    ) -> Result<Self, StructuralError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(MenuParts {
            title: title.into(),
            options: labels(options),
            chosen_text: Some(chosen_text.into()),
            unchosen_text: Some(unchosen_text.into()),
            ..MenuParts::default()
        })
    }

    /// Create a menu from a full set of values and validate it.
    ///
    /// Selection state starts empty: no choice yet, nothing chosen.
    pub fn from_parts(parts: MenuParts) -> Result<Self, StructuralError> {
        let num_options = parts
            .num_options
            .unwrap_or_else(|| i64::try_from(parts.options.len()).unwrap_or(i64::MAX));

        let mut menu = Self {
            title: parts.title,
            num_options,
            options: parts.options,
            exit_allowed: parts.exit_allowed,
            exit_on: parts.exit_on,
            exit_text: parts.exit_text,
            chosen: Vec::new(),
            chosen_text: parts.chosen_text,
            unchosen_text: parts.unchosen_text,
            choice: NO_CHOICE,
            last_choice: NO_CHOICE,
        };
        if let Err(e) = menu.check_counts() {
            debug!(target: "numenu::menu", "Menu '{}' failed validation: {}", menu.title, e);
            return Err(e);
        }
        menu.init_chosen();
        menu.validate()?;
        Ok(menu)
    }

    /// An unconfigured menu for incremental building.
    ///
    /// It has no options and no exit, so it fails validation until configured.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            num_options: 0,
            options: Vec::new(),
            exit_allowed: false,
            exit_on: 0,
            exit_text: Some(String::new()),
            chosen: Vec::new(),
            chosen_text: Some(String::new()),
            unchosen_text: Some(String::new()),
            choice: NO_CHOICE,
            last_choice: NO_CHOICE,
        }
    }

    /// A three-option demonstration menu that exits on 0.
    pub fn demo() -> Self {
        Self {
            title: "Demo Menu".to_string(),
            num_options: 3,
            options: labels(["This menu", "Has three options", "And exits on 0"]),
            exit_allowed: true,
            exit_on: 0,
            exit_text: Some("Return".to_string()),
            chosen: vec![false; 3],
            chosen_text: Some("Chosen".to_string()),
            unchosen_text: Some("Not chosen".to_string()),
            choice: NO_CHOICE,
            last_choice: NO_CHOICE,
        }
    }

    /// Check the structural invariants in order; the first violation wins.
    pub fn validate(&self) -> Result<(), StructuralError> {
        let result = self.check_invariants();
        if let Err(ref e) = result {
            debug!(target: "numenu::menu", "Menu '{}' failed validation: {}", self.title, e);
        }
        result
    }

    fn check_invariants(&self) -> Result<(), StructuralError> {
        self.check_counts()?;

        if self.chosen.len() != self.option_count() {
            return Err(StructuralError::ChosenLengthMismatch {
                num_options: self.num_options,
                len: self.chosen.len(),
            });
        }

        if self.num_options == 0 && !self.exit_allowed {
            return Err(StructuralError::NoOptionsWithoutExit);
        }

        Ok(())
    }

    /// Invariants that only involve `num_options`, `exit_on` and `options`.
    fn check_counts(&self) -> Result<(), StructuralError> {
        if self.num_options < 0 {
            return Err(StructuralError::NegativeOptionCount(self.num_options));
        }

        if self.option_range().contains(&self.exit_on) {
            return Err(StructuralError::ExitWithinOptionRange {
                exit_on: self.exit_on,
                num_options: self.num_options,
            });
        }

        if self.options.len() != self.option_count() || self.num_options_overflows() {
            return Err(StructuralError::OptionsLengthMismatch {
                num_options: self.num_options,
                len: self.options.len(),
            });
        }

        Ok(())
    }

    /// Whether `value` is an acceptable selection.
    ///
    /// True for a displayed option number, or for the exit number when
    /// exiting is allowed.
    pub fn is_valid_selection(&self, value: i64) -> bool {
        (self.exit_allowed && value == self.exit_on) || self.option_range().contains(&value)
    }

    fn option_range(&self) -> RangeInclusive<i64> {
        1..=self.num_options
    }

    /// `num_options` as a length; negative counts map to zero.
    fn option_count(&self) -> usize {
        usize::try_from(self.num_options).unwrap_or(0)
    }

    fn num_options_overflows(&self) -> bool {
        self.num_options > 0 && usize::try_from(self.num_options).is_err()
    }

    /// Accept `value` as the new choice, shifting the previous one into
    /// `last_choice`. Marks the option chosen when tracking.
    pub(crate) fn record_selection(&mut self, value: i64, track_completion: bool) {
        self.last_choice = self.choice;
        self.choice = value;

        if track_completion && value != self.exit_on {
            if let Some(flag) = usize::try_from(value.saturating_sub(1))
                .ok()
                .and_then(|index| self.chosen.get_mut(index))
            {
                *flag = true;
            }
        }
    }

    // -- Convenience --

    /// Whether the most recent choice was the exit option.
    pub fn chose_exit(&self) -> bool {
        self.choice == self.exit_on
    }

    /// Whether the most recent choice repeats the previous one.
    pub fn chose_same_as_last(&self) -> bool {
        self.choice == self.last_choice
    }

    /// Whether every option has been chosen at least once.
    pub fn is_complete(&self) -> bool {
        self.chosen.iter().all(|&c| c)
    }

    pub fn count_chosen(&self) -> usize {
        self.chosen.iter().filter(|&&c| c).count()
    }

    pub fn count_unchosen(&self) -> usize {
        self.option_count().saturating_sub(self.count_chosen())
    }

    // -- Accessors --

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn num_options(&self) -> i64 {
        self.num_options
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Option label by 0-based index (one less than the displayed number).
    pub fn option_at(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn is_exit_allowed(&self) -> bool {
        self.exit_allowed
    }

    pub fn exit_on(&self) -> i64 {
        self.exit_on
    }

    pub fn exit_text(&self) -> Option<&str> {
        self.exit_text.as_deref()
    }

    pub fn chosen(&self) -> &[bool] {
        &self.chosen
    }

    /// Completion flag by 0-based index.
    pub fn is_chosen_at(&self, index: usize) -> Option<bool> {
        self.chosen.get(index).copied()
    }

    pub fn chosen_text(&self) -> Option<&str> {
        self.chosen_text.as_deref()
    }

    pub fn unchosen_text(&self) -> Option<&str> {
        self.unchosen_text.as_deref()
    }

    /// Most recent accepted selection, or [`NO_CHOICE`].
    pub fn choice(&self) -> i64 {
        self.choice
    }

    /// Selection accepted before the current one, or [`NO_CHOICE`].
    pub fn last_choice(&self) -> i64 {
        self.last_choice
    }

    // -- Mutators --
    //
    // Setters do not validate; call `validate()` once configuration is done.

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Set the option count. Does not resize `options` or `chosen`.
    pub fn set_num_options(&mut self, num_options: i64) -> &mut Self {
        self.num_options = num_options;
        self
    }

    /// Set the option count to the current length of `options`.
    pub fn sync_num_options(&mut self) -> &mut Self {
        self.num_options = i64::try_from(self.options.len()).unwrap_or(i64::MAX);
        self
    }

    /// Replace the option labels. Does not change `num_options`.
    pub fn set_options<I, S>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = labels(options);
        self
    }

    /// Replace one option label by 0-based index.
    pub fn set_option_at(
        &mut self,
        index: usize,
        option: impl Into<String>,
    ) -> Result<&mut Self, MenuError> {
        let len = self.options.len();
        let slot = self
            .options
            .get_mut(index)
            .ok_or(MenuError::IndexOutOfRange { index, len })?;
        *slot = option.into();
        Ok(self)
    }

    pub fn set_exit_allowed(&mut self, allowed: bool) -> &mut Self {
        self.exit_allowed = allowed;
        self
    }

    /// Set the exit number. Must stay outside `[1, num_options]`.
    pub fn set_exit_on(&mut self, exit_on: i64) -> &mut Self {
        self.exit_on = exit_on;
        self
    }

    pub fn set_exit_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.exit_text = Some(text.into());
        self
    }

    /// Reallocate the completion flags to `num_options` entries, all false.
    ///
    /// Never allocates more entries than there are options; a count that
    /// disagrees with `options` already fails validation on its own.
    pub fn init_chosen(&mut self) -> &mut Self {
        self.chosen = vec![false; self.option_count().min(self.options.len())];
        self
    }

    pub fn set_chosen(&mut self, chosen: Vec<bool>) -> &mut Self {
        self.chosen = chosen;
        self
    }

    /// Set one completion flag by 0-based index.
    pub fn set_chosen_at(&mut self, index: usize, picked: bool) -> Result<&mut Self, MenuError> {
        let len = self.chosen.len();
        let flag = self
            .chosen
            .get_mut(index)
            .ok_or(MenuError::IndexOutOfRange { index, len })?;
        *flag = picked;
        Ok(self)
    }

    /// Set every completion flag to `complete`.
    pub fn set_complete(&mut self, complete: bool) -> &mut Self {
        self.chosen.iter_mut().for_each(|c| *c = complete);
        self
    }

    pub fn set_chosen_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.chosen_text = Some(text.into());
        self
    }

    pub fn set_unchosen_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.unchosen_text = Some(text.into());
        self
    }

    pub fn set_choice(&mut self, choice: i64) -> &mut Self {
        self.choice = choice;
        self
    }

    pub fn set_last_choice(&mut self, last_choice: i64) -> &mut Self {
        self.last_choice = last_choice;
        self
    }
}
