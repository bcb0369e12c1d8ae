//! Reading and writing menu configuration files.
//!
//! Only configuration is persisted. A loaded menu always starts with no
//! choice and nothing chosen, whatever the state of the menu that was saved.

use std::fs;
use std::io;
use std::path::Path;

use numenu_types::MenuFile;
use tracing::{debug, info};

use crate::error::{MenuError, StructuralError};
use crate::menu::{Menu, MenuParts};
use crate::Result;

impl From<&Menu> for MenuFile {
    fn from(menu: &Menu) -> Self {
        Self {
            title: Some(menu.title().to_string()),
            num_options: Some(menu.num_options()),
            options: menu.options().to_vec(),
            exit_allowed: menu.is_exit_allowed(),
            exit_on: menu.exit_on(),
            exit_text: menu.exit_text().map(str::to_string),
            chosen_text: menu.chosen_text().map(str::to_string),
            unchosen_text: menu.unchosen_text().map(str::to_string),
        }
    }
}

impl TryFrom<MenuFile> for Menu {
    type Error = StructuralError;

    fn try_from(file: MenuFile) -> std::result::Result<Self, Self::Error> {
        let num_options = file.effective_num_options();
        let options = file.effective_options();

        Menu::from_parts(MenuParts {
            title: file.title.unwrap_or_default(),
            num_options: Some(num_options),
            options,
            exit_allowed: file.exit_allowed,
            exit_on: file.exit_on,
            exit_text: file.exit_text,
            chosen_text: file.chosen_text,
            unchosen_text: file.unchosen_text,
        })
    }
}

fn not_found_aware(err: io::Error, path: &Path) -> MenuError {
    if err.kind() == io::ErrorKind::NotFound {
        MenuError::NotFound(path.to_path_buf())
    } else {
        MenuError::IoError(err)
    }
}

impl Menu {
    /// Parse and validate a menu from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: MenuFile = serde_json::from_str(json)?;
        Ok(Menu::try_from(file)?)
    }

    /// Validate and serialize the menu configuration as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(&MenuFile::from(self))?)
    }

    /// Load a menu from a JSON file.
    ///
    /// # Errors
    ///
    /// [`MenuError::NotFound`] if the file does not exist,
    /// [`MenuError::Structural`] if the stored configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| not_found_aware(e, path))?;
        let menu = Self::from_json_str(&content)?;

        info!(
            target: "numenu::persist",
            "Loaded menu '{}' ({} options) from {}",
            menu.title(),
            menu.num_options(),
            path.display()
        );
        Ok(menu)
    }

    /// Validate the menu and write its configuration to a JSON file.
    ///
    /// A write that fails part-way leaves the destination undefined.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|e| not_found_aware(e, path))?;

        debug!(target: "numenu::persist", "Saved menu '{}' to {}", self.title(), path.display());
        Ok(())
    }
}
