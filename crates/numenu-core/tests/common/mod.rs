//! Common test utilities for integration tests.

#![allow(dead_code)]

use numenu_core::{Menu, MenuError, TokenReader};
use std::io::Cursor;
use std::path::PathBuf;

/// Path of a menu fixture in the fixtures directory.
pub fn menu_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("menus")
        .join(format!("{}.json", name))
}

/// Load a menu fixture, returning the load result.
pub fn try_load_menu_fixture(name: &str) -> Result<Menu, MenuError> {
    Menu::load_from(menu_fixture_path(name))
}

/// Load a menu fixture that is expected to be valid.
pub fn load_menu_fixture(name: &str) -> Menu {
    let path = menu_fixture_path(name);
    Menu::load_from(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path.display(), e))
}

/// Token source that yields the whitespace-separated tokens of `script`.
pub fn scripted_input(script: &str) -> TokenReader<Cursor<Vec<u8>>> {
    TokenReader::new(Cursor::new(script.as_bytes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenario_a_fixture() {
        let menu = load_menu_fixture("scenario_a");
        assert_eq!(menu.num_options(), 3);
    }
}
