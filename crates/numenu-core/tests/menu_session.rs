//! Integration tests for loading menu files and driving them with scripted input.

mod common;

use common::{load_menu_fixture, scripted_input, try_load_menu_fixture};
use numenu_core::{Menu, StructuralError, NO_CHOICE, PROMPT};
use tempfile::TempDir;

#[test]
fn test_scenario_a_renders_four_lines() {
    let menu = load_menu_fixture("scenario_a");

    let text = menu.render(false);
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        ["1. A", "2. B", "3. C", "0. Quit"]
    );
}

#[test]
fn test_scenario_b_discards_then_accepts() {
    let mut menu = load_menu_fixture("scenario_a");
    let mut input = scripted_input("x 9 2");
    let mut out: Vec<u8> = Vec::new();

    menu.acquire(&mut input, &mut out, false).unwrap();

    assert_eq!(menu.choice(), 2);
    assert_eq!(menu.last_choice(), NO_CHOICE);
    assert_eq!(String::from_utf8(out).unwrap().matches(PROMPT).count(), 3);
}

#[test]
fn test_exit_disallowed_menu_runs_until_complete() {
    let mut menu = load_menu_fixture("exit_disallowed");
    assert!(!menu.render(true).contains("should not show up"));

    let mut input = scripted_input("0\n1\n1\n0\n2\n");
    let mut out: Vec<u8> = Vec::new();
    let mut rounds = 0;

    while !menu.is_complete() {
        menu.display(&mut out, true).unwrap();
        menu.acquire(&mut input, &mut out, true).unwrap();
        rounds += 1;
    }

    assert_eq!(rounds, 3);
    assert_eq!(menu.count_unchosen(), 0);
    assert!(menu.render(true).contains("1. Finish all - x"));
}

#[test]
fn test_invalid_fixtures_fail_validation() {
    let err = try_load_menu_fixture("exit_collides").unwrap_err();
    assert_eq!(
        err.as_structural(),
        Some(&StructuralError::ExitWithinOptionRange {
            exit_on: 2,
            num_options: 3
        })
    );

    let err = try_load_menu_fixture("empty_unexitable").unwrap_err();
    assert_eq!(err.as_structural(), Some(&StructuralError::NoOptionsWithoutExit));
}

#[test]
fn test_saved_fixture_reloads_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("copy.json");

    let mut menu = load_menu_fixture("exit_disallowed");
    let pristine = menu.clone();
    let mut input = scripted_input("2");
    menu.acquire(&mut input, &mut Vec::<u8>::new(), true).unwrap();

    menu.save_to(&path).unwrap();
    let reloaded = Menu::load_from(&path).unwrap();

    assert_eq!(reloaded, pristine);
    assert_eq!(reloaded.count_chosen(), 0);
}
