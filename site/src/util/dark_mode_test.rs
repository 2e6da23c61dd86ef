#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_without_storage() {
    assert!(read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn theme_name_matches_mode() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn toggle_label_names_the_other_mode() {
    assert_eq!(toggle_label(true), "MODE:LIGHT");
    assert_eq!(toggle_label(false), "MODE:DARK");
}
