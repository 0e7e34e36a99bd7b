//! End-to-end properties of safelist generation: determinism, ordering, and
//! the absence of duplicate classes across the whole design space.

use daisy_safelist::{classes_for, safelist};
use std::collections::HashSet;

#[test]
fn safelist_is_deterministic() {
    assert_eq!(safelist(), safelist());
}

#[test]
fn safelist_has_no_duplicate_classes() {
    let classes = safelist();
    let unique: HashSet<&str> = classes.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), classes.len());
}

#[test]
fn safelist_follows_registry_declaration_order() {
    let classes = safelist();
    let position = |class: &str| {
        classes
            .iter()
            .position(|c| c == class)
            .unwrap_or_else(|| panic!("{class} missing from safelist"))
    };

    // btn is declared first, modal last
    assert_eq!(position("btn"), 0);
    assert!(position("btn-primary") < position("badge"));
    assert!(position("badge-outline") < position("card"));
    assert!(position("modal-end") == classes.len() - 1);
}

#[test]
fn derived_badge_subset_shows_up_without_link() {
    let classes = safelist();
    assert!(classes.contains(&"badge-soft".to_string()));
    assert!(!classes.contains(&"badge-link".to_string()));
    // btn keeps the full variant set, link included
    assert!(classes.contains(&"btn-link".to_string()));
}

#[test]
fn per_component_expansion_matches_the_full_safelist() {
    let full = safelist();
    let dropdown = classes_for("dropdown").unwrap();
    let window: Vec<&str> = full
        .iter()
        .skip_while(|c| *c != "dropdown")
        .take(dropdown.len())
        .map(String::as_str)
        .collect();
    assert_eq!(window, dropdown.iter().map(String::as_str).collect::<Vec<_>>());
}
