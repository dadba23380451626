// Host-side tests for web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn canvas_lookup_values_are_well_formed() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.contains(char::is_whitespace));
    assert!(SCENE_ATTRIBUTE.starts_with("data-"));
    assert_eq!(CONTEXT_KIND, "2d");
}

#[test]
fn default_log_level_is_not_chatty() {
    assert!(LOG_LEVEL <= log::Level::Info);
}
