//! Tests for the model layer (OverlayState, palette).

use reticle::model::app_state::{OverlayState, Rejected};
use reticle::model::constants::*;
use reticle::model::palette::{self, PALETTE};
use reticle::model::Shape;

// === Default Values Tests ===

#[test]
fn overlay_state_default_shape_is_cross() {
    assert_eq!(OverlayState::default().shape, Shape::Cross);
}

#[test]
fn overlay_state_default_size() {
    assert_eq!(OverlayState::default().size(), DEFAULT_SIZE);
    assert_eq!(DEFAULT_SIZE, 50);
}

#[test]
fn overlay_state_default_color_is_first_palette_entry() {
    let state = OverlayState::default();
    assert_eq!(state.color_index(), 0);
    assert_eq!(state.color(), PALETTE[0].color);
}

#[test]
fn overlay_state_default_visible() {
    assert!(OverlayState::default().visible);
}

// === Size Tests ===

#[test]
fn set_size_raises_to_minimum() {
    let mut state = OverlayState::default();
    state.set_size(3);
    assert_eq!(state.size(), MIN_SIZE);
}

#[test]
fn set_size_keeps_value_above_slider_max() {
    let mut state = OverlayState::default();
    state.set_size(350);
    assert_eq!(state.size(), 350);
}

#[test]
fn set_size_from_slider_clamps_to_slider_range() {
    let mut state = OverlayState::default();
    state.set_size_from_slider(0);
    assert_eq!(state.size(), MIN_SIZE);
    state.set_size_from_slider(1_000);
    assert_eq!(state.size(), MAX_SLIDER_SIZE);
    state.set_size_from_slider(120);
    assert_eq!(state.size(), 120);
}

#[test]
fn adjust_size_applies_signed_delta() {
    let mut state = OverlayState::default();
    state.adjust_size(5);
    assert_eq!(state.size(), 55);
    state.adjust_size(-15);
    assert_eq!(state.size(), 40);
}

#[test]
fn adjust_size_never_goes_below_minimum() {
    let mut state = OverlayState::default();
    state.adjust_size(-45);
    assert_eq!(state.size(), MIN_SIZE);
    state.adjust_size(-1);
    assert_eq!(state.size(), MIN_SIZE);
}

// === Color Tests ===

#[test]
fn every_valid_color_index_selects_that_entry() {
    let mut state = OverlayState::default();
    for (i, entry) in PALETTE.iter().enumerate() {
        assert_eq!(state.set_color_index(i), Ok(()));
        assert_eq!(state.color_index(), i);
        assert_eq!(state.color(), entry.color);
    }
}

#[test]
fn out_of_range_color_index_is_rejected_and_not_applied() {
    let mut state = OverlayState::default();
    state.set_color_index(5).unwrap();
    let before = state.clone();

    for bad in [8, 9, 100, usize::MAX] {
        assert_eq!(
            state.set_color_index(bad),
            Err(Rejected::ColorIndexOutOfRange(bad))
        );
        assert_eq!(state, before);
    }
}

#[test]
fn palette_order_matches_panel_slider() {
    let names: Vec<_> = PALETTE.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        [
            "Light blue",
            "Dark blue",
            "Light purple",
            "Dark purple",
            "Neon yellow",
            "Neon green",
            "Black",
            "White",
        ]
    );
    assert_eq!(palette::entry(3).map(|e| e.color.to_hex()), Some("#800080".to_string()));
}

// === Visibility Tests ===

#[test]
fn toggle_visible_returns_new_value() {
    let mut state = OverlayState::default();
    assert!(!state.toggle_visible());
    assert!(state.toggle_visible());
}

#[test]
fn toggling_twice_is_a_no_op() {
    let mut state = OverlayState::default();
    state.shape = Shape::Triangle;
    state.set_size(77);
    state.set_color_index(6).unwrap();
    let before = state.clone();

    state.toggle_visible();
    state.toggle_visible();

    assert_eq!(state, before);
}

// === Clone and PartialEq Tests ===

#[test]
fn overlay_state_equality() {
    let state1 = OverlayState::default();
    let mut state2 = OverlayState::default();
    assert_eq!(state1, state2);

    state2.shape = Shape::Circle;
    assert_ne!(state1, state2);
}
