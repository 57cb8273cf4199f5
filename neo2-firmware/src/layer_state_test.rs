extern crate std;

use std::vec::Vec;

use super::*;

#[test]
fn empty_state_is_base_layer() {
    let state = LayerState::new();
    assert_eq!(state.effective(), 0);
    assert!(state.is_active(0));
    assert!(!state.is_active(1));
    assert_eq!(state.active_layers().collect::<Vec<_>>(), [0]);
}

#[test]
fn effective_is_highest_bit() {
    let state = LayerState::from_bits(0b10_0110);
    assert_eq!(state.effective(), 5);
    assert_eq!(state.active_layers().collect::<Vec<_>>(), [5, 2, 1, 0]);
}

#[test]
fn layer_ops() {
    let mut state = LayerState::new();

    state.apply(LayerOp::On, 2);
    state.apply(LayerOp::On, 4);
    assert_eq!(state.bits(), 0b1_0100);

    state.apply(LayerOp::Off, 4);
    assert_eq!(state.effective(), 2);

    state.apply(LayerOp::Toggle, 3);
    assert_eq!(state.bits(), 0b1100);
    state.apply(LayerOp::Toggle, 3);
    assert_eq!(state.bits(), 0b0100);

    state.apply(LayerOp::Set, 1);
    assert_eq!(state.bits(), 0b10);

    state.apply(LayerOp::Set, 0);
    assert_eq!(state.effective(), 0);

    state.clear();
    assert_eq!(state.bits(), 0);
}

#[test]
fn out_of_range_layer_is_ignored() {
    let mut state = LayerState::from_bits(0b10);
    state.apply(LayerOp::Set, 32);
    state.apply(LayerOp::Toggle, 200);
    assert_eq!(state.bits(), 0b10);
    assert!(!state.is_active(40));
}
