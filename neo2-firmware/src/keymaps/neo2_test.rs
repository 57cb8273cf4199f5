extern crate std;

use std::vec::Vec;

use neo2_common::keycodes::{key_range, KeyClass};

use super::*;
use crate::{
    dispatch::{resolve, DispatchContext},
    layer_state::LayerState,
    mapper::macros::{MacroEvent, MacroPlayer},
};

fn keys_of(id: MacroId) -> Vec<MacroEvent> {
    MacroPlayer::new(id.steps())
        .filter(|e| !matches!(e, MacroEvent::Delay(_)))
        .collect()
}

#[test]
fn layer_names() {
    assert_eq!(NEO2.layer_count(), LAYER_NAMES.len());
    assert_eq!(LAYER_NAMES[PLOVER as usize], "plover");
    assert_eq!(LAYER_NAMES[NAVIGATION as usize], "navigation");
}

#[test]
fn base_layer_keys() {
    assert_eq!(NEO2.key(BASE, 1, 1), Some(X));
    assert_eq!(NEO2.key(BASE, 1, 0), Some(N1));
    assert_eq!(NEO2.key(BASE, 13, 0), Some(FN0));
    assert_eq!(NEO2.key(BASE, 3, 5), Some(FN1));
    assert_eq!(NEO2.key(BASE, 2, 5), Some(LSFT));
    assert_eq!(NEO2.key(BASE, 10, 5), Some(SPC));
    assert_eq!(NEO2.key(BASE, 13, 2), Some(Z));
}

#[test]
fn teensy_key_on_numbers_layer() {
    assert_eq!(NEO2.key(NUMBERS, 0, 0), Some(FN1));
    let ctx = DispatchContext::new(LayerState::from_bits(1 << NUMBERS));
    assert_eq!(
        resolve(&NEO2, &ctx, 1),
        Action::Function(FunctionId::TeensyKey as u8)
    );
    assert_eq!(
        NEO2.function(FunctionId::TeensyKey as u8),
        Some(HostFunction::BootloaderJump)
    );
}

#[test]
fn every_function_key_resolves() {
    for layer in 0..LAYER_COUNT as u8 {
        let ctx = DispatchContext::new(LayerState::from_bits(1 << layer));
        for (row, col, index) in NEO2.function_keys(layer) {
            let action = resolve(&NEO2, &ctx, index);
            assert!(!action.is_no(), "{layer} {row},{col} FN{index}");
            match action {
                Action::Macro(id) => assert!((id as usize) < NEO2.macro_count()),
                Action::Function(id) => assert!(NEO2.function(id).is_some()),
                Action::Layer { layer, .. } => assert!((layer as usize) < LAYER_COUNT),
                _ => {}
            }
        }
    }
}

#[test]
fn every_layer_has_a_way_home() {
    for layer in 1..LAYER_COUNT as u8 {
        let ctx = DispatchContext::new(LayerState::from_bits(1 << layer));
        let home = NEO2
            .function_keys(layer)
            .any(|(_, _, i)| resolve(&NEO2, &ctx, i) == Action::set_layer(BASE, On::Release));
        assert!(home, "layer {layer}");
    }
}

#[test]
fn cells_only_hold_assigned_codes() {
    for layer in 0..LAYER_COUNT as u8 {
        for row in NEO2.layer(layer).into_iter().flatten() {
            for code in row {
                assert!(
                    *code == key_range::NO || KeyClass::of(*code) != KeyClass::NoOp,
                    "{layer} {code:#x}"
                );
            }
        }
    }
}

#[test]
fn macro_names() {
    for id in MacroId::ALL {
        assert_eq!(MacroId::from_name(id.name()), Some(id));
        assert_eq!(NEO2.macro_steps(id as u8), id.steps());
    }
    assert_eq!(MacroId::from_name("nope"), None);
    assert_eq!(MacroId::from_id(3), Some(MacroId::RightAngleBracket));
    assert_eq!(MacroId::from_id(4), None);
    assert_eq!(FunctionId::from_id(0), Some(FunctionId::TeensyKey));
    assert_eq!(FunctionId::TeensyKey.name(), "teensy_key");
}

#[test]
fn macros_use_fifteen_ms_interval() {
    for id in MacroId::ALL {
        assert_eq!(id.steps()[0], MacroStep::Interval(15));
        let events: Vec<_> = MacroPlayer::new(id.steps()).collect();
        assert_eq!(events[0], MacroEvent::Delay(15));
        assert_eq!(events.last(), Some(&MacroEvent::Delay(15)));
    }
}

#[test]
fn macros_release_everything_they_press() {
    for id in MacroId::ALL {
        let mut held = Vec::new();
        for e in keys_of(id) {
            match e {
                MacroEvent::Press(k) => held.push(k),
                MacroEvent::Release(k) => {
                    let pos = held.iter().position(|h| *h == k);
                    assert!(pos.is_some(), "{id:?} releases {k:#x} before pressing it");
                    held.retain(|h| *h != k);
                }
                MacroEvent::Delay(_) => {}
            }
        }
        assert!(held.is_empty(), "{id:?} leaves {held:?} down");
    }
}

#[test]
fn angle_brackets() {
    assert_eq!(
        keys_of(MacroId::RightAngleBracket),
        [
            MacroEvent::Press(LSFT),
            MacroEvent::Press(NUBS),
            MacroEvent::Release(NUBS),
            MacroEvent::Release(LSFT),
        ]
    );
    // < is the unshifted ISO key on QWERTZ
    assert_eq!(
        keys_of(MacroId::LeftAngleBracket),
        [MacroEvent::Press(NUBS), MacroEvent::Release(NUBS)]
    );
}

#[test]
fn dead_key_macros_end_with_space() {
    assert_eq!(
        keys_of(MacroId::Caret),
        [
            MacroEvent::Press(GRV),
            MacroEvent::Release(GRV),
            MacroEvent::Press(SPC),
            MacroEvent::Release(SPC),
        ]
    );
    assert_eq!(
        keys_of(MacroId::Grave),
        [
            MacroEvent::Press(LSFT),
            MacroEvent::Press(EQL),
            MacroEvent::Release(EQL),
            MacroEvent::Release(LSFT),
            MacroEvent::Press(SPC),
            MacroEvent::Release(SPC),
        ]
    );
}

#[test]
fn expansion_is_repeatable() {
    for id in MacroId::ALL {
        let first: Vec<_> = MacroPlayer::new(id.steps()).collect();
        let second: Vec<_> = MacroPlayer::new(id.steps()).collect();
        assert_eq!(first, second);
    }
}
