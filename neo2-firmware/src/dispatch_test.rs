use neo2_common::keycodes::{kc, modifiers::LSHIFT};

use super::*;
use crate::{
    action::{LayerOp, On},
    keymaps::neo2::{self, NEO2},
};

fn on_layer(layer: u8) -> DispatchContext {
    let mut ctx = DispatchContext::default();
    ctx.layer_state_mut().apply(LayerOp::Set, layer);
    ctx
}

#[test]
fn entry_of_active_layer_wins() {
    for layer in 0..neo2::LAYER_COUNT as u8 {
        let ctx = on_layer(layer);
        for (index, action) in NEO2.actions(layer).iter().enumerate() {
            if !action.is_no() {
                assert_eq!(resolve(&NEO2, &ctx, index as u8), *action, "{layer}:{index}");
            }
        }
    }
}

#[test]
fn absent_entries_fall_back_to_base() {
    for layer in 1..neo2::LAYER_COUNT as u8 {
        let ctx = on_layer(layer);
        for index in NEO2.actions(layer).len()..NEO2.base_actions().len() {
            assert_eq!(
                resolve(&NEO2, &ctx, index as u8),
                NEO2.base_actions()[index],
                "{layer}:{index}"
            );
        }
    }

    // navigation only defines FN0
    assert_eq!(
        resolve(&NEO2, &on_layer(neo2::NAVIGATION), 4),
        Action::set_layer(neo2::FKEYS, On::Press)
    );
}

#[test]
fn absent_from_both_is_no_action() {
    for layer in 0..neo2::LAYER_COUNT as u8 {
        let ctx = on_layer(layer);
        let defined = NEO2.actions(layer).len().max(NEO2.base_actions().len());
        for index in defined..32 {
            assert_eq!(resolve(&NEO2, &ctx, index as u8), Action::No);
        }
    }
}

#[test]
fn base_fn0_is_dead_grave() {
    let action = resolve(&NEO2, &DispatchContext::default(), 0);
    assert_eq!(action, Action::mods_key(LSHIFT, kc::EQL));
    assert!(!action.is_layer());
}

#[test]
fn non_base_fn0_returns_to_base() {
    for layer in 1..neo2::LAYER_COUNT as u8 {
        assert_eq!(
            resolve(&NEO2, &on_layer(layer), 0),
            Action::set_layer(neo2::BASE, On::Release)
        );
    }
}

#[test]
fn effective_layer_is_highest() {
    let mut ctx = DispatchContext::default();
    ctx.layer_state_mut().apply(LayerOp::On, neo2::SYMBOLS);
    ctx.layer_state_mut().apply(LayerOp::On, neo2::NUMBERS);
    assert_eq!(ctx.effective_layer(), neo2::NUMBERS);
    assert_eq!(
        resolve(&NEO2, &ctx, 1),
        Action::Function(neo2::FunctionId::TeensyKey as u8)
    );
}

#[test]
fn layer_outside_keymap_uses_base() {
    let ctx = DispatchContext::new(LayerState::from_bits(1 << 31));
    assert_eq!(ctx.effective_layer(), 31);
    assert_eq!(resolve(&NEO2, &ctx, 0), Action::mods_key(LSHIFT, kc::EQL));
}
