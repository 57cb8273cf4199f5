//! Static checks over a keymap: every function key placed on a layer must resolve to something
//! that exists.

use std::fmt;

use neo2_common::keycodes::{key_range, KeyClass};
use neo2_firmware::{
    action::Action,
    dispatch::{self, DispatchContext},
    keymap::{ergodox::SPATIAL_POSITIONS, Keymap},
    layer_state::LayerState,
};

use crate::describe::describe_action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStats {
    pub name: String,
    pub no: usize,
    pub transparent: usize,
    pub function_keys: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub layer: u8,
    pub row: usize,
    pub column: usize,
    pub function: u8,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "layer {} key ({}, {}) FN{}: {}",
            self.layer, self.row, self.column, self.function, self.message
        )
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub layers: Vec<LayerStats>,
    pub problems: Vec<Problem>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

fn check_action<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    keymap: &Keymap<ROWS, COLS, LAYERS>,
    action: &Action,
) -> Option<String> {
    match *action {
        Action::No => Some("no action in this layer or the base layer".into()),
        Action::Macro(id) if id as usize >= keymap.macro_count() => {
            Some(format!("macro {id} is not defined"))
        }
        Action::Function(id) if keymap.function(id).is_none() => {
            Some(format!("function {id} is not defined"))
        }
        Action::Momentary(layer) | Action::Layer { layer, .. }
            if layer as usize >= keymap.layer_count() =>
        {
            Some(format!("layer {layer} is not in the keymap"))
        }
        _ => None,
    }
}

/// Count each layer's empty, transparent and function keys and resolve every function key as if
/// its layer were the only one active.
pub fn validate_keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    keymap: &Keymap<ROWS, COLS, LAYERS>,
    layer_names: &[&str],
) -> Report {
    let mut report = Report::default();

    for layer in 0..LAYERS as u8 {
        let name = layer_names
            .get(layer as usize)
            .map_or_else(|| format!("layer{layer}"), |n| n.to_string());
        let mut stats = LayerStats {
            name,
            no: 0,
            transparent: 0,
            function_keys: 0,
        };
        for (r, c) in SPATIAL_POSITIONS {
            match keymap.key(layer, r, c) {
                Some(key_range::NO) => stats.no += 1,
                Some(key_range::TRANSPARENT) => stats.transparent += 1,
                Some(code) if matches!(KeyClass::of(code), KeyClass::Function(_)) => {
                    stats.function_keys += 1
                }
                _ => {}
            }
        }
        log::debug!("{stats:?}");

        let ctx = DispatchContext::new(LayerState::from_bits(1 << layer));
        for (row, column, function) in keymap.function_keys(layer) {
            let action = dispatch::resolve(keymap, &ctx, function);
            log::debug!(
                "layer {layer} FN{function} -> {}",
                describe_action(&action, layer_names)
            );
            if let Some(message) = check_action(keymap, &action) {
                report.problems.push(Problem {
                    layer,
                    row,
                    column,
                    function,
                    message,
                });
            }
        }
        report.layers.push(stats);
    }

    log::info!(
        "checked {} layers; {} problems",
        report.layers.len(),
        report.problems.len()
    );
    report
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod test;
