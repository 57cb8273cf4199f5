use neo2_common::{
    globals::BASE_LAYER,
    keycodes::{key_range, KeyClass},
};

use crate::{
    action::{Action, HostFunction},
    layer_state::LayerState,
    mapper::macros::MacroStep,
};

pub mod ergodox;

pub const NO_KEY: u16 = key_range::NO;

pub type Layer<const ROWS: usize, const COLS: usize> = [[u16; COLS]; ROWS];

/// A complete keymap: the keycode matrix for every layer, one function table per layer, the macro
/// sequences and the host functions the tables refer to.
///
/// Every table is a fixed-size array referenced by name, so a keymap that names a missing table
/// does not compile.
pub struct Keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize> {
    layers: &'static [Layer<ROWS, COLS>; LAYERS],
    actions: [&'static [Action]; LAYERS],
    macros: &'static [&'static [MacroStep]],
    functions: &'static [HostFunction],
}

impl<const ROWS: usize, const COLS: usize, const LAYERS: usize> Keymap<ROWS, COLS, LAYERS> {
    pub const fn new(
        layers: &'static [Layer<ROWS, COLS>; LAYERS],
        actions: [&'static [Action]; LAYERS],
        macros: &'static [&'static [MacroStep]],
        functions: &'static [HostFunction],
    ) -> Self {
        assert!(LAYERS > 0 && LAYERS <= neo2_common::globals::MAX_LAYERS);
        Self {
            layers,
            actions,
            macros,
            functions,
        }
    }

    pub fn layer_count(&self) -> usize {
        LAYERS
    }

    pub fn layer(&self, layer: u8) -> Option<&Layer<ROWS, COLS>> {
        self.layers.get(layer as usize)
    }

    /// The keycode at a matrix position in one layer. Out of range coordinates give `None`.
    pub fn key(&self, layer: u8, row: usize, column: usize) -> Option<u16> {
        self.layer(layer)?.get(row)?.get(column).copied()
    }

    /// Look up a position through the active layers, highest first, skipping transparent keys.
    pub fn find_code(&self, state: &LayerState, row: usize, column: usize) -> u16 {
        for layer in state.active_layers() {
            match self.key(layer, row, column) {
                Some(key_range::TRANSPARENT) | None => continue,
                Some(code) => return code,
            }
        }
        NO_KEY
    }

    pub fn actions(&self, layer: u8) -> &'static [Action] {
        self.actions.get(layer as usize).copied().unwrap_or(&[])
    }

    /// The entry of one layer's function table, if that layer defines it.
    pub fn layer_action(&self, layer: u8, index: u8) -> Option<Action> {
        self.actions(layer)
            .get(index as usize)
            .copied()
            .filter(|a| !a.is_no())
    }

    pub fn base_actions(&self) -> &'static [Action] {
        self.actions(BASE_LAYER)
    }

    pub fn macro_count(&self) -> usize {
        self.macros.len()
    }

    pub fn macro_steps(&self, id: u8) -> &'static [MacroStep] {
        self.macros.get(id as usize).copied().unwrap_or(&[])
    }

    pub fn function(&self, id: u8) -> Option<HostFunction> {
        self.functions.get(id as usize).copied()
    }

    /// Every function placeholder used in a layer's matrix, with its position.
    pub fn function_keys(&self, layer: u8) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.layer(layer).into_iter().flat_map(|rows| {
            rows.iter().enumerate().flat_map(|(r, cols)| {
                cols.iter()
                    .enumerate()
                    .filter_map(move |(c, code)| match KeyClass::of(*code) {
                        KeyClass::Function(i) => Some((r, c, i)),
                        _ => None,
                    })
            })
        })
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
