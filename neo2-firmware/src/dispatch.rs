//! Resolves a function key (`FNn`) to the [Action] bound to it for the current layer state.

use neo2_common::globals::BASE_LAYER;

use crate::{action::Action, keymap::Keymap, layer_state::LayerState};

/// The state a function lookup depends on. The mapper owns one and is its only writer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchContext {
    layer_state: LayerState,
}
impl DispatchContext {
    pub const fn new(layer_state: LayerState) -> Self {
        Self { layer_state }
    }

    pub fn layer_state(&self) -> &LayerState {
        &self.layer_state
    }

    pub fn layer_state_mut(&mut self) -> &mut LayerState {
        &mut self.layer_state
    }

    pub fn effective_layer(&self) -> u8 {
        self.layer_state.effective()
    }
}

/// Look up function `index` in the active layer's table, then in the base layer's table.
///
/// Missing tables, indexes past the end of a table and [Action::No] entries are all absent. If
/// neither table has the index the result is [Action::No].
pub fn resolve<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    keymap: &Keymap<ROWS, COLS, LAYERS>,
    ctx: &DispatchContext,
    index: u8,
) -> Action {
    let layer = ctx.effective_layer();
    let candidates = [Some(layer), (layer != BASE_LAYER).then_some(BASE_LAYER)];
    candidates
        .into_iter()
        .flatten()
        .find_map(|l| keymap.layer_action(l, index))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod test;
