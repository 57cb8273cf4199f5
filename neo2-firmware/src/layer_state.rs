use neo2_common::globals::{BASE_LAYER, MAX_LAYERS};

use crate::action::LayerOp;

/// Bitmask of the active layers. The base layer is always active underneath the others, even
/// when its bit is clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// The highest active layer; this is the layer keycodes are looked up in first.
    pub fn effective(&self) -> u8 {
        if self.0 == 0 {
            BASE_LAYER
        } else {
            (31 - self.0.leading_zeros()) as u8
        }
    }

    pub fn is_active(&self, layer: u8) -> bool {
        layer == BASE_LAYER || (in_range(layer) && self.0 & (1 << layer) != 0)
    }

    /// Active layers from the highest down to the base layer.
    pub fn active_layers(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=self.effective()).rev().filter(|l| self.is_active(*l))
    }

    pub fn apply(&mut self, op: LayerOp, layer: u8) {
        if !in_range(layer) {
            crate::warn!("layer out of range {}", layer);
            return;
        }
        let bit = 1 << layer;
        match op {
            LayerOp::Set => self.0 = bit,
            LayerOp::On => self.0 |= bit,
            LayerOp::Off => self.0 &= !bit,
            LayerOp::Toggle => self.0 ^= bit,
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

fn in_range(layer: u8) -> bool {
    (layer as usize) < MAX_LAYERS
}

#[cfg(test)]
#[path = "layer_state_test.rs"]
mod test;
