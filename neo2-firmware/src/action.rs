//! What a function key does once it has been resolved for the active layer.

/// Which edge of a key press triggers a layer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum On {
    Press,
    Release,
    Both,
}
impl On {
    pub fn fires(&self, is_down: bool) -> bool {
        match self {
            Self::Press => is_down,
            Self::Release => !is_down,
            Self::Both => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerOp {
    /// Replace the layer state with just this layer.
    Set,
    On,
    Off,
    Toggle,
}

/// Functions supplied by the host firmware rather than by key reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostFunction {
    /// Release every key then hand control to the bootloader.
    BootloaderJump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing mapped; lookups treat it as absent.
    #[default]
    No,
    Key(u16),
    ModsKey {
        mods: u8,
        key: u16,
    },
    Layer {
        op: LayerOp,
        layer: u8,
        on: On,
    },
    /// Layer on while held.
    Momentary(u8),
    Macro(u8),
    Function(u8),
}
impl Action {
    pub const fn key(key: u16) -> Self {
        Self::Key(key)
    }

    pub const fn mods_key(mods: u8, key: u16) -> Self {
        Self::ModsKey { mods, key }
    }

    pub const fn set_layer(layer: u8, on: On) -> Self {
        Self::Layer {
            op: LayerOp::Set,
            layer,
            on,
        }
    }

    pub fn is_no(&self) -> bool {
        matches!(self, Self::No)
    }

    pub fn is_layer(&self) -> bool {
        matches!(self, Self::Layer { .. })
    }
}

#[cfg(test)]
#[path = "action_test.rs"]
mod test;
