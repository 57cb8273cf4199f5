//! Concrete keymaps built from the [crate::keymap] types.

pub mod neo2;
