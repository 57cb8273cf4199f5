//! Compile time settings for the ErgoDox matrix and the host firmware timings the keymap relies on.

/// The ErgoDox matrix is scanned as 14 rows (7 per half) of 6 columns.
pub const MATRIX_ROWS: usize = 14;
pub const MATRIX_COLS: usize = 6;

/// Layer state is a 32 bit mask so no keymap may define more layers than this.
pub const MAX_LAYERS: usize = 32;

pub const BASE_LAYER: u8 = 0;

/// Pause between clearing the keyboard and jumping to the bootloader.
pub const BOOTLOADER_DELAY_MS: u16 = 50;

pub const DEFAULT_MACRO_INTERVAL_MS: u16 = 15;
