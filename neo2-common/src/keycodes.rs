pub mod key_range {
    pub const NO: u16 = 0x00;
    pub const TRANSPARENT: u16 = 0x01;

    pub const BASIC_MIN: u16 = 0x4;
    pub const BASIC_A: u16 = 0x4;
    pub const BASIC_MAX: u16 = 0xa4;

    pub const FUNCTION_MIN: u16 = 0xc0;
    pub const FUNCTION_MAX: u16 = 0xdf;
    pub const MAX_FUNCTION_N: u16 = FUNCTION_MAX - FUNCTION_MIN;

    pub const MODIFIER_MIN: u16 = 0xe0;
    pub const MODIFIER_MAX: u16 = 0xe7;

    /// The function table index carried by a `FNn` placeholder.
    pub fn function_index(code: u16) -> Option<u8> {
        if (FUNCTION_MIN..=FUNCTION_MAX).contains(&code) {
            Some((code - FUNCTION_MIN) as u8)
        } else {
            None
        }
    }

    pub fn modifier_bit(code: u16) -> Option<u8> {
        if (MODIFIER_MIN..=MODIFIER_MAX).contains(&code) {
            Some(1 << (code - MODIFIER_MIN))
        } else {
            None
        }
    }
}

/// HID modifier byte bits.
pub mod modifiers {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;
}

/// How a keycode is interpreted. Every `u16` has exactly one class; codes outside the assigned
/// ranges are treated as [KeyClass::NoOp].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyClass {
    NoOp,
    Transparent,
    Basic(u8),
    Function(u8),
    Modifier(u8),
}
impl KeyClass {
    pub fn of(code: u16) -> Self {
        if let Some(index) = key_range::function_index(code) {
            return Self::Function(index);
        }
        if let Some(bit) = key_range::modifier_bit(code) {
            return Self::Modifier(bit);
        }
        match code {
            key_range::TRANSPARENT => Self::Transparent,
            key_range::BASIC_MIN..=key_range::BASIC_MAX => Self::Basic(code as u8),
            _ => Self::NoOp,
        }
    }
}

/// Keycode names as used in keymap tables, e.g. `kc::SCLN` or `kc::FN3`.
///
/// ```
/// use neo2_common::keycodes::{kc, KeyClass};
///
/// assert_eq!(KeyClass::of(kc::FN3), KeyClass::Function(3));
/// assert_eq!(KeyClass::of(kc::LSFT), KeyClass::Modifier(2));
/// ```
#[rustfmt::skip]
pub mod kc {
    use super::key_range;

    pub const NO: u16 = key_range::NO;
    pub const TRNS: u16 = key_range::TRANSPARENT;

    pub const A: u16 = 0x04;
    pub const B: u16 = 0x05;
    pub const C: u16 = 0x06;
    pub const D: u16 = 0x07;
    pub const E: u16 = 0x08;
    pub const F: u16 = 0x09;
    pub const G: u16 = 0x0a;
    pub const H: u16 = 0x0b;
    pub const I: u16 = 0x0c;
    pub const J: u16 = 0x0d;
    pub const K: u16 = 0x0e;
    pub const L: u16 = 0x0f;
    pub const M: u16 = 0x10;
    pub const N: u16 = 0x11;
    pub const O: u16 = 0x12;
    pub const P: u16 = 0x13;
    pub const Q: u16 = 0x14;
    pub const R: u16 = 0x15;
    pub const S: u16 = 0x16;
    pub const T: u16 = 0x17;
    pub const U: u16 = 0x18;
    pub const V: u16 = 0x19;
    pub const W: u16 = 0x1a;
    pub const X: u16 = 0x1b;
    pub const Y: u16 = 0x1c;
    pub const Z: u16 = 0x1d;
    pub const N1: u16 = 0x1e;
    pub const N2: u16 = 0x1f;
    pub const N3: u16 = 0x20;
    pub const N4: u16 = 0x21;
    pub const N5: u16 = 0x22;
    pub const N6: u16 = 0x23;
    pub const N7: u16 = 0x24;
    pub const N8: u16 = 0x25;
    pub const N9: u16 = 0x26;
    pub const N0: u16 = 0x27;
    pub const ENT: u16 = 0x28;
    pub const ESC: u16 = 0x29;
    pub const BSPC: u16 = 0x2a;
    pub const TAB: u16 = 0x2b;
    pub const SPC: u16 = 0x2c;
    pub const MINS: u16 = 0x2d;
    pub const EQL: u16 = 0x2e;
    pub const LBRC: u16 = 0x2f;
    pub const RBRC: u16 = 0x30;
    pub const BSLS: u16 = 0x31;
    pub const NUHS: u16 = 0x32;
    pub const SCLN: u16 = 0x33;
    pub const QUOT: u16 = 0x34;
    pub const GRV: u16 = 0x35;
    pub const COMM: u16 = 0x36;
    pub const DOT: u16 = 0x37;
    pub const SLSH: u16 = 0x38;
    pub const CAPS: u16 = 0x39;
    pub const F1: u16 = 0x3a;
    pub const F2: u16 = 0x3b;
    pub const F3: u16 = 0x3c;
    pub const F4: u16 = 0x3d;
    pub const F5: u16 = 0x3e;
    pub const F6: u16 = 0x3f;
    pub const F7: u16 = 0x40;
    pub const F8: u16 = 0x41;
    pub const F9: u16 = 0x42;
    pub const F10: u16 = 0x43;
    pub const F11: u16 = 0x44;
    pub const F12: u16 = 0x45;
    pub const PSCR: u16 = 0x46;
    pub const SLCK: u16 = 0x47;
    pub const PAUS: u16 = 0x48;
    pub const INS: u16 = 0x49;
    pub const HOME: u16 = 0x4a;
    pub const PGUP: u16 = 0x4b;
    pub const DEL: u16 = 0x4c;
    pub const END: u16 = 0x4d;
    pub const PGDN: u16 = 0x4e;
    pub const RGHT: u16 = 0x4f;
    pub const LEFT: u16 = 0x50;
    pub const DOWN: u16 = 0x51;
    pub const UP: u16 = 0x52;
    pub const NLCK: u16 = 0x53;
    pub const PSLS: u16 = 0x54;
    pub const PAST: u16 = 0x55;
    pub const PMNS: u16 = 0x56;
    pub const PPLS: u16 = 0x57;
    pub const PENT: u16 = 0x58;
    pub const P1: u16 = 0x59;
    pub const P2: u16 = 0x5a;
    pub const P3: u16 = 0x5b;
    pub const P4: u16 = 0x5c;
    pub const P5: u16 = 0x5d;
    pub const P6: u16 = 0x5e;
    pub const P7: u16 = 0x5f;
    pub const P8: u16 = 0x60;
    pub const P9: u16 = 0x61;
    pub const P0: u16 = 0x62;
    pub const PDOT: u16 = 0x63;
    pub const NUBS: u16 = 0x64;
    pub const APP: u16 = 0x65;

    pub const FN0: u16 = 0xc0;
    pub const FN1: u16 = 0xc1;
    pub const FN2: u16 = 0xc2;
    pub const FN3: u16 = 0xc3;
    pub const FN4: u16 = 0xc4;
    pub const FN5: u16 = 0xc5;
    pub const FN6: u16 = 0xc6;
    pub const FN7: u16 = 0xc7;
    pub const FN8: u16 = 0xc8;
    pub const FN9: u16 = 0xc9;
    pub const FN10: u16 = 0xca;
    pub const FN11: u16 = 0xcb;
    pub const FN12: u16 = 0xcc;
    pub const FN13: u16 = 0xcd;
    pub const FN14: u16 = 0xce;
    pub const FN15: u16 = 0xcf;
    pub const FN16: u16 = 0xd0;
    pub const FN17: u16 = 0xd1;
    pub const FN18: u16 = 0xd2;
    pub const FN19: u16 = 0xd3;
    pub const FN20: u16 = 0xd4;
    pub const FN21: u16 = 0xd5;
    pub const FN22: u16 = 0xd6;
    pub const FN23: u16 = 0xd7;
    pub const FN24: u16 = 0xd8;
    pub const FN25: u16 = 0xd9;
    pub const FN26: u16 = 0xda;
    pub const FN27: u16 = 0xdb;
    pub const FN28: u16 = 0xdc;
    pub const FN29: u16 = 0xdd;
    pub const FN30: u16 = 0xde;
    pub const FN31: u16 = 0xdf;

    pub const LCTL: u16 = 0xe0;
    pub const LSFT: u16 = 0xe1;
    pub const LALT: u16 = 0xe2;
    pub const LGUI: u16 = 0xe3;
    pub const RCTL: u16 = 0xe4;
    pub const RSFT: u16 = 0xe5;
    pub const RALT: u16 = 0xe6;
    pub const RGUI: u16 = 0xe7;
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
