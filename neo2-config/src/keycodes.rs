use std::collections::HashMap;

use lazy_static::lazy_static;
use neo2_common::keycodes::{kc, key_range};

const MODIFIER_BITS: [&str; 8] = ["C", "S", "A", "G", "RC", "RS", "RA", "RG"];

/// Basic keycodes from `A` (0x04) to `APP` (0x65) in HID order. The first alias of each entry is
/// the name used when printing a keymap.
const BASIC_NAMES: &str = r#"
A B C D E F G H I J K L M N O P Q R S T U V W X Y Z
N1/1 N2/2 N3/3 N4/4 N5/5 N6/6 N7/7 N8/8 N9/9 N0/0
ENT/Enter/Return
ESC/Escape
BSPC/Backspace
TAB
SPC/Space
MINS/Minus/-
EQL/Equals/=
LBRC/LeftBrace/[
RBRC/RightBrace/]
BSLS/Backslash/\
NUHS/NonUsHash
SCLN/Semicolon/;
QUOT/Apostrophe/'
GRV/Grave/`
COMM/Comma/,
DOT/Period/.
SLSH/Slash
CAPS/CapsLock
F1 F2 F3 F4 F5 F6 F7 F8 F9 F10 F11 F12
PSCR/PrintScreen
SLCK/ScrollLock
PAUS/Pause
INS/Insert
HOME
PGUP/PageUp
DEL/Delete
END
PGDN/PageDown
RGHT/Right
LEFT
DOWN
UP
NLCK/NumLock
PSLS/KpSlash
PAST/KpStar
PMNS/KpMinus
PPLS/KpPlus
PENT/KpEnter
P1/Kp1 P2/Kp2 P3/Kp3 P4/Kp4 P5/Kp5 P6/Kp6 P7/Kp7 P8/Kp8 P9/Kp9 P0/Kp0
PDOT/KpDot
NUBS/NonUsBackslash
APP/Application
"#;

const MODIFIER_NAMES: &str = r#"
LCTL/LCtrl/LeftControl
LSFT/LShift/LeftShift
LALT/LeftAlt
LGUI/LeftGui
RCTL/RCtrl/RightControl
RSFT/RShift/RightShift
RALT/AltGr/RightAlt
RGUI/RightGui
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeycodeDesc {
    pub name: &'static str,
    pub code: u16,
}

fn normalize(name: &str) -> String {
    if name.len() > 1 {
        name.replace('_', "").to_lowercase()
    } else {
        name.to_lowercase()
    }
}

lazy_static! {
    static ref KEYCODES: Vec<KeycodeDesc> = {
        let mut list = Vec::new();
        let mut ins = |names: &'static str, code: u16| {
            for name in names.split('/') {
                list.push(KeycodeDesc { name, code });
            }
        };

        ins("NO", key_range::NO);
        ins("TRNS/Transparent", key_range::TRANSPARENT);
        for (i, names) in BASIC_NAMES.split_whitespace().enumerate() {
            ins(names, key_range::BASIC_A + i as u16);
        }
        for (i, names) in MODIFIER_NAMES.split_whitespace().enumerate() {
            ins(names, key_range::MODIFIER_MIN + i as u16);
        }
        for i in 0..=key_range::MAX_FUNCTION_N {
            let name: &'static str = Box::leak(format!("FN{i}").into_boxed_str());
            ins(name, key_range::FUNCTION_MIN + i);
        }
        // ins splits on '/' so this alias is added as is
        list.push(KeycodeDesc {
            name: "/",
            code: kc::SLSH,
        });
        list
    };
    static ref KEY_NAMES: HashMap<String, u16> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            if m.insert(normalize(d.name), d.code).is_some() {
                panic!("key already added {}", d.name);
            }
        }
        m
    };
    static ref CODE_NAMES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            m.entry(d.code).or_insert(d.name);
        }
        m
    };
}

/// Look up a keycode by any of its names, ignoring case and underscores.
pub fn key_code(name: &str) -> Option<u16> {
    KEY_NAMES.get(normalize(name).as_str()).copied()
}

/// The short name used in keymap tables, or the hex value for an unassigned code.
pub fn key_name(code: u16) -> String {
    match CODE_NAMES.get(&code) {
        Some(name) => name.to_string(),
        None => format!("{code:#04x}"),
    }
}

/// Every keycode name including aliases.
pub fn keycodes_iter() -> impl Iterator<Item = KeycodeDesc> {
    KEYCODES.iter().copied()
}

pub fn modifiers_to_string(mut modifiers: u8) -> String {
    let mut ans = String::new();

    for m in MODIFIER_BITS {
        if modifiers == 0 {
            return ans;
        }
        if modifiers & 1 == 1 {
            if !ans.is_empty() {
                ans += "-";
            }
            ans += m;
        }

        modifiers >>= 1;
    }
    ans
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
