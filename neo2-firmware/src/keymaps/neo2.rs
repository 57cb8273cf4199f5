//! Neo2 in hardware for a host set to German QWERTZ with dead keys.
//!
//! Letters sit where Neo2 puts them and the symbol layer sends whatever QWERTZ chord produces the
//! Neo2 symbol, so the keyboard works on any PC without installing the Neo2 driver. Keycode names
//! are US HID names: `Y` types `z` on the host and `LBRC` types `ü`.

use neo2_common::{
    globals::{DEFAULT_MACRO_INTERVAL_MS, MATRIX_COLS, MATRIX_ROWS},
    keycodes::{kc::*, modifiers},
};

use crate::{
    action::{Action, HostFunction, On},
    ergodox_layer,
    keymap::{Keymap, Layer},
    mapper::macros::MacroStep,
};

pub const LAYER_COUNT: usize = 6;

pub const BASE: u8 = 0;
pub const SYMBOLS: u8 = 1;
pub const NUMBERS: u8 = 2;
pub const NAVIGATION: u8 = 3;
pub const FKEYS: u8 = 4;
pub const PLOVER: u8 = 5;

pub const LAYER_NAMES: [&str; LAYER_COUNT] =
    ["base", "symbols", "numbers", "navigation", "fkeys", "plover"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    Caret,
    Grave,
    LeftAngleBracket,
    RightAngleBracket,
}
impl MacroId {
    pub const ALL: [MacroId; 4] = [
        Self::Caret,
        Self::Grave,
        Self::LeftAngleBracket,
        Self::RightAngleBracket,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Caret => "caret",
            Self::Grave => "grave",
            Self::LeftAngleBracket => "left_angle_bracket",
            Self::RightAngleBracket => "right_angle_bracket",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn steps(&self) -> &'static [MacroStep] {
        MACROS[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FunctionId {
    TeensyKey,
}
impl FunctionId {
    pub const ALL: [FunctionId; 1] = [Self::TeensyKey];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TeensyKey => "teensy_key",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

const fn play(id: MacroId) -> Action {
    Action::Macro(id as u8)
}

const fn call(id: FunctionId) -> Action {
    Action::Function(id as u8)
}

const fn shift(key: u16) -> Action {
    Action::mods_key(modifiers::LSHIFT, key)
}

const fn altgr(key: u16) -> Action {
    Action::mods_key(modifiers::RALT, key)
}

const BACK_TO_BASE: Action = Action::set_layer(BASE, On::Release);

#[rustfmt::skip]
pub static LAYERS: [Layer<MATRIX_ROWS, MATRIX_COLS>; LAYER_COUNT] = [
    // base: letters, digits and the dead accent keys
    ergodox_layer!(
        // left hand
          NO,  N1,  N2,  N3,  N4,  N5, GRV,
          NO,   X,   V,   L,   C,   W,PGUP,
         TAB,   U,   I,   A,   E,   O,
          NO,LBRC,SCLN,QUOT,   P,   Y,PGDN,
         APP,LGUI,  NO,  NO, FN2,
                                       FN5, FN4,
                                           LALT,
                                  FN1,LSFT,LCTL,
        // right hand
              EQL,  N6,  N7,  N8,  N9,  N0, FN0,
              ENT,   K,   H,   G,   F,   Q,MINS,
                     S,   N,   R,   T,   D,   Z,
              DEL,   B,   M,COMM, DOT,   J,BSPC,
                        FN2,  NO, ESC,RGUI,  NO,
         FN4, FN1,
        RALT,
        RCTL,RSFT, SPC,
    ),
    // symbols
    ergodox_layer!(
        // left hand
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS, FN1, FN2, FN3, FN4,TRNS,
        TRNS, FN5, FN6, FN7, FN8, FN9,
        TRNS,FN10,FN11,FN12,FN13,FN14,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,
                                      TRNS,TRNS,
                                           TRNS,
                                  FN0,TRNS,TRNS,
        // right hand
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
             TRNS,FN15,FN16,FN17,FN18,FN19,TRNS,
                  FN20,FN21,FN22,FN23,FN24,FN25,
             TRNS,FN26,FN27,FN28,FN29,FN30,TRNS,
                       TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS, FN0,
        TRNS,
        TRNS,TRNS,TRNS,
    ),
    // numbers
    ergodox_layer!(
        // left hand
         FN1,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS, FN0,
                                      TRNS,TRNS,
                                           TRNS,
                                 TRNS,TRNS,TRNS,
        // right hand
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
             TRNS,TRNS,  P7,  P8,  P9,RBRC,SLSH,
                  TRNS,  P4,  P5,  P6,COMM, DOT,
             TRNS,TRNS,  P1,  P2,  P3, FN2,TRNS,
                         P0,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,
        TRNS,
        TRNS,TRNS,TRNS,
    ),
    // navigation
    ergodox_layer!(
        // left hand
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,PGUP,BSPC,  UP, DEL,PGDN,TRNS,
        TRNS,HOME,LEFT,DOWN,RGHT, END,
        TRNS,TRNS, TAB,TRNS, ENT,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,
                                      TRNS,TRNS,
                                           TRNS,
                                 TRNS,TRNS,TRNS,
        // right hand
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
                  TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
                        FN0,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,
        TRNS,
        TRNS,TRNS,TRNS,
    ),
    // fkeys
    ergodox_layer!(
        // left hand
        TRNS,  F1,  F2,  F3,  F4,  F5,  F6,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
        TRNS,TRNS,TRNS,TRNS,TRNS,
                                      TRNS, FN0,
                                           TRNS,
                                 TRNS,TRNS,TRNS,
        // right hand
               F7,  F8,  F9, F10, F11, F12,TRNS,
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
                  TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
             TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,TRNS,
                       TRNS,TRNS,TRNS,TRNS,TRNS,
         FN0,TRNS,
        TRNS,
        TRNS,TRNS,TRNS,
    ),
    // plover: steno on a QWERTY-ish grid, NKRO required on the host side
    ergodox_layer!(
        // left hand
          NO,  NO,  NO,  NO,  NO,  NO,  NO,
          NO,  N1,  N2,  N3,  N4,  N5,  NO,
          NO,   Q,   W,   E,   R,   T,
          NO,   A,   S,   D,   F,   G,  NO,
          NO,  NO,  NO,  NO,  NO,
                                       FN0,  NO,
                                             NO,
                                    C,   V,  NO,
        // right hand
               NO,  NO,  NO,  NO,  NO,  NO,  NO,
               NO,  N6,  N7,  N8,  N9,  N0,  NO,
                     Y,   U,   I,   O,   P,LBRC,
               NO,   H,   J,   K,   L,SCLN, DOT,
                         NO,  NO,  NO,  NO,  NO,
          NO,  NO,
          NO,
          NO,   N,   M,
    ),
];

static BASE_ACTIONS: [Action; 6] = [
    shift(EQL), // dead grave
    Action::set_layer(SYMBOLS, On::Press),
    Action::set_layer(NUMBERS, On::Press),
    Action::set_layer(NAVIGATION, On::Press),
    Action::set_layer(FKEYS, On::Press),
    Action::set_layer(PLOVER, On::Release),
];

// Each entry is the QWERTZ chord for the Neo2 symbol in the comment.
static SYMBOL_ACTIONS: [Action; 31] = [
    BACK_TO_BASE,
    shift(SLSH),                        // _
    shift(N8),                          // [
    shift(N9),                          // ]
    play(MacroId::Caret),               // ^
    altgr(MINS),                        // \
    shift(N7),                          // /
    altgr(N7),                          // {
    altgr(N0),                          // }
    shift(RBRC),                        // *
    Action::key(BSLS),                  // #
    shift(N4),                          // $
    altgr(NUBS),                        // |
    altgr(RBRC),                        // ~
    play(MacroId::Grave),               // `
    shift(N1),                          // !
    play(MacroId::LeftAngleBracket),    // <
    play(MacroId::RightAngleBracket),   // >
    shift(N0),                          // =
    shift(N6),                          // &
    shift(MINS),                        // ?
    shift(N8),                          // (
    shift(N9),                          // )
    Action::key(SLSH),                  // -
    shift(BSLS),                        // :
    altgr(Q),                           // @
    Action::key(RBRC),                  // +
    shift(N5),                          // %
    shift(N2),                          // "
    shift(BSLS),                        // '
    shift(COMM),                        // ;
];

static NUMBER_ACTIONS: [Action; 3] = [
    BACK_TO_BASE,
    call(FunctionId::TeensyKey),
    shift(COMM), // ;
];

static NAVIGATION_ACTIONS: [Action; 1] = [BACK_TO_BASE];
static FKEY_ACTIONS: [Action; 1] = [BACK_TO_BASE];
static PLOVER_ACTIONS: [Action; 1] = [BACK_TO_BASE];

// Indexed by MacroId.
static MACROS: [&[MacroStep]; 4] = [
    // ^ is a dead key: follow it with space to get the bare symbol
    &[
        MacroStep::Interval(DEFAULT_MACRO_INTERVAL_MS),
        MacroStep::Tap(GRV),
        MacroStep::Tap(SPC),
    ],
    &[
        MacroStep::Interval(DEFAULT_MACRO_INTERVAL_MS),
        MacroStep::Down(LSFT),
        MacroStep::Tap(EQL),
        MacroStep::Up(LSFT),
        MacroStep::Tap(SPC),
    ],
    &[
        MacroStep::Interval(DEFAULT_MACRO_INTERVAL_MS),
        MacroStep::Tap(NUBS),
    ],
    &[
        MacroStep::Interval(DEFAULT_MACRO_INTERVAL_MS),
        MacroStep::Down(LSFT),
        MacroStep::Tap(NUBS),
        MacroStep::Up(LSFT),
    ],
];

// Indexed by FunctionId.
static FUNCTIONS: [HostFunction; 1] = [HostFunction::BootloaderJump];

pub static NEO2: Keymap<MATRIX_ROWS, MATRIX_COLS, LAYER_COUNT> = Keymap::new(
    &LAYERS,
    [
        &BASE_ACTIONS,
        &SYMBOL_ACTIONS,
        &NUMBER_ACTIONS,
        &NAVIGATION_ACTIONS,
        &FKEY_ACTIONS,
        &PLOVER_ACTIONS,
    ],
    &MACROS,
    &FUNCTIONS,
);

#[cfg(test)]
#[path = "neo2_test.rs"]
mod test;
