//! Human readable renderings of keymap data.

use std::fmt::Write;

use neo2_firmware::{
    action::{Action, LayerOp, On},
    keymap::{
        ergodox::{HAND_ROW_LENGTHS, KEYS_PER_HAND, SPATIAL_POSITIONS},
        Keymap,
    },
    keymaps::neo2::{FunctionId, MacroId},
    mapper::macros::MacroEvent,
};

use crate::{
    keycodes::{key_name, modifiers_to_string},
    ConfigError,
};

const CELL_WIDTH: usize = 6;

fn edge(on: On) -> &'static str {
    match on {
        On::Press => "on press",
        On::Release => "on release",
        On::Both => "on press and release",
    }
}

fn op_name(op: LayerOp) -> &'static str {
    match op {
        LayerOp::Set => "set",
        LayerOp::On => "on",
        LayerOp::Off => "off",
        LayerOp::Toggle => "toggle",
    }
}

pub fn describe_action(action: &Action, layer_names: &[&str]) -> String {
    let layer_name = |l: u8| -> String {
        match layer_names.get(l as usize) {
            Some(name) => format!("{l} ({name})"),
            None => l.to_string(),
        }
    };
    match *action {
        Action::No => "no action".into(),
        Action::Key(key) => format!("key {}", key_name(key)),
        Action::ModsKey { mods, key } => {
            format!("key {}-{}", modifiers_to_string(mods), key_name(key))
        }
        Action::Layer { op, layer, on } => {
            format!("{} layer {} {}", op_name(op), layer_name(layer), edge(on))
        }
        Action::Momentary(layer) => format!("momentary layer {}", layer_name(layer)),
        Action::Macro(id) => match MacroId::from_id(id) {
            Some(m) => format!("macro {}", m.name()),
            None => format!("macro #{id}"),
        },
        Action::Function(id) => match FunctionId::from_id(id) {
            Some(f) => format!("function {}", f.name()),
            None => format!("function #{id}"),
        },
    }
}

pub fn describe_event(event: &MacroEvent) -> String {
    match event {
        MacroEvent::Press(code) => format!("press {}", key_name(*code)),
        MacroEvent::Release(code) => format!("release {}", key_name(*code)),
        MacroEvent::Delay(ms) => format!("delay {ms}ms"),
    }
}

/// Print a layer the way the keys sit on the board: each hand's rows top to bottom, then its thumb
/// cluster.
pub fn render_layer<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    keymap: &Keymap<ROWS, COLS, LAYERS>,
    layer: u8,
    name: &str,
) -> Result<String, ConfigError> {
    if keymap.layer(layer).is_none() {
        return Err(format!("Layer {layer} not in keymap").into());
    }

    let mut out = String::new();
    let _ = writeln!(out, "layer {layer} ({name})");
    for (hand, positions) in ["left hand", "right hand"]
        .iter()
        .zip(SPATIAL_POSITIONS.chunks(KEYS_PER_HAND))
    {
        let _ = writeln!(out, "  {hand}");
        let mut rest = positions;
        for len in HAND_ROW_LENGTHS {
            let (row, tail) = rest.split_at(len);
            rest = tail;
            out.push_str("   ");
            for (r, c) in row {
                let code = keymap.key(layer, *r, *c).unwrap_or_default();
                let _ = write!(out, " {:>w$}", key_name(code), w = CELL_WIDTH - 1);
            }
            out.push('\n');
        }
    }
    Ok(out)
}

/// Every `(layer, row, column)` holding `code`, in board order within each layer.
pub fn find_key<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
    keymap: &Keymap<ROWS, COLS, LAYERS>,
    code: u16,
) -> Vec<(u8, usize, usize)> {
    (0..LAYERS as u8)
        .flat_map(|layer| {
            SPATIAL_POSITIONS
                .iter()
                .filter(move |(r, c)| keymap.key(layer, *r, *c) == Some(code))
                .map(move |(r, c)| (layer, *r, *c))
        })
        .collect()
}

#[cfg(test)]
#[path = "describe_test.rs"]
mod test;
