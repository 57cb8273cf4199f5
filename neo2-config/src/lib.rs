use neo2_common::keycodes::key_range;
use neo2_firmware::keymaps::neo2::{self, MacroId};

pub mod describe;
pub mod keycodes;
pub mod validate;

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<&str> for ConfigError {
    fn from(err: &str) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<String> for ConfigError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// A layer given by number or by name.
pub fn layer_index(text: &str) -> Result<u8, ConfigError> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u8>() {
        if (n as usize) < neo2::LAYER_COUNT {
            return Ok(n);
        }
        return Err(format!("Layer {n} out of range 0..{}", neo2::LAYER_COUNT).into());
    }
    let name = text.to_lowercase();
    neo2::LAYER_NAMES
        .iter()
        .position(|l| *l == name)
        .map(|i| i as u8)
        .ok_or_else(|| format!("Unknown layer {text:?}").into())
}

/// A function key index given as `FN3`, `fn3` or `3`.
pub fn function_index(text: &str) -> Result<u8, ConfigError> {
    let text = text.trim();
    let digits = text
        .strip_prefix("FN")
        .or_else(|| text.strip_prefix("fn"))
        .unwrap_or(text);
    match digits.parse::<u16>() {
        Ok(n) if n <= key_range::MAX_FUNCTION_N => Ok(n as u8),
        _ => Err(format!("Invalid function key {text:?}").into()),
    }
}

pub fn macro_by_name(name: &str) -> Result<MacroId, ConfigError> {
    let key = name.trim().to_lowercase().replace('-', "_");
    MacroId::from_name(&key).ok_or_else(|| {
        let known = MacroId::ALL.map(|m| m.name()).join(", ");
        format!("Unknown macro {name:?}; expected one of: {known}").into()
    })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
