#![no_std]
pub mod action;
pub mod dispatch;
pub mod firmware_functions;
pub mod key_scanner;
pub mod keymap;
pub mod keymaps;
pub mod layer_state;
pub mod mapper;

#[macro_use]
mod macros;
