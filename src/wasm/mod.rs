//! WebAssembly bindings for the cpu6502 core.
//!
//! This module provides JavaScript-callable interfaces for loading a program image,
//! stepping it and inspecting CPU state from a browser.

pub mod api;

pub use api::Emulator6502;
