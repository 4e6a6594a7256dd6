pub mod config;
pub mod engine;
pub mod format;
pub mod session;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
