pub mod analysis;
pub mod ast;
pub mod errors;
pub mod position;

#[cfg(target_family = "wasm")]
pub mod wasm;
