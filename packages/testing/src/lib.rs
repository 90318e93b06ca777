#![cfg(not(target_arch = "wasm32"))]

/// Mock log builders mirroring the program's ABI
mod events;
mod helpers;

pub use events::*;
pub use helpers::*;
