// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{export,refresh}.

mod export;  // src/gui/actions/export.rs
mod refresh; // src/gui/actions/refresh.rs

pub use export::export;
pub use refresh::refresh;
