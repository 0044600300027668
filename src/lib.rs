// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod status;

pub use data::{ReportState, ReportTable, Snapshot};
pub use error::{MissingVar, ReportError, StructureError};
