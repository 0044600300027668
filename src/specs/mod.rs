// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives in the portal's HTML, and how to read it.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched pages into `data::ReportTable`.
//! - **Selector choice**: which table, which sections, which cells.
//!
//! ## What does **not** live here
//! - Login and HTTP (`core::net`).
//! - Caching the result (`data::ReportState`), filtering and counts (`status`),
//!   export (`file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::refresh → core::net (login, GET)
//!                             → specs::report::extract_table
//!                             → ReportState::replace
//! ```
//!
//! ## Conventions
//! - Only the **first** `<table>` in document order is read. Other tables on the
//!   page are ignored even if they look more relevant.
//! - Header names are taken as-is (trimmed). Duplicates are not renamed.
//! - A body row with a different number of cells than the header fails the
//!   whole page; nothing is padded or shifted.
//! - Specs are testable offline against saved HTML.
pub mod report;
