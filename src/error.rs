// src/error.rs
//
// One enum for everything a refresh or an export can run into.
// Every variant ends the current action only; callers turn it into a status line.

use thiserror::Error;

use crate::config::consts::{LOGIN_PASSWORD_VAR, LOGIN_USERNAME_VAR};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    MissingCredentials(#[from] MissingVar),

    /// Login answered with something other than 200, or bounced back to the login page.
    #[error("login failed: {0}")]
    Authentication(String),

    /// Report page answered with something other than 200.
    #[error("could not fetch report: server answered {status} for {url}")]
    Fetch { url: String, status: u16 },

    /// Connection-level failure (DNS, refused, reset, ...).
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// Response arrived but the body could not be read.
    #[error("reading response from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected report layout: {0}")]
    Structure(#[from] StructureError),

    #[error("spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("table too large for one worksheet ({rows} rows, {cols} columns)")]
    SheetBounds { rows: usize, cols: usize },

    #[error("timestamp formatting failed: {0}")]
    Clock(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Bad command line; message is shown as-is.
    #[error("{0}")]
    Usage(String),
}

/// A login variable that is absent or blank. Carries the variable's name.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{0} is not set (need {user} and {pass} in the environment or .env)",
    user = LOGIN_USERNAME_VAR, pass = LOGIN_PASSWORD_VAR)]
pub struct MissingVar(pub &'static str);

/// Ways the report page can fail to look like a header + body table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("no <table> on the report page")]
    NoTable,

    #[error("first table has no <thead>")]
    MissingHeader,

    #[error("first table has no <tbody>")]
    MissingBody,

    /// 1-based body row number, as a person counting rows on the page would.
    #[error("row {row} has {found} cells but the header has {expected}")]
    RowShape { row: usize, expected: usize, found: usize },
}

impl ReportError {
    /// Short tag for log lines and the status banner.
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::MissingCredentials(_) => "config",
            ReportError::Authentication(_) => "auth",
            ReportError::Fetch { .. } => "fetch",
            ReportError::Transport { .. } | ReportError::Read { .. } => "network",
            ReportError::Structure(_) => "parse",
            ReportError::Export(_) | ReportError::SheetBounds { .. } => "export",
            ReportError::Clock(_) => "clock",
            ReportError::Io(_) => "io",
            ReportError::Usage(_) => "usage",
        }
    }
}
