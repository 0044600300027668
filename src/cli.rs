// src/cli.rs
use std::env;

use crate::{
    config::{self, credentials::Credentials, options::{AppOptions, Category}},
    data::ReportState,
    error::ReportError,
    file,
    progress::{Phase, Progress},
    runner::{self, PortalSource},
    status,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub category: Category,
    pub out_dir: Option<String>,
    pub counts_only: bool,
    pub help: bool,
}

/// Phases to stderr, so stdout stays clean for the counts.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn phase(&mut self, phase: &Phase) {
        if !matches!(phase, Phase::Idle) {
            eprintln!("{phase}");
        }
    }
}

pub fn run() -> Result<(), ReportError> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    // .env before either reader
    config::load_env();
    let mut options = AppOptions::from_env();
    if let Some(dir) = &params.out_dir {
        options.export.set_out_dir(dir);
    }
    let credentials = Credentials::from_env()?;

    let mut state = ReportState::new();
    let source = PortalSource::new(&options.portal, Ok(&credentials));
    let snap = runner::refresh(&mut state, &source, &mut ConsoleProgress)?;

    match status::status_counts(&snap.table) {
        Some(counts) => {
            println!("Status,Sites");
            for c in counts {
                println!("{},{}", c.status, c.count);
            }
        }
        None => eprintln!("No 'Status' column; counts unavailable."),
    }

    if params.counts_only {
        return Ok(());
    }

    let out_dir = options.export.out_dir();
    let mut categories = vec![Category::All];
    if params.category != Category::All {
        categories.push(params.category);
    }
    for cat in categories {
        let view = status::filter_by_status(&snap.table, cat.status());
        let artifact = file::export_artifact(&view, cat, snap.fetched_at)?;
        let path = file::write_artifact(out_dir, &artifact)?;
        println!("{}: wrote {} ({} rows)", artifact.label, path.display(), view.row_count());
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, ReportError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--status" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --status"))?;
                params.category = Category::parse(&v)
                    .ok_or_else(|| usage(format!("Unknown status: {v} (all|online|offline)")))?;
            }
            "-o" | "--out" => {
                params.out_dir = Some(args.next().ok_or_else(|| usage("Missing output directory"))?);
            }
            "--counts-only" => params.counts_only = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }
    Ok(params)
}

fn usage(msg: impl Into<String>) -> ReportError {
    ReportError::Usage(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn defaults_to_all_categories() {
        assert_eq!(parse_args(args(&[])).unwrap(), Params::default());
    }

    #[test]
    fn reads_status_and_out() {
        let p = parse_args(args(&["--status", "offline", "-o", "exports"])).unwrap();
        assert_eq!(p.category, Category::Offline);
        assert_eq!(p.out_dir.as_deref(), Some("exports"));
    }

    #[test]
    fn rejects_unknown_status() {
        let err = parse_args(args(&["--status", "degraded"])).unwrap_err();
        assert_eq!(err.kind(), "usage");
    }

    #[test]
    fn rejects_dangling_flag() {
        assert!(parse_args(args(&["--out"])).is_err());
    }
}
