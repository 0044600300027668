// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub portal: PortalOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults with endpoint overrides picked up from the environment.
    pub fn from_env() -> Self {
        Self {
            portal: PortalOptions::from_lookup(|k| std::env::var(k).ok()),
            export: ExportOptions::default(),
        }
    }
}

/// Where to log in and where the report lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalOptions {
    pub login_url: String,
    pub report_url: String,
}

impl Default for PortalOptions {
    fn default() -> Self {
        Self {
            login_url: s!(LOGIN_URL),
            report_url: s!(REPORT_URL),
        }
    }
}

impl PortalOptions {
    /// Build from a key lookup; blank values fall back to the fixed endpoints.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| s!(default))
        };
        Self {
            login_url: pick(LOGIN_URL_VAR, LOGIN_URL),
            report_url: pick(REPORT_URL_VAR, REPORT_URL),
        }
    }

    /// Both endpoints under one base, e.g. a staging portal or a local test server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            login_url: join!(base, "/Auth/login"),
            report_url: join!(base, "/Report"),
        }
    }
}

/// The three views the dashboard offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Offline,
    Online,
}

impl Category {
    /// Display order in the selector.
    pub const ALL: [Category; 3] = [Category::All, Category::Offline, Category::Online];

    /// Status value to filter on; `None` keeps everything.
    pub fn status(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Offline => Some(STATUS_OFFLINE),
            Category::Online => Some(STATUS_ONLINE),
        }
    }

    /// File-name fragment.
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Offline => "offline",
            Category::Online => "online",
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All data",
            Category::Offline => "Offline only",
            Category::Online => "Online only",
        }
    }

    pub fn export_label(self) -> &'static str {
        match self {
            Category::All => "Download all data",
            Category::Offline => "Download offline data",
            Category::Online => "Download online data",
        }
    }

    /// Heading over the filtered table.
    pub fn view_title(self) -> &'static str {
        match self {
            Category::All => "Towers offline & online (all)",
            Category::Offline => "Towers OFFLINE",
            Category::Online => "Towers ONLINE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Category::All),
            "offline" => Some(Category::Offline),
            "online" => Some(Category::Online),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Blank keeps the current one.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(s);
        }
    }
}
