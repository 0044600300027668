// src/config/consts.rs

// Portal
pub const LOGIN_URL: &str = "http://103.176.44.189:3006/Auth/login";
pub const REPORT_URL: &str = "http://103.176.44.189:3006/Report";

/// A post-login URL containing this (any case) means we were bounced back.
pub const LOGIN_PAGE_MARKER: &str = "login";

// Environment
pub const LOGIN_USERNAME_VAR: &str = "LOGIN_USERNAME";
pub const LOGIN_PASSWORD_VAR: &str = "LOGIN_PASSWORD";
pub const LOGIN_URL_VAR: &str = "TOWER_REPORT_LOGIN_URL";
pub const REPORT_URL_VAR: &str = "TOWER_REPORT_REPORT_URL";

// Report table
pub const STATUS_COLUMN: &str = "Status";
pub const INDEX_COLUMN: &str = "#";
pub const STATUS_ONLINE: &str = "Online";
pub const STATUS_OFFLINE: &str = "Offline";

// Clock (WIB)
pub const WIB_OFFSET_HOURS: i8 = 7;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_STEM: &str = "report";
pub const XLSX_EXT: &str = "xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// Local logs
pub const STORE_DIR: &str = ".store";
