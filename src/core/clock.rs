// src/core/clock.rs
// Wall-clock in WIB (fixed UTC+7), for the banner and for export file names.

use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

use crate::config::consts::WIB_OFFSET_HOURS;
use crate::error::ReportError;

const STAMP_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const BANNER_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

pub fn wib() -> UtcOffset {
    // ±23h is always in range
    UtcOffset::from_hms(WIB_OFFSET_HOURS, 0, 0).unwrap_or(UtcOffset::UTC)
}

pub fn now_wib() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(wib())
}

/// `YYYY-MM-DD_HH-MM-SS`, in WIB whatever offset `at` carries.
pub fn file_stamp(at: OffsetDateTime) -> Result<String, ReportError> {
    Ok(at.to_offset(wib()).format(STAMP_FMT)?)
}

/// `DD/MM/YYYY HH:MM:SS WIB`
pub fn banner_stamp(at: OffsetDateTime) -> Result<String, ReportError> {
    let s = at.to_offset(wib()).format(BANNER_FMT)?;
    Ok(join!(&s, " WIB"))
}
