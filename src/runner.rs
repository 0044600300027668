// src/runner.rs
//
// One refresh: login → fetch → parse → publish. Synchronous; returns when done.

use time::OffsetDateTime;

use crate::{
    config::{credentials::Credentials, options::PortalOptions},
    core::{clock, net},
    data::{ReportState, Snapshot},
    error::{MissingVar, ReportError},
    progress::{Phase, Progress},
    specs,
};

/// Something that can hand us the report page's HTML.
///
/// The portal is the real one; tests and offline runs plug in their own.
pub trait ReportSource {
    fn fetch_html(&self, progress: &mut dyn Progress) -> Result<String, ReportError>;
}

/// The live portal: fresh login per call, session dropped afterwards.
pub struct PortalSource<'a> {
    portal: &'a PortalOptions,
    credentials: Result<&'a Credentials, MissingVar>,
}

impl<'a> PortalSource<'a> {
    /// `credentials` is the outcome of reading them at startup. When a variable
    /// was missing, the refresh fails naming it, before any request is made.
    pub fn new(portal: &'a PortalOptions, credentials: Result<&'a Credentials, MissingVar>) -> Self {
        Self { portal, credentials }
    }
}

impl ReportSource for PortalSource<'_> {
    fn fetch_html(&self, progress: &mut dyn Progress) -> Result<String, ReportError> {
        let creds = self.credentials?;

        progress.phase(&Phase::Authenticating);
        logf!("Refresh: Login {} as {}", self.portal.login_url, creds.username());
        let session = net::login(self.portal, creds)?;
        logd!("Refresh: Session landed on {}", session.landed_on());

        progress.phase(&Phase::Fetching);
        logf!("Refresh: GET {}", self.portal.report_url);
        session.fetch_report(&self.portal.report_url)
    }
}

/// Saved HTML, e.g. a page captured earlier.
pub struct StaticSource(pub String);

impl ReportSource for StaticSource {
    fn fetch_html(&self, progress: &mut dyn Progress) -> Result<String, ReportError> {
        progress.phase(&Phase::Fetching);
        Ok(self.0.clone())
    }
}

/// Run one refresh and publish the result into `state`, stamped now (WIB).
pub fn refresh<'s>(
    state: &'s mut ReportState,
    source: &dyn ReportSource,
    progress: &mut dyn Progress,
) -> Result<&'s Snapshot, ReportError> {
    refresh_at(state, source, progress, clock::now_wib)
}

/// As `refresh`, with the clock supplied by the caller.
///
/// On any error `state` is left exactly as it was and the progress sink sees
/// `Failed` then `Idle`.
pub fn refresh_at<'s, C>(
    state: &'s mut ReportState,
    source: &dyn ReportSource,
    progress: &mut dyn Progress,
    now: C,
) -> Result<&'s Snapshot, ReportError>
where
    C: FnOnce() -> OffsetDateTime,
{
    let outcome = source.fetch_html(progress).and_then(|html| {
        progress.phase(&Phase::Parsing);
        specs::report::extract_table(&html)
    });

    let result = match outcome {
        Ok(table) => {
            let rows = table.row_count();
            let snap = state.replace(table, now());
            logf!("Refresh: OK rows={} cols={}", rows, snap.table.column_count());
            progress.phase(&Phase::Ready { rows });
            Ok(snap)
        }
        Err(e) => {
            loge!("Refresh: Error ({}): {}", e.kind(), e);
            progress.phase(&Phase::Failed(e.to_string()));
            progress.phase(&Phase::Idle);
            Err(e)
        }
    };

    progress.finish();
    result
}
