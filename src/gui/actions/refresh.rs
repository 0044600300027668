// src/gui/actions/refresh.rs
use crate::{
    core::clock,
    gui::app::{App, BannerKind},
    gui::progress::GuiProgress,
    runner::{self, PortalSource},
};

pub fn refresh(app: &mut App) {
    logf!("Refresh: Begin category={:?}", app.state.gui.category);

    let source = PortalSource::new(&app.state.options.portal, app.credentials.as_ref().map_err(|e| *e));
    let mut prog = GuiProgress::new(&mut app.status);

    // → This is where the fetch happens ←
    let outcome = runner::refresh(&mut app.report, &source, &mut prog)
        .map(|snap| (snap.table.row_count(), snap.fetched_at));

    match outcome {
        Ok((rows, at)) => {
            let when = clock::banner_stamp(at).unwrap_or_else(|_| s!("just now"));
            app.set_banner(
                BannerKind::Success,
                format!("Data fetched from the server: {rows} rows. Last refresh: {when}"),
            );
        }
        Err(e) => {
            // Prior table (if any) is still cached and still shown
            let kept = if app.report.snapshot().is_some() { " Showing the previous data." } else { "" };
            app.set_banner(BannerKind::Error, format!("Something went wrong: {e}.{kept}"));
        }
    }

    app.rebuild_view();
}
