// src/gui/actions/export.rs
use crate::{
    config::options::Category,
    file,
    gui::app::{App, BannerKind},
    status,
};

/// Write the `category` view of the cached table into the output dir.
pub fn export(app: &mut App, category: Category) {
    // normalize out dir first (mutates app) before any &app borrows
    app.apply_out_dir();

    let Some(snap) = app.report.snapshot() else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status = s!("Nothing to export");
        return;
    };

    let view = status::filter_by_status(&snap.table, category.status());
    logf!(
        "Export: Begin category={:?}, rows={}, cols={}",
        category,
        view.row_count(),
        view.column_count()
    );

    let result = file::export_artifact(&view, category, snap.fetched_at).and_then(|artifact| {
        file::write_artifact(app.state.options.export.out_dir(), &artifact).map(|path| (artifact.label, path))
    });

    match result {
        Ok((label, path)) => {
            app.status = format!("{label}: {} rows → {}", view.row_count(), path.display());
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.set_banner(BannerKind::Error, format!("Export error: {e}"));
            app.status = s!("Export failed");
        }
    }
}
