// src/specs/report.rs
//
// Report page → ReportTable.
//
//   <table>
//     <thead> <th>#</th> <th>Site</th> <th>Status</th> ... </thead>
//     <tbody> <tr> <td>1</td> <td>BTS-01</td> <td>Online</td> ... </tr> ... </tbody>
//   </table>
//
// The `#` column is the portal's row counter and is dropped.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::INDEX_COLUMN;
use crate::data::ReportTable;
use crate::error::{ReportError, StructureError};

struct Selectors {
    table: Selector,
    thead: Selector,
    tbody: Selector,
    th: Selector,
    tr: Selector,
    td: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ReportError> {
        Ok(Self {
            table: selector("table")?,
            thead: selector("thead")?,
            tbody: selector("tbody")?,
            th: selector("th")?,
            tr: selector("tr")?,
            td: selector("td")?,
        })
    }
}

fn selector(css: &'static str) -> Result<Selector, ReportError> {
    // Only fails on a malformed literal above
    Selector::parse(css).map_err(|e| ReportError::Usage(format!("bad selector {css:?}: {e:?}")))
}

/// All descendant text of an element, trimmed.
fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Extract the first table of the page.
///
/// Errors when there is no table, no `<thead>`, no `<tbody>`, or a body row whose
/// cell count differs from the header. On error nothing is returned; the caller
/// keeps whatever it had before.
///
/// Note: the HTML5 parser wraps bare `<tr>`s in an implied `<tbody>`, so only a
/// table with no body rows at all is reported as missing one.
pub fn extract_table(html: &str) -> Result<ReportTable, ReportError> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(html);

    let table = doc.select(&sel.table).next().ok_or(StructureError::NoTable)?;
    let thead = table.select(&sel.thead).next().ok_or(StructureError::MissingHeader)?;
    let tbody = table.select(&sel.tbody).next().ok_or(StructureError::MissingBody)?;

    let headers: Vec<String> = thead.select(&sel.th).map(cell_text).collect();
    let mut out = ReportTable::new(headers);

    for tr in tbody.select(&sel.tr) {
        let cells: Vec<String> = tr.select(&sel.td).map(cell_text).collect();
        out.push_row(cells)?;
    }

    let dropped = out.drop_columns_named(INDEX_COLUMN);
    logd!(
        "Parse: table rows={} cols={} (dropped {} index col)",
        out.row_count(),
        out.column_count(),
        dropped
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_flattens_nested_markup() {
        let html = r#"<table><thead><tr><th> Site </th><th>Status</th></tr></thead>
            <tbody><tr><td><a href="/s/1"> BTS <b>01</b> </a></td><td><span class="badge">Online</span></td></tr></tbody></table>"#;
        let t = extract_table(html).unwrap();
        assert_eq!(t.columns(), ["Site", "Status"]);
        assert_eq!(t.cell(0, "Site"), Some("BTS 01"));
        assert_eq!(t.cell(0, "Status"), Some("Online"));
    }

    #[test]
    fn only_first_table_is_read() {
        let html = "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>
                    <table><thead><tr><th>B</th></tr></thead><tbody><tr><td>2</td></tr><tr><td>3</td></tr></tbody></table>";
        let t = extract_table(html).unwrap();
        assert_eq!(t.columns(), ["A"]);
        assert_eq!(t.row_count(), 1);
    }

    #[test]
    fn no_table_is_a_structure_error() {
        let err = extract_table("<html><body><p>Session expired</p></body></html>").unwrap_err();
        assert!(matches!(err, ReportError::Structure(StructureError::NoTable)));
    }
}
