// src/status.rs
// Status filtering and per-status counts over a ReportTable.

use crate::config::consts::STATUS_COLUMN;
use crate::data::ReportTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Rows whose `Status` equals `status` exactly (case-sensitive).
///
/// `None`, or a table without a `Status` column, gives the table back unchanged.
pub fn filter_by_status(table: &ReportTable, status: Option<&str>) -> ReportTable {
    let Some(wanted) = status else {
        return table.clone();
    };
    let Some(ci) = table.column_index(STATUS_COLUMN) else {
        return table.clone();
    };
    table.filter_rows(|row| row.get(ci).is_some_and(|v| v == wanted))
}

/// One entry per distinct `Status` value, most frequent first.
/// Equal counts keep the order the values first appear in the table.
///
/// `None` when there is no `Status` column.
pub fn status_counts(table: &ReportTable) -> Option<Vec<StatusCount>> {
    let ci = table.column_index(STATUS_COLUMN)?;

    // Few distinct values; a linear probe keeps first-seen order for free.
    let mut counts: Vec<StatusCount> = Vec::new();
    for row in table.rows() {
        let v = row.get(ci).map(String::as_str).unwrap_or_default();
        match counts.iter_mut().find(|c| c.status == v) {
            Some(c) => c.count += 1,
            None => counts.push(StatusCount { status: s!(v), count: 1 }),
        }
    }

    // stable: ties stay in encounter order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> ReportTable {
        ReportTable::from_rows(
            vec![s!("Site"), s!("Status")],
            rows.iter().map(|(a, b)| vec![s!(*a), s!(*b)]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn ties_follow_first_appearance() {
        let t = table(&[("A", "Offline"), ("B", "Online"), ("C", "Online"), ("D", "Offline"), ("E", "Maint")]);
        let c = status_counts(&t).unwrap();
        let got: Vec<(&str, usize)> = c.iter().map(|c| (c.status.as_str(), c.count)).collect();
        assert_eq!(got, vec![("Offline", 2), ("Online", 2), ("Maint", 1)]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let t = table(&[("A", "Online"), ("B", "online")]);
        let f = filter_by_status(&t, Some("Online"));
        assert_eq!(f.row_count(), 1);
        assert_eq!(f.cell(0, "Site"), Some("A"));
    }

    #[test]
    fn empty_table_counts_to_nothing() {
        let t = table(&[]);
        assert_eq!(status_counts(&t), Some(Vec::new()));
    }
}
