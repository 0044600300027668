// src/data.rs
//
// The report table and the cached copy the frontends display.
//
// - ReportTable: header names + positional rows. Every row is exactly as wide
//                as the header; constructors refuse anything else.
// - Snapshot:    a table together with the moment it was fetched.
// - ReportState: holds at most one Snapshot. Only a successful refresh may
//                replace it, and it is always replaced whole.

use time::OffsetDateTime;

use crate::error::{ReportError, StructureError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// A table with a header and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Build from a header and rows, failing on the first row of the wrong width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ReportError> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), ReportError> {
        if row.len() != self.columns.len() {
            return Err(StructureError::RowShape {
                row: self.rows.len() + 1,
                expected: self.columns.len(),
                found: row.len(),
            }
            .into());
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] { &self.columns }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn column_count(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// First column carrying `name`. Duplicate header names are kept as scraped;
    /// lookups by name always resolve to the leftmost one.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell text by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let ci = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(ci)).map(String::as_str)
    }

    /// One row as `(column, value)` pairs in column order.
    pub fn record(&self, row: usize) -> Option<Vec<(&str, &str)>> {
        let r = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .zip(r)
                .map(|(c, v)| (c.as_str(), v.as_str()))
                .collect(),
        )
    }

    /// Remove every column named `name`; returns how many were removed.
    pub fn drop_columns_named(&mut self, name: &str) -> usize {
        let keep: Vec<bool> = self.columns.iter().map(|c| c != name).collect();
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped == 0 {
            return 0;
        }

        let mut ki = keep.iter();
        self.columns.retain(|_| *ki.next().unwrap_or(&true));
        for row in &mut self.rows {
            let mut ki = keep.iter();
            row.retain(|_| *ki.next().unwrap_or(&true));
        }
        dropped
    }

    /// Same header, only the rows `keep` accepts, original order.
    pub fn filter_rows<F>(&self, keep: F) -> ReportTable
    where
        F: Fn(&[String]) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

/// A table and the WIB time it was fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub table: ReportTable,
    pub fetched_at: OffsetDateTime,
}

/// Last good report. Empty until the first successful refresh.
#[derive(Debug, Default)]
pub struct ReportState {
    current: Option<Snapshot>,
}

impl ReportState {
    pub fn new() -> Self { Self::default() }

    pub fn snapshot(&self) -> Option<&Snapshot> { self.current.as_ref() }

    pub fn table(&self) -> Option<&ReportTable> {
        self.current.as_ref().map(|s| &s.table)
    }

    pub fn fetched_at(&self) -> Option<OffsetDateTime> {
        self.current.as_ref().map(|s| s.fetched_at)
    }

    /// The only mutator: swap in a new table and its timestamp together.
    pub fn replace(&mut self, table: ReportTable, fetched_at: OffsetDateTime) -> &Snapshot {
        self.current.insert(Snapshot { table, fetched_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn wrong_width_row_is_rejected_with_its_number() {
        let err = ReportTable::from_rows(
            strings(&["Site", "Status"]),
            vec![strings(&["A", "Online"]), strings(&["B"])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Structure(StructureError::RowShape { row: 2, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn drop_removes_every_matching_column() {
        let mut t = ReportTable::from_rows(
            strings(&["#", "Site", "#"]),
            vec![strings(&["1", "A", "x"])],
        )
        .unwrap();
        assert_eq!(t.drop_columns_named("#"), 2);
        assert_eq!(t.columns(), strings(&["Site"]).as_slice());
        assert_eq!(t.rows()[0], strings(&["A"]));
    }

    #[test]
    fn duplicate_headers_resolve_leftmost() {
        let t = ReportTable::from_rows(
            strings(&["Status", "Status"]),
            vec![strings(&["Online", "stale"])],
        )
        .unwrap();
        assert_eq!(t.cell(0, "Status"), Some("Online"));
        assert_eq!(t.record(0).unwrap(), vec![("Status", "Online"), ("Status", "stale")]);
    }

    #[test]
    fn replace_swaps_table_and_time_together() {
        let mut state = ReportState::new();
        assert!(state.snapshot().is_none());

        let t1 = ReportTable::new(strings(&["Site"]));
        let at1 = datetime!(2024-05-01 08:00:00 +7);
        state.replace(t1.clone(), at1);
        assert_eq!(state.table(), Some(&t1));
        assert_eq!(state.fetched_at(), Some(at1));

        let t2 = ReportTable::from_rows(strings(&["Site"]), vec![strings(&["B"])]).unwrap();
        let at2 = datetime!(2024-05-01 09:00:00 +7);
        state.replace(t2.clone(), at2);
        assert_eq!(state.snapshot(), Some(&Snapshot { table: t2, fetched_at: at2 }));
    }
}
