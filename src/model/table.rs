// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Table`] attached to a [`Step`] or driving a [`ScenarioOutline`].
//!
//! [`ScenarioOutline`]: super::ScenarioOutline
//! [`Step`]: super::Step

use derive_more::with_trait::{AsRef, Deref};
use linked_hash_map::LinkedHashMap;

/// Data table of a Gherkin [`Step`] or of an [`Examples`][1] block.
///
/// The first row is the header. Rows may be shorter than the header, in which
/// case the missing trailing cells are reported as [`None`] by
/// [`Table::dicts()`], while an explicitly empty cell is reported as
/// `Some("")`.
///
/// [`Step`]: super::Step
/// [1]: https://cucumber.io/docs/gherkin/reference#examples
#[derive(AsRef, Clone, Debug, Default, Deref, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
#[cfg_attr(feature = "output-json", serde(transparent))]
pub struct Table {
    /// All rows, header included.
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a new [`Table`] out of the given rows, header first.
    #[must_use]
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the header row, if any.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Returns the data rows (everything after the header).
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Returns every data row as a mapping from a header cell to the row's
    /// value in that column, preserving the column order.
    ///
    /// Cells missing from a short row map to [`None`]. Cells beyond the
    /// header width are ignored.
    #[must_use]
    pub fn dicts(&self) -> Vec<LinkedHashMap<&str, Option<&str>>> {
        let Some(header) = self.header() else {
            return Vec::new();
        };

        self.data_rows()
            .iter()
            .map(|row| {
                header
                    .iter()
                    .enumerate()
                    .map(|(i, key)| (key.as_str(), row.get(i).map(String::as_str)))
                    .collect()
            })
            .collect()
    }

    /// Returns the cell of the given data `row` under the `column` header, if
    /// both exist.
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.header()?.iter().position(|h| h == column)?;
        self.data_rows().get(row)?.get(idx).map(String::as_str)
    }
}

impl From<&gherkin::Table> for Table {
    fn from(table: &gherkin::Table) -> Self {
        Self { rows: table.rows.clone() }
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::model::Feature;

    fn table() -> Table {
        Table::new(vec![
            vec!["key", "value"],
            vec!["abc", "123"],
            vec!["def", "456"],
            vec!["ghi"],
        ])
    }

    #[test]
    fn keeps_rows_as_written() {
        let table = table();

        assert_eq!(table.len(), 4);
        assert_eq!(table[3], vec!["ghi".to_owned()]);
        assert_eq!(
            table.header(),
            Some(["key".to_owned(), "value".to_owned()].as_slice()),
        );
        assert_eq!(table.data_rows().len(), 3);
    }

    #[test]
    fn dicts_report_missing_cells_as_none() {
        let table = table();
        let dicts = table.dicts();

        assert_eq!(dicts.len(), 3);
        assert_eq!(
            dicts[0].iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            [("key", Some("abc")), ("value", Some("123"))],
        );
        assert_eq!(
            dicts[1].iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            [("key", Some("def")), ("value", Some("456"))],
        );
        assert_eq!(
            dicts[2].iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            [("key", Some("ghi")), ("value", None)],
        );
    }

    #[test]
    fn dicts_distinguish_empty_from_missing() {
        let table = Table::new(vec![vec!["a", "b"], vec!["", "x"]]);

        assert_eq!(table.dicts()[0].get("a"), Some(&Some("")));
        assert_eq!(table.value(0, "b"), Some("x"));
        assert_eq!(table.value(0, "c"), None);
        assert_eq!(table.value(1, "a"), None);
    }

    #[test]
    fn parsed_tables_are_never_ragged() {
        let err = Feature::parse_str(
            "\
Feature: Ragged
  Scenario: short row
    Given a table
      | key | value |
      | abc | 123   |
      | ghi |
",
        );

        assert!(err.is_err(), "ragged table parsed: {err:?}");
    }

    #[test]
    fn empty_table_has_no_dicts() {
        assert!(Table::default().dicts().is_empty());
        assert!(Table::new(vec![vec!["only", "header"]]).dicts().is_empty());
    }
}
