// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Scenario`]s, [`ScenarioOutline`]s and the expansion of the latter.

use derive_more::with_trait::{Display, Error, From};
use lazy_regex::regex;

use super::{Step, Table};

/// Concrete scenario: a sequence of [`Step`]s, never expanded further.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
pub struct Scenario {
    /// Tags of this [`Scenario`], without the leading `@`.
    pub tags: Vec<String>,

    /// Title of this [`Scenario`].
    pub title: String,

    /// Free text description of this [`Scenario`], possibly empty.
    pub description: String,

    /// [`Step`]s of this [`Scenario`].
    pub steps: Vec<Step>,
}

/// Templated scenario whose [`Step`]s contain `<name>` placeholders, filled
/// from the rows of its [`Examples`][1] tables.
///
/// [1]: https://cucumber.io/docs/gherkin/reference#examples
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
pub struct ScenarioOutline {
    /// Tags of this [`ScenarioOutline`], without the leading `@`.
    pub tags: Vec<String>,

    /// Title of this [`ScenarioOutline`].
    pub title: String,

    /// Free text description of this [`ScenarioOutline`], possibly empty.
    pub description: String,

    /// Template [`Step`]s of this [`ScenarioOutline`].
    pub steps: Vec<Step>,

    /// [`Examples`][1] tables in declaration order.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#examples
    pub examples: Vec<Table>,
}

/// Error of [`ScenarioOutline`] expansion encountering a placeholder without
/// a matching [`Examples`][1] column.
///
/// [1]: https://cucumber.io/docs/gherkin/reference#examples
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display(
    "Failed to resolve <{name}> in Scenario Outline `{outline}`, \
     examples row {}",
    row + 1
)]
pub struct ExpandExamplesError {
    /// Title of the [`ScenarioOutline`] being expanded.
    #[error(not(source))]
    pub outline: String,

    /// Name of the unresolved placeholder.
    pub name: String,

    /// Zero-based index of the examples data row being expanded, counted
    /// across all the [`Examples`][1] tables.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#examples
    pub row: usize,
}

impl ScenarioOutline {
    /// Expands this [`ScenarioOutline`] into one [`Scenario`] per
    /// [`Examples`][1] data row, in order.
    ///
    /// So this one:
    /// ```gherkin
    /// Scenario Outline: eating
    ///   Given there are <start> cucumbers
    ///   When I eat <eat> cucumbers
    ///
    ///   Examples:
    ///     | start | eat |
    ///     |    12 |   5 |
    ///     |    20 |   4 |
    /// ```
    ///
    /// Will be expanded as:
    /// ```gherkin
    /// Scenario Outline: eating
    ///   Given there are 12 cucumbers
    ///   When I eat 5 cucumbers
    ///
    /// Scenario Outline: eating
    ///   Given there are 20 cucumbers
    ///   When I eat 4 cucumbers
    /// ```
    ///
    /// Placeholders are substituted in step titles and step texts only, step
    /// tables are copied as is. Tags, title and description of the outline
    /// are kept verbatim.
    ///
    /// # Errors
    ///
    /// If a placeholder has no value in an examples row.
    /// See [`ExpandExamplesError`] for details.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#examples
    pub fn expand_examples(&self) -> Result<Vec<Scenario>, ExpandExamplesError> {
        let rows = self.examples.iter().flat_map(|ex| {
            let header = ex.header().unwrap_or_default();
            ex.data_rows().iter().map(move |row| (header, row))
        });

        rows.enumerate()
            .map(|(id, (header, row))| {
                let lookup = |name: &str| {
                    header
                        .iter()
                        .zip(row)
                        .find_map(|(k, v)| (k == name).then_some(v.as_str()))
                };
                let steps = self
                    .steps
                    .iter()
                    .map(|s| {
                        s.try_map_text(|text| {
                            replace_placeholders(text, lookup).map_err(|name| {
                                ExpandExamplesError {
                                    outline: self.title.clone(),
                                    name,
                                    row: id,
                                }
                            })
                        })
                    })
                    .collect::<Result<_, _>>()?;

                tracing::trace!(outline = %self.title, row = id, "expanded");

                Ok(Scenario {
                    tags: self.tags.clone(),
                    title: self.title.clone(),
                    description: self.description.clone(),
                    steps,
                })
            })
            .collect()
    }
}

/// Replaces every `<name>` placeholder in `text` with the value `lookup`
/// returns for it.
///
/// Returns the name of the first placeholder `lookup` has no value for.
fn replace_placeholders<'v>(
    text: &str,
    lookup: impl Fn(&str) -> Option<&'v str>,
) -> Result<String, String> {
    let mut missing = None;
    let replaced = regex!(r"<([^>\s]+)>").replace_all(text, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        lookup(name).unwrap_or_else(|| {
            if missing.is_none() {
                missing = Some(name.to_owned());
            }
            ""
        })
    });

    match missing {
        Some(name) => Err(name),
        None => Ok(replaced.into_owned()),
    }
}

/// Scenario-like entity of a [`Feature`]: either a concrete [`Scenario`] or a
/// [`ScenarioOutline`].
///
/// [`Feature`]: super::Feature
#[derive(Clone, Debug, Eq, From, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
#[cfg_attr(feature = "output-json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ScenarioKind {
    /// Concrete [`Scenario`].
    Scenario(Scenario),

    /// Templated [`ScenarioOutline`].
    Outline(ScenarioOutline),
}

impl ScenarioKind {
    /// Tags of this scenario-like entity.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Scenario(s) => &s.tags,
            Self::Outline(o) => &o.tags,
        }
    }

    /// Title of this scenario-like entity.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Scenario(s) => &s.title,
            Self::Outline(o) => &o.title,
        }
    }

    /// Description of this scenario-like entity.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Scenario(s) => &s.description,
            Self::Outline(o) => &o.description,
        }
    }

    /// [`Step`]s of this scenario-like entity. Template ones for a
    /// [`ScenarioOutline`].
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Scenario(s) => &s.steps,
            Self::Outline(o) => &o.steps,
        }
    }

    /// Returns the concrete [`Scenario`]s of this entity: itself for a
    /// [`Scenario`], the expanded examples for a [`ScenarioOutline`].
    ///
    /// # Errors
    ///
    /// See [`ScenarioOutline::expand_examples()`].
    pub fn concrete(&self) -> Result<Vec<Scenario>, ExpandExamplesError> {
        match self {
            Self::Scenario(s) => Ok(vec![s.clone()]),
            Self::Outline(o) => o.expand_examples(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpandExamplesError, ScenarioKind, ScenarioOutline};
    use crate::model::{Clause, Step, Table};

    fn outline() -> ScenarioOutline {
        ScenarioOutline {
            tags: vec!["tagD".into(), "tagE".into()],
            title: "Scenario outline title".into(),
            description: "Scenario outline description".into(),
            steps: vec![
                Step::new(Clause::Given, "<key> is <value>-given")
                    .with_text("Text <key> is <value>"),
                Step::new(Clause::When, "<key> is <value>-when"),
                Step::new(Clause::Then, "<key> is <value>-then")
                    .with_table(Table::new(vec![vec!["<key>"], vec!["<value>"]])),
            ],
            examples: vec![Table::new(vec![
                vec!["key", "value"],
                vec!["key1", "value1"],
                vec!["key2", "value2"],
            ])],
        }
    }

    #[test]
    fn expands_one_scenario_per_row() {
        let expanded = outline().expand_examples().unwrap();

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].steps[0].clause(), Clause::Given);
        assert_eq!(expanded[0].steps[0].title(), "key1 is value1-given");
        assert_eq!(expanded[0].steps[0].text(), Some("Text key1 is value1"));
        assert_eq!(expanded[0].steps[1].title(), "key1 is value1-when");
        assert_eq!(expanded[1].steps[0].title(), "key2 is value2-given");
        assert_eq!(expanded[1].steps[0].text(), Some("Text key2 is value2"));
        assert_eq!(expanded[1].steps[2].title(), "key2 is value2-then");
    }

    #[test]
    fn keeps_outline_metadata_and_tables() {
        let outline = outline();
        let expanded = outline.expand_examples().unwrap();

        for scenario in &expanded {
            assert_eq!(scenario.tags, outline.tags);
            assert_eq!(scenario.title, outline.title);
            assert_eq!(scenario.description, outline.description);
            assert_eq!(scenario.steps[2].table(), outline.steps[2].table());
        }
    }

    #[test]
    fn expansion_is_repeatable() {
        let outline = outline();

        assert_eq!(
            outline.expand_examples().unwrap(),
            outline.expand_examples().unwrap(),
        );
    }

    #[test]
    fn multiline_text_keeps_newlines() {
        let mut outline = outline();
        outline.steps = vec![Step::new(Clause::Given, "text")
            .with_text("first <key>\nsecond <value>\n<key><value>")];

        let expanded = outline.expand_examples().unwrap();

        assert_eq!(
            expanded[1].steps[0].text(),
            Some("first key2\nsecond value2\nkey2value2"),
        );
    }

    #[test]
    fn rows_of_several_examples_are_concatenated() {
        let mut outline = outline();
        outline.examples.push(Table::new(vec![
            vec!["value", "key"],
            vec!["value3", "key3"],
        ]));

        let expanded = outline.expand_examples().unwrap();

        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded[2].steps[1].title(), "key3 is value3-when");
    }

    #[test]
    fn unknown_placeholder_fails() {
        let mut outline = outline();
        outline.steps.push(Step::new(Clause::Then, "<missing> thing"));

        let err = outline.expand_examples().unwrap_err();

        assert_eq!(
            err,
            ExpandExamplesError {
                outline: "Scenario outline title".into(),
                name: "missing".into(),
                row: 0,
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to resolve <missing> in Scenario Outline \
             `Scenario outline title`, examples row 1",
        );
    }

    #[test]
    fn short_examples_row_fails_on_missing_cell() {
        let mut outline = outline();
        outline.examples = vec![Table::new(vec![
            vec!["key", "value"],
            vec!["key1"],
        ])];

        let err = outline.expand_examples().unwrap_err();

        assert_eq!(err.name, "value");
    }

    #[test]
    fn outline_without_rows_expands_to_nothing() {
        let mut outline = outline();
        outline.examples = vec![Table::new(vec![vec!["key", "value"]])];

        assert!(outline.expand_examples().unwrap().is_empty());
    }

    #[test]
    fn kind_exposes_shared_shape() {
        let kind = ScenarioKind::from(outline());

        assert_eq!(kind.title(), "Scenario outline title");
        assert_eq!(kind.tags(), ["tagD", "tagE"]);
        assert_eq!(kind.steps().len(), 3);
        assert_eq!(kind.concrete().unwrap().len(), 2);
    }
}
