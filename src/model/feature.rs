// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Feature`] and [`Background`], built out of a [`gherkin::Feature`] parse
//! tree.

use std::path::Path;

use sealed::sealed;

use super::{ExpandExamplesError, Scenario, ScenarioKind, ScenarioOutline, Step, Table};

/// Shared setup [`Step`]s, conceptually prefixed to every scenario of a
/// [`Feature`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
pub struct Background {
    /// Title of this [`Background`], possibly empty.
    pub title: String,

    /// Free text description of this [`Background`], possibly empty.
    pub description: String,

    /// [`Step`]s of this [`Background`].
    pub steps: Vec<Step>,
}

/// Top-level behavior specification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
pub struct Feature {
    /// Tags of this [`Feature`], without the leading `@`.
    pub tags: Vec<String>,

    /// Title of this [`Feature`].
    pub title: String,

    /// Free text description of this [`Feature`], possibly empty.
    pub description: String,

    /// [`Background`] of this [`Feature`], if any.
    pub background: Option<Background>,

    /// Scenario-like entities of this [`Feature`] in declaration order.
    ///
    /// Scenarios of `Rule:` blocks follow the ones declared directly in the
    /// [`Feature`].
    pub scenarios: Vec<ScenarioKind>,
}

impl Feature {
    /// Parses a [`Feature`] out of the given `.feature` file contents.
    ///
    /// # Errors
    ///
    /// If the `input` isn't a valid Gherkin document.
    pub fn parse_str(input: &str) -> Result<Self, gherkin::ParseError> {
        gherkin::Feature::parse(input, gherkin::GherkinEnv::default())
            .map(Ext::into_model)
    }

    /// Parses a [`Feature`] out of the `.feature` file at the given `path`.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or isn't a valid Gherkin document.
    pub fn parse_path(
        path: impl AsRef<Path>,
    ) -> Result<Self, gherkin::ParseFileError> {
        gherkin::Feature::parse_path(path, gherkin::GherkinEnv::default())
            .map(Self::from)
    }

    /// Returns all the concrete [`Scenario`]s of this [`Feature`], with every
    /// [`ScenarioOutline`] expanded.
    ///
    /// # Errors
    ///
    /// On the first [`ScenarioOutline`] failing to expand.
    pub fn expanded_scenarios(
        &self,
    ) -> Result<Vec<Scenario>, ExpandExamplesError> {
        let mut out = Vec::with_capacity(self.scenarios.len());
        for s in &self.scenarios {
            out.extend(s.concrete()?);
        }
        Ok(out)
    }

    /// Counts the scenario-like entities of this [`Feature`].
    #[must_use]
    pub fn count_scenarios(&self) -> usize {
        self.scenarios.len()
    }

    /// Counts the [`Step`]s of this [`Feature`], [`Background`] included,
    /// template [`Step`]s of a [`ScenarioOutline`] counted once.
    #[must_use]
    pub fn count_steps(&self) -> usize {
        self.steps().count()
    }

    /// Iterates over the [`Background`] [`Step`]s followed by the [`Step`]s
    /// of every scenario-like entity in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.background
            .iter()
            .flat_map(|b| &b.steps)
            .chain(self.scenarios.iter().flat_map(ScenarioKind::steps))
    }
}

/// Helper methods to operate on [`gherkin::Feature`]s.
#[sealed]
pub trait Ext: Sized {
    /// Lists all the [`gherkin::Scenario`]s of this [`gherkin::Feature`]:
    /// the ones declared directly first, then the ones of every
    /// [`gherkin::Rule`] in declaration order.
    fn all_scenarios(&self) -> Vec<&gherkin::Scenario>;

    /// Converts this [`gherkin::Feature`] into a [`Feature`].
    fn into_model(self) -> Feature;
}

#[sealed]
impl Ext for gherkin::Feature {
    fn all_scenarios(&self) -> Vec<&gherkin::Scenario> {
        self.scenarios
            .iter()
            .chain(self.rules.iter().flat_map(|r| &r.scenarios))
            .collect()
    }

    fn into_model(self) -> Feature {
        Feature::from(self)
    }
}

impl From<gherkin::Feature> for Feature {
    fn from(feature: gherkin::Feature) -> Self {
        let scenarios = feature
            .all_scenarios()
            .into_iter()
            .map(ScenarioKind::from)
            .collect::<Vec<_>>();

        tracing::debug!(
            feature = %feature.name,
            scenarios = scenarios.len(),
            "converted feature",
        );

        Self {
            tags: tags(&feature.tags),
            title: feature.name.trim().to_owned(),
            description: description(feature.description.clone()),
            background: feature.background.as_ref().map(Background::from),
            scenarios,
        }
    }
}

impl From<&gherkin::Background> for Background {
    fn from(bg: &gherkin::Background) -> Self {
        let title: Option<String> = bg.name.clone().into();
        Self {
            title: title.unwrap_or_default().trim().to_owned(),
            description: description(bg.description.clone()),
            steps: bg.steps.iter().map(Step::from).collect(),
        }
    }
}

impl From<&gherkin::Scenario> for ScenarioKind {
    fn from(scenario: &gherkin::Scenario) -> Self {
        let tags = tags(&scenario.tags);
        let title = scenario.name.trim().to_owned();
        let description = description(scenario.description.clone());
        let steps = scenario.steps.iter().map(Step::from).collect();

        if scenario.examples.is_empty() {
            Scenario { tags, title, description, steps }.into()
        } else {
            let examples = scenario
                .examples
                .iter()
                .filter_map(|ex| ex.table.as_ref().map(Table::from))
                .collect();
            ScenarioOutline { tags, title, description, steps, examples }
                .into()
        }
    }
}

fn tags(raw: &[String]) -> Vec<String> {
    raw.iter().map(|t| t.trim_start_matches('@').to_owned()).collect()
}

/// Normalizes a free text description: every line trimmed, surrounding blank
/// lines dropped.
fn description(raw: impl Into<Option<String>>) -> String {
    let raw: Option<String> = raw.into();
    let lines = raw
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
