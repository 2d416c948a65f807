// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of concrete [`Scenario`]s back into Gherkin text.

use itertools::Itertools as _;

use crate::model::{ExpandExamplesError, Feature, Scenario, Step, Table};

/// Indentation of the nested Gherkin lines.
const INDENT: &str = "  ";

fn indented(text: &str, level: usize) -> String {
    let pad = INDENT.repeat(level);
    text.lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("{pad}{l}") })
        .join("\n")
}

/// Renders the given [`Table`] with its columns aligned.
#[must_use]
pub fn table(table: &Table) -> String {
    let widths = table.iter().fold(Vec::<usize>::new(), |mut w, row| {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match w.get_mut(i) {
                Some(max) => *max = (*max).max(len),
                None => w.push(len),
            }
        }
        w
    });

    table
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!(" {cell:<w$} "))
                .join("|");
            format!("|{cells}|")
        })
        .join("\n")
}

/// Renders the given [`Step`] with its [`Table`] or text, if any.
#[must_use]
pub fn step(step: &Step) -> String {
    let mut out = step.to_string();
    if let Some(t) = step.table() {
        out.push('\n');
        out.push_str(&indented(&table(t), 1));
    }
    if let Some(text) = step.text() {
        out.push('\n');
        out.push_str(&indented(&format!("\"\"\"\n{text}\n\"\"\""), 1));
    }
    out
}

/// Renders the given concrete [`Scenario`].
#[must_use]
pub fn scenario(scenario: &Scenario) -> String {
    let mut lines = Vec::new();
    if !scenario.tags.is_empty() {
        lines.push(scenario.tags.iter().map(|t| format!("@{t}")).join(" "));
    }
    lines.push(format!("Scenario: {}", scenario.title).trim_end().to_owned());
    if !scenario.description.is_empty() {
        lines.push(indented(&scenario.description, 1));
    }
    lines.extend(scenario.steps.iter().map(|s| indented(&step(s), 1)));
    lines.join("\n")
}

/// Renders the given [`Feature`] with all its [`ScenarioOutline`]s expanded
/// into concrete [`Scenario`]s.
///
/// # Errors
///
/// If a [`ScenarioOutline`] fails to expand.
///
/// [`ScenarioOutline`]: crate::model::ScenarioOutline
pub fn expanded_feature(feature: &Feature) -> Result<String, ExpandExamplesError> {
    let mut sections = Vec::new();

    let mut header = Vec::new();
    if !feature.tags.is_empty() {
        header.push(feature.tags.iter().map(|t| format!("@{t}")).join(" "));
    }
    header.push(format!("Feature: {}", feature.title).trim_end().to_owned());
    if !feature.description.is_empty() {
        header.push(indented(&feature.description, 1));
    }
    sections.push(header.join("\n"));

    if let Some(bg) = &feature.background {
        let mut lines =
            vec![format!("Background: {}", bg.title).trim_end().to_owned()];
        lines.extend(bg.steps.iter().map(|s| indented(&step(s), 1)));
        sections.push(indented(&lines.join("\n"), 1));
    }

    for s in feature.expanded_scenarios()? {
        sections.push(indented(&scenario(&s), 1));
    }

    Ok(sections.join("\n\n") + "\n")
}
