// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of whole test modules.

use derive_more::with_trait::{Display, Error, From};

use super::{
    naming::{class_name, identifier, py_str},
    stub::docstring,
    CodeGen, InvalidParameters, Namespace, OutlineSteps,
};
use crate::model::{ExpandExamplesError, Feature, Scenario, Step};

/// Error of generating a test module.
#[derive(Clone, Debug, Display, Error, From, PartialEq)]
pub enum GenerateError {
    /// Generated function has duplicate parameters.
    #[display("{_0}")]
    InvalidParameters(InvalidParameters),

    /// [`ScenarioOutline`] failed to expand.
    ///
    /// [`ScenarioOutline`]: crate::model::ScenarioOutline
    #[display("{_0}")]
    Expand(ExpandExamplesError),
}

/// Joins a `title` and a `description` into a docstring text.
fn doc_text(title: &str, description: &str) -> String {
    if description.is_empty() {
        title.to_owned()
    } else {
        format!("{title}\n\n{description}")
    }
}

impl CodeGen {
    /// Renders a whole test module for the given [`Feature`].
    ///
    /// The module consists of the import line and a single test case class,
    /// named after the [`Feature`] title, holding:
    /// 1. the [`Feature`] docstring;
    /// 2. a `test_*` method per scenario-like entity (once per
    ///    [`ScenarioOutline`], named after its own title), running the
    ///    scenario by its title;
    /// 3. the step handler stubs of the [`Background`] and of every
    ///    scenario-like entity, as [`CodeGen::step_handlers()`] renders them.
    ///
    /// # Errors
    ///
    /// - If a rendered function has duplicate parameters.
    /// - If a [`ScenarioOutline`] fails to expand with
    ///   [`OutlineSteps::Expanded`].
    ///
    /// [`Background`]: crate::model::Background
    /// [`ScenarioOutline`]: crate::model::ScenarioOutline
    pub fn test_module(&self, feature: &Feature) -> Result<String, GenerateError> {
        let mut blocks =
            vec![docstring(&doc_text(&feature.title, &feature.description))];

        let mut tests = Namespace::new();
        for scenario in &feature.scenarios {
            let name = tests.claim(identifier("test", scenario.title()));
            let body = format!(
                "{}\nself.run_scenario({})",
                docstring(&doc_text(scenario.title(), scenario.description())),
                py_str(scenario.title()),
            );
            blocks.push(self.function(&name, &["self"], &body)?);
        }

        let expanded: Vec<Scenario>;
        let steps: Vec<&Step> = match self.config.outline_steps {
            OutlineSteps::Template => feature.steps().collect(),
            OutlineSteps::Expanded => {
                expanded = feature.expanded_scenarios()?;
                feature
                    .background
                    .iter()
                    .flat_map(|b| &b.steps)
                    .chain(expanded.iter().flat_map(|s| &s.steps))
                    .collect()
            }
        };
        blocks.extend(self.step_handler_stubs(steps)?);

        let class = class_name(
            &self.config.class_prefix,
            &feature.title,
            &self.config.class_suffix,
        );
        tracing::debug!(
            feature = %feature.title,
            class = %class,
            blocks = blocks.len(),
            "rendered test module",
        );

        Ok(format!(
            "{}\n\n{}",
            self.config.import,
            self.block(
                &format!("class {class}({})", self.config.base_class),
                &blocks.join("\n"),
            ),
        ))
    }
}
