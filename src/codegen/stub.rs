// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of step handler stubs.

use linked_hash_map::LinkedHashMap;

use super::{naming, CodeGen, InvalidParameters, Namespace};
use crate::model::{Clause, Step};

/// Characters leaving a quoted title segment unescaped would break the
/// pattern structure with.
const STRUCTURAL: &[char] =
    &['\\', '(', ')', '[', ']', '{', '}', '|', '^', '$', '*', '+', '?'];

/// Builds the case-insensitive, fully anchored pattern matching the given
/// step `title` literally.
///
/// Regex metacharacters outside double-quoted segments are escaped. Inside a
/// closed pair of double quotes the text is kept verbatim, apart from the
/// characters in [`STRUCTURAL`], so quoted example values like
/// `"test@example.com"` read as written. `'` is escaped as well, so the
/// pattern fits a single-quoted raw string literal.
///
/// ```rust
/// # use cucumber_scaffold::codegen::step_regex;
/// assert_eq!(
///     step_regex(r#"I enter "test@example.com" in the email field"#),
///     r#"(?i)^I enter "test@example.com" in the email field$"#,
/// );
/// assert_eq!(step_regex("I pay 1.5$"), r"(?i)^I pay 1\.5\$$");
/// ```
#[must_use]
pub fn step_regex(title: &str) -> String {
    let parts = title.split('"').collect::<Vec<_>>();
    let last = parts.len() - 1;

    let body = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let quoted = i % 2 == 1 && i != last;
            let escaped = if quoted {
                part.chars().fold(String::new(), |mut out, c| {
                    if STRUCTURAL.contains(&c) {
                        out.push('\\');
                    }
                    out.push(c);
                    out
                })
            } else {
                regex::escape(part)
            };
            escaped.replace('\'', r"\'")
        })
        .collect::<Vec<_>>()
        .join("\"");

    format!("(?i)^{body}$")
}

/// Escapes the text so it stays verbatim inside a `"""` docstring.
fn docstring_text(text: &str) -> String {
    text.replace('\\', r"\\").replace(r#"""""#, r#"\"\"\""#)
}

/// Renders the body of a `"""` docstring, each line of the `text` on its own.
pub(crate) fn docstring(text: &str) -> String {
    format!("\"\"\"\n{}\n\"\"\"\n", docstring_text(text))
}

impl CodeGen {
    /// Renders a single step handler stub for the given [`Step`], named
    /// `name`.
    ///
    /// The stub is decorated with the [`Step`]'s [`Clause`] and a pattern
    /// built by [`step_regex()`], documented with the [`Step`] itself, and
    /// fails until implemented.
    ///
    /// # Errors
    ///
    /// Never for a valid identifier `name`, kept for the uniformity with
    /// [`CodeGen::function()`].
    pub fn step_handler(
        &self,
        step: &Step,
        name: &str,
    ) -> Result<String, InvalidParameters> {
        let body = format!("{}\nassert False", docstring(&step.to_string()));
        let function = self.function(name, &["self", "step"], &body)?;
        Ok(format!(
            "@{}(r'{}')\n{function}",
            step.clause(),
            step_regex(step.title()),
        ))
    }

    /// Renders step handler stubs for the given [`Step`]s.
    ///
    /// [`Step`]s with the same [`Clause`] and title are rendered once. Stubs
    /// go in [`Clause::ALL`] order, each [`Clause`] group keeping the
    /// first-seen order of its [`Step`]s. Colliding names get a numeric suffix
    /// within their [`Clause`] group. Stubs are separated by a blank line.
    ///
    /// # Errors
    ///
    /// See [`CodeGen::step_handler()`].
    pub fn step_handlers<'s>(
        &self,
        steps: impl IntoIterator<Item = &'s Step>,
    ) -> Result<String, InvalidParameters> {
        Ok(self.step_handler_stubs(steps)?.join("\n"))
    }

    /// Renders every step handler stub separately, as described in
    /// [`CodeGen::step_handlers()`].
    pub(crate) fn step_handler_stubs<'s>(
        &self,
        steps: impl IntoIterator<Item = &'s Step>,
    ) -> Result<Vec<String>, InvalidParameters> {
        let mut unique = LinkedHashMap::<(Clause, &str), &Step>::new();
        for step in steps {
            _ = unique.entry((step.clause(), step.title())).or_insert(step);
        }
        tracing::trace!(stubs = unique.len(), "deduplicated steps");

        Clause::ALL
            .into_iter()
            .flat_map(|clause| {
                let mut names = Namespace::new();
                unique
                    .values()
                    .filter(move |s| s.clause() == clause)
                    .map(move |s| {
                        let name = names.claim(naming::step_handler_name(s));
                        self.step_handler(s, &name)
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
