// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic identifiers derived from free-form titles.

use std::collections::HashSet;

use inflector::cases::pascalcase::to_pascal_case;
use lazy_regex::regex;

use crate::model::Step;

/// Lowercases the `title`, replacing every run of non-alphanumeric characters
/// with a single `_` and stripping the leading and trailing ones.
///
/// ```rust
/// # use cucumber_scaffold::codegen::slug;
/// assert_eq!(slug("Step !! title"), "step_title");
/// assert_eq!(slug("  I enter \"a@b.c\" "), "i_enter_a_b_c");
/// ```
#[must_use]
pub fn slug(title: &str) -> String {
    regex!(r"[^a-z0-9]+")
        .replace_all(&title.to_lowercase(), "_")
        .trim_matches('_')
        .to_owned()
}

/// Joins the `prefix` and the [`slug()`] of the `title` with `_`, omitting
/// the latter if empty.
#[must_use]
pub fn identifier(prefix: &str, title: &str) -> String {
    let slug = slug(title);
    if slug.is_empty() {
        prefix.to_owned()
    } else {
        format!("{prefix}_{slug}")
    }
}

/// Base name of the step handler stub for the given [`Step`]:
/// `<clause>_<slug(title)>`.
#[must_use]
pub fn step_handler_name(step: &Step) -> String {
    identifier(step.clause().as_str(), step.title())
}

/// CamelCase class name out of the given `title`, wrapped into the `prefix`
/// and `suffix`.
#[must_use]
pub fn class_name(prefix: &str, title: &str, suffix: &str) -> String {
    let words = regex!(r"[^A-Za-z0-9]+").replace_all(title, " ");
    let camel = to_pascal_case(words.trim())
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>();
    format!("{prefix}{camel}{suffix}")
}

/// Renders the given string as a single-quoted Python literal, switching to
/// double quotes when only single ones are contained, as `repr()` does.
#[must_use]
pub fn py_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Set of identifiers already taken within a single scope.
///
/// A colliding identifier gets the first free `_2`, `_3`, … suffix, in the
/// order identifiers are claimed.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    taken: HashSet<String>,
}

impl Namespace {
    /// Creates a new empty [`Namespace`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the given `base` identifier, suffixing it if already taken.
    pub fn claim(&mut self, base: String) -> String {
        if !self.taken.contains(&base) {
            _ = self.taken.insert(base.clone());
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{class_name, identifier, py_str, slug, step_handler_name, Namespace};
    use crate::model::{Clause, Step};

    #[test]
    fn slugs_titles() {
        assert_eq!(slug("scenario given"), "scenario_given");
        assert_eq!(slug("step !! title"), "step_title");
        assert_eq!(slug("--Leading and trailing--"), "leading_and_trailing");
        assert_eq!(
            slug(r#"scenario outline title is "a title""#),
            "scenario_outline_title_is_a_title",
        );
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn builds_identifiers() {
        assert_eq!(identifier("test", "Scenario title"), "test_scenario_title");
        assert_eq!(identifier("test", "???"), "test");
        assert_eq!(
            step_handler_name(&Step::new(Clause::When, "background-when")),
            "when_background_when",
        );
    }

    #[test]
    fn builds_class_names() {
        assert_eq!(
            class_name("BDD", "Feature title", "TestCase"),
            "BDDFeatureTitleTestCase",
        );
        assert_eq!(class_name("BDD", "", "TestCase"), "BDDTestCase");
    }

    #[test]
    fn renders_python_strings() {
        assert_eq!(py_str("Scenario title"), "'Scenario title'");
        assert_eq!(py_str("it's"), r#""it's""#);
        assert_eq!(py_str(r#"it's "x""#), r#"'it\'s "x"'"#);
        assert_eq!(py_str("a\\b\nc"), r"'a\\b\nc'");
    }

    #[test]
    fn suffixes_collisions_in_claim_order() {
        let mut ns = Namespace::new();

        assert_eq!(ns.claim("given_step_title".into()), "given_step_title");
        assert_eq!(ns.claim("given_step_title".into()), "given_step_title_2");
        assert_eq!(ns.claim("given_other".into()), "given_other");
        assert_eq!(ns.claim("given_step_title".into()), "given_step_title_3");
    }

    #[test]
    fn skips_suffixes_taken_verbatim() {
        let mut ns = Namespace::new();

        assert_eq!(ns.claim("a_2".into()), "a_2");
        assert_eq!(ns.claim("a".into()), "a");
        assert_eq!(ns.claim("a".into()), "a_3");
    }
}
