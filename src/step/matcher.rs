// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Matcher`]s and the registration primitives producing them.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use regex::{Captures, Regex, RegexBuilder};

use super::StepHandler;
use crate::model::{Clause, Step};

/// Compiled step pattern with an optional [`Clause`] qualifier.
///
/// The pattern is compiled once, case-insensitively, and anchored to match
/// the whole step title. Equality, hashing and ordering only consider the
/// source pattern and the [`Clause`].
#[derive(Clone, Debug)]
pub struct Matcher {
    /// Pattern as it was registered.
    pattern: String,

    /// Compiled anchored form of the `pattern`.
    regex: Regex,

    /// [`Clause`] this [`Matcher`] is restricted to, if any.
    clause: Option<Clause>,
}

impl Matcher {
    /// Compiles a new [`Matcher`] out of the given `pattern`.
    ///
    /// A [`None`] `clause` matches [`Step`]s of every [`Clause`].
    ///
    /// # Errors
    ///
    /// If the `pattern` isn't a valid [`Regex`].
    pub fn new(
        pattern: impl Into<String>,
        clause: Option<Clause>,
    ) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern, regex, clause })
    }

    /// Pattern this [`Matcher`] was registered with.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Compiled [`Regex`] of this [`Matcher`].
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// [`Clause`] this [`Matcher`] is restricted to, if any.
    #[must_use]
    pub const fn clause(&self) -> Option<Clause> {
        self.clause
    }

    /// Checks whether this [`Matcher`] applies to [`Step`]s of the given
    /// [`Clause`].
    #[must_use]
    pub fn accepts(&self, clause: Clause) -> bool {
        self.clause.map_or(true, |c| c == clause)
    }

    /// Matches the given [`Step`], returning the captures of its title.
    #[must_use]
    pub fn captures<'s>(&self, step: &'s Step) -> Option<Captures<'s>> {
        if !self.accepts(step.clause()) {
            return None;
        }
        self.regex.captures(step.title())
    }

    /// Creates a new [`StepHandler`] out of the given `func`, addressable by
    /// this [`Matcher`].
    #[must_use]
    pub fn handle<F>(self, func: F) -> StepHandler<F> {
        StepHandler::new(self, func)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(clause) = self.clause {
            write!(f, "{clause}: ")?;
        }
        write!(f, "{}", self.pattern)
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.clause == other.clause
    }
}

impl Eq for Matcher {}

impl Hash for Matcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.clause.hash(state);
    }
}

/// Registers a `pattern` matching [`Step`]s of any [`Clause`].
///
/// # Errors
///
/// If the `pattern` isn't a valid [`Regex`].
pub fn step(pattern: impl Into<String>) -> Result<Matcher, regex::Error> {
    Matcher::new(pattern, None)
}

/// Registers a `pattern` matching [Given] [`Step`]s only.
///
/// # Errors
///
/// If the `pattern` isn't a valid [`Regex`].
///
/// [Given]: https://cucumber.io/docs/gherkin/reference#given
pub fn given(pattern: impl Into<String>) -> Result<Matcher, regex::Error> {
    Matcher::new(pattern, Some(Clause::Given))
}

/// Registers a `pattern` matching [When] [`Step`]s only.
///
/// # Errors
///
/// If the `pattern` isn't a valid [`Regex`].
///
/// [When]: https://cucumber.io/docs/gherkin/reference#when
pub fn when(pattern: impl Into<String>) -> Result<Matcher, regex::Error> {
    Matcher::new(pattern, Some(Clause::When))
}

/// Registers a `pattern` matching [Then] [`Step`]s only.
///
/// # Errors
///
/// If the `pattern` isn't a valid [`Regex`].
///
/// [Then]: https://cucumber.io/docs/gherkin/reference#then
pub fn then(pattern: impl Into<String>) -> Result<Matcher, regex::Error> {
    Matcher::new(pattern, Some(Clause::Then))
}
