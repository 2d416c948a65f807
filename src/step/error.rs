// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of resolving a [`Step`] to its [`StepHandler`].
//!
//! [`Step`]: crate::model::Step
//! [`StepHandler`]: super::StepHandler

use std::fmt;

use derive_more::with_trait::{Display, Error, From};

use super::Matcher;
use crate::model::Clause;

/// Error of a [`Step`] matching no [`Matcher`] of any [`StepHandler`].
///
/// [`Step`]: crate::model::Step
/// [`StepHandler`]: super::StepHandler
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("No step handlers found for step: {} {title}", clause.capitalized())]
pub struct NoStepHandlers {
    /// [`Clause`] of the unmatched [`Step`].
    ///
    /// [`Step`]: crate::model::Step
    pub clause: Clause,

    /// Title of the unmatched [`Step`].
    ///
    /// [`Step`]: crate::model::Step
    #[error(not(source))]
    pub title: String,
}

/// Single [`Matcher`] of a [`StepHandler`] taking part in an ambiguous
/// resolution.
///
/// [`StepHandler`]: super::StepHandler
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Index of the [`StepHandler`] in its registry.
    ///
    /// [`StepHandler`]: super::StepHandler
    pub handler: usize,

    /// Name of the [`StepHandler`], if any.
    ///
    /// [`StepHandler`]: super::StepHandler
    pub name: Option<String>,

    /// [`Matcher`] which matched.
    pub matcher: Matcher,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.handler)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        write!(f, " --> {}", self.matcher)
    }
}

/// Error of a [`Step`] matching [`Matcher`]s of several [`StepHandler`]s, or
/// several [`Matcher`]s of the same one.
///
/// [`Step`]: crate::model::Step
/// [`StepHandler`]: super::StepHandler
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct MultipleStepHandlers {
    /// [`Clause`] of the ambiguous [`Step`].
    ///
    /// [`Step`]: crate::model::Step
    pub clause: Clause,

    /// Title of the ambiguous [`Step`].
    ///
    /// [`Step`]: crate::model::Step
    pub title: String,

    /// Conflicting [`Candidate`]s in registration order.
    pub candidates: Vec<Candidate>,
}

impl fmt::Display for MultipleStepHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multiple step handlers found for step: {} {}\n\
             Possible matches:",
            self.clause.capitalized(),
            self.title,
        )?;
        for c in &self.candidates {
            write!(f, "\n{c}")?;
        }
        Ok(())
    }
}

/// Error of resolving a [`Step`] to exactly one [`StepHandler`].
///
/// [`Step`]: crate::model::Step
/// [`StepHandler`]: super::StepHandler
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum ResolveError {
    /// No [`StepHandler`] matched.
    ///
    /// [`StepHandler`]: super::StepHandler
    #[display("{_0}")]
    NoStepHandlers(NoStepHandlers),

    /// More than one [`Matcher`] matched.
    #[display("{_0}")]
    MultipleStepHandlers(MultipleStepHandlers),
}
