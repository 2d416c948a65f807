// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Step`]s and their [`Clause`]s.

use std::{fmt, str::FromStr};

use derive_more::with_trait::{Display, Error};
use gherkin::StepType;

use super::Table;

/// Primary clause of a [`Step`].
///
/// `And`/`But` keywords never reach this type: they're resolved to the nearest
/// preceding primary clause while parsing.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
#[cfg_attr(feature = "output-json", serde(rename_all = "lowercase"))]
pub enum Clause {
    /// [Given] clause.
    ///
    /// [Given]: https://cucumber.io/docs/gherkin/reference#given
    #[display("given")]
    Given,

    /// [When] clause.
    ///
    /// [When]: https://cucumber.io/docs/gherkin/reference#when
    #[display("when")]
    When,

    /// [Then] clause.
    ///
    /// [Then]: https://cucumber.io/docs/gherkin/reference#then
    #[display("then")]
    Then,
}

impl Clause {
    /// All the [`Clause`]s in their emission order.
    pub const ALL: [Self; 3] = [Self::Given, Self::When, Self::Then];

    /// Returns this [`Clause`] as a lowercase keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
        }
    }

    /// Returns this [`Clause`] as a capitalized keyword, as it's written in
    /// `.feature` files.
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl From<StepType> for Clause {
    fn from(ty: StepType) -> Self {
        match ty {
            StepType::Given => Self::Given,
            StepType::When => Self::When,
            StepType::Then => Self::Then,
        }
    }
}

/// Error of parsing an unknown [`Clause`] keyword.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("unknown step clause `{keyword}`")]
pub struct UnknownClause {
    /// The keyword which failed to parse.
    #[error(not(source))]
    pub keyword: String,
}

impl FromStr for Clause {
    type Err = UnknownClause;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownClause { keyword: s.to_owned() })
    }
}

/// Error of creating a [`Step`] with a blank title.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("`{}` step has an empty title", clause.capitalized())]
pub struct EmptyStepTitle {
    /// [`Clause`] of the rejected [`Step`].
    #[error(not(source))]
    pub clause: Clause,
}

/// Single clause-tagged line of a scenario.
///
/// At most one of [`Step::table()`] and [`Step::text()`] is present.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "output-json", derive(serde::Serialize))]
pub struct Step {
    clause: Clause,
    title: String,
    #[cfg_attr(
        feature = "output-json",
        serde(skip_serializing_if = "Option::is_none")
    )]
    table: Option<Table>,
    #[cfg_attr(
        feature = "output-json",
        serde(skip_serializing_if = "Option::is_none")
    )]
    text: Option<String>,
}

impl Step {
    /// Creates a new [`Step`] without any attached [`Table`] or text.
    ///
    /// The `title` is expected to be non-empty: an empty one yields a step
    /// handler named after the bare [`Clause`] and matching only empty
    /// titles. Use [`Step::try_new()`] to reject it instead.
    #[must_use]
    pub fn new(clause: Clause, title: impl Into<String>) -> Self {
        Self { clause, title: title.into(), table: None, text: None }
    }

    /// Creates a new [`Step`], rejecting a blank `title`.
    ///
    /// # Errors
    ///
    /// If the `title` is empty or consists of whitespace only.
    pub fn try_new(
        clause: Clause,
        title: impl Into<String>,
    ) -> Result<Self, EmptyStepTitle> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EmptyStepTitle { clause });
        }
        Ok(Self::new(clause, title))
    }

    /// Attaches the given [`Table`] to this [`Step`], dropping its text.
    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.text = None;
        self.table = Some(table);
        self
    }

    /// Attaches the given multi-line text to this [`Step`], dropping its
    /// [`Table`].
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.table = None;
        self.text = Some(text.into());
        self
    }

    /// [`Clause`] of this [`Step`].
    #[must_use]
    pub const fn clause(&self) -> Clause {
        self.clause
    }

    /// Single-line title of this [`Step`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// [`Table`] attached to this [`Step`], if any.
    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Multi-line text attached to this [`Step`], if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns a copy of this [`Step`] with its title and text rewritten by
    /// `f`. The [`Table`] is left as is.
    pub(crate) fn try_map_text<E>(
        &self,
        mut f: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            clause: self.clause,
            title: f(&self.title)?,
            table: self.table.clone(),
            text: self.text.as_deref().map(&mut f).transpose()?,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.clause.capitalized(), self.title)
    }
}

impl From<&gherkin::Step> for Step {
    fn from(step: &gherkin::Step) -> Self {
        Self {
            clause: step.ty.into(),
            title: step.value.trim().to_owned(),
            table: step.table.as_ref().map(Table::from),
            text: step
                .table
                .is_none()
                .then(|| step.docstring.as_deref().map(dedent))
                .flatten(),
        }
    }
}

/// Strips the common indentation and the surrounding blank lines of a
/// docstring.
pub(crate) fn dedent(raw: &str) -> String {
    let lines = raw.lines().collect::<Vec<_>>();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };
    let lines = &lines[start..=end];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or_default();

    lines
        .iter()
        .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()).trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
