// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepHandler`] definition.

use std::fmt;

use super::Matcher;

/// Unit of test logic addressable by one or more [`Matcher`]s.
///
/// Created with [`Matcher::handle()`], extended with aliases via
/// [`StepHandler::alias()`]. The list of [`Matcher`]s is never empty and keeps
/// the registration order.
#[derive(Clone)]
pub struct StepHandler<F> {
    /// Name of the handler, used in diagnostics only.
    name: Option<String>,

    /// [`Matcher`]s this handler is addressable by.
    matchers: Vec<Matcher>,

    /// Underlying callable.
    func: F,
}

// Implemented manually to omit redundant `F: Debug` trait bound, imposed by
// `#[derive(Debug)]`.
impl<F> fmt::Debug for StepHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepHandler")
            .field("name", &self.name)
            .field("matchers", &self.matchers)
            .field("func", &format_args!("{:p}", &self.func))
            .finish()
    }
}

impl<F> StepHandler<F> {
    /// Creates a new [`StepHandler`] addressable by the given [`Matcher`].
    #[must_use]
    pub fn new(matcher: Matcher, func: F) -> Self {
        Self { name: None, matchers: vec![matcher], func }
    }

    /// Adds another [`Matcher`] this [`StepHandler`] is addressable by.
    #[must_use]
    pub fn alias(mut self, matcher: Matcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Names this [`StepHandler`] for diagnostics.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name of this [`StepHandler`], if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// [`Matcher`]s of this [`StepHandler`] in registration order.
    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Underlying callable of this [`StepHandler`].
    #[must_use]
    pub const fn func(&self) -> &F {
        &self.func
    }
}
