// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`StepHandlers`] registry and the resolution of [`Step`]s against it.

use regex::Captures;

use super::{
    error::{Candidate, MultipleStepHandlers, NoStepHandlers, ResolveError},
    Matcher, StepHandler,
};
use crate::model::Step;

/// Ordered collection of [`StepHandler`]s.
///
/// Every [`Step`] has to match exactly 1 [`Matcher`] across all the
/// [`StepHandler`]s. The registration order only affects the order of
/// diagnostics, never the resolution outcome.
#[derive(Clone, Debug)]
pub struct StepHandlers<F> {
    handlers: Vec<StepHandler<F>>,
}

// Implemented manually to omit redundant `F: Default` trait bound, imposed by
// `#[derive(Default)]`.
impl<F> Default for StepHandlers<F> {
    fn default() -> Self {
        Self { handlers: Vec::new() }
    }
}

impl<F> FromIterator<StepHandler<F>> for StepHandlers<F> {
    fn from_iter<I: IntoIterator<Item = StepHandler<F>>>(iter: I) -> Self {
        Self { handlers: iter.into_iter().collect() }
    }
}

impl<F> From<Vec<StepHandler<F>>> for StepHandlers<F> {
    fn from(handlers: Vec<StepHandler<F>>) -> Self {
        Self { handlers }
    }
}

impl<F> StepHandlers<F> {
    /// Creates a new empty [`StepHandlers`] registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the given [`StepHandler`] after the already registered ones.
    #[must_use]
    pub fn with(mut self, handler: StepHandler<F>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered [`StepHandler`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Indicates whether no [`StepHandler`]s are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterates over the registered [`StepHandler`]s in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StepHandler<F>> + '_ {
        self.handlers.iter()
    }

    /// Resolves the given [`Step`] to the only [`StepHandler`] having a
    /// [`Matcher`] for it.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NoStepHandlers`] if no [`Matcher`] matches.
    /// - [`ResolveError::MultipleStepHandlers`] if more than one [`Matcher`]
    ///   matches, even within the same [`StepHandler`].
    pub fn resolve<'me, 's>(
        &'me self,
        step: &'s Step,
    ) -> Result<HandlerMatch<'me, 's, F>, ResolveError> {
        let mut candidates = self
            .handlers
            .iter()
            .enumerate()
            .flat_map(|(id, h)| {
                h.matchers().iter().filter_map(move |m| {
                    m.captures(step).map(|caps| (id, h, m, caps))
                })
            })
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => {
                tracing::debug!(step = %step, "no step handlers");
                Err(NoStepHandlers {
                    clause: step.clause(),
                    title: step.title().to_owned(),
                }
                .into())
            }
            1 => {
                // Instead of `.unwrap()` to avoid documenting `# Panics`.
                let (_, handler, matcher, captures) =
                    candidates.pop().unwrap_or_else(|| unreachable!());
                Ok(HandlerMatch { handler, matcher, captures })
            }
            n => {
                tracing::debug!(step = %step, candidates = n, "ambiguous step");
                Err(MultipleStepHandlers {
                    clause: step.clause(),
                    title: step.title().to_owned(),
                    candidates: candidates
                        .into_iter()
                        .map(|(id, h, m, _)| Candidate {
                            handler: id,
                            name: h.name().map(str::to_owned),
                            matcher: m.clone(),
                        })
                        .collect(),
                }
                .into())
            }
        }
    }
}

/// [`StepHandler`] resolved for a [`Step`], along with the captures of its
/// title.
#[derive(Debug)]
pub struct HandlerMatch<'me, 's, F> {
    /// Resolved [`StepHandler`].
    pub handler: &'me StepHandler<F>,

    /// [`Matcher`] of the [`StepHandler`] which matched.
    pub matcher: &'me Matcher,

    /// Captures of the [`Step`] title.
    pub captures: Captures<'s>,
}

impl<'me, 's, F> HandlerMatch<'me, 's, F> {
    /// Returns the capturing groups of the match, the whole match excluded.
    ///
    /// Groups that didn't participate in the match are [`None`].
    #[must_use]
    pub fn groups(&self) -> Vec<Option<&'s str>> {
        self.captures
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str()))
            .collect()
    }

    /// Returns the underlying callable of the resolved [`StepHandler`].
    #[must_use]
    pub const fn func(&self) -> &'me F {
        self.handler.func()
    }
}
