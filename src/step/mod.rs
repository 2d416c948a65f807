// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step handler registry: [`Matcher`]s, [`StepHandler`]s and resolution of
//! concrete [`Step`]s to exactly one of them.
//!
//! ```rust
//! use cucumber_scaffold::{
//!     model::{Clause, Step},
//!     step::{self, StepHandlers},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let handlers = StepHandlers::new()
//!     .with(step::given(r"^I have (\d+) apples$")?.handle("apples"))
//!     .with(step::then(r"^I have (\d+) left$")?.handle("left"));
//!
//! let step = Step::new(Clause::Given, "I have 10 apples");
//! let found = handlers.resolve(&step)?;
//! assert_eq!(*found.func(), "apples");
//! assert_eq!(found.groups(), [Some("10")]);
//! # Ok(())
//! # }
//! ```
//!
//! [`Step`]: crate::model::Step

mod collection;
mod error;
mod handler;
mod matcher;

pub use self::{
    collection::{HandlerMatch, StepHandlers},
    error::{Candidate, MultipleStepHandlers, NoStepHandlers, ResolveError},
    handler::StepHandler,
    matcher::{given, step, then, when, Matcher},
};
