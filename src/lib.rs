// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(missing_debug_implementations, missing_docs)]

pub mod cli;
pub mod codegen;
pub mod error;
pub mod model;
pub mod parser;
pub mod step;

pub use gherkin;

#[doc(inline)]
pub use self::{
    codegen::CodeGen,
    error::{Error, Result},
    model::{
        Background, Clause, Feature, Scenario, ScenarioKind, ScenarioOutline,
        Step, Table,
    },
    step::{HandlerMatch, Matcher, StepHandler, StepHandlers},
};
