// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data model of a Gherkin [`Feature`], built once from a parse tree and
//! read-only afterwards.

mod feature;
mod scenario;
mod step;
mod table;

pub use self::{
    feature::{Background, Ext as FeatureExt, Feature},
    scenario::{ExpandExamplesError, Scenario, ScenarioKind, ScenarioOutline},
    step::{Clause, EmptyStepTitle, Step, UnknownClause},
    table::Table,
};
