// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration of the [`CodeGen`].
//!
//! [`CodeGen`]: super::CodeGen

use smart_default::SmartDefault;

/// Import line every generated test module starts with.
pub const DEFAULT_IMPORT: &str =
    "from swanson import TestCase, step, given, when, then";

/// Which [`Step`]s of a [`ScenarioOutline`] get step handler stubs.
///
/// [`ScenarioOutline`]: crate::model::ScenarioOutline
/// [`Step`]: crate::model::Step
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutlineSteps {
    /// Template [`Step`]s, with their `<placeholders>` left as is.
    ///
    /// [`Step`]: crate::model::Step
    #[default]
    Template,

    /// [`Step`]s of every expanded examples row.
    ///
    /// [`Step`]: crate::model::Step
    Expanded,
}

/// Layout of the generated test modules.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Number of columns a nested block is indented by.
    #[default = 4]
    pub indent: usize,

    /// Import line starting every test module.
    #[default(_code = "DEFAULT_IMPORT.to_owned()")]
    pub import: String,

    /// Base class of the generated test case class.
    #[default = "TestCase"]
    pub base_class: String,

    /// Prefix of the generated test case class name.
    #[default = "BDD"]
    pub class_prefix: String,

    /// Suffix of the generated test case class name.
    #[default = "TestCase"]
    pub class_suffix: String,

    /// Which [`ScenarioOutline`] steps get step handler stubs.
    ///
    /// [`ScenarioOutline`]: crate::model::ScenarioOutline
    pub outline_steps: OutlineSteps,
}
