// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic text generation of test scaffolding: functions, step handler
//! stubs and whole test modules.
//!
//! ```rust
//! use cucumber_scaffold::{codegen::CodeGen, model::Feature};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let feature = Feature::parse_str(
//!     "Feature: Apples\n  Scenario: Count\n    Given I have 10 apples\n",
//! )?;
//! let module = CodeGen::default().test_module(&feature)?;
//!
//! assert!(module.contains("class BDDApplesTestCase(TestCase):"));
//! assert!(module.contains("@given(r'(?i)^I have 10 apples$')"));
//! # Ok(())
//! # }
//! ```

mod config;
mod function;
pub mod gherkin;
mod module;
mod naming;
mod stub;

pub use self::{
    config::{Config, OutlineSteps, DEFAULT_IMPORT},
    function::{function_params, InvalidParameters},
    module::GenerateError,
    naming::{class_name, identifier, py_str, slug, step_handler_name, Namespace},
    stub::step_regex,
};

/// Generator of test scaffolding text.
///
/// Holds no state besides its [`Config`], so every rendering is a pure
/// function of its inputs.
#[derive(Clone, Debug, Default)]
pub struct CodeGen {
    config: Config,
}

impl CodeGen {
    /// Creates a new [`CodeGen`] with the given [`Config`].
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// [`Config`] of this [`CodeGen`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
