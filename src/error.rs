// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consolidated error handling types of the crate.

use std::io;

use derive_more::with_trait::{Display, Error as StdError, From};

use crate::{codegen::GenerateError, model::ExpandExamplesError, step::ResolveError};

/// Top-level error type for all the operations of the crate.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Error during feature file parsing.
    #[display("Failed to parse feature file: {_0}")]
    Parse(gherkin::ParseFileError),

    /// Error during in-memory feature parsing.
    #[display("Failed to parse feature: {_0}")]
    ParseStr(gherkin::ParseError),

    /// I/O error during file reading or output writing.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// Invalid glob while searching for feature files.
    #[display("Failed to search feature files: {_0}")]
    Walk(globwalk::GlobError),

    /// [`ScenarioOutline`] failed to expand.
    ///
    /// [`ScenarioOutline`]: crate::model::ScenarioOutline
    #[display("{_0}")]
    Expand(ExpandExamplesError),

    /// Test module failed to generate.
    #[display("{_0}")]
    Generate(GenerateError),

    /// [`Step`] failed to resolve to a single handler.
    ///
    /// [`Step`]: crate::model::Step
    #[display("{_0}")]
    Resolve(ResolveError),

    /// Failed to serialize output.
    #[cfg(feature = "output-json")]
    #[display("Serialization failed: {_0}")]
    Json(serde_json::Error),
}

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
