// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading of [`Feature`]s from `.feature` files.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{model::Feature, Result};

/// Parses the `.feature` file at the given `path`, or every `.feature` file
/// under it, if it's a directory.
///
/// Directories are searched recursively and case-insensitively, and the found
/// files are returned sorted by their path, so the output is stable.
///
/// # Errors
///
/// - If the `path` doesn't exist.
/// - If any found file fails to parse.
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<(PathBuf, Feature)>> {
    let path = path.as_ref();

    if path.is_file() {
        tracing::debug!(path = %path.display(), "parsing feature file");
        return Ok(vec![(path.to_owned(), Feature::parse_path(path)?)]);
    }
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
        .into());
    }

    let mut files = globwalk::GlobWalkerBuilder::new(path, "*.feature")
        .case_insensitive(true)
        .build()?
        .filter_map(|entry| {
            entry
                .map_err(|e| tracing::warn!(error = %e, "skipping entry"))
                .ok()
        })
        .map(|entry| entry.into_path())
        .filter(|p| p.is_file())
        .collect::<Vec<_>>();
    files.sort();
    tracing::debug!(path = %path.display(), files = files.len(), "found features");

    files
        .into_iter()
        .map(|p| {
            let feature = Feature::parse_path(&p)?;
            Ok((p, feature))
        })
        .collect()
}
