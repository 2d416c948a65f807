// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command line interface of the `cucumber-scaffold` binary.

use std::{fs, io::Write, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::{
    codegen::{self, CodeGen, Config, Namespace, OutlineSteps},
    parser, Result,
};

/// Root CLI (command line interface) of the `cucumber-scaffold` binary.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "cucumber-scaffold",
    about = "Expand Scenario Outlines and scaffold step handlers",
    long_about = None,
)]
pub struct Opts {
    /// Increases logging verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands of the [`Opts`].
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Generate a test module per feature file.
    Generate(GenerateOpts),

    /// Print the scenarios of every feature with outlines expanded.
    Expand(ExpandOpts),
}

/// Options of the [`Command::Generate`].
#[derive(Clone, Debug, Args)]
pub struct GenerateOpts {
    /// `.feature` file or directory to search for them.
    #[arg(value_name = "input")]
    pub input: PathBuf,

    /// Directory to write `test_<feature>.py` modules into.
    ///
    /// Modules are printed to stdout if omitted. Feature files whose names
    /// collide get `_2`, `_3`, … suffixed modules, in path order.
    #[arg(short, long, value_name = "dir")]
    pub output: Option<PathBuf>,

    /// Number of columns nested blocks are indented by.
    #[arg(long, value_name = "columns", default_value_t = 4)]
    pub indent: usize,

    /// Stub the steps of every expanded example instead of the template
    /// steps of Scenario Outlines.
    #[arg(long)]
    pub expand_outlines: bool,

    /// Import line starting every module.
    #[arg(long, value_name = "line")]
    pub import: Option<String>,
}

impl GenerateOpts {
    /// Builds the [`Config`] of a [`CodeGen`] out of these options.
    #[must_use]
    pub fn config(&self) -> Config {
        let mut config = Config {
            indent: self.indent,
            outline_steps: if self.expand_outlines {
                OutlineSteps::Expanded
            } else {
                OutlineSteps::Template
            },
            ..Config::default()
        };
        if let Some(import) = &self.import {
            config.import.clone_from(import);
        }
        config
    }
}

/// Output format of the [`Command::Expand`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Gherkin text.
    #[default]
    Text,

    /// JSON array of features with their expanded scenarios.
    ///
    /// Requires the `output-json` feature.
    Json,
}

/// Options of the [`Command::Expand`].
#[derive(Clone, Debug, Args)]
pub struct ExpandOpts {
    /// `.feature` file or directory to search for them.
    #[arg(value_name = "input")]
    pub input: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,
}

/// Runs the given [`Command`], writing its output into `out`.
///
/// # Errors
///
/// If parsing, expanding, generating or writing fails.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Generate(opts) => generate(opts, out),
        Command::Expand(opts) => expand(opts, out),
    }
}

fn generate(opts: &GenerateOpts, out: &mut impl Write) -> Result<()> {
    let features = parser::parse(&opts.input)?;
    let codegen = CodeGen::new(opts.config());
    let many = features.len() > 1;
    let mut modules = Namespace::new();

    if let Some(dir) = &opts.output {
        fs::create_dir_all(dir)?;
    }

    for (path, feature) in &features {
        let module = codegen.test_module(feature)?;

        if let Some(dir) = &opts.output {
            let stem = path
                .file_stem()
                .map(|s| codegen::slug(&s.to_string_lossy()))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "feature".to_owned());
            let name = modules.claim(format!("test_{stem}"));
            if name != format!("test_{stem}") {
                tracing::warn!(
                    feature = %path.display(),
                    module = %name,
                    "module name already taken, suffixed",
                );
            }
            let target = dir.join(format!("{name}.py"));
            fs::write(&target, module)?;
            tracing::info!(
                feature = %path.display(),
                module = %target.display(),
                "generated",
            );
        } else {
            if many {
                writeln!(out, "# {}", path.display())?;
            }
            writeln!(out, "{module}")?;
        }
    }
    Ok(())
}

fn expand(opts: &ExpandOpts, out: &mut impl Write) -> Result<()> {
    let features = parser::parse(&opts.input)?;

    match opts.format {
        Format::Text => {
            for (i, (_, feature)) in features.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", codegen::gherkin::expanded_feature(feature)?)?;
            }
        }
        #[cfg(feature = "output-json")]
        Format::Json => {
            let expanded = features
                .iter()
                .map(|(path, feature)| {
                    Ok(json::Expanded {
                        path,
                        title: &feature.title,
                        tags: &feature.tags,
                        background: feature.background.as_ref(),
                        scenarios: feature.expanded_scenarios()?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut *out, &expanded)?;
            writeln!(out)?;
        }
        #[cfg(not(feature = "output-json"))]
        Format::Json => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "JSON output requires the `output-json` feature",
            )
            .into());
        }
    }
    Ok(())
}

#[cfg(feature = "output-json")]
mod json {
    use std::path::Path;

    use serde::Serialize;

    use crate::model::{Background, Scenario};

    /// Serialized [`Feature`] with its outlines expanded.
    ///
    /// [`Feature`]: crate::model::Feature
    #[derive(Debug, Serialize)]
    pub(super) struct Expanded<'a> {
        pub(super) path: &'a Path,
        pub(super) title: &'a str,
        pub(super) tags: &'a [String],
        #[serde(skip_serializing_if = "Option::is_none")]
        pub(super) background: Option<&'a Background>,
        pub(super) scenarios: Vec<Scenario>,
    }
}
