// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fs, process::Command};

use clap::Parser as _;
use cucumber_scaffold::{cli, Error};

fn run(args: &[&str]) -> Result<String, Error> {
    let opts = cli::Opts::try_parse_from(
        ["cucumber-scaffold"].iter().chain(args).copied(),
    )
    .unwrap();
    let mut out = Vec::new();
    cli::run(&opts.command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn generates_modules_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("generated");

    let out = run(&[
        "generate",
        "tests/features",
        "-o",
        target.to_str().unwrap(),
    ])
    .unwrap();

    assert!(out.is_empty());
    let mut files = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(files, ["test_login.py", "test_outline.py"]);

    let module = fs::read_to_string(target.join("test_outline.py")).unwrap();
    assert!(module.starts_with(
        "from swanson import TestCase, step, given, when, then\n",
    ));
    assert!(module.contains("class BDDFeatureTitleTestCase(TestCase):\n"));
}

#[test]
fn suffixes_colliding_module_names() {
    let input = tempfile::tempdir().unwrap();
    for (sub, file, title) in [
        ("a", "login.feature", "Alpha"),
        ("b", "login.feature", "Beta"),
        ("c", "log-in.feature", "Gamma"),
        ("d", "log_in.feature", "Delta"),
    ] {
        fs::create_dir(input.path().join(sub)).unwrap();
        fs::write(
            input.path().join(sub).join(file),
            format!("Feature: {title}\n  Scenario: s\n    Given a step\n"),
        )
        .unwrap();
    }
    let output = tempfile::tempdir().unwrap();

    _ = run(&[
        "generate",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ])
    .unwrap();

    let read = |name: &str| {
        fs::read_to_string(output.path().join(name)).unwrap()
    };
    assert!(read("test_login.py").contains("class BDDAlphaTestCase("));
    assert!(read("test_login_2.py").contains("class BDDBetaTestCase("));
    assert!(read("test_log_in.py").contains("class BDDGammaTestCase("));
    assert!(read("test_log_in_2.py").contains("class BDDDeltaTestCase("));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 4);
}

#[test]
fn prints_single_module() {
    let out = run(&[
        "generate",
        "tests/features/outline.feature",
        "--expand-outlines",
        "--import",
        "from behave_scaffold import TestCase, step, given, when, then",
    ])
    .unwrap();

    assert!(out.starts_with("from behave_scaffold import"));
    assert!(!out.contains("# tests/features"));
    assert!(out.contains("def given_scenario_outline_success_is_guaranteed("));
    assert!(!out.contains("<key>"));
}

#[test]
fn prints_many_modules_with_headers() {
    let out = run(&["generate", "tests/features"]).unwrap();

    assert_eq!(
        out.lines()
            .filter(|l| l.starts_with("# "))
            .collect::<Vec<_>>(),
        [
            "# tests/features/nested/login.feature",
            "# tests/features/outline.feature",
        ],
    );
    assert!(out.contains("class BDDLogInTestCase(TestCase):"));
}

#[test]
fn expands_outlines_as_text() {
    let out = run(&["expand", "tests/features/outline.feature"]).unwrap();

    assert!(out.starts_with("Feature: Feature title\n"));
    assert_eq!(out.matches("Scenario: Scenario Outline title\n").count(), 2);
    assert!(out.contains("    Given scenario outline title is \"a title\"\n"));
    assert!(out.contains("    Then scenario outline success is guaranteed\n"));
    assert!(!out.contains("<value>"));
}

#[cfg(feature = "output-json")]
#[test]
fn expands_outlines_as_json() {
    let out =
        run(&["expand", "tests/features/outline.feature", "-f", "json"])
            .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let scenarios = json[0]["scenarios"].as_array().unwrap();
    assert_eq!(json[0]["title"], "Feature title");
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios[2]["title"], "Scenario Outline title");
}

#[test]
fn fails_on_missing_input() {
    let err = run(&["expand", "tests/features/missing.feature"]).unwrap_err();

    assert!(matches!(err, Error::Io(_)), "unexpected error: {err}");
}

#[test]
fn binary_reports_failure_once() {
    let output = Command::new(env!("CARGO_BIN_EXE_cucumber-scaffold"))
        .args(["expand", "tests/features/missing.feature"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("missing.feature").count(), 1, "{stderr}");
    assert!(stderr.starts_with("error: "), "{stderr}");
}
