// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use cucumber_scaffold::{
    model::{Clause, Feature, Step},
    step::{self, ResolveError, StepHandlers},
};

type Handler = fn(&[Option<&str>]) -> String;

fn handlers() -> StepHandlers<Handler> {
    StepHandlers::new()
        .with(
            step::given(r#"I enter "([^"]*)" in the (\w+) field"#)
                .unwrap()
                .handle((|g: &[Option<&str>]| format!("enter {:?}", g)) as Handler)
                .named("enter"),
        )
        .with(
            step::when(r#"I press "([^"]*)""#)
                .unwrap()
                .handle((|_: &[Option<&str>]| "press".to_owned()) as Handler)
                .named("press"),
        )
        .with(
            step::then("I see the (dashboard|login page)")
                .unwrap()
                .handle((|_: &[Option<&str>]| "see".to_owned()) as Handler)
                .alias(step::then("I am signed in").unwrap())
                .named("see"),
        )
}

#[test]
fn resolves_every_step_of_a_feature() {
    let feature =
        Feature::parse_path("tests/features/nested/login.feature").unwrap();
    let handlers = handlers();

    let results = feature
        .steps()
        .map(|s| {
            let m = handlers.resolve(s).unwrap();
            (m.func())(&m.groups())
        })
        .collect::<Vec<_>>();

    assert_eq!(
        results,
        [
            r#"enter [Some("test@example.com"), Some("email")]"#,
            r#"enter [Some("s3cr3t"), Some("password")]"#,
            "press",
            "see",
        ],
    );
}

#[test]
fn resolves_aliases_case_insensitively() {
    let handlers = handlers();

    let step = Step::new(Clause::Then, "I AM SIGNED IN");
    let m = handlers.resolve(&step).unwrap();

    assert_eq!(m.handler.name(), Some("see"));
    assert_eq!(m.matcher.pattern(), "I am signed in");
    assert!(m.groups().is_empty());
}

#[test]
fn reports_unmatched_clause() {
    let handlers = handlers();

    let step = Step::new(Clause::Given, "I press \"Sign in\"");
    let err = handlers.resolve(&step).unwrap_err();

    assert!(matches!(err, ResolveError::NoStepHandlers(_)));
    assert_eq!(
        err.to_string(),
        "No step handlers found for step: Given I press \"Sign in\"",
    );
}

#[test]
fn reports_ambiguous_handlers() {
    let handlers = handlers().with(
        step::step(r"I see the \w+")
            .unwrap()
            .handle((|_: &[Option<&str>]| "any".to_owned()) as Handler),
    );

    let step = Step::new(Clause::Then, "I see the dashboard");
    let ResolveError::MultipleStepHandlers(err) =
        handlers.resolve(&step).unwrap_err()
    else {
        panic!("expected `MultipleStepHandlers`");
    };

    assert_eq!(
        err.candidates.iter().map(|c| c.handler).collect::<Vec<_>>(),
        [2, 3],
    );
    assert!(err
        .to_string()
        .starts_with("Multiple step handlers found for step: Then I see"));
    assert!(err.to_string().contains("\n#2 see --> "));
}

#[test]
fn requires_full_title_match() {
    let handlers = handlers();

    let step = Step::new(Clause::Then, "I see the dashboard now");

    assert!(matches!(
        handlers.resolve(&step),
        Err(ResolveError::NoStepHandlers(_)),
    ));
}
