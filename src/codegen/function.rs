// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of function definitions.

use std::collections::HashSet;

use derive_more::with_trait::{Display, Error};

use super::CodeGen;

/// Error of a generated function having the same parameter twice.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Invalid parameters: `{name}` is used more than once")]
pub struct InvalidParameters {
    /// Duplicated parameter name.
    #[error(not(source))]
    pub name: String,
}

/// Renders a formal parameter list, joining the `params` with `", "`.
///
/// # Errors
///
/// If any parameter name repeats.
pub fn function_params<S: AsRef<str>>(
    params: &[S],
) -> Result<String, InvalidParameters> {
    let params = params.iter().map(|p| p.as_ref()).collect::<Vec<&str>>();

    let mut seen = HashSet::with_capacity(params.len());
    if let Some(dup) = params.iter().find(|p| !seen.insert(**p)) {
        return Err(InvalidParameters { name: (*dup).to_owned() });
    }
    Ok(params.join(", "))
}

impl CodeGen {
    /// Renders a function definition with the given `body`.
    ///
    /// ```rust
    /// # use cucumber_scaffold::codegen::CodeGen;
    /// let code = CodeGen::default()
    ///     .function("add", &["a", "b"], "return a + b")
    ///     .unwrap();
    ///
    /// assert_eq!(code, "def add(a, b):\n    return a + b\n");
    /// ```
    ///
    /// # Errors
    ///
    /// If any parameter name repeats.
    pub fn function<S: AsRef<str>>(
        &self,
        name: &str,
        params: &[S],
        body: &str,
    ) -> Result<String, InvalidParameters> {
        let params = function_params(params)?;
        Ok(self.block(&format!("def {name}({params})"), body))
    }

    /// Renders a `header:` line followed by the indented `body`.
    ///
    /// Whitespace-only lines of the `body` become empty ones, and an empty
    /// `body` becomes `pass`.
    pub(crate) fn block(&self, header: &str, body: &str) -> String {
        let body = if body.trim().is_empty() { "pass" } else { body };
        let mut out = format!("{header}:\n");
        out.push_str(&self.indent(body));
        out
    }

    /// Indents every non-blank line of the `text`, terminating each line with
    /// `\n`.
    pub(crate) fn indent(&self, text: &str) -> String {
        let pad = " ".repeat(self.config.indent);
        text.lines()
            .map(|l| {
                if l.trim().is_empty() {
                    "\n".to_owned()
                } else {
                    format!("{pad}{}\n", l.trim_end())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{function_params, InvalidParameters};
    use crate::codegen::{CodeGen, Config};

    #[test]
    fn joins_params() {
        assert_eq!(function_params(&["a", "b"]).unwrap(), "a, b");
        assert_eq!(function_params::<&str>(&[]).unwrap(), "");
    }

    #[test]
    fn rejects_duplicate_params() {
        assert_eq!(
            function_params(&["a", "b", "a"]),
            Err(InvalidParameters { name: "a".into() }),
        );
    }

    #[test]
    fn params_split_back_to_names() {
        let params = ["self", "step", "table"];
        let rendered = function_params(&params).unwrap();

        assert_eq!(rendered.split(", ").collect::<Vec<_>>(), params);
    }

    #[test]
    fn renders_function() {
        assert_eq!(
            CodeGen::default()
                .function("add", &["a", "b"], "return a + b")
                .unwrap(),
            "def add(a, b):\n    return a + b\n",
        );
    }

    #[test]
    fn normalizes_blank_body_lines() {
        let code = CodeGen::default()
            .function("f", &["x"], "y = x\n   \nreturn y")
            .unwrap();

        assert_eq!(code, "def f(x):\n    y = x\n\n    return y\n");
    }

    #[test]
    fn empty_body_becomes_pass() {
        assert_eq!(
            CodeGen::default().function("f", &["self"], "").unwrap(),
            "def f(self):\n    pass\n",
        );
    }

    #[test]
    fn honors_indent_width() {
        let codegen = CodeGen::new(Config { indent: 2, ..Config::default() });

        assert_eq!(
            codegen.function("f", &["self"], "return 1").unwrap(),
            "def f(self):\n  return 1\n",
        );
    }

    #[test]
    fn duplicate_params_fail_function() {
        assert!(CodeGen::default().function("f", &["a", "a"], "").is_err());
    }
}
