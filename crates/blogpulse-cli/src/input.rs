//! Reading and decoding JSON input for the CLI.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Read the whole input, from `path` when given or standard input otherwise.
///
/// # Errors
///
/// Returns an error if the file or standard input cannot be read.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

/// Decode `raw` as `T`, naming `what` in the error.
///
/// # Errors
///
/// Returns an error if `raw` is not valid JSON for `T`.
pub(crate) fn parse<T: DeserializeOwned>(raw: &str, what: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("input is not a valid {what}"))
}

/// A single JSON object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}
