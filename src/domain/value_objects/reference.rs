//! `<first> <rest>` references as accepted on the command line

use thiserror::Error;

/// Error parsing a space-separated reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseReferenceError {
    #[error("expected '<{first}> <{second}>', got '{input}'")]
    MissingSeparator {
        first: &'static str,
        second: &'static str,
        input: String,
    },

    #[error("empty {field} in '{input}'")]
    Empty { field: &'static str, input: String },

    #[error("outputs destination must not be empty (use '-' for stdout)")]
    EmptyDestination,

    #[error("state location '{input}' is not an http(s) URL")]
    NotHttp { input: String },
}

/// Split on the first space; the second half keeps any further spaces.
pub(crate) fn split_reference<'a>(
    input: &'a str,
    first: &'static str,
    second: &'static str,
) -> Result<(&'a str, &'a str), ParseReferenceError> {
    let (head, tail) =
        input
            .split_once(' ')
            .ok_or_else(|| ParseReferenceError::MissingSeparator {
                first,
                second,
                input: input.to_string(),
            })?;
    if head.is_empty() {
        return Err(ParseReferenceError::Empty {
            field: first,
            input: input.to_string(),
        });
    }
    Ok((head, tail))
}
