//! Batch Error Aggregation
//!
//! Runs every attempt of a batch regardless of earlier failures, then
//! reports either success or one error listing each attempt's outcome.

use std::fmt;

/// Outcome of one attempt within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub label: String,
    pub error: Option<String>,
}

impl Attempt {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// A batch in which at least one attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    pub what: &'static str,
    pub attempts: Vec<Attempt>,
}

impl BatchError {
    pub fn failures(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| !a.succeeded())
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn total(&self) -> usize {
        self.attempts.len()
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} {} attempts failed",
            self.failed_count(),
            self.total(),
            self.what
        )?;
        for attempt in &self.attempts {
            match &attempt.error {
                Some(error) => write!(f, "\n  - {}: {}", attempt.label, error)?,
                None => write!(f, "\n  - {}: ok", attempt.label)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}

/// Attempt every item, then fail with all the errors if any attempt failed
///
/// `label` names an item in the report; it must not leak secret values.
pub fn collect_all<T, E, L, F>(
    what: &'static str,
    items: &[T],
    label: L,
    mut attempt: F,
) -> Result<(), BatchError>
where
    E: fmt::Display,
    L: Fn(&T) -> String,
    F: FnMut(&T) -> Result<(), E>,
{
    let attempts: Vec<Attempt> = items
        .iter()
        .map(|item| Attempt {
            label: label(item),
            error: attempt(item).err().map(|e| e.to_string()),
        })
        .collect();

    if attempts.iter().all(Attempt::succeeded) {
        Ok(())
    } else {
        Err(BatchError { what, attempts })
    }
}
