//! Engine JSON reports
//!
//! Parses what `pulumi stack history --json` and `pulumi stack output
//! --json` print.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::{OutputValue, RunOutputs};
use crate::domain::value_objects::ChangeSummary;

/// What `pulumi stack output --json` prints for a secret without `--show-secrets`
const SECRET_PLACEHOLDER: &str = "[secret]";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEntry {
    #[serde(default)]
    resource_changes: BTreeMap<String, u64>,
}

/// Change summary of the most recent history entry
///
/// An empty history yields an empty summary.
pub fn change_summary(history_json: &str) -> serde_json::Result<ChangeSummary> {
    let entries: Vec<HistoryEntry> = serde_json::from_str(history_json)?;
    Ok(entries
        .into_iter()
        .next()
        .map(|entry| ChangeSummary::from(entry.resource_changes))
        .unwrap_or_default())
}

/// Combine the revealed and the masked outputs listings
///
/// A value is secret when the masked listing shows the placeholder for it.
pub fn outputs(revealed_json: &str, masked_json: &str) -> serde_json::Result<RunOutputs> {
    let revealed: BTreeMap<String, serde_json::Value> = serde_json::from_str(revealed_json)?;
    let masked: BTreeMap<String, serde_json::Value> = serde_json::from_str(masked_json)?;

    Ok(revealed
        .into_iter()
        .map(|(name, value)| {
            let secret = masked
                .get(&name)
                .and_then(|v| v.as_str())
                .is_some_and(|v| v == SECRET_PLACEHOLDER);
            (name, OutputValue { value, secret })
        })
        .collect())
}
