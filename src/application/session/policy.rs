// SPDX-License-Identifier: MPL-2.0
//! Policies governing overlapping requests.

use serde::{Deserialize, Serialize};

/// How responses to overlapping requests are applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request is applied.
    #[default]
    LatestOnly,
    /// Whichever response arrives last is applied, even if it answers an
    /// older request.
    LastWriterWins,
}

/// What happens to the displayed results while a new fetch is pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StaleResults {
    /// Previous results stay in memory during loading and after a failure.
    #[default]
    Keep,
    /// Previous results are dropped as soon as a fetch starts.
    Clear,
}
