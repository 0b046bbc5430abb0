//! Classification result records.
//!
//! Plain owned data handed to alerting, history, and export.  Field names
//! serialize in the camelCase wire form downstream consumers of these
//! records expect (`signName`, `warningLevel`, `germanGTSRBClass`, …); the
//! Rust side keeps snake_case names and lets serde do the renaming.

use serde::{Deserialize, Serialize};
use tsr_core::{ClassId, SignCategory, WarningLevel};

/// One entry in the top-3 prediction list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name:       String,
    pub confidence: f64,
}

/// A classified sign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub sign_name:   String,
    /// Serializes as the category label string, e.g. `"Danger Warning"`.
    pub category:    SignCategory,
    /// Primary confidence in percent, 0–100.
    pub confidence:  f64,
    pub instruction: String,
    pub warning_level: WarningLevel,
    /// The benchmark class index, 0–42.
    #[serde(rename = "germanGTSRBClass")]
    pub german_gtsrb_class: ClassId,
    /// Primary prediction first, then two runners-up.
    pub top_predictions: Vec<Prediction>,
    /// Data-URL slot for upload flows; always `None` for simulated scans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "timestamp")]
    pub unix_time_secs: i64,
}
