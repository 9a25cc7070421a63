use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A static catalog entry — reference data, never user-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exercise {
    pub name: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub illustration: String,
}
