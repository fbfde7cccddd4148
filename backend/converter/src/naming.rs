//! Artifact file names: `converted_<8 hex>_<YYYYMMDD_HHMMSS>.docx`.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

const TOKEN_LEN: usize = 8;

/// Builds the artifact name from a random token and a local timestamp.
pub fn artifact_name(token: &str, at: NaiveDateTime) -> String {
    format!("converted_{}_{}.docx", token, at.format("%Y%m%d_%H%M%S"))
}

/// Fresh artifact name for a conversion finishing now.
pub fn new_artifact_name() -> String {
    let token = Uuid::new_v4().simple().to_string();
    artifact_name(&token[..TOKEN_LEN], Local::now().naive_local())
}
