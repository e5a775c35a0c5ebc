use crate::errors::AppResult;
use crate::export::model::ChoreExport;

/// Serialize rows to a pretty-printed JSON array.
pub fn to_json_bytes(rows: &[ChoreExport]) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(rows)?)
}
