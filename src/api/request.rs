use serde::Deserialize;

/// body of POST /apply_action: an index into the current action menu
#[derive(Debug, Deserialize)]
pub struct ApplyAction {
    pub index: i64,
}
