use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::coerce;

/// Sentinel returned in place of a mentor name when a student has none.
pub const NO_MENTOR_ASSIGNED: &str = "No mentor assigned";

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentsRequest {
    /// Students to attach to the mentor; ids that are already assigned,
    /// unknown, or malformed are skipped. A single id may be sent bare.
    #[serde(default, deserialize_with = "coerce::string_list")]
    pub student_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMentorRequest {
    /// Mentor to assign, replacing any previous assignment
    pub mentor_id: String,
}

/// Outcome of a bulk assignment, as reported by the store's update-many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignResult {
    /// Whether the store accepted the update
    pub acknowledged: bool,
    /// Students that matched the filter (listed and currently unassigned)
    pub matched_count: u64,
    /// Students whose mentor was actually written
    pub modified_count: u64,
}

impl BulkAssignResult {
    pub fn empty() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentMentorResponse {
    /// Mentor name, or "No mentor assigned"; omitted when the assigned
    /// mentor has no name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentor: Option<String>,
}
