use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::coerce;

/// A student record. `mentor` is a weak reference to a mentor id; nothing
/// guarantees the mentor still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentor: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[serde(default, deserialize_with = "coerce::optional_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text", skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_flag", skip_serializing_if = "Option::is_none")]
    pub fees_paid: Option<bool>,
}

impl Student {
    /// A freshly created student never has a mentor.
    pub fn from_fields(id: Uuid, fields: CreateStudent) -> Self {
        Self {
            id,
            name: fields.name,
            primary_language: fields.primary_language,
            email: fields.email,
            location: fields.location,
            fees_paid: fields.fees_paid,
            mentor: None,
        }
    }
}
