use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub severity: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Incident {
    /// The attached image URL, if there is a usable one.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Body of `GET /incidents/all`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Incident>,
}

/// Body of `GET /incidents/{id}`.
///
/// `data` is `None` when the backend sends `null`, omits it, or sends
/// something that is not an incident record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_incident")]
    pub data: Option<Incident>,
}

impl IncidentResponse {
    /// The incident, but only when the backend reported success.
    pub fn found(&self) -> Option<&Incident> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }
}

fn lenient_incident<'de, D>(deserializer: D) -> Result<Option<Incident>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}
