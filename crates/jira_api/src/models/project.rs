use serde::Deserialize;

/// Project payload returned by the project endpoint. Only consumed as a
/// login probe, so everything beyond `key` is optional.
#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
