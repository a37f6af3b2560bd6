use serde::Deserialize;

/// PATCH body; `email` may be absent or null
#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}
