use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /schedule-meeting`.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ScheduleParams {
    /// Meeting topic
    #[schema(value_type = String, example = "Weekly sync")]
    pub(crate) topic: Option<Value>,
    /// Start time, forwarded to the provider as given
    #[schema(value_type = String, example = "2026-11-02T15:00:00Z")]
    pub(crate) start_time: Option<Value>,
    /// Duration in minutes, forwarded to the provider as given
    #[schema(value_type = u32, example = 30)]
    pub(crate) duration: Option<Value>,
    /// Participant identifiers. Must be a non-empty array.
    #[schema(value_type = Vec<String>, example = json!(["ana@example.com"]))]
    pub(crate) participants: Option<Value>,
}
