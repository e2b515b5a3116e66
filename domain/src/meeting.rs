//! Meeting scheduling operations.
//!
//! [`Gateway`] combines a [`TokenProvider`] with a [`MeetingApi`]. Each
//! operation obtains a fresh access token before talking to the meeting API;
//! tokens are never reused across operations.

use crate::error::Error;
use crate::gateway::zoom::{self, CreateMeetingRequest, MeetingId};
use crate::gateway::MeetingApi;
use log::*;
use meeting_auth::credentials::ClientCredentials;
use meeting_auth::http::HttpClientBuilder;
use meeting_auth::oauth::providers::zoom as zoom_oauth;
use meeting_auth::oauth::TokenProvider;
use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;
use service::config::Config;
use std::sync::Arc;

pub const INVALID_MEETING_REQUEST: &str =
    "Invalid input: topic, start_time, duration, and an array of participants are required.";

pub const MEETING_ID_REQUIRED: &str = "Meeting ID is required.";

/// A validated request to schedule a meeting.
///
/// Field values are kept as the caller sent them and forwarded unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRequest {
    topic: Value,
    start_time: Value,
    duration: Value,
    participants: Vec<Value>,
}

impl MeetingRequest {
    /// Validates raw caller input.
    ///
    /// `topic`, `start_time` and `duration` must be present and truthy, and
    /// `participants` a non-empty JSON array.
    pub fn new(
        topic: Option<Value>,
        start_time: Option<Value>,
        duration: Option<Value>,
        participants: Option<Value>,
    ) -> Result<Self, Error> {
        let topic = topic.filter(is_truthy);
        let start_time = start_time.filter(is_truthy);
        let duration = duration.filter(is_truthy);
        let participants = match participants {
            Some(Value::Array(participants)) if !participants.is_empty() => Some(participants),
            _ => None,
        };

        match (topic, start_time, duration, participants) {
            (Some(topic), Some(start_time), Some(duration), Some(participants)) => Ok(Self {
                topic,
                start_time,
                duration,
                participants,
            }),
            _ => {
                debug!("Rejecting invalid meeting request");
                Err(Error::validation(INVALID_MEETING_REQUEST))
            }
        }
    }

    pub fn topic(&self) -> &Value {
        &self.topic
    }

    pub fn start_time(&self) -> &Value {
        &self.start_time
    }

    pub fn duration(&self) -> &Value {
        &self.duration
    }

    /// Participants as supplied by the caller. They are not sent to the
    /// provider when the meeting is created.
    pub fn participants(&self) -> &[Value] {
        &self.participants
    }
}

// null, false, 0 and "" are falsy. Every other JSON value, including empty
// arrays and objects, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A meeting created upstream along with its join link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledMeeting {
    pub meeting_id: MeetingId,
    pub meeting_link: String,
}

/// Schedules meetings and looks up join links through a meeting provider.
pub struct Gateway {
    token_provider: Arc<dyn TokenProvider>,
    meeting_api: Arc<dyn MeetingApi>,
}

impl Gateway {
    pub fn new(token_provider: Arc<dyn TokenProvider>, meeting_api: Arc<dyn MeetingApi>) -> Self {
        Self {
            token_provider,
            meeting_api,
        }
    }

    /// Builds a Zoom-backed gateway from the application configuration.
    ///
    /// Fails with a config error when any of the Zoom credentials is missing.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let credentials = zoom_credentials(config)?;

        let mut builder = HttpClientBuilder::new();
        if let Some(timeout) = config.http_timeout() {
            builder = builder.with_timeout(timeout);
        }
        let http_client = builder.build()?;

        info!(
            "Using Zoom OAuth at {} and Zoom API at {}",
            config.zoom_oauth_base_url(),
            config.zoom_api_base_url()
        );

        Ok(Self::new(
            Arc::new(zoom_oauth::Provider::new(
                credentials,
                config.zoom_oauth_base_url(),
                http_client.clone(),
            )),
            Arc::new(zoom::Client::new(http_client, config.zoom_api_base_url())),
        ))
    }

    /// Creates a scheduled meeting and returns its id and join link.
    ///
    /// The meeting is created first and its join link fetched in a second
    /// call. If that second call fails the meeting still exists upstream.
    pub async fn schedule_meeting(&self, request: &MeetingRequest) -> Result<ScheduledMeeting, Error> {
        let tokens = self.token_provider.access_token().await?;

        let create_request = CreateMeetingRequest::scheduled(
            request.topic().clone(),
            request.start_time().clone(),
            request.duration().clone(),
        );
        let created = self
            .meeting_api
            .create_meeting(&tokens.access_token, &create_request)
            .await?;

        let details = self
            .meeting_link(&tokens.access_token, &created.id.to_string())
            .await
            .inspect_err(|_| {
                warn!(
                    "Zoom meeting {} was created but its join link could not be fetched",
                    created.id
                )
            })?;

        Ok(ScheduledMeeting {
            meeting_id: created.id,
            meeting_link: details,
        })
    }

    /// Returns the join link of an existing meeting.
    pub async fn get_meeting_link(&self, meeting_id: &str) -> Result<String, Error> {
        if meeting_id.is_empty() {
            return Err(Error::validation(MEETING_ID_REQUIRED));
        }

        let tokens = self.token_provider.access_token().await?;
        self.meeting_link(&tokens.access_token, meeting_id).await
    }

    async fn meeting_link(
        &self,
        access_token: &SecretString,
        meeting_id: &str,
    ) -> Result<String, Error> {
        let details = self.meeting_api.get_meeting(access_token, meeting_id).await?;
        Ok(details.join_url)
    }
}

fn zoom_credentials(config: &Config) -> Result<ClientCredentials, Error> {
    let require = |value: Option<String>, name: &str| {
        value.filter(|v| !v.is_empty()).ok_or_else(|| {
            error!("{name} is not set");
            Error::config(&format!("{name} is not set"))
        })
    };

    Ok(ClientCredentials::new(
        require(config.zoom_client_id(), "ZOOM_CLIENT_ID")?,
        SecretString::new(require(config.zoom_client_secret(), "ZOOM_CLIENT_SECRET")?),
        require(config.zoom_account_id(), "ZOOM_ACCOUNT_ID")?,
    ))
}
