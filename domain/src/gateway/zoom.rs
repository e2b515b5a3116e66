//! Zoom meetings API client.
//!
//! This module provides an HTTP client for creating Zoom meetings and
//! reading back their details.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use crate::gateway::MeetingApi;
use async_trait::async_trait;
use log::*;
use meeting_auth::http::error_payload;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Zoom meeting type for a meeting scheduled at a fixed start time.
const SCHEDULED_MEETING_TYPE: u8 = 2;

/// Provider-assigned meeting identifier.
///
/// Zoom issues numeric ids; textual ids are accepted as well and echoed
/// back in the same JSON shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeetingId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeetingId::Numeric(id) => write!(f, "{id}"),
            MeetingId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// Zoom meeting settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
}

/// Request to create a Zoom meeting.
///
/// Caller-supplied fields are forwarded exactly as they were received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMeetingRequest {
    pub topic: Value,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: Value,
    pub duration: Value,
    pub settings: MeetingSettings,
}

impl CreateMeetingRequest {
    /// A scheduled meeting with host and participant video on.
    pub fn scheduled(topic: Value, start_time: Value, duration: Value) -> Self {
        Self {
            topic,
            meeting_type: SCHEDULED_MEETING_TYPE,
            start_time,
            duration,
            settings: MeetingSettings {
                host_video: true,
                participant_video: true,
            },
        }
    }
}

/// Response from creating a Zoom meeting
#[derive(Debug, Deserialize)]
pub struct CreatedMeeting {
    pub id: MeetingId,
}

/// The part of Zoom's meeting details this service reads
#[derive(Debug, Deserialize)]
pub struct MeetingDetails {
    pub join_url: String,
}

/// Zoom meetings API client
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new Zoom client against the given API base URL
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
    ) -> Result<T, Error> {
        let response = request.send().await.map_err(|e| {
            warn!("Failed to {action}: {:?}", e);
            Error::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                warn!("Failed to parse Zoom response to {action}: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Upstream(
                        Value::String("Invalid response from Zoom API".to_string()),
                    )),
                }
            })
        } else {
            let payload = error_payload(response).await;
            warn!("Zoom API error ({status}) trying to {action}: {payload}");
            Err(Error::upstream(payload))
        }
    }
}

#[async_trait]
impl MeetingApi for Client {
    async fn create_meeting(
        &self,
        access_token: &SecretString,
        request: &CreateMeetingRequest,
    ) -> Result<CreatedMeeting, Error> {
        let url = format!("{}/users/me/meetings", self.base_url);

        debug!("Creating Zoom meeting: {}", request.topic);

        let meeting: CreatedMeeting = self
            .send(
                self.client
                    .post(&url)
                    .bearer_auth(access_token.expose_secret())
                    .json(request),
                "create Zoom meeting",
            )
            .await?;

        info!("Created Zoom meeting: {}", meeting.id);
        Ok(meeting)
    }

    async fn get_meeting(
        &self,
        access_token: &SecretString,
        meeting_id: &str,
    ) -> Result<MeetingDetails, Error> {
        let url = format!(
            "{}/meetings/{}",
            self.base_url,
            urlencoding::encode(meeting_id)
        );

        debug!("Fetching Zoom meeting: {meeting_id}");

        self.send(
            self.client
                .get(&url)
                .bearer_auth(access_token.expose_secret()),
            "fetch Zoom meeting",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn token() -> SecretString {
        SecretString::new("T1".to_string())
    }

    fn weekly_sync() -> CreateMeetingRequest {
        CreateMeetingRequest::scheduled(
            json!("Weekly sync"),
            json!("2026-11-02T15:00:00Z"),
            json!(30),
        )
    }

    #[tokio::test]
    async fn test_create_meeting_sends_scheduled_meeting() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/users/me/meetings")
            .match_header("authorization", "Bearer T1")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "topic": "Weekly sync",
                "type": 2,
                "start_time": "2026-11-02T15:00:00Z",
                "duration": 30,
                "settings": {
                    "host_video": true,
                    "participant_video": true
                }
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(json!({"id": 85746065432_u64, "topic": "Weekly sync"}).to_string())
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &server.url());
        let request = weekly_sync();
        let meeting = client.create_meeting(&token(), &request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(meeting.id, MeetingId::Numeric(85746065432));
    }

    #[tokio::test]
    async fn test_create_meeting_forwards_values_as_received() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/users/me/meetings")
            .match_body(Matcher::Json(json!({
                "topic": 42,
                "type": 2,
                "start_time": "2026-11-02T15:00:00Z",
                "duration": "45.5",
                "settings": {
                    "host_video": true,
                    "participant_video": true
                }
            })))
            .with_status(201)
            .with_body(json!({"id": 1}).to_string())
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &server.url());
        let request = CreateMeetingRequest::scheduled(
            json!(42),
            json!("2026-11-02T15:00:00Z"),
            json!("45.5"),
        );
        client.create_meeting(&token(), &request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_meeting_error_carries_provider_payload() {
        let mut server = Server::new_async().await;
        let body = json!({"code": 124, "message": "Invalid access token."});

        let _mock = server
            .mock("POST", "/users/me/meetings")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &server.url());
        let request = weekly_sync();
        let err = client.create_meeting(&token(), &request).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Upstream(body))
        );
    }

    #[tokio::test]
    async fn test_create_meeting_without_id_is_invalid_response() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/users/me/meetings")
            .with_status(201)
            .with_body(json!({"topic": "Weekly sync"}).to_string())
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &server.url());
        let request = weekly_sync();
        let err = client.create_meeting(&token(), &request).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Upstream(json!(
                "Invalid response from Zoom API"
            )))
        );
        assert!(err.source.is_some());
    }

    #[tokio::test]
    async fn test_get_meeting_returns_join_url() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/meetings/123")
            .match_header("authorization", "Bearer T1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"id": "123", "join_url": "https://zoom.us/j/123"}).to_string())
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &format!("{}/", server.url()));
        let details = client.get_meeting(&token(), "123").await.unwrap();

        mock.assert_async().await;
        assert_eq!(details.join_url, "https://zoom.us/j/123");
    }

    #[tokio::test]
    async fn test_get_meeting_not_found_text_body() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/meetings/999")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = Client::new(reqwest::Client::new(), &server.url());
        let err = client.get_meeting(&token(), "999").await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Upstream(json!("Not Found")))
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_upstream_error() {
        let client = Client::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = client.get_meeting(&token(), "123").await.unwrap_err();

        match err.error_kind {
            DomainErrorKind::External(ExternalErrorKind::Upstream(payload)) => {
                assert!(payload.is_string())
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_meeting_id_display_and_serialization() {
        assert_eq!(MeetingId::Numeric(123).to_string(), "123");
        assert_eq!(MeetingId::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(serde_json::to_value(MeetingId::Numeric(123)).unwrap(), json!(123));
        assert_eq!(
            serde_json::to_value(MeetingId::Text("123".to_string())).unwrap(),
            json!("123")
        );
    }
}
