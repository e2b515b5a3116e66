use crate::params::meeting::ScheduleParams;
use crate::response::meeting::{MeetingLinkResponse, ScheduledMeetingResponse};
use crate::response::ErrorResponse;
use crate::{AppState, Error};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::error::Error as DomainError;
use domain::meeting::{MeetingRequest, INVALID_MEETING_REQUEST};
use log::*;

/// POST schedule a meeting and return its join link
#[utoipa::path(
    post,
    path = "/schedule-meeting",
    request_body = ScheduleParams,
    responses(
        (status = 200, description = "Meeting created successfully", body = ScheduledMeetingResponse),
        (status = 400, description = "Missing or invalid input", body = ErrorResponse),
        (status = 500, description = "The meeting provider call failed", body = ErrorResponse),
    )
)]
pub async fn schedule(
    State(app_state): State<AppState>,
    payload: Result<Json<ScheduleParams>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(params) = payload.map_err(|rejection| {
        debug!("Unreadable schedule-meeting body: {rejection}");
        match rejection {
            // A body that is not a JSON object, or not declared as JSON, carries no fields
            JsonRejection::JsonDataError(_) | JsonRejection::MissingJsonContentType(_) => {
                DomainError::validation(INVALID_MEETING_REQUEST)
            }
            rejection => DomainError::validation(&rejection.body_text()),
        }
    })?;

    debug!("POST Schedule meeting: {params:?}");

    let request = MeetingRequest::new(
        params.topic,
        params.start_time,
        params.duration,
        params.participants,
    )?;

    let meeting = app_state.meeting_gateway.schedule_meeting(&request).await?;

    info!("Scheduled meeting {}", meeting.meeting_id);

    Ok(Json(ScheduledMeetingResponse::from(meeting)))
}

/// GET the join link of an existing meeting
#[utoipa::path(
    get,
    path = "/get-meeting-link/{meeting_id}",
    params(
        ("meeting_id" = String, Path, description = "Provider meeting ID"),
    ),
    responses(
        (status = 200, description = "Join link of the meeting", body = MeetingLinkResponse),
        (status = 400, description = "Meeting ID is missing", body = ErrorResponse),
        (status = 500, description = "The meeting provider call failed", body = ErrorResponse),
    )
)]
pub async fn get_meeting_link(
    State(app_state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Meeting link for: {meeting_id}");

    let meeting_link = app_state
        .meeting_gateway
        .get_meeting_link(&meeting_id)
        .await?;

    Ok(Json(MeetingLinkResponse::new(meeting_link)))
}

/// GET without a meeting ID segment
pub async fn get_meeting_link_without_id(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let meeting_link = app_state.meeting_gateway.get_meeting_link("").await?;

    Ok(Json(MeetingLinkResponse::new(meeting_link)))
}
