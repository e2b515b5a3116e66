use domain::gateway::zoom::MeetingId;
use domain::meeting::ScheduledMeeting;
use serde::Serialize;
use utoipa::ToSchema;

const MEETING_CREATED: &str = "Meeting created successfully.";

/// Body of a successful `POST /schedule-meeting`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduledMeetingResponse {
    #[schema(value_type = String, example = "85746065432")]
    meeting_id: MeetingId,
    #[schema(example = "https://zoom.us/j/85746065432")]
    meeting_link: String,
    #[schema(example = "Meeting created successfully.")]
    message: String,
}

impl From<ScheduledMeeting> for ScheduledMeetingResponse {
    fn from(meeting: ScheduledMeeting) -> Self {
        Self {
            meeting_id: meeting.meeting_id,
            meeting_link: meeting.meeting_link,
            message: MEETING_CREATED.to_string(),
        }
    }
}

/// Body of a successful `GET /get-meeting-link/{meeting_id}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeetingLinkResponse {
    #[schema(example = "https://zoom.us/j/85746065432")]
    meeting_link: String,
}

impl MeetingLinkResponse {
    pub(crate) fn new(meeting_link: String) -> Self {
        Self { meeting_link }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scheduled_meeting_response_keeps_numeric_id() {
        let response = ScheduledMeetingResponse::from(ScheduledMeeting {
            meeting_id: MeetingId::Numeric(85746065432),
            meeting_link: "https://zoom.us/j/85746065432".to_string(),
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "meetingId": 85746065432_u64,
                "meetingLink": "https://zoom.us/j/85746065432",
                "message": "Meeting created successfully."
            })
        );
    }
}
