//! Outbound meeting provider APIs.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::Error;

pub mod zoom;

use zoom::{CreateMeetingRequest, CreatedMeeting, MeetingDetails};

/// The meeting resource operations the domain needs from a provider.
///
/// Every call is authorized with the bearer token passed in; implementations
/// do not hold tokens of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingApi: Send + Sync {
    /// Create a meeting for the account owner.
    async fn create_meeting(
        &self,
        access_token: &SecretString,
        request: &CreateMeetingRequest,
    ) -> Result<CreatedMeeting, Error>;

    /// Fetch the details of an existing meeting.
    async fn get_meeting(
        &self,
        access_token: &SecretString,
        meeting_id: &str,
    ) -> Result<MeetingDetails, Error>;
}
