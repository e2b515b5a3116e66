use crate::{
    controller::{health_check_controller, meeting_controller},
    params, response, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Meeting Scheduler API"
        ),
        paths(
            health_check_controller::health_check,
            meeting_controller::schedule,
            meeting_controller::get_meeting_link,
        ),
        components(
            schemas(
                params::meeting::ScheduleParams,
                response::ErrorResponse,
                response::meeting::ScheduledMeetingResponse,
                response::meeting::MeetingLinkResponse,
            )
        ),
        tags(
            (name = "meeting_scheduler_rs", description = "Schedule meetings and look up their join links")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(meeting_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn meeting_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/schedule-meeting", post(meeting_controller::schedule))
        .route(
            "/get-meeting-link/{meeting_id}",
            get(meeting_controller::get_meeting_link),
        )
        // A bare or trailing-slash path has no ID segment to extract
        .route(
            "/get-meeting-link",
            get(meeting_controller::get_meeting_link_without_id),
        )
        .route(
            "/get-meeting-link/",
            get(meeting_controller::get_meeting_link_without_id),
        )
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use domain::meeting::Gateway;
    use service::config::Config;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::try_parse_from([
            "meeting_scheduler_rs",
            "--zoom-client-id",
            "client-abc",
            "--zoom-client-secret",
            "super-secret",
            "--zoom-account-id",
            "account-xyz",
        ])
        .unwrap();
        let gateway = Gateway::from_config(&config).unwrap();

        define_routes(AppState::new(config, gateway))
    }

    #[tokio::test]
    async fn test_health_check_responds() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"healthy");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(document["paths"]["/schedule-meeting"]["post"].is_object());
        assert!(document["paths"]["/get-meeting-link/{meeting_id}"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/meetings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
