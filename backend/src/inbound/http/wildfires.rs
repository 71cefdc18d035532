//! Wildfire incident relay.
//!
//! ```text
//! GET /api/wildfires
//! ```
//!
//! A `200 OK` upstream list is forwarded verbatim. Any other non-error
//! upstream status is mirrored with a fixed message. Error statuses, transport
//! failures and malformed payloads become a `500`. Failure bodies are plain
//! text.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, get, web};
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::WildfireFeedError;
use crate::inbound::http::state::HttpState;

const UPSTREAM_STATUS_MESSAGE: &str = "Failed to fetch data from CAL FIRE";

/// HTTP mapping for wildfire feed failures.
#[derive(Debug)]
pub struct WildfireRelayError(WildfireFeedError);

impl From<WildfireFeedError> for WildfireRelayError {
    fn from(error: WildfireFeedError) -> Self {
        Self(error)
    }
}

impl std::fmt::Display for WildfireRelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            WildfireFeedError::Status { .. } => f.write_str(UPSTREAM_STATUS_MESSAGE),
            other => write!(f, "Error fetching wildfire data: {other}"),
        }
    }
}

impl ResponseError for WildfireRelayError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            WildfireFeedError::Status { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Relay the current wildfire incident list.
#[utoipa::path(
    get,
    path = "/api/wildfires",
    tags = ["wildfires"],
    responses(
        (status = 200, description = "Upstream incident list, verbatim",
            body = Vec<serde_json::Value>),
        (status = 204, description = "Non-200 upstream status mirrored",
            body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream error status, unreachable or malformed feed",
            body = String, content_type = "text/plain")
    )
)]
#[get("/wildfires")]
pub async fn list_wildfires(
    state: web::Data<HttpState>,
) -> Result<web::Json<Value>, WildfireRelayError> {
    match state.wildfires.incidents().await {
        Ok(incidents) => Ok(web::Json(incidents)),
        Err(error) => {
            warn!(kind = error.kind(), %error, "wildfire feed failed");
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::ports::{FixtureAirQualitySource, FixtureRegionSource, MockWildfireFeed};
    use crate::inbound::http::test_utils::http_state;

    async fn relay(feed: MockWildfireFeed) -> (StatusCode, Option<String>, Vec<u8>) {
        let state = http_state(
            FixtureRegionSource::default(),
            FixtureAirQualitySource::default(),
            feed,
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(list_wildfires)),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/api/wildfires").to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = actix_test::read_body(response).await;
        (status, content_type, body.to_vec())
    }

    #[actix_web::test]
    async fn incidents_are_relayed_verbatim() {
        let incidents = json!([{ "Name": "Bridge Fire", "AcresBurned": 56030, "Final": null }]);
        let mut feed = MockWildfireFeed::new();
        let relayed = incidents.clone();
        feed.expect_incidents().return_once(move || Ok(relayed));

        let (status, _, body) = relay(feed).await;

        assert_eq!(status, StatusCode::OK);
        let decoded: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(decoded, incidents);
    }

    #[rstest]
    #[case::no_content(204, StatusCode::NO_CONTENT)]
    #[case::non_authoritative(203, StatusCode::NON_AUTHORITATIVE_INFORMATION)]
    #[case::not_modified(304, StatusCode::NOT_MODIFIED)]
    #[case::out_of_range(42, StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn upstream_status_failures_are_mirrored(
        #[case] upstream: u16,
        #[case] expected: StatusCode,
    ) {
        let mut feed = MockWildfireFeed::new();
        feed.expect_incidents()
            .return_once(move || Err(WildfireFeedError::status(upstream)));

        let (status, content_type, body) = relay(feed).await;

        assert_eq!(status, expected);
        if expected != StatusCode::NO_CONTENT && expected != StatusCode::NOT_MODIFIED {
            assert_eq!(body, UPSTREAM_STATUS_MESSAGE.as_bytes());
            assert!(content_type.is_some_and(|value| value.starts_with("text/plain")));
        }
    }

    #[rstest]
    #[case::transport(WildfireFeedError::transport("connection refused"))]
    #[case::unavailable(WildfireFeedError::rejected(503_u16))]
    #[case::not_found(WildfireFeedError::rejected(404_u16))]
    #[case::decode(WildfireFeedError::decode("incident payload is not a list"))]
    #[actix_web::test]
    async fn other_failures_become_internal_errors(#[case] failure: WildfireFeedError) {
        let expected = format!("Error fetching wildfire data: {failure}");
        let mut feed = MockWildfireFeed::new();
        feed.expect_incidents().return_once(move || Err(failure));

        let (status, _, body) = relay(feed).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(String::from_utf8(body).expect("utf8 body"), expected);
    }

    #[actix_web::test]
    async fn error_statuses_carry_the_upstream_code_in_the_message() {
        let mut feed = MockWildfireFeed::new();
        feed.expect_incidents()
            .return_once(|| Err(WildfireFeedError::rejected(503_u16)));

        let (status, _, body) = relay(feed).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            String::from_utf8(body).expect("utf8 body"),
            "Error fetching wildfire data: request failed with status code 503"
        );
    }
}
