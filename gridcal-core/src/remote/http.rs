//! HTTP implementation of the event store contract.
//!
//! Thin REST client over the hosted data service: one request per call, no
//! retry, no cancellation of in-flight requests. Failed responses decode the
//! store's error body and surface as [`GridCalError::Store`].

use async_trait::async_trait;

use super::EventStore;
use super::protocol::{ErrorResponse, EVENTS_TABLE, EventPayload, EventRecord};
use crate::config::Config;
use crate::error::{GridCalError, GridCalResult};
use crate::event::{Event, EventDraft};

pub struct HttpStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        HttpStore {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store_url.clone(), config.api_key.clone())
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, EVENTS_TABLE)
    }

    fn row_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, EVENTS_TABLE, id)
    }

    /// Decode the store's error body, falling back to the HTTP status.
    async fn store_error(resp: reqwest::Response) -> GridCalError {
        let status = resp.status();
        match resp.json::<ErrorResponse>().await {
            Ok(body) => GridCalError::Store(body.error),
            Err(_) => GridCalError::Store(format!("store returned {status}")),
        }
    }
}

#[async_trait]
impl EventStore for HttpStore {
    async fn list_all(&self) -> GridCalResult<Vec<Event>> {
        let resp = self
            .http
            .get(self.table_url())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::store_error(resp).await);
        }

        let records: Vec<EventRecord> = resp.json().await?;
        records.into_iter().map(EventRecord::into_event).collect()
    }

    async fn create(&self, draft: &EventDraft) -> GridCalResult<Event> {
        let resp = self
            .http
            .post(self.table_url())
            .bearer_auth(&self.api_key)
            .json(&EventPayload::from(draft))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::store_error(resp).await);
        }

        let record: EventRecord = resp.json().await?;
        record.into_event()
    }

    async fn update(&self, id: i64, draft: &EventDraft) -> GridCalResult<Event> {
        let resp = self
            .http
            .patch(self.row_url(id))
            .bearer_auth(&self.api_key)
            .json(&EventPayload::from(draft))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::store_error(resp).await);
        }

        let record: EventRecord = resp.json().await?;
        record.into_event()
    }

    async fn delete(&self, id: i64) -> GridCalResult<()> {
        let resp = self
            .http
            .delete(self.row_url(id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::store_error(resp).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft {
            title: "Trip".into(),
            start: date(2024, 6, 10),
            end: date(2024, 6, 13),
            all_day: true,
        }
    }

    #[tokio::test]
    async fn list_all_parses_rows() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendar"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Standup", "start": "2024-06-10", "end": "2024-06-10", "all_day": false},
                {"id": 2, "title": "Trip", "start": "2024-06-10", "end": "2024-06-13", "all_day": true},
            ])))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        let events = store.list_all().await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[1].end, date(2024, 6, 13));
    }

    #[tokio::test]
    async fn create_posts_payload_and_returns_row() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calendar"))
            .and(body_json(json!({
                "title": "Trip", "start": "2024-06-10", "end": "2024-06-13", "all_day": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!(
                {"id": 9, "title": "Trip", "start": "2024-06-10", "end": "2024-06-13", "all_day": true}
            )))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        let event = store.create(&draft()).await.unwrap();

        assert_eq!(event.id, 9);
        assert_eq!(event.duration_days(), 4);
    }

    #[tokio::test]
    async fn update_patches_the_row() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/calendar/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 9, "title": "Trip", "start": "2024-06-10", "end": "2024-06-13", "all_day": true}
            )))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        let event = store.update(9, &draft()).await.unwrap();
        assert_eq!(event.id, 9);
    }

    #[tokio::test]
    async fn delete_hits_the_row_url() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/calendar/9"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        assert!(store.delete(9).await.is_ok());
    }

    #[tokio::test]
    async fn store_error_body_surfaces_as_store_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendar"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"error": "permission denied"})),
            )
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "bad-key");
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, GridCalError::Store(msg) if msg == "permission denied"));
    }

    #[tokio::test]
    async fn non_json_error_falls_back_to_status() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/calendar/5"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        let err = store.delete(5).await.unwrap_err();
        assert!(matches!(err, GridCalError::Store(msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn malformed_row_is_a_date_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Bad", "start": "June 10", "end": "2024-06-10", "all_day": false},
            ])))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri(), "test-key");
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, GridCalError::DateParse(s) if s == "June 10"));
    }
}
