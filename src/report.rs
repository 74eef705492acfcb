use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fetch::FeedEvent;

/// How a fetch ended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOutcome {
    #[default]
    Finished,
    Error,
}

/// Summary of a single feed fetch, one row per request.
#[derive(Debug, Default, Serialize)]
pub struct FetchReport {
    pub timestamp: DateTime<Utc>,
    pub feed_id: Option<String>,
    pub feed_name: Option<String>,
    pub url: String,
    pub chunks: usize,
    pub bytes: usize,
    pub outcome: FetchOutcome,
    pub error_message: Option<String>,
}

impl FetchReport {
    /// Builds a report from the event sequence of one fetch.
    ///
    /// `Data` events are counted and sized; the terminal event decides the
    /// outcome. A sequence that was cut off before its terminal event is
    /// recorded as an error with no message.
    pub fn from_events(url: &str, events: &[FeedEvent]) -> Self {
        let mut report = FetchReport {
            timestamp: Utc::now(),
            url: url.to_string(),
            outcome: FetchOutcome::Error,
            ..Default::default()
        };

        for event in events {
            match event {
                FeedEvent::Data(chunk) => {
                    report.chunks += 1;
                    report.bytes += chunk.len();
                }
                FeedEvent::Finished => {
                    report.outcome = FetchOutcome::Finished;
                }
                FeedEvent::Error(message) => {
                    report.outcome = FetchOutcome::Error;
                    report.error_message = Some(message.clone());
                }
            }
        }

        report
    }

    /// Set feed metadata (id and name)
    pub fn with_feed_info(mut self, feed_id: &str, feed_name: &str) -> Self {
        self.feed_id = Some(feed_id.to_string());
        self.feed_name = Some(feed_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_from_events_finished() {
        let events = vec![
            FeedEvent::Data(Bytes::from_static(b"abcd")),
            FeedEvent::Data(Bytes::from_static(b"efghij")),
            FeedEvent::Finished,
        ];
        let report = FetchReport::from_events("https://example.com/feed", &events);

        assert_eq!(report.outcome, FetchOutcome::Finished);
        assert_eq!(report.chunks, 2);
        assert_eq!(report.bytes, 10);
        assert_eq!(report.error_message, None);
        assert_eq!(report.url, "https://example.com/feed");
    }

    #[test]
    fn test_from_events_error() {
        let events = vec![
            FeedEvent::Data(Bytes::from_static(b"partial")),
            FeedEvent::Error("connection reset".to_string()),
        ];
        let report = FetchReport::from_events("https://example.com/feed", &events);

        assert_eq!(report.outcome, FetchOutcome::Error);
        assert_eq!(report.chunks, 1);
        assert_eq!(report.bytes, 7);
        assert_eq!(report.error_message.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_from_events_empty_body() {
        let events = vec![FeedEvent::Finished];
        let report = FetchReport::from_events("https://example.com/feed", &events);

        assert_eq!(report.outcome, FetchOutcome::Finished);
        assert_eq!(report.chunks, 0);
        assert_eq!(report.bytes, 0);
    }

    #[test]
    fn test_from_events_no_terminal() {
        let events = vec![FeedEvent::Data(Bytes::from_static(b"x"))];
        let report = FetchReport::from_events("https://example.com/feed", &events);

        assert_eq!(report.outcome, FetchOutcome::Error);
        assert_eq!(report.error_message, None);
    }

    #[test]
    fn test_with_feed_info() {
        let report = FetchReport::from_events("https://example.com/feed", &[FeedEvent::Finished])
            .with_feed_info("ace", "A/C/E");

        assert_eq!(report.feed_id.as_deref(), Some("ace"));
        assert_eq!(report.feed_name.as_deref(), Some("A/C/E"));
    }
}
