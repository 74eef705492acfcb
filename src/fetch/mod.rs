//! One-shot streaming fetch of a real-time feed.
//!
//! A fetch produces an ordered sequence of [`FeedEvent`]s: zero or more
//! `Data` chunks followed by exactly one terminal event, either `Finished`
//! or `Error`. Nothing is emitted after the terminal event. Transport
//! failures are reported through the sequence, never returned or raised.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::debug;

/// One observable step in the lifecycle of a feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A chunk of the response body arrived. The payload is opaque.
    Data(Bytes),
    /// The server closed the response body normally.
    Finished,
    /// The request could not be established or died mid-stream. Carries the
    /// transport error's display message.
    Error(String),
}

impl FeedEvent {
    /// Returns `true` for `Finished` and `Error`, the two events that end a
    /// fetch.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeedEvent::Data(_))
    }
}

/// Fetches `url` with one GET request and returns the full event sequence
/// once the stream has reached its terminal state.
///
/// The HTTP status code is not inspected: a 403 with an empty body still
/// ends in `Finished`.
pub async fn fetch_events<C: HttpClient>(client: &C, url: &str) -> Vec<FeedEvent> {
    let mut events = Vec::new();
    drive(client, url, |event| events.push(event)).await;
    events
}

/// Fetches `url` on a background task, delivering each event as it happens.
///
/// The channel preserves event order and closes after the terminal event,
/// so `recv().await == None` means the fetch is over and the connection has
/// been released. If the receiver is dropped early the remaining sends are
/// discarded and the body is still drained to completion.
pub fn spawn_fetch<C>(client: C, url: String) -> mpsc::UnboundedReceiver<FeedEvent>
where
    C: HttpClient + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        drive(&client, &url, |event| {
            let _ = tx.send(event);
        })
        .await;
    });
    rx
}

/// Runs the request to its terminal state, handing each event to `emit`.
async fn drive<C: HttpClient>(client: &C, url: &str, mut emit: impl FnMut(FeedEvent)) {
    let parsed = match url.parse::<reqwest::Url>() {
        Ok(parsed) => parsed,
        Err(e) => {
            emit(FeedEvent::Error(e.to_string()));
            return;
        }
    };
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = match client.execute(req).await {
        Ok(resp) => resp,
        Err(e) => {
            emit(FeedEvent::Error(e.to_string()));
            return;
        }
    };

    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                debug!(bytes = bytes.len(), "Chunk received");
                emit(FeedEvent::Data(bytes));
            }
            Err(e) => {
                emit(FeedEvent::Error(e.to_string()));
                return;
            }
        }
    }

    emit(FeedEvent::Finished);
}
