//! Lazy cursor pagination over listing endpoints.
//!
//! A listing endpoint takes an optional cursor and answers with a page of
//! items plus the cursor for the next page. [`paginate`] turns that into one
//! flat, pull-driven stream: nothing is fetched until the consumer asks for
//! an element beyond the buffered page, and exactly one request is in flight
//! at a time.

use futures::{stream, Stream, StreamExt};
use std::future::Future;
use tracing::warn;

/// Pagination position.
///
/// Three distinct states: "no cursor sent yet" and "no more pages" are
/// different things, and overloading one nullable token with both invites
/// duplicate or skipped pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// No request issued yet; the first call carries no cursor.
    Initial,
    /// Token returned by the previous page.
    Continuing(String),
    /// The remote signalled completion; no further requests.
    Done,
}

impl Cursor {
    /// Next state after a page that returned `next` as its cursor.
    pub fn advance(next: Option<String>) -> Self {
        match next {
            Some(token) => Cursor::Continuing(token),
            None => Cursor::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Cursor::Done)
    }
}

/// One page of a listing response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the next page. Absent means the listing is exhausted.
    pub next_cursor: Option<String>,
    /// Advisory only; `next_cursor` presence is what decides termination.
    pub has_more: Option<bool>,
}

/// Flatten a cursor-driven listing into a lazy stream of items.
///
/// `fetch` is invoked with `None` first, then with each returned cursor
/// until a page comes back without one. A failed fetch ends the stream
/// without yielding anything further: items already handed to the consumer
/// cannot be taken back, so the boundary degrades gracefully instead of
/// raising mid-stream. The swallowed error is recorded as a `warn!` event.
/// Streams are not restartable; build a new one to list again.
pub fn paginate<'a, T, F, Fut>(fetch: F) -> impl Stream<Item = T> + 'a
where
    T: 'a,
    F: FnMut(Option<String>) -> Fut + 'a,
    Fut: Future<Output = crate::Result<Page<T>>> + 'a,
{
    stream::unfold((Cursor::Initial, fetch), |(cursor, mut fetch)| async move {
        let token = match cursor {
            Cursor::Initial => None,
            Cursor::Continuing(token) => Some(token),
            Cursor::Done => return None,
        };
        match fetch(token).await {
            Ok(page) => {
                let next = Cursor::advance(page.next_cursor);
                Some((stream::iter(page.items), (next, fetch)))
            }
            Err(err) => {
                warn!(error = %err, "pagination terminated by error");
                None
            }
        }
    })
    .flatten()
}
