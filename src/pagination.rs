//! Lazy cursor pagination over [`StarGraph`] queries.
//!
//! A page is only requested when the stream is polled, so callers that stop
//! early never pay for the pages they skip.

use crate::error::{Result, StarNeighboursError};
use crate::graph::StarGraph;
use crate::models::{Page, RepoRef, Stargazer};
use futures::stream::{self, Stream};
use std::future::Future;

/// Page size of the `starredRepositories` connection used per user.
pub const STARRED_REPOS_PAGE_SIZE: u32 = 100;

enum Cursor {
    Start,
    After(String),
    Exhausted,
}

/// Turns a cursor-driven request into a stream of pages.
///
/// The stream ends once a page reports no next page or carries no cursor.
/// The first error is yielded and ends the stream.
pub fn paginate<'a, T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Page<T>>> + Send + 'a
where
    T: Send + 'a,
    F: FnMut(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    stream::try_unfold((fetch, Cursor::Start), |(mut fetch, cursor)| async move {
        let cursor = match cursor {
            Cursor::Start => None,
            Cursor::After(cursor) => Some(cursor),
            Cursor::Exhausted => return Ok::<_, StarNeighboursError>(None),
        };

        let page = fetch(cursor).await?;
        let next = match page.next_cursor() {
            Some(cursor) => Cursor::After(cursor.to_string()),
            None => Cursor::Exhausted,
        };

        Ok::<_, StarNeighboursError>(Some((page, (fetch, next))))
    })
}

/// Pages of the stargazers of `owner/name`.
pub fn stargazer_pages<'a, G>(
    graph: &'a G,
    owner: &'a str,
    name: &'a str,
    page_size: u32,
) -> impl Stream<Item = Result<Page<Stargazer>>> + Send + 'a
where
    G: StarGraph + ?Sized,
{
    paginate(move |cursor| graph.stargazers_page(owner, name, page_size, cursor))
}

/// Pages of the repositories starred by the user with `id`.
pub fn starred_repo_pages<'a, G>(
    graph: &'a G,
    id: &'a str,
    page_size: u32,
) -> impl Stream<Item = Result<Page<RepoRef>>> + Send + 'a
where
    G: StarGraph + ?Sized,
{
    paginate(move |cursor| graph.starred_repos_page(id, page_size, cursor))
}
