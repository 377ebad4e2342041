use crate::error::Result;
use crate::models::{NeighbourMap, Page, RepoRef, Stargazer};
use async_trait::async_trait;

/// The remote social graph, seen as three paginated queries.
///
/// Implementations own transport, authentication and error decoding. The
/// neighbour pipeline only ever talks to this trait.
#[async_trait]
pub trait StarGraph: Send + Sync {
    /// One page of the stargazers of `owner/name`, each with the number of
    /// repositories they have starred.
    async fn stargazers_page(
        &self,
        owner: &str,
        name: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<Stargazer>>;

    /// Starred repositories of many users in a single unpaged round trip,
    /// keyed by login in response order. Ids the remote cannot resolve are
    /// left out.
    async fn starred_repos_of_many(&self, ids: &[String]) -> Result<NeighbourMap>;

    /// One page of the repositories starred by the user with `id`.
    async fn starred_repos_page(
        &self,
        id: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<RepoRef>>;
}
