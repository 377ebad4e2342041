use crate::error::{Result, StarNeighboursError};
use crate::graph::StarGraph;
use crate::models::{NeighbourMap, Page, RepoRef, Stargazer};
use crate::types::{
    Connection, GraphQlRequest, GraphQlResponse, StargazersData, StarredRepoNode, UserNodeData,
    UserNodesData,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const GRAPHQL_URL: &str = "https://api.github.com/graphql";

const STARGAZERS_QUERY: &str = r#"
query StarredRepoCountByUsers($owner: String!, $name: String!, $first: Int!, $cursor: String) {
  repository(owner: $owner, name: $name) {
    stargazers(first: $first, after: $cursor) {
      nodes {
        id
        login
        starredRepositories {
          totalCount
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
"#;

const STARRED_REPOS_BY_IDS_QUERY: &str = r#"
query StarredRepoByUserIds($ids: [ID!]!) {
  nodes(ids: $ids) {
    ... on User {
      login
      starredRepositories {
        nodes {
          owner {
            login
          }
          name
        }
      }
    }
  }
}
"#;

const STARRED_REPOS_BY_ID_QUERY: &str = r#"
query StarredRepoByUserId($id: ID!, $first: Int!, $cursor: String) {
  node(id: $id) {
    ... on User {
      login
      starredRepositories(first: $first, after: $cursor) {
        nodes {
          owner {
            login
          }
          name
        }
        pageInfo {
          endCursor
          hasNextPage
        }
      }
    }
  }
}
"#;

pub struct GitHubClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_endpoint(token, GRAPHQL_URL)
    }

    pub fn with_endpoint(token: String, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            StarNeighboursError::Config(format!("Invalid GraphQL endpoint {}: {}", endpoint, e))
        })?;

        let client = Client::builder()
            .user_agent(concat!("star-neighbours/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            endpoint,
        })
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                let error_text = response.text().await.unwrap_or_default();
                return Err(StarNeighboursError::AuthFailure(error_text));
            }
            StatusCode::FORBIDDEN => {
                let rate_limited = response
                    .headers()
                    .get("X-RateLimit-Remaining")
                    .and_then(|h| h.to_str().ok())
                    .map(|remaining| remaining == "0")
                    .unwrap_or(false);
                let error_text = response.text().await.unwrap_or_default();
                if rate_limited {
                    return Err(StarNeighboursError::QueryFailure(format!(
                        "API rate limit exceeded: {}",
                        error_text
                    )));
                }
                return Err(StarNeighboursError::AuthFailure(error_text));
            }
            status if !status.is_success() => {
                let error_text = response.text().await.unwrap_or_default();
                return Err(StarNeighboursError::QueryFailure(format!(
                    "GraphQL request failed with status {}: {}",
                    status, error_text
                )));
            }
            _ => {}
        }

        let body: GraphQlResponse<T> = response.json().await?;
        decode_response(body)
    }
}

/// Unwraps a GraphQL envelope, classifying its errors.
///
/// `NOT_FOUND` on the `repository` field means the target does not exist.
/// `NOT_FOUND` on `node`/`nodes` only marks users that could not be resolved;
/// their entries come back null and the rest of the data is kept.
pub fn decode_response<T>(response: GraphQlResponse<T>) -> Result<T> {
    if let Some(not_found) = response
        .errors
        .iter()
        .find(|e| e.is_not_found() && e.root_field() == Some("repository"))
    {
        return Err(StarNeighboursError::NotFound(not_found.message.clone()));
    }

    let messages: Vec<&str> = response
        .errors
        .iter()
        .filter(|e| !(e.is_not_found() && matches!(e.root_field(), Some("node" | "nodes"))))
        .map(|e| e.message.as_str())
        .collect();
    if !messages.is_empty() {
        return Err(StarNeighboursError::QueryFailure(messages.join("; ")));
    }

    response.data.ok_or_else(|| {
        StarNeighboursError::QueryFailure("GraphQL response carried no data".to_string())
    })
}

fn repo_refs(nodes: Vec<StarredRepoNode>) -> Vec<RepoRef> {
    nodes
        .into_iter()
        .map(|node| RepoRef::new(&node.owner.login, &node.name))
        .collect()
}

fn into_page<N, T>(connection: Connection<N>, convert: impl Fn(Vec<N>) -> Vec<T>) -> Page<T> {
    let (end_cursor, has_next_page) = match connection.page_info {
        Some(info) => (info.end_cursor, info.has_next_page),
        None => (None, false),
    };
    Page {
        items: convert(connection.nodes),
        end_cursor,
        has_next_page,
    }
}

pub fn stargazer_page_from(
    data: StargazersData,
    owner: &str,
    name: &str,
) -> Result<Page<Stargazer>> {
    let repository = data.repository.ok_or_else(|| {
        StarNeighboursError::NotFound(format!(
            "Could not resolve to a Repository with the name '{}/{}'.",
            owner, name
        ))
    })?;

    Ok(into_page(repository.stargazers, |nodes| {
        nodes
            .into_iter()
            .map(|node| Stargazer {
                id: node.id,
                login: node.login,
                starred_repos_count: node.starred_repositories.total_count,
            })
            .collect()
    }))
}

pub fn neighbour_map_from(data: UserNodesData) -> NeighbourMap {
    data.nodes
        .into_iter()
        .flatten()
        .filter_map(|node| {
            let login = node.login?;
            let repos = node
                .starred_repositories
                .map(|connection| repo_refs(connection.nodes))
                .unwrap_or_default();
            Some((login, repos))
        })
        .collect()
}

/// A missing or non-user node reads as an empty final page.
pub fn starred_repo_page_from(data: UserNodeData) -> Page<RepoRef> {
    match data.node.and_then(|node| node.starred_repositories) {
        Some(connection) => into_page(connection, repo_refs),
        None => Page {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: false,
        },
    }
}

#[async_trait]
impl StarGraph for GitHubClient {
    async fn stargazers_page(
        &self,
        owner: &str,
        name: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<Stargazer>> {
        debug!(owner, repo = name, ?cursor, "Requesting stargazer page");
        let data: StargazersData = self
            .execute(
                STARGAZERS_QUERY,
                json!({ "owner": owner, "name": name, "first": page_size, "cursor": cursor }),
            )
            .await?;
        stargazer_page_from(data, owner, name)
    }

    async fn starred_repos_of_many(&self, ids: &[String]) -> Result<NeighbourMap> {
        debug!(users = ids.len(), "Requesting starred repos for batch");
        let data: UserNodesData = self
            .execute(STARRED_REPOS_BY_IDS_QUERY, json!({ "ids": ids }))
            .await?;
        Ok(neighbour_map_from(data))
    }

    async fn starred_repos_page(
        &self,
        id: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<RepoRef>> {
        debug!(id, ?cursor, "Requesting starred repo page");
        let data: UserNodeData = self
            .execute(
                STARRED_REPOS_BY_ID_QUERY,
                json!({ "id": id, "first": page_size, "cursor": cursor }),
            )
            .await?;
        Ok(starred_repo_page_from(data))
    }
}
