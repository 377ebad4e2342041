use serde::{Deserialize, Serialize};

// GitHub GraphQL request/response structures

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: String,
    /// Field path the error is attached to, e.g. `["nodes", 1]`.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl GraphQlError {
    pub fn is_not_found(&self) -> bool {
        self.error_type.as_deref() == Some("NOT_FOUND")
    }

    /// First segment of `path`, the top-level field that failed.
    pub fn root_field(&self) -> Option<&str> {
        self.path.first().and_then(|segment| segment.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct OwnerLogin {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct StarredRepoNode {
    pub owner: OwnerLogin,
    pub name: String,
}

// StarredRepoCountByUsers

#[derive(Debug, Deserialize)]
pub struct StargazersData {
    pub repository: Option<RepositoryStargazers>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryStargazers {
    pub stargazers: Connection<StargazerNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargazerNode {
    pub id: String,
    pub login: String,
    pub starred_repositories: TotalCount,
}

// StarredRepoByUserIds

#[derive(Debug, Deserialize)]
pub struct UserNodesData {
    pub nodes: Vec<Option<UserStarsNode>>,
}

// StarredRepoByUserId

#[derive(Debug, Deserialize)]
pub struct UserNodeData {
    pub node: Option<UserStarsNode>,
}

/// Fields are optional because `... on User` leaves non-user nodes empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStarsNode {
    pub login: Option<String>,
    pub starred_repositories: Option<Connection<StarredRepoNode>>,
}
