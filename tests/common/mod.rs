#![allow(dead_code)]

use async_trait::async_trait;
use star_neighbours::error::{ErrorKind, Result, StarNeighboursError};
use star_neighbours::models::{NeighbourMap, Page, RepoRef, Stargazer};
use star_neighbours::StarGraph;
use std::collections::HashMap;
use std::sync::Mutex;

/// A request the fake graph received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    StargazerPage { cursor: Option<String> },
    Batch(Vec<String>),
    StarredPage { id: String, cursor: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailPoint {
    Stargazers,
    Batch,
    StarredPage,
}

/// In-memory social graph. Pages are cut with the requested page size and
/// cursors are plain offsets.
#[derive(Default)]
pub struct FakeGraph {
    stargazers: Vec<Stargazer>,
    users: HashMap<String, (String, Vec<RepoRef>)>,
    batch_page_limit: Option<usize>,
    failure: Option<(FailPoint, ErrorKind)>,
    calls: Mutex<Vec<Call>>,
}

pub fn stargazer(id: &str, login: &str, count: u32) -> Stargazer {
    Stargazer {
        id: id.to_string(),
        login: login.to_string(),
        starred_repos_count: count,
    }
}

pub fn repos(names: &[&str]) -> Vec<RepoRef> {
    names.iter().map(|name| RepoRef::from(*name)).collect()
}

/// `count` distinct repos named `prefix/0`, `prefix/1`, ...
pub fn numbered_repos(prefix: &str, count: usize) -> Vec<RepoRef> {
    (0..count)
        .map(|i| RepoRef::from(format!("{}/{}", prefix, i).as_str()))
        .collect()
}

impl FakeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stargazer of the target repo together with the repos they starred.
    pub fn with_stargazer(
        mut self,
        id: &str,
        login: &str,
        count: u32,
        starred: Vec<RepoRef>,
    ) -> Self {
        self.stargazers.push(stargazer(id, login, count));
        self.users.insert(id.to_string(), (login.to_string(), starred));
        self
    }

    /// Truncates each user's list in batched responses, like the remote's own page size.
    pub fn with_batch_page_limit(mut self, limit: usize) -> Self {
        self.batch_page_limit = Some(limit);
        self
    }

    pub fn failing_at(mut self, point: FailPoint, kind: ErrorKind) -> Self {
        self.failure = Some((point, kind));
        self
    }

    /// Forgets a user so batched lookups no longer resolve them.
    pub fn without_user(mut self, id: &str) -> Self {
        self.users.remove(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn batch_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Batch(ids) => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn starred_page_calls(&self, id: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::StarredPage { id: called, .. } if called == id))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, point: FailPoint) -> Result<()> {
        match self.failure {
            Some((at, kind)) if at == point => Err(error_of_kind(kind)),
            _ => Ok(()),
        }
    }
}

pub fn error_of_kind(kind: ErrorKind) -> StarNeighboursError {
    match kind {
        ErrorKind::NotFound => StarNeighboursError::NotFound(
            "Could not resolve to a Repository with the name 'octocat/missing'.".to_string(),
        ),
        ErrorKind::AuthFailure => StarNeighboursError::AuthFailure("Bad credentials".to_string()),
        ErrorKind::QueryFailure => {
            StarNeighboursError::QueryFailure("Something went wrong".to_string())
        }
        ErrorKind::Internal => StarNeighboursError::Config("broken".to_string()),
    }
}

fn page_of<T: Clone>(items: &[T], page_size: usize, cursor: Option<String>) -> Page<T> {
    let start: usize = cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
    let end = (start + page_size).min(items.len());
    let has_next_page = end < items.len();
    Page {
        items: items[start.min(end)..end].to_vec(),
        end_cursor: if has_next_page { Some(end.to_string()) } else { None },
        has_next_page,
    }
}

#[async_trait]
impl StarGraph for FakeGraph {
    async fn stargazers_page(
        &self,
        _owner: &str,
        _name: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<Stargazer>> {
        self.record(Call::StargazerPage { cursor: cursor.clone() });
        self.check(FailPoint::Stargazers)?;
        Ok(page_of(&self.stargazers, page_size as usize, cursor))
    }

    async fn starred_repos_of_many(&self, ids: &[String]) -> Result<NeighbourMap> {
        self.record(Call::Batch(ids.to_vec()));
        self.check(FailPoint::Batch)?;

        let mut resolved = NeighbourMap::new();
        for id in ids {
            if let Some((login, starred)) = self.users.get(id) {
                let limit = self.batch_page_limit.unwrap_or(starred.len());
                resolved.insert(login.clone(), starred.iter().take(limit).cloned().collect());
            }
        }
        Ok(resolved)
    }

    async fn starred_repos_page(
        &self,
        id: &str,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Page<RepoRef>> {
        self.record(Call::StarredPage {
            id: id.to_string(),
            cursor: cursor.clone(),
        });
        self.check(FailPoint::StarredPage)?;

        let starred = self
            .users
            .get(id)
            .map(|(_, starred)| starred.as_slice())
            .unwrap_or_default();
        Ok(page_of(starred, page_size as usize, cursor))
    }
}
