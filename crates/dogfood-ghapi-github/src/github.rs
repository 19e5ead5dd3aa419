//! GitHub adapter

use async_trait::async_trait;
use dogfood_config::Config;
use dogfood_ghapi_interface::{
    types::{GhCheckRun, GhGitRef, GhPullRequest, GhRefLookup},
    ApiService, Result,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const PER_PAGE: usize = 100;

// Unreserved characters from RFC 3986 stay as-is inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a git reference for use in an URL path, keeping `/` separators.
fn encode_reference(reference: &str) -> String {
    reference
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Serialize)]
struct PageQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    per_page: usize,
    page: usize,
}

impl<'a> PageQuery<'a> {
    fn new(page: usize) -> Self {
        Self {
            state: None,
            per_page: PER_PAGE,
            page,
        }
    }

    fn with_state(mut self, state: &'a str) -> Self {
        self.state = Some(state);
        self
    }
}

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn list_open_pulls_for_head_sha(
        &self,
        owner: &str,
        name: &str,
        head_sha: &str,
    ) -> Result<Vec<GhPullRequest>, GitHubError> {
        // The list endpoint cannot filter on a head commit, so every open
        // pull request is scanned.
        let client = self.get_client()?;
        let url = self.build_url(format!("/repos/{owner}/{name}/pulls"));
        let mut matching = Vec::new();
        let mut page = 1;

        loop {
            let pulls = client
                .get(&url)
                .query(&PageQuery::new(page).with_state("open"))
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<GhPullRequest>>()
                .await?;

            let count = pulls.len();
            matching.extend(pulls.into_iter().filter(|pr| pr.head.sha == head_sha));

            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(matching)
    }

    async fn list_commit_pulls(
        &self,
        owner: &str,
        name: &str,
        commit_sha: &str,
    ) -> Result<Vec<GhPullRequest>, GitHubError> {
        Ok(self
            .get_client()?
            .get(&self.build_url(format!(
                "/repos/{owner}/{name}/commits/{commit_sha}/pulls"
            )))
            .query(&PageQuery::new(1))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GhPullRequest>>()
            .await?)
    }

    async fn get_pull(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhPullRequest, GitHubError> {
        Ok(self
            .get_client()?
            .get(&self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}")))
            .send()
            .await?
            .error_for_status()?
            .json::<GhPullRequest>()
            .await?)
    }

    async fn list_check_runs(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<Vec<GhCheckRun>, GitHubError> {
        #[derive(Deserialize)]
        struct Response {
            total_count: usize,
            check_runs: Vec<GhCheckRun>,
        }

        let client = self.get_client()?;
        let url = self.build_url(format!("/repos/{owner}/{name}/commits/{git_ref}/check-runs"));
        let mut runs = Vec::new();
        let mut page = 1;

        loop {
            let response = client
                .get(&url)
                .query(&PageQuery::new(page))
                .send()
                .await?
                .error_for_status()?
                .json::<Response>()
                .await?;

            let count = response.check_runs.len();
            runs.extend(response.check_runs);

            if count == 0 || runs.len() >= response.total_count {
                break;
            }
            page += 1;
        }

        Ok(runs)
    }

    async fn get_ref(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
    ) -> Result<GhRefLookup, GitHubError> {
        let reference = encode_reference(reference);
        let response = self
            .get_client()?
            .get(&self.build_url(format!("/repos/{owner}/{name}/git/ref/{reference}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(GhRefLookup::Absent);
        }

        let git_ref = response.error_for_status()?.json::<GhGitRef>().await?;
        Ok(GhRefLookup::Exists(git_ref))
    }

    async fn create_ref(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
    ) -> Result<GhGitRef, GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "ref")]
            reference: &'a str,
            sha: &'a str,
        }

        Ok(self
            .get_client()?
            .post(&self.build_url(format!("/repos/{owner}/{name}/git/refs")))
            .json(&Request { reference, sha })
            .send()
            .await?
            .error_for_status()?
            .json::<GhGitRef>()
            .await?)
    }

    async fn update_ref(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
        force: bool,
    ) -> Result<GhGitRef, GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            sha: &'a str,
            force: bool,
        }

        let reference = encode_reference(reference);
        Ok(self
            .get_client()?
            .patch(&self.build_url(format!("/repos/{owner}/{name}/git/refs/{reference}")))
            .json(&Request { sha, force })
            .send()
            .await?
            .error_for_status()?
            .json::<GhGitRef>()
            .await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_list_open_for_head_sha(
        &self,
        owner: &str,
        name: &str,
        head_sha: &str,
    ) -> Result<Vec<GhPullRequest>> {
        self.list_open_pulls_for_head_sha(owner, name, head_sha)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_pulls_list(
        &self,
        owner: &str,
        name: &str,
        commit_sha: &str,
    ) -> Result<Vec<GhPullRequest>> {
        self.list_commit_pulls(owner, name, commit_sha)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        self.get_pull(owner, name, issue_number)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn check_runs_list(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<Vec<GhCheckRun>> {
        self.list_check_runs(owner, name, git_ref)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn git_refs_get(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
    ) -> Result<GhRefLookup> {
        self.get_ref(owner, name, reference)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn git_refs_create(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
    ) -> Result<GhGitRef> {
        self.create_ref(owner, name, reference, sha)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn git_refs_update(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
        force: bool,
    ) -> Result<GhGitRef> {
        self.update_ref(owner, name, reference, sha, force)
            .await
            .map_err(Into::into)
    }
}
