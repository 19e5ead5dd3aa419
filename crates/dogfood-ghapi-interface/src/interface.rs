use async_trait::async_trait;

use crate::{
    types::{GhCheckRun, GhGitRef, GhPullRequest, GhRefLookup},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List open pull requests whose head commit is `head_sha`.
    async fn pulls_list_open_for_head_sha(
        &self,
        owner: &str,
        name: &str,
        head_sha: &str,
    ) -> Result<Vec<GhPullRequest>>;
    /// List pull requests associated with a commit.
    async fn commit_pulls_list(
        &self,
        owner: &str,
        name: &str,
        commit_sha: &str,
    ) -> Result<Vec<GhPullRequest>>;
    /// Get a pull request from its number.
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest>;
    /// List all check runs registered on a git reference.
    async fn check_runs_list(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<Vec<GhCheckRun>>;
    /// Look a reference up, e.g. `heads/main`.
    ///
    /// A missing reference is reported as [`GhRefLookup::Absent`], other
    /// failures are errors.
    async fn git_refs_get(&self, owner: &str, name: &str, reference: &str)
        -> Result<GhRefLookup>;
    /// Create a fully qualified reference, e.g. `refs/heads/main`.
    async fn git_refs_create(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
    ) -> Result<GhGitRef>;
    /// Point an existing reference, e.g. `heads/main`, to another commit.
    async fn git_refs_update(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        sha: &str,
        force: bool,
    ) -> Result<GhGitRef>;
}
