use async_trait::async_trait;
use dogfood_ghapi_interface::types::GhRefLookup;
use dogfood_models::RepositoryPath;
use shaku::{Component, Interface};

use super::dogfood_branch_name;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PublishDogfoodBranchInterface: Interface {
    /// Point `dogfood/<branch_name>` to `head_sha`, creating it if needed.
    ///
    /// Returns the dogfood branch name.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pr_number: u64,
        head_sha: &str,
        branch_name: &str,
    ) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = PublishDogfoodBranchInterface)]
pub(crate) struct PublishDogfoodBranch;

#[async_trait]
impl PublishDogfoodBranchInterface for PublishDogfoodBranch {
    #[tracing::instrument(skip(self, ctx), fields(repository_path, pr_number, head_sha, branch_name), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pr_number: u64,
        head_sha: &str,
        branch_name: &str,
    ) -> Result<String> {
        let (owner, name) = repository_path.components();
        let dogfood_branch = dogfood_branch_name(branch_name);
        let short_ref = format!("heads/{dogfood_branch}");

        match ctx.api_service.git_refs_get(owner, name, &short_ref).await? {
            GhRefLookup::Exists(_) => {
                ctx.api_service
                    .git_refs_update(owner, name, &short_ref, head_sha, true)
                    .await?;
                tracing::info!(branch = %dogfood_branch, "Updated existing branch");
            }
            GhRefLookup::Absent => {
                ctx.api_service
                    .git_refs_create(owner, name, &format!("refs/{short_ref}"), head_sha)
                    .await?;
                tracing::info!(branch = %dogfood_branch, "Created new branch");
            }
        }

        tracing::info!(pr_number, "Published dogfood branch");
        Ok(dogfood_branch)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use dogfood_ghapi_interface::{
        types::{GhGitRef, GhRefLookup},
        ApiError, MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    /// Mock API storing a single reference, keyed by its short name.
    fn api_with_ref_store(store: Arc<Mutex<Option<String>>>) -> MockApiService {
        let mut svc = MockApiService::new();

        let get_store = store.clone();
        svc.expect_git_refs_get()
            .withf(|_, _, reference| reference == "heads/dogfood/feature")
            .returning(move |_, _, reference| {
                Ok(match get_store.lock().unwrap().clone() {
                    Some(sha) => GhRefLookup::Exists(GhGitRef::new(format!("refs/{reference}"), sha)),
                    None => GhRefLookup::Absent,
                })
            });

        let create_store = store.clone();
        svc.expect_git_refs_create()
            .withf(|_, _, reference, _| reference == "refs/heads/dogfood/feature")
            .returning(move |_, _, reference, sha| {
                *create_store.lock().unwrap() = Some(sha.to_string());
                Ok(GhGitRef::new(reference, sha))
            });

        svc.expect_git_refs_update()
            .withf(|_, _, reference, _, force| reference == "heads/dogfood/feature" && *force)
            .returning(move |_, _, reference, sha, _| {
                *store.lock().unwrap() = Some(sha.to_string());
                Ok(GhGitRef::new(format!("refs/{reference}"), sha))
            });

        svc
    }

    #[tokio::test]
    async fn run_creates_missing_branch() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service
            .expect_git_refs_get()
            .once()
            .withf(|owner, name, reference| {
                owner == "me" && name == "test" && reference == "heads/dogfood/feature/thing"
            })
            .return_once(|_, _, _| Ok(GhRefLookup::Absent));
        ctx.api_service
            .expect_git_refs_create()
            .once()
            .withf(|owner, name, reference, sha| {
                owner == "me"
                    && name == "test"
                    && reference == "refs/heads/dogfood/feature/thing"
                    && sha == "abcdef"
            })
            .return_once(|_, _, reference, sha| Ok(GhGitRef::new(reference, sha)));
        ctx.api_service.expect_git_refs_update().never();

        let branch = PublishDogfoodBranch
            .run(&ctx.as_context(), &("me", "test").into(), 1, "abcdef", "feature/thing")
            .await
            .unwrap();

        assert_eq!(branch, "dogfood/feature/thing");
    }

    #[tokio::test]
    async fn run_force_updates_existing_branch() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service
            .expect_git_refs_get()
            .once()
            .return_once(|_, _, _| {
                Ok(GhRefLookup::Exists(GhGitRef::new(
                    "refs/heads/dogfood/feature",
                    "012345",
                )))
            });
        ctx.api_service
            .expect_git_refs_update()
            .once()
            .withf(|_, _, reference, sha, force| {
                reference == "heads/dogfood/feature" && sha == "abcdef" && *force
            })
            .return_once(|_, _, _, sha, _| Ok(GhGitRef::new("refs/heads/dogfood/feature", sha)));
        ctx.api_service.expect_git_refs_create().never();

        PublishDogfoodBranch
            .run(&ctx.as_context(), &("me", "test").into(), 1, "abcdef", "feature")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_twice_is_idempotent() {
        let store = Arc::new(Mutex::new(None));
        let mut ctx = CoreContextTest::new();
        ctx.api_service = api_with_ref_store(store.clone());

        for _ in 0..2 {
            PublishDogfoodBranch
                .run(&ctx.as_context(), &("me", "test").into(), 1, "abcdef", "feature")
                .await
                .unwrap();
            assert_eq!(store.lock().unwrap().as_deref(), Some("abcdef"));
        }
    }

    #[tokio::test]
    async fn run_moves_branch_to_new_head() {
        let store = Arc::new(Mutex::new(None));
        let mut ctx = CoreContextTest::new();
        ctx.api_service = api_with_ref_store(store.clone());

        PublishDogfoodBranch
            .run(&ctx.as_context(), &("me", "test").into(), 1, "abcdef", "feature")
            .await
            .unwrap();
        assert_eq!(store.lock().unwrap().as_deref(), Some("abcdef"));

        PublishDogfoodBranch
            .run(&ctx.as_context(), &("me", "test").into(), 1, "012345", "feature")
            .await
            .unwrap();
        assert_eq!(store.lock().unwrap().as_deref(), Some("012345"));
    }

    #[tokio::test]
    async fn run_propagates_lookup_errors() {
        let mut ctx = CoreContextTest::new();

        ctx.api_service
            .expect_git_refs_get()
            .once()
            .return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });
        ctx.api_service.expect_git_refs_create().never();
        ctx.api_service.expect_git_refs_update().never();

        let result = PublishDogfoodBranch
            .run(&ctx.as_context(), &("me", "test").into(), 1, "abcdef", "feature")
            .await;

        assert!(matches!(result, Err(DomainError::ApiError { .. })));
    }
}
