pub(crate) mod publish_dogfood_branch;
pub(crate) mod synchronize_dogfood_branch;

pub use publish_dogfood_branch::PublishDogfoodBranchInterface;
pub use synchronize_dogfood_branch::SynchronizeDogfoodBranchInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    publish_dogfood_branch::MockPublishDogfoodBranchInterface,
    synchronize_dogfood_branch::MockSynchronizeDogfoodBranchInterface,
};

/// Label which opts a pull request in dogfood publishing.
pub const DOGFOOD_LABEL: &str = "dogfood";
/// Prefix of published dogfood branches.
pub const DOGFOOD_BRANCH_PREFIX: &str = "dogfood/";

/// Name of the dogfood branch for a pull request branch.
pub fn dogfood_branch_name(branch_name: &str) -> String {
    format!("{DOGFOOD_BRANCH_PREFIX}{branch_name}")
}
