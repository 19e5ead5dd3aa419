mod checks_status;
mod dogfood_outcome;
mod pr_info;
mod pull_request_outputs;
mod repository_path;

pub use checks_status::{ChecksStatus, ChecksStatusError};
pub use dogfood_outcome::DogfoodOutcome;
pub use pr_info::PrInfo;
pub use pull_request_outputs::PullRequestOutputs;
pub use repository_path::{RepositoryPath, RepositoryPathError};
