mod checks;
mod common;
mod git;
mod pulls;
mod statuses;
mod workflows;

pub use checks::*;
pub use common::*;
pub use git::*;
pub use pulls::*;
pub use statuses::*;
pub use workflows::*;
