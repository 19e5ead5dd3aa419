mod git_ref;

pub use git_ref::{GhGitRef, GhGitRefObject, GhRefLookup};
