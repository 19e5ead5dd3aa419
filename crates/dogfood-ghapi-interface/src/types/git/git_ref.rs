use serde::{Deserialize, Serialize};

/// Object a git reference points to.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhGitRefObject {
    /// SHA.
    pub sha: String,
    /// Object type, usually `commit`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// GitHub git reference.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GhGitRef {
    /// Fully qualified name, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Target object.
    pub object: GhGitRefObject,
}

impl GhGitRef {
    /// Build a commit reference.
    pub fn new<R: Into<String>, S: Into<String>>(reference: R, sha: S) -> Self {
        Self {
            reference: reference.into(),
            object: GhGitRefObject {
                sha: sha.into(),
                kind: "commit".into(),
            },
        }
    }
}

/// Outcome of a reference lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhRefLookup {
    /// The reference exists.
    Exists(GhGitRef),
    /// The reference does not exist.
    Absent,
}
