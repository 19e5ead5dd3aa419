use serde::{Deserialize, Serialize};

/// GitHub Label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GhLabel {
    /// Name.
    pub name: String,
    /// Color.
    pub color: String,
    /// Description.
    pub description: Option<String>,
}

impl GhLabel {
    /// Build a label from its name only.
    pub fn named<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
