use crate::{ChecksStatus, PrInfo};

/// Step outputs describing a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequestOutputs {
    pub pr_number: Option<u64>,
    pub pr_head: Option<String>,
    pub pr_branch_name: Option<String>,
    pub pr_status: ChecksStatus,
    pub pr_labels: Vec<String>,
}

impl PullRequestOutputs {
    pub fn new(pr_info: Option<&PrInfo>, pr_status: ChecksStatus) -> Self {
        match pr_info {
            Some(info) => Self {
                pr_number: info.pr_number(),
                pr_head: Some(info.head_sha().to_string()),
                pr_branch_name: info.branch_name().map(ToString::to_string),
                pr_status,
                pr_labels: info.labels().to_vec(),
            },
            None => Self {
                pr_status,
                ..Default::default()
            },
        }
    }

    /// Render outputs as `(key, value)` pairs.
    ///
    /// Missing values are empty strings and lists are JSON arrays, as the
    /// Actions toolkit does.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "prNumber",
                self.pr_number.map(|n| n.to_string()).unwrap_or_default(),
            ),
            ("prHead", self.pr_head.clone().unwrap_or_default()),
            (
                "prBranchName",
                self.pr_branch_name.clone().unwrap_or_default(),
            ),
            ("prStatus", self.pr_status.to_string()),
            (
                "prLabels",
                serde_json::Value::from(self.pr_labels.clone()).to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn entries_with_pull_request() {
        let info = PrInfo::with_pull_request(
            12,
            "abcdef",
            "feature/thing",
            vec!["dogfood".into(), "bug".into()],
        );
        let outputs = PullRequestOutputs::new(Some(&info), ChecksStatus::Success);

        assert_eq!(
            outputs.entries(),
            vec![
                ("prNumber", "12".to_string()),
                ("prHead", "abcdef".to_string()),
                ("prBranchName", "feature/thing".to_string()),
                ("prStatus", "success".to_string()),
                ("prLabels", r#"["dogfood","bug"]"#.to_string()),
            ]
        );
    }

    #[test]
    fn entries_without_pull_request() {
        let info = PrInfo::without_pull_request("abcdef");
        let outputs = PullRequestOutputs::new(Some(&info), ChecksStatus::Pending);

        assert_eq!(
            outputs.entries(),
            vec![
                ("prNumber", String::new()),
                ("prHead", "abcdef".to_string()),
                ("prBranchName", String::new()),
                ("prStatus", "pending".to_string()),
                ("prLabels", "[]".to_string()),
            ]
        );

        assert_eq!(
            PullRequestOutputs::new(None, ChecksStatus::Pending).pr_head,
            None
        );
    }
}
