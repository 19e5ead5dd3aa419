/// Pull request information resolved from an event.
///
/// The branch name and labels are only known when a pull request number is.
/// `head_sha` is the commit the event is about, while `current_head_sha` is
/// the pull request head at resolution time. Both are equal unless commits
/// were pushed after the event was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrInfo {
    pr_number: Option<u64>,
    head_sha: String,
    current_head_sha: String,
    branch_name: Option<String>,
    labels: Vec<String>,
}

impl PrInfo {
    /// Commit which is not associated to any pull request.
    pub fn without_pull_request<T: Into<String>>(head_sha: T) -> Self {
        let head_sha = head_sha.into();
        Self {
            current_head_sha: head_sha.clone(),
            head_sha,
            ..Default::default()
        }
    }

    /// Commit associated to a pull request.
    pub fn with_pull_request<T: Into<String>, B: Into<String>>(
        pr_number: u64,
        head_sha: T,
        branch_name: B,
        labels: Vec<String>,
    ) -> Self {
        let head_sha = head_sha.into();
        Self {
            pr_number: Some(pr_number),
            current_head_sha: head_sha.clone(),
            head_sha,
            branch_name: Some(branch_name.into()),
            labels,
        }
    }

    /// Set the pull request head as last seen upstream.
    pub fn with_current_head_sha<T: Into<String>>(mut self, current_head_sha: T) -> Self {
        self.current_head_sha = current_head_sha.into();
        self
    }

    pub fn pr_number(&self) -> Option<u64> {
        self.pr_number
    }

    pub fn head_sha(&self) -> &str {
        &self.head_sha
    }

    pub fn current_head_sha(&self) -> &str {
        &self.current_head_sha
    }

    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Check if the pull request carries a label, by exact name.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}
