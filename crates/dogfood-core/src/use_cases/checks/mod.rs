pub(crate) mod determine_checks_status;

pub use determine_checks_status::DetermineChecksStatusInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::determine_checks_status::MockDetermineChecksStatusInterface;
