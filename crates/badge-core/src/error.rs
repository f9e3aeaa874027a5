use thiserror::Error;

/// Failures the presentation controller can report.
///
/// None of these are fatal to the host page: the controller logs them and
/// either keeps its previous output or stays inert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BadgeError {
    /// The asset URL was unreachable or the payload could not be parsed.
    #[error("asset failed to load: {0}")]
    LoadFailure(String),
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("bounding volume has no extent")]
    DegenerateVolume,
    #[error("bounding volume corners are not finite or are inverted")]
    InvalidVolume,
}

impl BadgeError {
    pub(crate) fn config(field: &'static str, reason: &'static str) -> Self {
        BadgeError::InvalidConfig { field, reason }
    }
}
