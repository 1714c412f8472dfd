//! Per-document settings negotiated with the client.

use crate::base::PositionEncoding;

/// How [`TextDocument::update`](crate::TextDocument::update) treats the
/// version carried by a change notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VersionPolicy {
    /// Accept any version and store it verbatim.
    Permissive,
    /// Reject notifications whose version is not greater than the current one.
    #[default]
    StrictlyIncreasing,
}

impl VersionPolicy {
    /// Whether moving from `current` to `received` is allowed.
    #[inline]
    pub fn accepts(self, current: i32, received: i32) -> bool {
        match self {
            VersionPolicy::Permissive => true,
            VersionPolicy::StrictlyIncreasing => received > current,
        }
    }
}

/// Settings for a synchronized document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DocumentConfig {
    /// Unit of `Position::character`. UTF-16 unless the client negotiated otherwise.
    pub encoding: PositionEncoding,
    pub version_policy: VersionPolicy,
}

impl DocumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position encoding.
    pub fn with_encoding(mut self, encoding: PositionEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the version policy.
    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.version_policy = policy;
        self
    }
}
