/// Classification of a failed price lookup.
///
/// Every failure is converted to "no data" at the cache boundary, so the
/// class is only used for logging and for tests that assert on the cause.
///
/// | Class | Typical cause |
/// |-------|---------------|
/// | `Transport` | Timeout, connection refused, TLS failure |
/// | `UpstreamStatus` | Non-success HTTP status, including 429 |
/// | `Payload` | Body did not parse, or the requested asset was absent |
/// | `InvalidRequest` | Rejected locally before any request was sent |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// The request never produced a response.
    Transport,

    /// The upstream answered with an error status.
    UpstreamStatus,

    /// The upstream answered, but not with what we asked for.
    Payload,

    /// The request was invalid and was not sent.
    InvalidRequest,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::UpstreamStatus => write!(f, "upstream_status"),
            Self::Payload => write!(f, "payload"),
            Self::InvalidRequest => write!(f, "invalid_request"),
        }
    }
}
