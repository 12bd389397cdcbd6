use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an [`AdminResolver`](crate::AdminResolver).
///
/// Whatever the resolver produced is kept as-is so it can be handed back to
/// the caller unmodified via [`ResolveError::body`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The resolver ran and reported an error of its own.
    #[error("{0}")]
    Lookup(String),
    /// The resolver could not be reached.
    #[error("{0}")]
    Transport(String),
    /// The resolver answered with something that is not a layer map.
    #[error("{0}")]
    Decode(String),
}

impl ResolveError {
    /// Content to pass through to the caller verbatim.
    pub fn body(&self) -> &str {
        match self {
            ResolveError::Lookup(body)
            | ResolveError::Transport(body)
            | ResolveError::Decode(body) => body,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::Lookup(_) => "lookup",
            ResolveError::Transport(_) => "transport",
            ResolveError::Decode(_) => "decode",
        }
    }
}

/// Fatal problems found before the service accepts requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{} does not contain Who's on First data", path.display())]
    MissingWofData { path: PathBuf },

    #[error("failed to build resolver client: {0}")]
    ResolverClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_verbatim() {
        let err = ResolveError::Lookup("a PiP error occurred".into());
        assert_eq!(err.body(), "a PiP error occurred");
        assert_eq!(err.to_string(), "a PiP error occurred");
        assert_eq!(err.kind(), "lookup");

        let err = ResolveError::Transport("connection refused".into());
        assert_eq!(err.body(), "connection refused");
        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn missing_wof_message() {
        let err = StartupError::MissingWofData {
            path: PathBuf::from("/data/wof"),
        };
        assert_eq!(err.to_string(), "/data/wof does not contain Who's on First data");
    }
}
