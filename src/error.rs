use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the configuration layer.
///
/// The simulation itself cannot fail; game over is a phase, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings value is out of its accepted range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON could not be parsed or produced.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = Error::InvalidSettings("fixed_dt must be positive".into());
        assert_eq!(e.to_string(), "invalid settings: fixed_dt must be positive");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
