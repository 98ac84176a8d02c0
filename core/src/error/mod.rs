use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with `ok: false`.
    #[error("{0}")]
    Api(String),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("row has no signatory to act on")]
    MissingSignatory,
    #[error("a rejection reason is required")]
    EmptyReason,
    #[error("a signature is required to approve")]
    EmptySignature,
    #[error("select at least one document")]
    EmptySelection,
    /// The duplicate check found a matching open request.
    #[error("{0}")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_backend_message() {
        let err = ClientError::Api("Student access required".into());
        assert_eq!(err.to_string(), "Student access required");
    }

    #[test]
    fn json_error_converts_from_serde() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ClientError = parse.unwrap_err().into();
        assert!(matches!(err, ClientError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON payload"));
    }
}
