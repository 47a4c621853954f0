use super::types::SmartdoError;

/// Coarse error taxonomy shared by the flows, the action boundary and the
/// CLI/API surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input was rejected before any upstream call was made.
    Validation,
    /// The completion service failed or answered with an unusable shape.
    Upstream,
    /// Everything else: config, storage, prompt templates, IO.
    Local,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub kind: ErrorKind,
}

impl SmartdoError {
    /// Classify this error into its type name and taxonomy kind.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            SmartdoError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                kind: ErrorKind::Validation,
            },

            // Upstream errors
            SmartdoError::Upstream(_) => ErrorClassification {
                error_type: "UpstreamError",
                kind: ErrorKind::Upstream,
            },
            SmartdoError::LLMApi(_) => ErrorClassification {
                error_type: "LLMApiError",
                kind: ErrorKind::Upstream,
            },
            SmartdoError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                kind: ErrorKind::Upstream,
            },
            SmartdoError::RateLimit(_) => ErrorClassification {
                error_type: "RateLimitError",
                kind: ErrorKind::Upstream,
            },
            SmartdoError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                kind: ErrorKind::Upstream,
            },
            SmartdoError::OutputValidation(_) => ErrorClassification {
                error_type: "OutputValidationError",
                kind: ErrorKind::Upstream,
            },

            // Local errors
            SmartdoError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                kind: ErrorKind::Local,
            },
            SmartdoError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Io(_) => ErrorClassification {
                error_type: "IoError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                kind: ErrorKind::Local,
            },
            SmartdoError::Prompt(_) => ErrorClassification {
                error_type: "PromptError",
                kind: ErrorKind::Local,
            },
        }
    }

    pub fn is_validation(&self) -> bool {
        self.classify().kind == ErrorKind::Validation
    }

    pub fn is_upstream(&self) -> bool {
        self.classify().kind == ErrorKind::Upstream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kind() {
        let err = SmartdoError::Validation("title: Title is required".into());
        let class = err.classify();
        assert_eq!(class.kind, ErrorKind::Validation);
        assert_eq!(class.error_type, "ValidationError");
        assert!(err.is_validation());
    }

    #[test]
    fn test_llm_failures_are_upstream() {
        assert!(SmartdoError::LLMApi("bad".into()).is_upstream());
        assert!(SmartdoError::Network("refused".into()).is_upstream());
        assert!(SmartdoError::RateLimit("slow down".into()).is_upstream());
        assert!(SmartdoError::Authentication("bad key".into()).is_upstream());
        assert!(SmartdoError::OutputValidation("missing field".into()).is_upstream());
    }

    #[test]
    fn test_upstream_type_name() {
        let err = SmartdoError::Upstream("no output".into());
        assert_eq!(err.classify().error_type, "UpstreamError");
    }

    #[test]
    fn test_storage_errors_are_local() {
        assert_eq!(SmartdoError::Database("locked".into()).classify().kind, ErrorKind::Local);
        assert_eq!(SmartdoError::NotFound("task".into()).classify().kind, ErrorKind::Local);
        assert!(!SmartdoError::Config("bad".into()).is_upstream());
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = SmartdoError::Validation("Invalid input for categorization: title: Title is required".into());
        assert_eq!(err.to_string(), "Invalid input for categorization: title: Title is required");
    }
}
