use super::ErrorCode;

#[derive(thiserror::Error)]
enum OtherErrors {
    AnyHow { error: anyhow::Error },
}

impl std::fmt::Display for OtherErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{}", error),
        }
    }
}

impl std::fmt::Debug for OtherErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{:?}", error),
        }
    }
}

impl From<anyhow::Error> for ErrorCode {
    fn from(error: anyhow::Error) -> Self {
        ErrorCode::UnImplement(error.to_string()).with_cause(OtherErrors::AnyHow { error })
    }
}

impl From<serde_json::Error> for ErrorCode {
    fn from(error: serde_json::Error) -> Self {
        ErrorCode::from_std_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_anyhow_keeps_error_as_cause() {
        let err: ErrorCode = anyhow::anyhow!("tc qdisc failed").into();
        assert_eq!(err.code(), 1001);
        assert_eq!(err.display_text(), "tc qdisc failed");
        assert_eq!(
            err.cause().map(|c| c.to_string()),
            Some("tc qdisc failed".to_string())
        );
    }

    #[test]
    fn from_serde_json_is_unimplement() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ErrorCode = parse_err.into();
        assert_eq!(err.code(), ErrorCode::un_implement_code());
        assert!(err.cause().is_none());
    }
}
