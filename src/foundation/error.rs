pub type PageforgeResult<T> = Result<T, PageforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum PageforgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("content format error: {0}")]
    ContentFormat(String),

    #[error("canvas error: {0}")]
    Canvas(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageforgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn content_format(msg: impl Into<String>) -> Self {
        Self::ContentFormat(msg.into())
    }

    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// The message as shown to a person, without the taxonomy prefix.
    ///
    /// Status surfaces and host notifications use this so that, for example, a
    /// provider error body of `quota exceeded` is reported as exactly that.
    pub fn surface_message(&self) -> String {
        match self {
            Self::Validation(m)
            | Self::Provider(m)
            | Self::ContentFormat(m)
            | Self::Canvas(m)
            | Self::Serde(m) => m.clone(),
            Self::Other(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PageforgeError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PageforgeError::provider("x")
                .to_string()
                .contains("provider error:")
        );
        assert!(
            PageforgeError::content_format("x")
                .to_string()
                .contains("content format error:")
        );
        assert!(
            PageforgeError::canvas("x")
                .to_string()
                .contains("canvas error:")
        );
        assert!(
            PageforgeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn surface_message_drops_prefix() {
        let err = PageforgeError::provider("quota exceeded");
        assert_eq!(err.surface_message(), "quota exceeded");
        assert_ne!(err.to_string(), err.surface_message());
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PageforgeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
        assert_eq!(err.surface_message(), "boom");
    }
}
