/// Convenience result type used across viewkit.
pub type ViewResult<T> = Result<T, ViewError>;

/// Top-level error taxonomy used by the layout and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    /// Invalid user-provided view description or asset data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration the layout engine deliberately does not define (e.g. baseline alignment).
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Structural problems detected while laying out a tree.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while painting or rasterizing a laid out tree.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewError {
    /// Build a [`ViewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ViewError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`ViewError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ViewError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ViewError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error reports a configuration the engine refuses to approximate.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
