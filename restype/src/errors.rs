use thiserror::Error;

/// Errors surfaced by runtime resource lookups.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource set is registered under the manager's base name.
    #[error("no resource set registered for `{base_name}`")]
    MissingSet { base_name: String },

    /// Sets exist for the base name but none of them contains the entry.
    #[error("resource `{name}` not found in `{base_name}`")]
    MissingEntry { base_name: String, name: String },
}

/// Rejections produced while validating a culture tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CultureError {
    #[error("culture tag is empty")]
    Empty,

    #[error("invalid culture tag `{0}`")]
    Invalid(String),
}
