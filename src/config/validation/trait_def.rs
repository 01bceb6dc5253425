//! The `Validate` trait

/// Section-level check run after loading and before use
pub trait Validate {
    /// Describe the first problem found, if any
    fn validate(&self) -> Result<(), String>;
}
