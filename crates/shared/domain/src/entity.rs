//! Identity shared by every stored record.

use crate::error::{DomainError, DomainResult};

/// A record addressable by a string key.
///
/// Stores use `KIND` for error messages and `id` as the keyspace key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind name ("user", "todo")
    const KIND: &'static str;

    /// Identity of this record
    fn id(&self) -> &str;

    /// Reject records without an identity
    fn validate_identity(&self) -> DomainResult<()> {
        if self.id().is_empty() {
            return Err(DomainError::EmptyId(Self::KIND));
        }
        Ok(())
    }
}
