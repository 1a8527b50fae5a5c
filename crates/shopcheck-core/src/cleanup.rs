// crates/shopcheck-core/src/cleanup.rs
// ============================================================================
// Module: Cleanup Record
// Description: Consumed-once teardown token for test-created fixtures.
// Purpose: Track the identifier a test fabricated so release can remove it.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`CleanupRecord`] is set the moment a fixture creation succeeds and
//! consumed exactly once at teardown. An empty record makes release a no-op,
//! which covers tests that never fabricated anything.

// ============================================================================
// SECTION: Types
// ============================================================================

/// Optional reference to a resource identifier created by the test itself.
///
/// # Invariants
/// - Created at most once per test, mutated never, consumed exactly once.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupRecord {
    /// Identifier of the fabricated resource, when one exists.
    id: Option<String>,
}

impl CleanupRecord {
    /// Returns an empty record; release becomes a no-op.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            id: None,
        }
    }

    /// Records the identifier of a freshly created fixture.
    #[must_use]
    pub const fn created(id: String) -> Self {
        Self {
            id: Some(id),
        }
    }

    /// Returns the tracked identifier without consuming the record.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true when no fixture was created.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// Consumes the record, yielding the identifier to delete.
    #[must_use]
    pub fn consume(self) -> Option<String> {
        self.id
    }
}
