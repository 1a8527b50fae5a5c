// crates/shopcheck-core/src/engine.rs
// ============================================================================
// Module: Conditional Assertion Engine
// Description: Existence-gated expectation selection for mutating calls.
// Purpose: Pick and evaluate exactly one expectation branch per verification.
// Dependencies: shopcheck-core outcome, probe, error
// ============================================================================

//! ## Overview
//! The decision core of the harness. Given a fresh probe result, exactly one
//! of two disjoint expectation branches applies to the mutating call that
//! follows: a probe-confirmed resource must not be denied with not-found and
//! must yield the mutation kind's success statuses, while an absent resource
//! must be denied. The probe result is consumed by value so a stale result
//! can never be reused across mutations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::VerifyError;
use crate::outcome::Outcome;
use crate::probe::ProbeResult;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Mutation classes with distinct acceptable status sets.
///
/// # Invariants
/// - Success and absent sets are disjoint for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Destructive removal of a resource instance.
    Delete,
    /// In-place update of an existing resource.
    Update,
    /// Mutation that references a resource by identifier without creating it.
    CreateByReference,
}

impl MutationKind {
    /// Statuses accepted when the probe confirmed the target exists.
    #[must_use]
    pub const fn success_statuses(self) -> &'static [u16] {
        match self {
            Self::Delete => &[200, 204],
            Self::Update | Self::CreateByReference => &[200],
        }
    }

    /// Statuses accepted when the probe confirmed the target is absent.
    #[must_use]
    pub const fn absent_statuses(self) -> &'static [u16] {
        match self {
            Self::Delete | Self::Update => &[404, 400],
            Self::CreateByReference => &[400, 404, 422],
        }
    }

    /// Human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Update => "update",
            Self::CreateByReference => "create-by-reference",
        }
    }
}

// ============================================================================
// SECTION: Verification
// ============================================================================

/// Invokes `mutation` and evaluates the expectation branch selected by `probe`.
///
/// The branch selector is evaluated exactly once, immediately before the
/// mutating call; `probe` is consumed so it cannot gate a second mutation.
///
/// # Errors
///
/// - [`VerifyError::RouteInconsistency`] when a probe-confirmed target is
///   denied with not-found.
/// - [`VerifyError::UnexpectedOutcome`] when the status matches neither the
///   selected branch's accepted set, including a mutation that silently
///   succeeds against an absent target.
/// - Any error the mutation call itself surfaced, propagated unchanged.
pub async fn verify_mutation<F, Fut>(
    kind: MutationKind,
    probe: ProbeResult,
    mutation: F,
) -> Result<Outcome, VerifyError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Outcome, VerifyError>>,
{
    let expect_found = probe.found;
    let target = probe.target;
    let outcome = mutation().await?;
    let status = outcome.status();
    if expect_found {
        if outcome.is_not_found() {
            return Err(VerifyError::RouteInconsistency {
                id: target,
                status,
            });
        }
        if !kind.success_statuses().contains(&status) {
            return Err(VerifyError::UnexpectedOutcome {
                id: target,
                status,
                context: format!(
                    "{} against an existing resource must succeed with one of {:?}",
                    kind.label(),
                    kind.success_statuses()
                ),
            });
        }
        return Ok(outcome);
    }
    if kind.absent_statuses().contains(&status) {
        return Ok(outcome);
    }
    let context = if outcome.is_success() {
        format!("{} silently succeeded against an absent resource", kind.label())
    } else {
        format!(
            "{} against an absent resource must fail with one of {:?}",
            kind.label(),
            kind.absent_statuses()
        )
    };
    Err(VerifyError::UnexpectedOutcome {
        id: target,
        status,
        context,
    })
}
