// ── Resource kinds ──
//
// One `Resource` impl per kind. Each file owns the exact sequence of wire
// calls for its kind; the shared guards live in `crate::reconcile`.

mod channel;
mod domain_mapping;
mod subaccount;
mod system_mapping;
mod system_mapping_resource;

use crate::error::CoreError;

/// Turn a failed natural-key lookup during a plain read into `NotFound`.
///
/// After a write the same miss is a reconciliation failure; before any
/// write it just means the record is gone.
pub(crate) fn absent_as_not_found(
    err: CoreError,
    kind: &'static str,
    identifier: String,
) -> CoreError {
    match err {
        CoreError::ReconciliationFailure { .. } => CoreError::NotFound { kind, identifier },
        other => other,
    }
}
