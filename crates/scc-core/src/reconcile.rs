//! Reconciliation protocol shared by every resource kind.
//!
//! Each kind implements [`Resource`] with its own wire calls; the
//! [`Reconciler`] wraps those calls with the parts of the lifecycle that
//! must behave identically everywhere:
//!
//! - **update** guards identity fields before any network call,
//! - **read** surfaces an absent target as [`CoreError::NotFound`],
//! - **delete** treats an already-absent target as success,
//! - **import** parses the composite identifier and re-enters read.
//!
//! The building blocks used inside the kinds live here too:
//! [`apply_and_reconcile`] (write, then refetch), [`find_by_natural_key`],
//! and [`toggle_on_create`] / [`toggle_on_update`].

use std::future::Future;

use tracing::{debug, warn};

use scc_api::ConnectorClient;

use crate::error::CoreError;
use crate::import::ImportId;

// ── Identity ────────────────────────────────────────────────────────

/// One identity field of a record.
///
/// `value` is `None` for server-assigned identifiers that the caller has
/// not learned yet; such a field is inherited rather than compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityField {
    pub name: &'static str,
    pub value: Option<String>,
}

impl IdentityField {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    pub fn assigned(name: &'static str, value: Option<impl ToString>) -> Self {
        Self {
            name,
            value: value.map(|v| v.to_string()),
        }
    }
}

/// Compare identity fields of the last-known and desired records.
///
/// Any difference is fatal: the connector has no rename operation, so a
/// changed identity means a different remote object.
pub fn ensure_identity_unchanged<R: Resource>(prior: &R, desired: &R) -> Result<(), CoreError> {
    for (before, after) in prior.identity().into_iter().zip(desired.identity()) {
        let Some(wanted) = after.value else {
            continue;
        };
        let current = before.value.unwrap_or_default();
        if current != wanted {
            return Err(CoreError::IdentityMismatch {
                kind: R::KIND,
                field: before.name,
                prior: current,
                desired: wanted,
            });
        }
    }
    Ok(())
}

// ── Protocol steps ──────────────────────────────────────────────────

/// Write, then refetch the canonical record.
///
/// The connector does not return the full object from a write, so every
/// mutation is followed by a read. `refetch` is not polled until `write`
/// has completed successfully; a failing refetch surfaces as its own error
/// and nothing is rolled back.
pub async fn apply_and_reconcile<T, W, F>(write: W, refetch: F) -> Result<T, CoreError>
where
    W: Future<Output = Result<(), scc_api::Error>>,
    F: Future<Output = Result<T, CoreError>>,
{
    write.await?;
    refetch.await
}

/// Pick the single record whose natural key equals `key`.
///
/// Zero matches is [`CoreError::ReconciliationFailure`]; more than one is
/// [`CoreError::DuplicateNaturalKey`]. List order does not matter.
pub fn find_by_natural_key<T, K>(
    items: Vec<T>,
    key_of: K,
    key: &str,
    kind: &'static str,
    key_name: &'static str,
) -> Result<T, CoreError>
where
    K: Fn(&T) -> Option<&str>,
{
    let mut matches: Vec<T> = items
        .into_iter()
        .filter(|item| key_of(item) == Some(key))
        .collect();

    match matches.len() {
        0 => Err(CoreError::ReconciliationFailure {
            kind,
            key_name,
            natural_key: key.to_owned(),
        }),
        1 => Ok(matches.swap_remove(0)),
        count => Err(CoreError::DuplicateNaturalKey {
            kind,
            key_name,
            natural_key: key.to_owned(),
            count,
        }),
    }
}

/// Toggle value to apply after a create: whatever the caller asked for.
pub fn toggle_on_create(desired: Option<bool>) -> Option<bool> {
    desired
}

/// Toggle value to apply during an update: only a changed request.
pub fn toggle_on_update(prior: Option<bool>, desired: Option<bool>) -> Option<bool> {
    desired.filter(|wanted| prior != Some(*wanted))
}

// ── Resource kinds ──────────────────────────────────────────────────

/// A resource kind the host can manage.
///
/// Implementors provide the wire calls; [`Reconciler`] supplies the shared
/// guards around them.
pub trait Resource: Clone + Send + Sync + Sized {
    /// Human-readable kind name for diagnostics.
    const KIND: &'static str;

    /// Field names of the composite import identifier, in order.
    const IMPORT_SHAPE: &'static [&'static str];

    /// Identity fields, in the same order for every record of the kind.
    fn identity(&self) -> Vec<IdentityField>;

    /// Short identifier for diagnostics.
    fn describe(&self) -> String {
        self.identity()
            .into_iter()
            .map(|f| f.value.unwrap_or_else(|| "?".into()))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Seed record carrying only the identity fields of an import id.
    fn from_import(id: &ImportId) -> Result<Self, CoreError>;

    fn create(
        client: &ConnectorClient,
        desired: &Self,
    ) -> impl Future<Output = Result<Self, CoreError>> + Send;

    fn fetch(
        client: &ConnectorClient,
        known: &Self,
    ) -> impl Future<Output = Result<Self, CoreError>> + Send;

    /// Apply the mutable field group. Identity is already guarded.
    fn update(
        client: &ConnectorClient,
        prior: &Self,
        desired: &Self,
    ) -> impl Future<Output = Result<Self, CoreError>> + Send;

    fn remove(
        client: &ConnectorClient,
        known: &Self,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Lifecycle entry points, bound to one connector client.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    client: &'a ConnectorClient,
}

impl<'a> Reconciler<'a> {
    pub fn new(client: &'a ConnectorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ConnectorClient {
        self.client
    }

    pub async fn create<R: Resource>(&self, desired: &R) -> Result<R, CoreError> {
        debug!(kind = R::KIND, target = %desired.describe(), "create");
        R::create(self.client, desired).await
    }

    pub async fn read<R: Resource>(&self, known: &R) -> Result<R, CoreError> {
        debug!(kind = R::KIND, target = %known.describe(), "read");
        R::fetch(self.client, known)
            .await
            .map_err(|e| match e {
                CoreError::Request { status: 404, .. } => CoreError::NotFound {
                    kind: R::KIND,
                    identifier: known.describe(),
                },
                other => other,
            })
    }

    pub async fn update<R: Resource>(&self, prior: &R, desired: &R) -> Result<R, CoreError> {
        ensure_identity_unchanged(prior, desired)?;
        debug!(kind = R::KIND, target = %prior.describe(), "update");
        R::update(self.client, prior, desired).await
    }

    /// Delete and return the final snapshot. An absent target is success.
    pub async fn delete<R: Resource>(&self, known: &R) -> Result<R, CoreError> {
        debug!(kind = R::KIND, target = %known.describe(), "delete");
        match R::remove(self.client, known).await {
            Ok(()) => Ok(known.clone()),
            Err(e) if e.is_not_found() => {
                warn!(
                    kind = R::KIND,
                    target = %known.describe(),
                    "already absent, treating delete as done"
                );
                Ok(known.clone())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn import<R: Resource>(&self, raw: &str) -> Result<R, CoreError> {
        let id = ImportId::parse(R::KIND, R::IMPORT_SHAPE, raw)?;
        let seed = R::from_import(&id)?;
        debug!(kind = R::KIND, target = %seed.describe(), "import");
        self.read(&seed).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: Option<&'static str>,
        id: u64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                key: Some("other.example.com"),
                id: 1,
            },
            Row { key: None, id: 2 },
            Row {
                key: Some("tenant.example.com"),
                id: 3,
            },
        ]
    }

    #[test]
    fn natural_key_lookup_ignores_order() {
        let mut items = rows();
        let found = find_by_natural_key(items.clone(), |r| r.key, "tenant.example.com", "k", "key")
            .unwrap();
        assert_eq!(found.id, 3);

        items.reverse();
        let found =
            find_by_natural_key(items, |r| r.key, "tenant.example.com", "k", "key").unwrap();
        assert_eq!(found.id, 3);
    }

    #[test]
    fn natural_key_lookup_without_match_fails() {
        let err = find_by_natural_key(rows(), |r| r.key, "missing.example.com", "k", "key")
            .unwrap_err();
        assert!(matches!(err, CoreError::ReconciliationFailure { .. }));
    }

    #[test]
    fn natural_key_lookup_rejects_duplicates() {
        let mut items = rows();
        items.push(Row {
            key: Some("tenant.example.com"),
            id: 4,
        });
        let err =
            find_by_natural_key(items, |r| r.key, "tenant.example.com", "k", "key").unwrap_err();
        assert!(matches!(err, CoreError::DuplicateNaturalKey { count: 2, .. }));
    }

    #[test]
    fn update_toggle_only_fires_on_change() {
        assert_eq!(toggle_on_update(Some(true), Some(true)), None);
        assert_eq!(toggle_on_update(Some(true), Some(false)), Some(false));
        assert_eq!(toggle_on_update(None, Some(true)), Some(true));
        assert_eq!(toggle_on_update(Some(false), None), None);
        assert_eq!(toggle_on_create(Some(false)), Some(false));
    }

    #[tokio::test]
    async fn refetch_is_skipped_when_write_fails() {
        let refetched = std::cell::Cell::new(false);
        let result = apply_and_reconcile(
            async {
                Err(scc_api::Error::Request {
                    status: 400,
                    body: "bad".into(),
                })
            },
            async {
                refetched.set(true);
                Ok::<u32, CoreError>(1)
            },
        )
        .await;
        assert!(matches!(result, Err(CoreError::Request { status: 400, .. })));
        assert!(!refetched.get());
    }
}
