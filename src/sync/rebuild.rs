//! One rebuild pass over both edge kinds.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::EdgeKind;
use crate::render::{CategoryResolver, extract_category_refs};
use crate::store::{SqliteStore, StoreResult, Transaction, WikiRepository};

/// Knobs for a rebuild pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Also clear the edges of owners whose body has no category tags.
    ///
    /// Off by default: an owner with no tags keeps whatever edges it had.
    pub clear_untagged: bool,
}

/// Outcome of rebuilding one edge kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindReport {
    pub kind: EdgeKind,
    pub owners_scanned: usize,
    pub owners_rewritten: usize,
    pub edges_written: usize,
    /// Referenced names with no matching category, in scan order.
    pub unresolved: Vec<String>,
    /// Set when the kind's transaction was rolled back.
    pub error: Option<String>,
}

impl KindReport {
    fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            owners_scanned: 0,
            owners_rewritten: 0,
            edges_written: 0,
            unresolved: Vec::new(),
            error: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of one full pass, one report per edge kind in [`EdgeKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub kinds: Vec<KindReport>,
}

impl PassReport {
    pub fn succeeded(&self) -> bool {
        self.kinds.iter().all(KindReport::succeeded)
    }

    pub fn edges_written(&self) -> usize {
        self.kinds.iter().map(|k| k.edges_written).sum()
    }

    pub fn kind(&self, kind: EdgeKind) -> Option<&KindReport> {
        self.kinds.iter().find(|k| k.kind == kind)
    }
}

/// Rebuilds both edge kinds, each in its own transaction.
///
/// A failed kind is rolled back and reported; it does not stop the other.
pub fn run_pass(store: &mut SqliteStore, options: &SyncOptions) -> PassReport {
    info!("category sync pass started");

    let kinds: Vec<KindReport> = EdgeKind::ALL
        .iter()
        .map(|&kind| rebuild_kind(store, kind, options))
        .collect();

    for report in &kinds {
        info!(
            kind = %report.kind,
            scanned = report.owners_scanned,
            rewritten = report.owners_rewritten,
            edges = report.edges_written,
            unresolved = report.unresolved.len(),
            ok = report.succeeded(),
            "category sync pass finished"
        );
    }

    PassReport { kinds }
}

/// Replaces every edge of `kind` derived from the current bodies.
///
/// Either the whole kind commits or nothing changes.
pub fn rebuild_kind(store: &mut SqliteStore, kind: EdgeKind, options: &SyncOptions) -> KindReport {
    let mut report = KindReport::new(kind);

    if let Err(err) = rewrite_edges(store, kind, options, &mut report) {
        error!(kind = %kind, error = %err, "edge rebuild rolled back");
        report.owners_rewritten = 0;
        report.edges_written = 0;
        report.error = Some(err.to_string());
    }

    report
}

fn rewrite_edges(
    store: &mut SqliteStore,
    kind: EdgeKind,
    options: &SyncOptions,
    report: &mut KindReport,
) -> StoreResult<()> {
    let owners: Vec<(i64, Vec<String>)> = store
        .owner_bodies(kind)?
        .into_iter()
        .map(|owner| (owner.id, extract_category_refs(&owner.body)))
        .collect();
    report.owners_scanned = owners.len();

    let tx = store.transaction()?;
    match write_edges(&tx, kind, &owners, options, report) {
        Ok(()) => tx.commit(),
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!(kind = %kind, error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

fn write_edges(
    tx: &Transaction<'_>,
    kind: EdgeKind,
    owners: &[(i64, Vec<String>)],
    options: &SyncOptions,
    report: &mut KindReport,
) -> StoreResult<()> {
    for (owner_id, refs) in owners {
        if refs.is_empty() && !options.clear_untagged {
            continue;
        }

        let cleared = tx.clear_edges(kind, *owner_id)?;
        debug!(kind = %kind, owner = owner_id, cleared, "cleared edges");
        report.owners_rewritten += 1;

        for name in refs {
            match tx.resolve_category_id(name)? {
                Some(category_id) => {
                    if tx.insert_edge(kind, *owner_id, category_id)? {
                        report.edges_written += 1;
                    }
                }
                None => {
                    warn!(kind = %kind, owner = owner_id, category = %name, "skipping unresolved category reference");
                    report.unresolved.push(name.clone());
                }
            }
        }
    }
    Ok(())
}
