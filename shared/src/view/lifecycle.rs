use crate::source::AnalysisSource;
use crate::dto::analysis::AnalysisPayload;
use crate::error::FetchError;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tracks whether the view that started a fetch is still alive.
///
/// Clones share the flag, so the copy moved into the fetch task sees the
/// unmount performed by the effect cleanup.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Admits exactly one fetch per mount.
#[derive(Debug, Default)]
pub struct FetchGate {
    issued: AtomicBool,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller only.
    pub fn try_issue(&self) -> bool {
        self.issued
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn is_issued(&self) -> bool {
        self.issued.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result reached the view through `apply`.
    Applied,
    /// The view went away first; nothing was applied.
    Discarded,
    /// A fetch was already issued for this mount; no request was made.
    AlreadyIssued,
}

/// Fetch-on-mount: issues at most one request per `gate` and hands the
/// result to `apply` if the view is still mounted.
///
/// `apply` is expected to feed the result to [`crate::ViewState::resolve`], which
/// collapses every failure cause into the generic message; the cause itself
/// is only logged here.
pub async fn load_once<S, F>(source: &S, gate: &FetchGate, guard: &MountGuard, apply: F) -> LoadOutcome
where
    S: AnalysisSource + ?Sized,
    F: FnOnce(Result<AnalysisPayload, FetchError>),
{
    if !gate.try_issue() {
        debug!("Analysis fetch already issued for this mount, skipping");
        return LoadOutcome::AlreadyIssued;
    }
    if !guard.is_mounted() {
        info!("View unmounted before the analysis fetch started");
        return LoadOutcome::Discarded;
    }

    let endpoint = source.describe();
    debug!("Fetching analysis payload from {}", endpoint);
    let result = source.fetch_analysis().await;

    match &result {
        Ok(payload) => debug!(
            "Analysis payload received from {} (empty: {})",
            endpoint,
            payload.is_empty()
        ),
        Err(e) => warn!("Analysis fetch from {} failed: {}", endpoint, e),
    }

    if !guard.is_mounted() {
        info!("View unmounted before the analysis response from {} arrived, discarding it", endpoint);
        return LoadOutcome::Discarded;
    }

    apply(result);
    LoadOutcome::Applied
}
