//! Workspace umbrella crate for simhash fingerprinting and near-duplicate
//! pair search.
//!
//! This crate stitches together feature hashing, fingerprint construction,
//! and bucketed pair finding so callers can go from token streams to
//! near-duplicate index pairs with a single API entry point.

pub use simpair_fingerprint::{
    FNV_OFFSET_BASIS, FNV_PRIME, FeatureToken, FingerprintBuilder, FingerprintError,
    WeightedFeature, fingerprint, fingerprint_features, fingerprint_tokens, fnv1a,
    weighted_fingerprint,
};
pub use simpair_search::{SearchConfig, SearchError, find_similar_pairs, hamming_distance};

pub mod config;
pub use config::{ConfigLoadError, SimpairConfig, load_config, parse_config};

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Errors that can occur while running the stitched pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpairError {
    Fingerprint(FingerprintError),
    Search(SearchError),
}

impl fmt::Display for SimpairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpairError::Fingerprint(err) => write!(f, "fingerprinting failure: {err}"),
            SimpairError::Search(err) => write!(f, "pair search failure: {err}"),
        }
    }
}

impl Error for SimpairError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimpairError::Fingerprint(err) => Some(err),
            SimpairError::Search(err) => Some(err),
        }
    }
}

impl From<FingerprintError> for SimpairError {
    fn from(value: FingerprintError) -> Self {
        SimpairError::Fingerprint(value)
    }
}

impl From<SearchError> for SimpairError {
    fn from(value: SearchError) -> Self {
        SimpairError::Search(value)
    }
}

/// Metrics observer for the fingerprint and search stages.
pub trait SearchMetrics: Send + Sync {
    /// One document fingerprinted from `features` tokens.
    fn record_fingerprint(&self, latency: Duration, features: usize);
    /// One pair search completed; `result` carries the number of pairs
    /// found or the validation error.
    fn record_search(&self, latency: Duration, result: Result<usize, SearchError>);
}

/// Install or clear the global metrics recorder.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("search metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn SearchMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_fingerprint(self, features: usize) {
        self.recorder
            .record_fingerprint(self.start.elapsed(), features);
    }

    fn record_search(self, result: Result<usize, SearchError>) {
        self.recorder.record_search(self.start.elapsed(), result);
    }
}

/// Fingerprint one document given as a token stream.
///
/// Tokens are FNV-1a hashed and vote with weight 1 each; tokenization and
/// weighting policy live upstream of this crate.
pub fn fingerprint_document<T: AsRef<[u8]>>(tokens: &[T]) -> u64 {
    let span = MetricsSpan::start();
    let fp = fingerprint_tokens(tokens);
    if let Some(span) = span {
        span.record_fingerprint(tokens.len());
    }
    fp
}

/// Fingerprint a batch of token-stream documents and report every pair of
/// document indices within `cfg.max_bit_difference` differing bits.
///
/// The result is exact at `cfg.keybits == 0` and a recall-limited subset
/// otherwise; see [`SearchConfig::validate`] for the parameter contract.
pub fn find_near_duplicates<D, T>(
    documents: &[D],
    cfg: &SearchConfig,
) -> Result<Vec<(usize, usize)>, SimpairError>
where
    D: AsRef<[T]>,
    T: AsRef<[u8]>,
{
    cfg.validate()?;

    let fingerprints: Vec<u64> = documents
        .iter()
        .map(|doc| fingerprint_document(doc.as_ref()))
        .collect();
    tracing::debug!(documents = documents.len(), "fingerprinted document batch");

    let span = MetricsSpan::start();
    let result = find_similar_pairs(&fingerprints, cfg);
    if let Some(span) = span {
        span.record_search(result.as_ref().map(Vec::len).map_err(|err| err.clone()));
    }
    result.map_err(SimpairError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn pipeline_error_formats_and_sources() {
        let err = SimpairError::from(SearchError::RotateOutOfRange { rotate: 70 });
        assert!(err.to_string().contains("pair search failure"));
        assert!(err.source().is_some());

        let err = SimpairError::from(FingerprintError::ZeroWeight { index: 0 });
        assert!(err.to_string().contains("fingerprinting failure"));
    }

    #[derive(Default)]
    struct CountingMetrics {
        fingerprints: Mutex<usize>,
        searches: Mutex<usize>,
    }

    impl SearchMetrics for CountingMetrics {
        fn record_fingerprint(&self, _latency: Duration, _features: usize) {
            *self.fingerprints.lock().unwrap() += 1;
        }

        fn record_search(&self, _latency: Duration, result: Result<usize, SearchError>) {
            assert!(result.is_ok());
            *self.searches.lock().unwrap() += 1;
        }
    }

    #[test]
    fn metrics_recorder_observes_both_stages() {
        let recorder = Arc::new(CountingMetrics::default());
        set_search_metrics(Some(recorder.clone()));

        let documents = vec![vec!["a", "b", "c"], vec!["a", "b", "d"]];
        find_near_duplicates(&documents, &SearchConfig::exhaustive(64)).unwrap();

        set_search_metrics(None);

        assert_eq!(*recorder.fingerprints.lock().unwrap(), 2);
        assert_eq!(*recorder.searches.lock().unwrap(), 1);
    }
}
