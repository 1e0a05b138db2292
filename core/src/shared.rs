use crate::error::Result;
use crate::{DocumentId, SearchEngine, TfIdfRanker};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashSet;
use std::sync::Arc;

/// Thread-safe handle to a [`SearchEngine`].
///
/// Ingestion takes the exclusive lock; every read takes the shared lock, so a
/// reader never observes a half-ingested document. Clones share the same engine.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn from_engine(engine: SearchEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn ingest(&self, id: DocumentId, text: &str) {
        self.inner.write().ingest(id, text);
    }

    /// Owned copy of the matching set; the borrow cannot outlive the read guard.
    pub fn lookup_by_term(&self, term: &str) -> Option<HashSet<DocumentId>> {
        self.inner.read().lookup_by_term(term).cloned()
    }

    pub fn term_frequency(&self, id: &DocumentId, term: &str) -> Result<u32> {
        self.inner.read().term_frequency(id, term)
    }

    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        self.inner.read().inverse_document_frequency(term)
    }

    pub fn tf_idf(&self, id: &DocumentId, term: &str) -> Result<f64> {
        self.inner.read().tf_idf(id, term)
    }

    pub fn relevance_lookup<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocumentId> {
        self.inner.read().relevance_lookup(terms)
    }

    pub fn relevance_lookup_with<S: AsRef<str>>(&self, ranker: &TfIdfRanker, terms: &[S]) -> Vec<DocumentId> {
        self.inner.read().relevance_lookup_with(ranker, terms)
    }

    /// Hold the read lock across several queries for a consistent view.
    pub fn read(&self) -> RwLockReadGuard<'_, SearchEngine> {
        self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankWeights;
    use std::thread;

    #[test]
    fn concurrent_ingest_is_serialized() {
        let shared = SharedSearchEngine::new();
        thread::scope(|s| {
            for t in 0..4 {
                let handle = shared.clone();
                s.spawn(move || {
                    for i in 0..25 {
                        handle.ingest(DocumentId::new(format!("t{t}-{i}")), "common word");
                        handle.ingest(DocumentId::new("hot"), "common");
                    }
                });
            }
        });
        let engine = shared.read();
        assert_eq!(engine.document_count(), 101);
        assert_eq!(engine.term_frequency(&DocumentId::new("hot"), "common").unwrap(), 100);
        assert_eq!(shared_len(&engine, "common"), 101);
    }

    fn shared_len(engine: &SearchEngine, term: &str) -> usize {
        engine.lookup_by_term(term).map_or(0, HashSet::len)
    }

    #[test]
    fn clones_share_state() {
        let a = SharedSearchEngine::new();
        let b = a.clone();
        a.ingest(DocumentId::new("d1"), "The Cat sat.");
        assert_eq!(b.lookup_by_term("cat"), Some(HashSet::from([DocumentId::new("d1")])));
        assert_eq!(b.term_frequency(&DocumentId::new("d1"), "cat").unwrap(), 1);
        assert_eq!(b.relevance_lookup(&["sat"]), vec![DocumentId::new("d1")]);
        assert_eq!(b.inverse_document_frequency("cat"), 0.0);
        assert_eq!(b.tf_idf(&DocumentId::new("d1"), "cat").unwrap(), 0.0);
    }

    #[test]
    fn custom_ranker_is_forwarded() {
        let shared = SharedSearchEngine::new();
        shared.ingest(DocumentId::new("a"), "rust rust rust go");
        shared.ingest(DocumentId::new("b"), "go go go rust");
        shared.ingest(DocumentId::new("c"), "python");
        let flipped = TfIdfRanker::new(RankWeights { primary: 0.1, secondary: 0.9 });
        let ids = |v: Vec<DocumentId>| v.into_iter().map(|id| id.value().to_string()).collect::<Vec<_>>();
        assert_eq!(ids(shared.relevance_lookup(&["rust", "go"])), ["a", "b"]);
        assert_eq!(ids(shared.relevance_lookup_with(&flipped, &["rust", "go"])), ["b", "a"]);
    }
}
