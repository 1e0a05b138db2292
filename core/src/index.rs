use crate::error::{EngineError, Result};
use crate::rank::TfIdfRanker;
use crate::tokenizer::tokenize;
use crate::DocumentId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// term -> occurrence count within one document
pub(crate) type TermCounts = HashMap<String, u32>;

/// In-memory inverted index with tf-idf scoring.
///
/// Append-only: documents can be ingested (repeatedly) but never removed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchEngine {
    /// term -> documents containing it
    inverted: HashMap<String, HashSet<DocumentId>>,
    /// document -> term -> occurrence count
    forward: HashMap<DocumentId, TermCounts>,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    /// Index `text` under `id`.
    ///
    /// Counts accumulate across repeated calls for the same id. A document whose
    /// text yields no tokens is still registered and counts towards the corpus size.
    pub fn ingest(&mut self, id: DocumentId, text: &str) {
        let terms = tokenize(text);
        let counts = self.forward.entry(id.clone()).or_default();
        for term in &terms {
            self.inverted.entry(term.clone()).or_default().insert(id.clone());
            *counts.entry(term.clone()).or_insert(0) += 1;
        }
        tracing::debug!(document = %id.value(), tokens = terms.len(), distinct_terms = counts.len(), "ingested document");
    }

    /// Documents containing `term`. Only case-folds the query; punctuation is not
    /// stripped the way ingestion strips it.
    pub fn lookup_by_term(&self, term: &str) -> Option<&HashSet<DocumentId>> {
        self.inverted.get(&term.to_lowercase())
    }

    /// Occurrences of `term` (case-folded, otherwise used as given) in document `id`.
    pub fn term_frequency(&self, id: &DocumentId, term: &str) -> Result<u32> {
        let counts = self.term_counts(id)?;
        Ok(frequency_in(counts, term))
    }

    /// Smoothed idf: `ln((1 + N) / (1 + M))` with N documents in the corpus and M
    /// of them containing `term`.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let n = self.forward.len() as f64;
        let m = self.inverted.get(&term.to_lowercase()).map_or(0, HashSet::len) as f64;
        ((1.0 + n) / (1.0 + m)).ln()
    }

    pub fn tf_idf(&self, id: &DocumentId, term: &str) -> Result<f64> {
        let counts = self.term_counts(id)?;
        Ok(self.tf_idf_in(counts, term))
    }

    pub(crate) fn term_counts(&self, id: &DocumentId) -> Result<&TermCounts> {
        self.forward
            .get(id)
            .ok_or_else(|| EngineError::UnknownDocument(id.clone()))
    }

    pub(crate) fn tf_idf_in(&self, counts: &TermCounts, term: &str) -> f64 {
        self.inverse_document_frequency(term) * f64::from(frequency_in(counts, term))
    }

    /// Rank every document matching at least one of `terms`, most relevant first,
    /// with the default [`TfIdfRanker`].
    ///
    /// Terms are matched exactly against indexed keys, without case-folding.
    pub fn relevance_lookup<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocumentId> {
        self.relevance_lookup_with(&TfIdfRanker::default(), terms)
    }

    pub fn relevance_lookup_with<S: AsRef<str>>(&self, ranker: &TfIdfRanker, terms: &[S]) -> Vec<DocumentId> {
        let mut candidates: HashSet<&DocumentId> = HashSet::new();
        for term in terms {
            if let Some(docs) = self.inverted.get(term.as_ref()) {
                candidates.extend(docs);
            }
        }
        tracing::trace!(terms = terms.len(), candidates = candidates.len(), "relevance lookup");
        // every inverted-index member has a forward entry
        let indexed = candidates.into_iter().filter_map(|id| self.forward.get_key_value(id));
        ranker.rank_indexed(self, terms, indexed)
    }

    pub fn document_count(&self) -> usize { self.forward.len() }

    pub fn term_count(&self) -> usize { self.inverted.len() }

    pub fn contains_document(&self, id: &str) -> bool { self.forward.contains_key(id) }
}

fn frequency_in(counts: &TermCounts, term: &str) -> u32 {
    counts.get(&term.to_lowercase()).copied().unwrap_or(0)
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inverted: BTreeMap<&str, BTreeSet<&DocumentId>> = self
            .inverted
            .iter()
            .map(|(term, docs)| (term.as_str(), docs.iter().collect()))
            .collect();
        let forward: BTreeMap<&DocumentId, BTreeMap<&str, u32>> = self
            .forward
            .iter()
            .map(|(id, counts)| (id, counts.iter().map(|(t, c)| (t.as_str(), *c)).collect()))
            .collect();

        writeln!(f, "Term to doc id map:")?;
        f.write_str("{")?;
        for (i, (term, docs)) in inverted.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{term}=[")?;
            for (j, id) in docs.iter().enumerate() {
                if j > 0 { f.write_str(", ")?; }
                write!(f, "{id}")?;
            }
            f.write_str("]")?;
        }
        writeln!(f, "}}")?;

        writeln!(f, "Doc id to term frequency map: ")?;
        f.write_str("{")?;
        for (i, (id, counts)) in forward.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{id}={{")?;
            for (j, (term, count)) in counts.iter().enumerate() {
                if j > 0 { f.write_str(", ")?; }
                write!(f, "{term}={count}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}
