use crate::error::Result;
use crate::index::TermCounts;
use crate::{DocumentId, SearchEngine};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Weights applied to the first two query terms when a query has more than one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankWeights {
    #[serde(default = "default_primary")]
    pub primary: f64,
    #[serde(default = "default_secondary")]
    pub secondary: f64,
}

fn default_primary() -> f64 { 0.6 }
fn default_secondary() -> f64 { 0.4 }

impl Default for RankWeights {
    fn default() -> Self {
        Self { primary: default_primary(), secondary: default_secondary() }
    }
}

/// Orders documents by weighted tf-idf, most relevant first.
///
/// A single query term scores `tf_idf(doc, t0)`. Two or more score
/// `primary * tf_idf(doc, t0) + secondary * tf_idf(doc, t1)`; terms past the
/// second do not contribute. Equal scores fall back to ascending id order, so the
/// result is fully deterministic. The ranker only reads from the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfRanker {
    weights: RankWeights,
}

impl TfIdfRanker {
    pub fn new(weights: RankWeights) -> Self { Self { weights } }

    pub fn weights(&self) -> RankWeights { self.weights }

    /// Relevance score of `id` for `terms`. An empty term list scores 0.
    pub fn score<S: AsRef<str>>(&self, engine: &SearchEngine, terms: &[S], id: &DocumentId) -> Result<f64> {
        let counts = engine.term_counts(id)?;
        Ok(self.weigh(terms, |term| engine.tf_idf_in(counts, term)))
    }

    /// Sort `candidates` by descending score, ties by ascending id.
    ///
    /// Fails with `UnknownDocument` if a candidate was never ingested.
    pub fn rank<S, I>(&self, engine: &SearchEngine, terms: &[S], candidates: I) -> Result<Vec<DocumentId>>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = DocumentId>,
    {
        let scored = candidates
            .into_iter()
            .map(|id| self.score(engine, terms, &id).map(|score| (id, score)))
            .collect::<Result<Vec<_>>>()?;
        Ok(into_ranked(scored))
    }

    /// Same order as [`rank`](Self::rank) for documents whose term counts are at hand.
    pub(crate) fn rank_indexed<'a, S, I>(&self, engine: &SearchEngine, terms: &[S], candidates: I) -> Vec<DocumentId>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (&'a DocumentId, &'a TermCounts)>,
    {
        let scored = candidates
            .into_iter()
            .map(|(id, counts)| (id.clone(), self.weigh(terms, |term| engine.tf_idf_in(counts, term))))
            .collect();
        into_ranked(scored)
    }

    fn weigh<S: AsRef<str>>(&self, terms: &[S], tf_idf: impl Fn(&str) -> f64) -> f64 {
        let score = match terms {
            [] => 0.0,
            [only] => tf_idf(only.as_ref()),
            [first, second, ..] => {
                self.weights.primary * tf_idf(first.as_ref()) + self.weights.secondary * tf_idf(second.as_ref())
            }
        };
        // -0.0 + 0.0 is +0.0, so signed zeros tie under total_cmp
        score + 0.0
    }
}

fn into_ranked(mut scored: Vec<(DocumentId, f64)>) -> Vec<DocumentId> {
    scored.sort_by(|(a_id, a), (b_id, b)| compare(*a, a_id, *b, b_id));
    scored.into_iter().map(|(id, _)| id).collect()
}

fn compare(a: f64, a_id: &DocumentId, b: f64, b_id: &DocumentId) -> Ordering {
    b.total_cmp(&a).then_with(|| a_id.cmp(b_id))
}
