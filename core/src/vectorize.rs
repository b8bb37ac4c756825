use ndarray::Array2;
use std::collections::HashMap;

use crate::corpus::Corpus;
use crate::neighbors::nearest_neighbors;
use crate::Result;

/// Ordered column terms of a document-term matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// The `k` most frequent terms by descending count, ties by ascending term.
    pub fn top_k(global_counts: &HashMap<String, u64>, k: usize) -> Self {
        let mut ranked: Vec<(&String, u64)> = global_counts.iter().map(|(t, &c)| (t, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(k);
        Self { terms: ranked.into_iter().map(|(t, _)| t.clone()).collect() }
    }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

/// Dense relative-frequency matrix. Row i belongs to `titles[i]`, column j to
/// `vocabulary.terms()[j]`.
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    pub titles: Vec<String>,
    pub vocabulary: Vocabulary,
    pub matrix: Array2<f64>,
}

impl DocumentTermMatrix {
    pub fn nearest_neighbors(&self, title: &str, num_neighbors: usize) -> Result<Vec<String>> {
        nearest_neighbors(&self.matrix, &self.titles, title, num_neighbors)
    }

    pub fn num_documents(&self) -> usize { self.matrix.nrows() }
}

/// Build one row per document in ingestion order over the top `num_words`
/// corpus terms. Terms a document lacks stay 0.
pub fn encode_word_counts(corpus: &Corpus, num_words: usize) -> DocumentTermMatrix {
    let vocabulary = Vocabulary::top_k(&corpus.global_counts, num_words);
    let mut matrix = Array2::<f64>::zeros((corpus.len(), vocabulary.len()));
    for (i, doc) in corpus.documents.iter().enumerate() {
        for (j, term) in vocabulary.terms().iter().enumerate() {
            if let Some(&f) = doc.frequencies.get(term) {
                matrix[[i, j]] = f;
            }
        }
    }
    tracing::info!(rows = matrix.nrows(), cols = matrix.ncols(), "encoded document-term matrix");
    DocumentTermMatrix { titles: corpus.titles(), vocabulary, matrix }
}
