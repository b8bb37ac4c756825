use std::collections::HashMap;
use std::path::Path;

use crate::counter::count_words;
use crate::extract::{extract, Document};
use crate::tokenizer::tokenize;
use crate::Result;

/// Relative term frequencies of one ingested document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProfile {
    pub title: String,
    pub total_tokens: usize,
    /// term -> count / total_tokens; empty for a document without tokens
    pub frequencies: HashMap<String, f64>,
}

/// Per-document profiles in ingestion order plus corpus-wide raw counts.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: Vec<DocumentProfile>,
    pub global_counts: HashMap<String, u64>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Extract, tokenize and count every source. The first unreadable source
    /// aborts the build.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut corpus = Self::new();
        for path in paths {
            let doc = extract(path)?;
            corpus.ingest(&doc);
        }
        tracing::info!(num_docs = corpus.len(), num_terms = corpus.global_counts.len(), "ingested documents");
        Ok(corpus)
    }

    pub fn from_documents<I: IntoIterator<Item = Document>>(docs: I) -> Self {
        docs.into_iter().fold(Self::new(), |mut acc, doc| {
            acc.ingest(&doc);
            acc
        })
    }

    pub fn ingest(&mut self, doc: &Document) {
        let counts = count_words(&tokenize(&doc.body));
        tracing::debug!(title = %doc.title, tokens = counts.total, "ingest document");
        for (term, &c) in counts.counts.iter() {
            *self.global_counts.entry(term.clone()).or_insert(0) += c;
        }
        self.documents.push(DocumentProfile {
            title: doc.title.clone(),
            total_tokens: counts.total,
            frequencies: counts.relative(),
        });
    }

    /// Titles aligned with document order. Duplicates and empty titles are kept.
    pub fn titles(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.title.clone()).collect()
    }

    /// Title-keyed view of the profiles. When titles repeat, the document
    /// ingested last wins.
    pub fn frequencies_by_title(&self) -> HashMap<&str, &HashMap<String, f64>> {
        let mut by_title = HashMap::new();
        for d in &self.documents {
            by_title.insert(d.title.as_str(), &d.frequencies);
        }
        by_title
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}
