use std::collections::HashMap;

/// Token total and per-term occurrence counts for one token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    pub total: usize,
    pub counts: HashMap<String, u64>,
}

impl WordCounts {
    /// Counts divided by the token total. Empty when there are no tokens.
    pub fn relative(&self) -> HashMap<String, f64> {
        if self.total == 0 {
            return HashMap::new();
        }
        let n = self.total as f64;
        self.counts.iter().map(|(term, &c)| (term.clone(), c as f64 / n)).collect()
    }
}

pub fn count_words<S: AsRef<str>>(words: &[S]) -> WordCounts {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for w in words {
        *counts.entry(w.as_ref().to_string()).or_insert(0) += 1;
    }
    WordCounts { total: words.len(), counts }
}
