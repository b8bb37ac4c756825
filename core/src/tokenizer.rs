use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Applied in this order; every pattern is non-greedy and leftmost-first.
    static ref NOISE: Vec<Regex> = [
        r"(?s)\{\{.*?\}\}",
        r"(?s)\{.*?\}",
        r"(?s)\{\|.*?\|\}",
        r"(?s)\[\[.*?\]\]",
        r"(?s)\[.*?\]",
        r"(?s)<.*?>",
        r"(?s)&lt;.*?&gt;",
        // definition-list marker, does not cross newlines
        r":.*?:\|",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect();
}

/// Raw text in, filtered text out. Runs on already lower-cased input.
pub trait TextFilter {
    fn filter(&self, text: &str) -> String;
}

/// Best-effort lexical removal of wiki markup spans. Nesting and balance are not
/// tracked, so unbalanced markup can leave residue behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiMarkupFilter;

impl TextFilter for WikiMarkupFilter {
    fn filter(&self, text: &str) -> String {
        NOISE
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
    }
}

/// Lower-case, strip markup noise and punctuation, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(&WikiMarkupFilter, text)
}

pub fn tokenize_with<F: TextFilter + ?Sized>(filter: &F, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let filtered = filter.filter(&lowered).replace("\\t", " ");
    strip_punctuation(&filtered)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Replace ASCII punctuation with a space. A punctuation character followed by
/// `s` or `t` and then whitespace is kept on purpose, so contractions and
/// possessives such as "don't " and "it's " survive as one token. The rule also
/// catches any other punctuation in that position; that is intended.
fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_punctuation() && !keeps_punctuation(&chars, i) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

fn keeps_punctuation(chars: &[char], i: usize) -> bool {
    matches!(chars.get(i + 1), Some('s') | Some('t'))
        && chars.get(i + 2).is_some_and(|c| c.is_whitespace())
}
