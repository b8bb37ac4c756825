use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::{Error, Result};

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?s)<title>(.*?)</title>").expect("valid regex");
    // Attributes on the opening tag are allowed, e.g. <text xml:space="preserve">
    static ref TEXT_RE: Regex = Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid regex");
}

/// Title and raw body text pulled out of one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

/// Read a document from disk and extract its title and body.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| Error::ReadSource { path: path.to_path_buf(), source })?;
    Ok(extract_str(&content))
}

/// Same as [`extract`] for an arbitrary reader; `label` names the source in errors.
pub fn extract_from_reader<R: Read>(mut reader: R, label: &str) -> Result<Document> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Error::ReadSource { path: label.into(), source })?;
    Ok(extract_str(&content))
}

/// Extract from in-memory markup. Line breaks (`\n`, `\r\n` and lone `\r`) are
/// dropped before matching, every
/// title segment and every body segment is joined with a single space, and both
/// results are trimmed. Missing segments yield empty strings.
pub fn extract_str(content: &str) -> Document {
    let flat = content.replace(['\r', '\n'], "");
    Document {
        title: join_segments(&TITLE_RE, &flat),
        body: join_segments(&TEXT_RE, &flat),
    }
}

fn join_segments(re: &Regex, haystack: &str) -> String {
    let segments: Vec<&str> = re
        .captures_iter(haystack)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    segments.join(" ").trim().to_string()
}
