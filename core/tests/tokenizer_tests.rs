use bagofwords::tokenizer::tokenize;

#[test]
fn it_lowercases_and_drops_pure_punctuation() {
    let body = "The ''Quick'' Brown [[Fox|fox]] -- jumps!! {{cite web|url=x}} Over &lt;ref&gt;x&lt;/ref&gt; it's LAZY dogs' ... bones";
    let words = tokenize(body);
    assert!(!words.is_empty());
    for w in &words {
        assert_eq!(w, &w.to_lowercase());
        assert!(!w.chars().all(|c| c.is_ascii_punctuation()), "punctuation-only token {w:?}");
    }
    assert!(words.contains(&"it's".to_string()));
    assert!(!words.contains(&"fox".to_string()));
}

#[test]
fn it_keeps_stopwords_and_does_not_stem() {
    let words = tokenize("The runners were running");
    assert_eq!(words, vec!["the", "runners", "were", "running"]);
}
