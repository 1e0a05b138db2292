use docrank_core::tokenizer::{normalize_token, tokenize};

#[test]
fn it_lowercases_and_trims_punctuation() {
    let words = tokenize("Running, RUNNER'S run! The café's menu.");
    assert_eq!(words, ["running", "runner's", "run", "the", "café's", "menu"]);
}

#[test]
fn it_keeps_stopwords_and_does_not_stem() {
    let words = tokenize("The quick brown fox and the lazy dogs");
    assert!(words.contains(&"the".to_string()));
    assert!(words.contains(&"and".to_string()));
    assert!(words.contains(&"dogs".to_string()));
}

#[test]
fn it_strips_trailing_before_leading() {
    // apostrophes survive the trailing pass, leading ones go in the second pass
    assert_eq!(normalize_token("--"), "");
    assert_eq!(normalize_token("9'a'"), "a'");
    assert_eq!(normalize_token("12abc34"), "abc");
}

#[test]
fn it_splits_on_any_whitespace_run() {
    let words = tokenize("alpha\t\tbeta\n\ngamma  ");
    assert_eq!(words, ["alpha", "beta", "gamma"]);
}

#[test]
fn it_keeps_an_empty_token_for_leading_whitespace() {
    assert_eq!(tokenize(" cat"), ["", "cat"]);
    assert_eq!(tokenize("  alpha\tbeta  "), ["", "alpha", "beta"]);
}

#[test]
fn it_treats_empty_and_blank_text_differently() {
    assert_eq!(tokenize(""), [""]);
    assert!(tokenize("   ").is_empty());
}

#[test]
fn it_does_not_split_on_no_break_space() {
    assert_eq!(tokenize("a\u{a0}b"), ["a\u{a0}b"]);
}

#[test]
fn it_yields_empty_terms_for_symbol_tokens() {
    assert_eq!(tokenize("!!! ..."), ["", ""]);
}
