use super::*;

#[test]
fn test_heuristic_estimation() {
    let counter = HeuristicCounter;
    assert_eq!(counter.count("").unwrap(), 1); // Minimum of 1
    assert_eq!(counter.count("test").unwrap(), 1); // 4 bytes = 1 token
    assert_eq!(counter.count(&"x".repeat(8000)).unwrap(), 2000);
}

#[test]
fn test_heuristic_counts_single_chars_as_one() {
    let counter = HeuristicCounter;
    for ch in ["a", "。", "字", "\n"] {
        assert_eq!(counter.count(ch).unwrap(), 1);
    }
}

#[test]
fn test_tiktoken_counter_for_known_model() {
    let counter = TiktokenCounter::for_model(DEFAULT_MODEL).unwrap();
    assert!(counter.count("a").unwrap() >= 1);

    // More text can only mean more tokens under the same encoding.
    let short = counter.count("Hello world").unwrap();
    let long = counter
        .count("Hello world, this is a much longer sentence about nothing.")
        .unwrap();
    assert!(long > short);
}

#[test]
fn test_tiktoken_counter_unknown_model() {
    assert!(TiktokenCounter::for_model("not-a-real-model").is_err());
}

#[test]
fn test_default_counter_resolves() {
    let counter = default_counter().unwrap();
    assert!(counter.count("hello").unwrap() >= 1);
}
