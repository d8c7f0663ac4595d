use title_fix::{CaseResult, CaseType, Options, Processing, Style, process, process_lines};

#[test]
fn test_empty_for_every_case_type() {
    for case_type in CaseType::ALL {
        let result = process("", &Options::default().with_case_type(case_type));
        assert_eq!(result.text(), "", "{case_type}");
        assert_eq!(result.word_count(), 0);
        assert_eq!(result.char_count(), 0);
        assert_eq!(result.headline_score(), 0);
    }
}

#[test]
fn test_whitespace_only() {
    let result = process("   ", &Options::default());
    assert_eq!(result.text(), "");
    assert_eq!(result.word_count(), 0);
    assert_eq!(result.char_count(), 3);
}

#[test]
fn test_counts_use_original_text() {
    let result = process("  hello   world  ", &Options::default());
    assert_eq!(result.text(), "Hello World");
    assert_eq!(result.word_count(), 2);
    assert_eq!(result.char_count(), 17);
}

#[test]
fn test_char_count_is_unicode_scalars() {
    let result = process("naïve café", &Options::default());
    assert_eq!(result.char_count(), 10);
}

#[test]
fn test_style_only_for_title() {
    let options = Options::default().with_style(Style::Nyt);
    let result = process("hello", &options);
    assert_eq!(result.style(), Some(Style::Nyt));
    assert_eq!(result.style_label(), Some("NYT"));
    assert_eq!(result.case_type_label(), "TITLE");

    let result = process("hello", &options.with_case_type(CaseType::Lower));
    assert_eq!(result.style(), None);
    assert_eq!(result.style_label(), None);
    assert_eq!(result.case_type_label(), "LOWER");
}

#[test]
fn test_quick_copy_is_echoed() {
    assert!(process("x", &Options::default()).quick_copy());
    assert!(!process("x", &Options::default().with_quick_copy(false)).quick_copy());
}

#[test]
fn test_into_text() {
    let result = process("the end", &Options::default());
    assert_eq!(result.into_text(), "The End");
}

#[test]
fn test_serialize_json() {
    let result = process("this is a test title", &Options::default());
    let json = serde_json::to_string(&result).expect("serialize result");
    assert_eq!(
        json,
        r#"{"text":"This Is a Test Title","wordCount":5,"charCount":20,"headlineScore":30,"quickCopy":true,"caseType":"TITLE","style":"APA"}"#
    );
}

#[test]
fn test_serialize_json_without_style() {
    let options = Options::default().with_case_type(CaseType::Upper);
    let json = serde_json::to_value(process("hi", &options)).expect("serialize result");
    assert_eq!(json["caseType"], "UPPER");
    assert!(json["style"].is_null());
}

#[test]
fn test_process_lines_sequential() {
    let results = process_lines("first test\n\nsecond test\n", &Options::default());
    let texts: Vec<_> = results.iter().map(CaseResult::text).collect();
    assert_eq!(texts, ["First Test", "", "Second Test"]);
}

#[test]
fn test_process_lines_parallel_matches_sequential() {
    let text = (0..200)
        .map(|n| format!("line number {n} of the batch"))
        .collect::<Vec<_>>()
        .join("\n");
    let sequential = process_lines(&text, &Options::default());
    let parallel = process_lines(
        &text,
        &Options::default().with_processing(Processing::Parallel),
    );
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.len(), 200);
}

#[test]
fn test_process_lines_handles_crlf() {
    let results = process_lines("one\r\ntwo", &Options::default());
    let texts: Vec<_> = results.iter().map(CaseResult::text).collect();
    assert_eq!(texts, ["One", "Two"]);
}
