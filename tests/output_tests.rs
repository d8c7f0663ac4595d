use std::fs;
use tempfile::NamedTempFile;
use title_fix::{CaseResult, CaseType, Format, Options, Output, process};

fn write_results(results: &[CaseResult], format: Format) -> String {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let mut output = Output::file(temp_file.path()).expect("create output");
    output.write_results(results, format).expect("write results");
    drop(output);
    fs::read_to_string(temp_file.path()).expect("read output")
}

fn write_supported(format: Format) -> String {
    let temp_file = NamedTempFile::new().expect("create temp file");
    let mut output = Output::new(Some(temp_file.path())).expect("create output");
    output
        .write_supported_options(format)
        .expect("write supported options");
    drop(output);
    fs::read_to_string(temp_file.path()).expect("read output")
}

fn sample() -> Vec<CaseResult> {
    vec![
        process("this is a test title", &Options::default()),
        process(
            "hello world",
            &Options::default().with_case_type(CaseType::Upper),
        ),
    ]
}

#[test]
fn test_text_results() {
    assert_eq!(
        write_results(&sample(), Format::Text),
        "This Is a Test Title\nHELLO WORLD\n"
    );
}

#[test]
fn test_json_single_result_is_an_object() {
    let output = write_results(&sample()[..1], Format::Json);
    assert!(output.starts_with("{\"text\":\"This Is a Test Title\""));
    assert!(output.ends_with("}\n"));
}

#[test]
fn test_json_results_array() {
    let output = write_results(&sample(), Format::Json);
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("parse JSON");
    let results = parsed.as_array().expect("JSON array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["text"], "HELLO WORLD");
    assert!(results[1]["style"].is_null());
}

#[test]
fn test_csv_results() {
    assert_eq!(
        write_results(&sample(), Format::Csv),
        "text,wordCount,charCount,headlineScore,quickCopy,caseType,style\n\
         This Is a Test Title,5,20,30,true,TITLE,APA\n\
         HELLO WORLD,2,11,0,true,UPPER,\n"
    );
}

#[test]
fn test_supported_text() {
    assert_eq!(
        write_supported(Format::Text),
        "styles apa,chicago,ap,mla,nyt\ncase-types title,sentence,upper,lower,first,alt,toggle\n"
    );
}

#[test]
fn test_supported_json() {
    assert_eq!(
        write_supported(Format::Json),
        "{\"supportedStyles\":[\"apa\",\"chicago\",\"ap\",\"mla\",\"nyt\"],\"supportedCaseTypes\":[\"title\",\"sentence\",\"upper\",\"lower\",\"first\",\"alt\",\"toggle\"]}\n"
    );
}

#[test]
fn test_supported_csv() {
    let output = write_supported(Format::Csv);
    assert!(output.starts_with("kind,name\nstyle,apa\n"));
    assert!(output.ends_with("caseType,toggle\n"));
    assert_eq!(output.lines().count(), 13);
}

#[test]
fn test_output_dash_is_stdout() {
    assert!(Output::new(Some(std::path::Path::new("-"))).is_ok());
    assert!(Output::new(None).is_ok());
}

#[test]
fn test_output_file_in_missing_directory() {
    let result = Output::file(std::path::Path::new("/no/such/dir/out.txt"));
    assert!(result.is_err());
}

#[test]
fn test_write_chunk_to_writer() {
    let mut output = Output::from_writer(Vec::new());
    assert!(output.write_chunk("chunk").is_ok());
    assert!(output.flush().is_ok());
}
