use std::io::Write;
use tempfile::NamedTempFile;
use title_fix::{Error, Input};

#[test]
fn test_new_dash_is_stdin() {
    assert_eq!(Input::new("-"), Input::Stdin);
    assert_eq!(Input::default(), Input::Stdin);
}

#[test]
fn test_read_bytes() {
    let input = Input::from_bytes("naïve title");
    assert_eq!(input.read_to_string().expect("read bytes"), "naïve title");
    assert_eq!(input.size(), Some(12));
    assert_eq!(input.source(), "<bytes>");
    assert_eq!(input.to_string(), "Bytes");
}

#[test]
fn test_invalid_utf8() {
    let input = Input::from_bytes([b'o', b'k', 0xFF, b'!']);
    let error = input.read_to_string().expect_err("invalid UTF-8");
    assert!(matches!(error, Error::Utf8 { byte: 2, .. }));
}

#[test]
fn test_read_file() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"the art of war").expect("write temp file");

    let input = Input::new(file.path());
    assert_eq!(input.read_to_string().expect("read file"), "the art of war");
    assert_eq!(input.size(), Some(14));

    let name = file
        .path()
        .file_name()
        .and_then(|name| name.to_str())
        .expect("temp file name");
    assert_eq!(input.source(), name);
}

#[test]
fn test_missing_file() {
    let input = Input::new("no_such_file.txt");
    assert_eq!(input.size(), None);
    assert_eq!(input.source(), "no_such_file.txt");

    let error = input.read_to_string().expect_err("missing file");
    assert!(matches!(error, Error::Io { .. }));
    assert_eq!(error.to_string(), "no such file: no_such_file.txt");
}

#[test]
fn test_display() {
    assert_eq!(Input::Stdin.to_string(), "Stdin");
    assert_eq!(Input::new("titles.txt").to_string(), "File(titles.txt)");
}
