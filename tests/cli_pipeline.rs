use std::io::{Cursor, Write};

use boyer_moore::input::{read_input, InputLimits, InputSource};
use boyer_moore::report::{render_json, render_text, Report};
use boyer_moore::{search, search_all, Error};
use tempfile::NamedTempFile;

fn run_pipeline(pattern: InputSource, text: InputSource, stdin: &str) -> boyer_moore::Result<String> {
    let mut stdin = Cursor::new(stdin.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let input = read_input(&pattern, &text, InputLimits::default(), &mut stdin, &mut stdout)?;
    let report = Report::new(&input.pattern, &input.text, search(&input.text, &input.pattern));
    Ok(render_text(&report, &input.text))
}

#[test]
fn test_files() {
    let mut pattern = NamedTempFile::new().unwrap();
    writeln!(pattern, "GATTACA").unwrap();
    let mut text = NamedTempFile::new().unwrap();
    writeln!(text, "CCGATTGATTACAGG").unwrap();

    let rendered = run_pipeline(
        InputSource::File(pattern.path().to_path_buf()),
        InputSource::File(text.path().to_path_buf()),
        "",
    )
    .unwrap();
    assert_eq!(rendered, "First match found at offset 6: GATTACAGG\n");
}

#[test]
fn test_prompted() {
    let rendered = run_pipeline(InputSource::Prompt, InputSource::Prompt, "abc\nzzabczz\n").unwrap();
    assert_eq!(rendered, "First match found at offset 2: abczz");
}

#[test]
fn test_mixed_sources_no_match() {
    let rendered = run_pipeline(
        InputSource::Literal(b"needle".to_vec()),
        InputSource::Prompt,
        "haystack\n",
    )
    .unwrap();
    assert_eq!(rendered, "No match found");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_pipeline(
        InputSource::File(dir.path().join("absent")),
        InputSource::Literal(b"text".to_vec()),
        "",
    );
    assert!(matches!(result, Err(Error::Io { what: "pattern", .. })));
}

#[test]
fn test_text_file_too_long() {
    let mut text = NamedTempFile::new().unwrap();
    text.write_all(&vec![b'a'; 2048]).unwrap();

    let mut stdin = Cursor::new(Vec::new());
    let mut stdout = Vec::new();
    let result = read_input(
        &InputSource::Literal(b"a".to_vec()),
        &InputSource::File(text.path().to_path_buf()),
        InputLimits::default(),
        &mut stdin,
        &mut stdout,
    );
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "text is 2048 bytes, longer than the limit of 1024");
}

#[test]
fn test_json_with_all_matches() {
    let text = b"abababab";
    let pattern = b"abab";
    let report = Report::new(pattern, text, search(text, pattern)).with_all(search_all(text, pattern));
    assert_eq!(
        render_json(&report).unwrap(),
        r#"{"pattern_len":4,"text_len":8,"outcome":"match","offset":0,"all":[0,2,4]}"#
    );
}
