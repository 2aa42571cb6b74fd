// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use dispendio::application::LedgerService;
use dispendio::cli::Shell;

/// Build a service pre-populated from raw "Название; Сумма" lines.
pub fn service_with_lines(lines: &[&str]) -> LedgerService {
    let mut service = LedgerService::new();
    for line in lines {
        service
            .add_expense(line)
            .unwrap_or_else(|e| panic!("fixture line {line:?} must parse: {e}"));
    }
    service
}

/// Drive a full shell session from scripted input, returning the captured
/// transcript. The script must end the session through the exit selector.
pub fn run_session(script: &str) -> String {
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(script.to_string()), &mut output);
    shell.run().expect("session script must run to completion");
    String::from_utf8(output).expect("transcript must be valid UTF-8")
}

/// The part of a transcript after the last occurrence of `marker`.
pub fn after_last<'a>(transcript: &'a str, marker: &str) -> &'a str {
    let position = transcript
        .rfind(marker)
        .unwrap_or_else(|| panic!("transcript must contain {marker:?}"));
    &transcript[position + marker.len()..]
}
