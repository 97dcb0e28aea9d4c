use std::fs;

use cplx::{interpreter::state::core::State, run_script, session::Session};
use walkdir::WalkDir;

#[test]
fn transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "in"))
    {
        count += 1;
        let input_path = entry.path();
        let output_path = input_path.with_extension("out");

        let script = fs::read_to_string(input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path:?}: {e}"));
        let expected = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read {output_path:?}: {e}"));

        let transcript =
            run_script(&script).unwrap_or_else(|e| panic!("Session {input_path:?} failed: {e}"));
        assert_eq!(transcript, expected, "transcript of {input_path:?} differs");
    }

    assert!(count > 0, "No transcripts found in tests/transcripts");
}

fn assert_result(script: &str, result: &str) {
    let transcript = run_script(script).unwrap_or_else(|e| panic!("Script failed: {e}"));
    let needle = format!("Your result: {result}\n");
    assert!(transcript.contains(&needle),
            "expected {needle:?} in transcript:\n{transcript}");
}

#[test]
fn end_to_end_addition_then_exit() {
    let mut session = Session::new("B\n2+i2\n+\n1-i1\nA\n".as_bytes(), Vec::new());
    let turns = session.run().unwrap();

    assert_eq!(turns, 5);
    assert_eq!(session.state(), &State::Terminated);

    let transcript = String::from_utf8(session.into_output()).unwrap();
    assert!(transcript.contains("Your result: 3.000000+i1.000000\n"));
    assert!(transcript.ends_with("Bye\n"));
}

#[test]
fn arithmetic() {
    assert_result("B\n5+i3\n-\n2+i1\nA\n", "3.000000+i2.000000");
    assert_result("B\n1+i1\n*\n-2\nA\n", "-2.000000-i2.000000");
    assert_result("B\n3\n/\n2\nA\n", "1.500000+i0.000000");
    assert_result("B\n-3+i4\nmodulus\nA\n", "5.000000");
    assert_result("B\n-1\nARG\nA\n", "3.141593");
    assert_result("B\n-i\narg\nA\n", "-1.570796");
}

#[test]
fn windows_line_endings_are_accepted() {
    assert_result("B\r\n2+i2\r\n+\r\n1-i1\r\nA\r\n", "3.000000+i1.000000");
}

#[test]
fn session_continues_after_errors() {
    let transcript = run_script("?\n\nB\n1 1\nb\n1\n+\n1\na\n").unwrap();

    assert_eq!(transcript.matches("Error:Invalid Input\n").count(), 3);
    assert!(transcript.contains("Your result: 2.000000+i0.000000\n"));
    assert!(transcript.ends_with("Bye\n"));
}

#[test]
fn running_out_of_input_exits() {
    let mut session = Session::new("B\n2\n".as_bytes(), Vec::new());

    assert_eq!(session.run().unwrap(), 2);
    assert!(session.state().is_terminal());
}

#[test]
fn exit_right_away() {
    let transcript = run_script("A\nB\n").unwrap();
    assert!(transcript.starts_with("Hey, this is binary calculator"));
    assert!(transcript.ends_with("Bye\n"));
    assert!(!transcript.contains("Type complex number"));
}

#[test]
fn invalid_utf8_line_is_an_input_error() {
    let mut session = Session::new(&b"\xff\xfe\nB\n2\nmodulus\nA\n"[..], Vec::new());

    assert_eq!(session.run().unwrap(), 5);
    assert!(session.state().is_terminal());

    let transcript = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(transcript.matches("Error:Invalid Input\n").count(), 1);
    assert!(transcript.contains("Your result: 2.000000\n"));
}

#[test]
fn undefined_results_render_like_the_c_library() {
    assert_result("B\n0\narg\nA\n", "nan");
    assert_result("B\n1\n/\n0\nA\n", "inf+inan");
    assert_result("B\n-1-i1\n/\n0\nA\n", "-inf-iinf");
}
