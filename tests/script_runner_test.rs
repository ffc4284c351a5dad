//! Tests for the command script runner.

use strictly_connect::{GameConfig, GameService, ScriptError, ScriptRunner, SequentialIds};

fn runner() -> ScriptRunner {
    ScriptRunner::new(GameService::new(
        GameConfig::default(),
        SequentialIds::new("game"),
    ))
}

#[test]
fn test_full_game_script() {
    let mut runner = runner();
    let script = r#"
# a stacks column 1, b stacks column 3
create a b
move - a 1
move - b 3
move - a 1
move - b 3
move - a 1
move - b 3
move - a 1
status game-0
moves - 0 1
get - 6
"#;

    let outputs: Vec<String> = runner
        .run_script(script)
        .into_iter()
        .map(|r| r.expect("every command succeeds"))
        .collect();

    assert_eq!(outputs.len(), 11);
    assert_eq!(outputs[0], r#"{"gameId":"game-0"}"#);
    assert_eq!(outputs[7], r#"{"move":"game-0/moves/6"}"#);
    assert_eq!(
        outputs[8],
        r#"{"players":["a","b"],"state":"DONE","winner":"a"}"#
    );
    assert_eq!(
        outputs[9],
        r#"{"moves":[{"type":"MOVE","player":"a","column":1},{"type":"MOVE","player":"b","column":3}]}"#
    );
    assert_eq!(outputs[10], r#"{"type":"MOVE","player":"a","column":1}"#);
}

#[test]
fn test_blank_and_comment_lines_skipped() {
    let mut runner = runner();
    assert!(runner.run_line("").expect("blank").is_none());
    assert!(runner.run_line("   # note").expect("comment").is_none());
    assert_eq!(
        runner.run_line("games").expect("valid").as_deref(),
        Some(r#"{"games":[]}"#)
    );
}

#[test]
fn test_errors_do_not_stop_the_run() {
    let mut runner = runner();
    let results = runner.run_script("status -\ncreate a b\nfly away\nmove - b 0\nquit - b\nboard -\n");

    assert_eq!(results.len(), 6);
    assert!(matches!(
        &results[0],
        Err(ScriptError::Syntax { line: 1, .. })
    ));
    assert!(results[1].is_ok());
    assert!(matches!(
        &results[2],
        Err(ScriptError::Syntax { line: 3, .. })
    ));
    match &results[3] {
        Err(ScriptError::Service(err)) => assert_eq!(err.message, "WRONG_TURN"),
        other => panic!("expected service error, got {:?}", other),
    }
    assert_eq!(results[4].as_deref().ok(), Some(r#""LEFT_GAME""#));
    assert_eq!(
        results[5].as_deref().ok(),
        Some(". . . .\n. . . .\n. . . .\n. . . .")
    );
}

#[test]
fn test_non_numeric_column_is_syntax_error() {
    let mut runner = runner();
    runner.run_line("create a b").expect("created");
    let err = runner.run_line("move - a left").unwrap_err();
    assert_eq!(err.to_string(), "line 2: column left is not a number");
}
