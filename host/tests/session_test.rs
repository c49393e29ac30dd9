// End-to-end tests driving the frame protocol through a whole session.
use host::{parse_config, parse_frame, run_session, Command, HostError, Session, Step};
use pong_core::{GameConfig, HandObservation, Phase, Side, Snapshot};

fn run(input: &str) -> (host::SessionSummary, Vec<Snapshot>) {
    let mut out = Vec::new();
    let summary = run_session(GameConfig::default(), input.as_bytes(), &mut out)
        .unwrap_or_else(|e| panic!("Session failed: {}", e));

    let text = String::from_utf8(out).expect("Output should be UTF-8");
    let snapshots = text
        .lines()
        .map(|l| serde_json::from_str::<Snapshot>(l).unwrap_or_else(|e| panic!("Bad snapshot {}: {}", l, e)))
        .collect();
    (summary, snapshots)
}

#[test]
fn test_one_snapshot_per_frame() {
    let input = "{}\n{\"hands\":[]}\n\n{\"hands\":[{\"type\":\"Left\",\"bbox\":[10,340,90,90]}]}\n";

    let (summary, snapshots) = run(input);

    assert_eq!(snapshots.len(), 3, "Blank lines are not frames");
    assert_eq!(summary.frames, 3);
    assert!(!summary.quit);
    assert_eq!(snapshots[0].ball.x, 115);
    assert_eq!(snapshots[2].frame, 3);
    assert_eq!(snapshots[2].ball.x, 145);
    assert!(snapshots[2].left_paddle.tracked);
    assert_eq!(snapshots[2].left_paddle.y_top, 280);
    assert!(!snapshots[2].right_paddle.tracked);
}

#[test]
fn test_malformed_hands_are_skipped() {
    let input = concat!(
        r#"{"hands":[{"type":"Middle","bbox":[0,0,1,1]},{"type":"Right"},{"type":"Left","bbox":"oops"},42,"#,
        r#"{"type":"right","bbox":[0,300,80,80]}]}"#,
        "\n"
    );

    let (_, snapshots) = run(input);

    assert_eq!(snapshots.len(), 1);
    assert!(!snapshots[0].left_paddle.tracked);
    assert!(snapshots[0].right_paddle.tracked);
    assert_eq!(snapshots[0].right_paddle.y_top, 240);
}

#[test]
fn test_quit_stops_reading() {
    let input = "{}\n{\"command\":\"quit\"}\n{}\n{}\n";

    let (summary, snapshots) = run(input);

    assert!(summary.quit);
    assert_eq!(summary.frames, 2, "Quit frame still ticks");
    assert_eq!(snapshots.len(), 2);
}

#[test]
fn test_game_over_then_reset() {
    // 100 -> 1210 takes 74 frames at +15; the 75th frame ends the round.
    let mut input = String::new();
    for _ in 0..80 {
        input.push_str("{}\n");
    }
    input.push_str("{\"command\":\"r\"}\n{}\n");

    let (summary, snapshots) = run(&input);

    let first_over = snapshots
        .iter()
        .position(|s| s.phase == Phase::GameOver)
        .expect("Round should end");
    let frozen = snapshots[first_over].ball;
    for snap in &snapshots[first_over..80] {
        assert_eq!(snap.phase, Phase::GameOver);
        assert_eq!(snap.ball, frozen, "Ball should stay frozen after game over");
        assert_eq!(snap.game_over.as_ref().map(|g| g.display.as_str()), Some("00"));
    }

    let after_reset = &snapshots[80];
    assert_eq!(after_reset.phase, Phase::Playing);
    assert_eq!((after_reset.ball.x, after_reset.ball.y), (100, 100));
    assert!(after_reset.game_over.is_none());
    assert_eq!((snapshots[81].ball.x, snapshots[81].ball.y), (115, 115));

    assert_eq!(summary.resets, 1);
    assert_eq!(summary.final_phase, Phase::Playing);
}

#[test]
fn test_invalid_line_reports_line_number() {
    let input = "{}\n\nnot json\n";
    let mut out = Vec::new();

    let err = run_session(GameConfig::default(), input.as_bytes(), &mut out)
        .expect_err("Garbage line should fail");

    match err {
        HostError::Protocol { line, .. } => assert_eq!(line, 3),
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

#[test]
fn test_parse_frame_commands() {
    let frame = parse_frame(r#"{"command":"RESET"}"#).unwrap().unwrap();
    assert_eq!(frame.command, Some(Command::Reset));

    let frame = parse_frame(r#"{"command":"q"}"#).unwrap().unwrap();
    assert_eq!(frame.command, Some(Command::Quit));

    let frame = parse_frame(r#"{"command":"jump"}"#).unwrap().unwrap();
    assert_eq!(frame.command, None, "Unknown commands are ignored");

    assert!(parse_frame("   ").unwrap().is_none());
}

#[test]
fn test_session_applies_command_after_tick() {
    let mut session = Session::new(GameConfig::default());
    let frame = host::Frame {
        observations: vec![HandObservation::new(Side::Left, [0, 340, 50, 50])],
        command: Some(Command::Reset),
    };

    let (report, step) = session.handle(&frame);

    assert_eq!(step, Step::Continue);
    assert!(report.ball_moved);
    assert_eq!(session.state().ball.position.x, 100, "Reset runs after the move");
    assert_eq!(session.state().paddle(Side::Left).y_top, 280);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_config(r#"{"paddle_height": 200, "latch_contacts": true}"#).unwrap();

    assert_eq!(config.paddle_height, 200);
    assert!(config.latch_contacts);
    assert_eq!(config.paddle_width, 50);
    assert_eq!(config.ball_start, (100, 100));
    assert_eq!(config.out_right, 1200);
}
