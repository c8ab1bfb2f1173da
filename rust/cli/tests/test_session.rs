//! Full interactive sessions driven end to end from scripted input.

use std::io::Cursor;

use nim_ai::create_strategy;
use nim_cli::Vs;
use nim_cli::session::Session;
use nim_engine::game::GameState;
use nim_engine::logger::MatchRecord;

fn fixed_game(piles: [u8; 3]) -> GameState {
    let mut game = GameState::new(Some(3));
    game.set_piles(piles).unwrap();
    game.set_player1_turn(true);
    game
}

fn run_session(game: GameState, preset: Option<Vs>, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    {
        let mut session = Session::new(game, create_strategy("optimal"), &mut input, &mut out);
        session.run(preset).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn human_match_plays_to_a_win_and_returns_to_the_opponent_prompt() {
    let output = run_session(
        fixed_game([1, 1, 0]),
        None,
        "human\ntake 1 1\nname Alice\n1 2\nexit\n",
    );

    assert!(output.contains("Welcome to the interactive NIM"));
    assert!(output.contains("Would you like to play against a CPU or a human? {cpu|human}"));
    assert!(output.contains("----"));
    assert!(output.contains("  1  1  0"));
    // Rename applies to the side holding the turn.
    assert!(output.contains("Alice> "));
    assert!(output.contains("  Congratulations, Alice! You have won!"));
    // Back at the opponent prompt for the next match.
    assert_eq!(output.matches("{cpu|human}").count(), 2);
}

#[test]
fn cpu_match_announces_moves_and_plays_the_nim_sum() {
    let output = run_session(
        fixed_game([1, 2, 3]),
        Some(Vs::Cpu),
        "take 1 3\ntake 2 2\nexit\n",
    );

    // (1,2,2) has nim-sum 1; the reply clears pile 1 to restore zero.
    assert!(output.contains("cpu> take 1 from 1"));
    // (0,0,2) leaves only the final clearing move.
    assert!(output.contains("cpu> take 2 from 3"));
    assert!(output.contains("  The CPU has won the game."));
    assert!(!output.contains("Congratulations"));
}

#[test]
fn preset_opponent_skips_the_first_prompt_only() {
    let output = run_session(fixed_game([1, 0, 0]), Some(Vs::Human), "take 1 1\nexit\n");

    let win = output.find("Congratulations").expect("match completes");
    let prompt = output.find("{cpu|human}").expect("later matches prompt");
    assert!(prompt > win);
}

#[test]
fn opponent_prompt_reports_errors_and_retries() {
    let output = run_session(
        fixed_game([1, 1, 0]),
        None,
        "alien\ncpu human\nhuman\nrq\n",
    );

    assert!(output.contains("> ArgumentError: Expected one of {cpu,human}. Got 'alien'."));
    assert!(output.contains("> ArgumentError: Expected only 1 argument, one of {cpu,human}."));
    // The retry succeeded and a match actually started.
    assert!(output.contains("----"));
}

#[test]
fn user_errors_stay_inside_the_match_loop() {
    let output = run_session(
        fixed_game([1, 1, 0]),
        Some(Vs::Human),
        "take 5 1\nbogus\ntake 1 1\n1 2\nexit\n",
    );

    assert!(output.contains("> RangeError: Expected <number> in range [1, pile length (1)], got '5'."));
    assert!(output.contains("> SyntaxError: Command 'bogus' not found."));
    assert!(output.contains("Congratulations"));
}

#[test]
fn restart_without_arguments_falls_back_to_the_opponent_prompt() {
    let output = run_session(fixed_game([1, 1, 0]), None, "human\nrestart\nexit\n");
    assert_eq!(output.matches("{cpu|human}").count(), 2);
    assert!(!output.contains("Congratulations"));
}

#[test]
fn eof_mid_match_terminates_cleanly() {
    let output = run_session(fixed_game([1, 1, 0]), None, "human\n");
    assert!(output.contains("----"));
}

#[test]
fn completed_matches_are_appended_to_the_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.jsonl");

    let mut input = Cursor::new(b"human\ntake 1 1\n1 2\nexit\n".to_vec());
    let mut out = Vec::new();
    {
        let mut session = Session::new(
            fixed_game([1, 1, 0]),
            create_strategy("optimal"),
            &mut input,
            &mut out,
        );
        session.set_transcript(Some(path.clone()));
        session.run(None).unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1, "only the completed match is recorded");

    let record: MatchRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record.seed, 3);
    assert!(!record.vs_cpu);
    assert_eq!(record.winner.as_deref(), Some("player2"));
    assert_eq!(record.moves.len(), 2);
    assert_eq!(record.moves[0].actor, "player1");
    assert_eq!(record.moves[0].amount, 1);
    assert_eq!(record.moves[0].pile, 1);
    assert_eq!(record.moves[1].piles_after, [0, 0, 0]);
}
