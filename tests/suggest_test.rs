//! Tests for the one-shot suggestion command.

use tictactoe::{Suggestion, suggest};
use tictactoe_core::{Board, Player};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_suggest_takes_the_win() {
    let suggestion = suggest(&board("XX.OO...."), Player::X);
    assert_eq!(
        suggestion,
        Suggestion::Move {
            index: 2,
            position: "Top-right".to_string(),
            score: 1,
        }
    );
}

#[test]
fn test_suggest_blocks_a_threat() {
    let suggestion = suggest(&board("XX..O...."), Player::O);
    assert!(matches!(suggestion, Suggestion::Move { index: 2, score: 0, .. }));
}

#[test]
fn test_suggest_reports_finished_board() {
    let suggestion = suggest(&board("XXXOO...."), Player::O);
    assert_eq!(
        suggestion,
        Suggestion::Finished {
            outcome: "Player X wins".to_string()
        }
    );
}

#[test]
fn test_suggest_does_not_mutate_input() {
    let original = board("X.O.X....");
    let _ = suggest(&original, Player::O);
    assert_eq!(original, board("X.O.X...."));
}

#[test]
fn test_json_shape() {
    let json = serde_json::to_value(suggest(&board("XX.OO...."), Player::X)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "index": 2, "position": "Top-right", "score": 1 })
    );

    let json = serde_json::to_value(suggest(&board("XOXXOOOXX"), Player::X)).unwrap();
    assert_eq!(json, serde_json::json!({ "outcome": "Draw" }));
}

#[test]
fn test_text_form() {
    let text = suggest(&board("XX.OO...."), Player::X).to_string();
    assert_eq!(text, "Play square 3 (Top-right) - forced win (score 1)");
}
