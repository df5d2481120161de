//! Round scenarios driven through the public engine API.

use tictactoe_core::{
    Board, DRAW, Engine, EngineConfig, EngineState, MoveError, Outcome, Player, Position,
    ScoredMove, Verdict, WIN, best_move,
};

#[test]
fn test_ai_opens_in_top_left_corner() {
    let mut engine = Engine::new(EngineConfig::vs_ai(Player::O));
    assert_eq!(engine.current_state(), EngineState::AwaitingAiMove);

    let mov = engine.run_ai_move().expect("AI has a move on an empty board");

    assert_eq!(mov.player, Player::X);
    assert_eq!(mov.index(), 0);
    assert_eq!(engine.current_state(), EngineState::AwaitingHumanMove);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_empty_board_scores_draw_for_every_opening() {
    let mut board = Board::new();
    let choice = best_move(&mut board, Player::X).unwrap();
    assert_eq!(choice, ScoredMove { index: 0, score: DRAW });
}

#[test]
fn test_ai_completes_its_own_line() {
    // A A . / B B . / . . .
    let mut board: Board = "XX.OO....".parse().unwrap();
    let choice = best_move(&mut board, Player::X).unwrap();
    assert_eq!(choice.index, 2);
    assert_eq!(choice.score, WIN);
}

#[test]
fn test_ai_blocks_at_lowest_optimal_index() {
    // B B . / A A . / . . .
    // Blocking at 2 also builds the 2-4-6 diagonal next to the open row,
    // a double threat, so the branch is a forced win and the earliest
    // winning index is kept.
    let mut board: Board = "OO.XX....".parse().unwrap();
    let choice = best_move(&mut board, Player::X).unwrap();
    assert_eq!(choice, ScoredMove { index: 2, score: WIN });
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(board.outcome(), Outcome::Draw);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_occupied_square_rejected_and_board_unchanged() {
    let mut engine = Engine::new(EngineConfig::two_player(Player::X));
    engine.submit_human_move(4).unwrap();
    let board_before = engine.board().clone();

    let result = engine.submit_human_move(4);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.to_move(), Player::O);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.current_state(), EngineState::AwaitingHumanMove);
}

#[test]
fn test_ai_survives_scripted_opponent() {
    let mut engine = Engine::new(EngineConfig::vs_ai(Player::X));

    engine.submit_human_move(1).unwrap();
    let first_reply = engine.run_ai_move().unwrap();
    assert_eq!(first_reply.player, Player::O);

    while engine.current_state() != EngineState::RoundOver {
        match engine.current_state() {
            EngineState::AwaitingHumanMove => {
                // Always play the highest free square, never blocking on purpose
                let index = *engine.legal_moves().last().unwrap();
                engine.submit_human_move(index).unwrap();
            }
            EngineState::AwaitingAiMove => {
                engine.run_ai_move().unwrap();
            }
            EngineState::RoundOver => unreachable!(),
        }
    }

    assert_ne!(engine.verdict(), Some(Verdict::HumanWins));
}

#[test]
fn test_two_player_round_to_draw() {
    let mut engine = Engine::new(EngineConfig::two_player(Player::O));
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(engine.current_state(), EngineState::AwaitingHumanMove);
        engine.submit_human_move(index).unwrap();
    }

    assert_eq!(engine.current_state(), EngineState::RoundOver);
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.verdict(), Some(Verdict::Draw));
    assert_eq!(engine.verdict().unwrap().to_string(), "It's a draw!");
}

#[test]
fn test_verdict_distinguishes_ai_win() {
    let mut engine = Engine::new(EngineConfig::vs_ai(Player::O));
    engine.run_ai_move().unwrap();
    // An edge next to the AI's corner loses by force
    engine.submit_human_move(1).unwrap();

    while engine.current_state() != EngineState::RoundOver {
        if engine.current_state() == EngineState::AwaitingAiMove {
            engine.run_ai_move().unwrap();
        } else {
            let index = engine.legal_moves()[0];
            engine.submit_human_move(index).unwrap();
        }
    }

    assert_eq!(engine.outcome(), Outcome::Won(Player::X));
    assert_eq!(engine.verdict(), Some(Verdict::AiWins));
    assert_eq!(engine.verdict().unwrap().to_string(), "AI wins!");
}

#[test]
fn test_commands_rejected_after_round_over() {
    let mut engine = Engine::new(EngineConfig::two_player(Player::X));
    for index in [0, 3, 1, 4, 2] {
        engine.submit_human_move(index).unwrap();
    }

    assert_eq!(engine.submit_human_move(5), Err(MoveError::RoundOver));
    assert_eq!(engine.run_ai_move(), Err(MoveError::RoundOver));

    engine.reset(EngineConfig::two_player(Player::X));
    assert_eq!(engine.current_state(), EngineState::AwaitingHumanMove);
    assert!(engine.submit_human_move(5).is_ok());
}

#[test]
fn test_move_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(
        MoveError::OutOfBounds(12).to_string(),
        "Position 12 is out of bounds (must be 0-8)"
    );
    assert_eq!(
        MoveError::OutOfTurn(EngineState::AwaitingAiMove).to_string(),
        "Move not accepted while awaiting the AI move"
    );
}
