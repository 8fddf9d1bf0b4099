//! Exhaustive checks over every board reachable in legal play.

use arcade_tictactoe::rules::{LINES, check_winner, is_draw};
use arcade_tictactoe::{Board, MoveSelector, Outcome, Player, Square, evaluate};
use std::collections::HashSet;

/// Visits every board reachable from the empty board with X moving first,
/// stopping at terminal positions.
fn reachable() -> HashSet<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if evaluate(&board).is_terminal() {
            seen.insert(board);
            return;
        }
        if !seen.insert(board.clone()) {
            return;
        }
        for pos in board.empty_positions() {
            let mut next = board.clone();
            next.set(pos, to_move).unwrap();
            walk(next, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Player::X, &mut seen);
    seen
}

fn winners(board: &Board) -> HashSet<Player> {
    LINES
        .iter()
        .filter_map(|line| {
            let [a, b, c] = line.positions();
            match board.get(a) {
                Square::Occupied(p) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                    Some(p)
                }
                _ => None,
            }
        })
        .collect()
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of legal tic-tac-toe positions, including the empty board.
    assert_eq!(reachable().len(), 5478);
}

#[test]
fn test_never_more_than_one_winner() {
    for board in reachable() {
        let winners = winners(&board);
        assert!(winners.len() <= 1, "two winners on\n{}", board);
        assert_eq!(check_winner(&board), winners.iter().next().copied());
    }
}

#[test]
fn test_evaluate_agrees_with_rules() {
    for board in reachable() {
        let outcome = evaluate(&board);
        assert_eq!(outcome, evaluate(&board));
        match outcome {
            Outcome::Win(p) => assert_eq!(check_winner(&board), Some(p)),
            Outcome::Draw => assert!(is_draw(&board)),
            Outcome::InProgress => assert!(!board.is_full() && check_winner(&board).is_none()),
        }
    }
}

#[test]
fn test_ai_takes_every_available_win_and_block() {
    let mut selector = MoveSelector::seeded(77);
    for mut board in reachable() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        // Only positions where it is O's turn and the game is still open.
        if x != o + 1 || evaluate(&board).is_terminal() {
            continue;
        }
        let before = board.clone();
        let mov = selector
            .select_move(&mut board, Player::O, Player::X)
            .expect("Open board has a free square");
        assert_eq!(board, before, "selection must not change the board");

        let mut after = board.clone();
        after.set(mov.position, Player::O).unwrap();

        let can_win = board.empty_positions().into_iter().any(|pos| {
            let mut probe = board.clone();
            probe.set(pos, Player::O).unwrap();
            check_winner(&probe) == Some(Player::O)
        });
        let threats: Vec<_> = board
            .empty_positions()
            .into_iter()
            .filter(|pos| {
                let mut probe = board.clone();
                probe.set(*pos, Player::X).unwrap();
                check_winner(&probe) == Some(Player::X)
            })
            .collect();

        if can_win {
            assert_eq!(check_winner(&after), Some(Player::O), "missed win on\n{}", board);
        } else if !threats.is_empty() {
            assert!(threats.contains(&mov.position), "missed block on\n{}", board);
        }
    }
}
