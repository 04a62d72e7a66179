//! Exhaustive minimax search for optimal play.
//!
//! The game tree is small enough (at most 9! leaf boards) that the
//! search visits every reachable terminal state. No pruning and no
//! transposition caching: revisiting isomorphic boards through
//! different move orders is cheaper than the bookkeeping to avoid it.

use crate::action::Action;
use crate::engine::{active_player, apply, legal_actions};
use crate::rules::{is_terminal, score};
use crate::types::{Board, Player, Score};
use tracing::instrument;

/// Returns an optimal action for the active player, or `None` if the
/// board is terminal.
///
/// X picks the action maximizing the backed-up score, O the one
/// minimizing it. Ties keep the first action in row-major order, so the
/// choice is deterministic for a given board.
#[instrument(level = "debug", skip(board), fields(player = %active_player(board)))]
pub fn choose_move(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        return None;
    }

    let maximizing = active_player(board) == Player::X;
    let mut best: Option<(Action, Score)> = None;

    for action in legal_actions(board) {
        // Legal actions address empty cells, so apply cannot fail here.
        let successor = match apply(board, action) {
            Ok(successor) => successor,
            Err(_) => continue,
        };
        let value = evaluate(&successor);
        let improved = match best {
            None => true,
            Some((_, best_value)) => {
                if maximizing {
                    value > best_value
                } else {
                    value < best_value
                }
            }
        };
        if improved {
            best = Some((action, value));
        }
    }

    best.map(|(action, _)| action)
}

/// Backed-up minimax value of a board.
///
/// Terminal boards score themselves; otherwise the active player's turn
/// value is the max (X) or min (O) over all successor values.
fn evaluate(board: &Board) -> Score {
    if is_terminal(board) {
        return score(board);
    }

    let maximizing = active_player(board) == Player::X;
    let mut best: Option<Score> = None;

    for action in legal_actions(board) {
        let successor = match apply(board, action) {
            Ok(successor) => successor,
            Err(_) => continue,
        };
        let value = evaluate(&successor);
        best = Some(match best {
            None => value,
            Some(best_value) => {
                if maximizing {
                    best_value.max(value)
                } else {
                    best_value.min(value)
                }
            }
        });
    }

    // Non-terminal boards always have at least one legal action.
    best.unwrap_or(0)
}
