//! Headless replay of a move list.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_core::{Board, Game, Move, MoveError, Status, render_game};
use tracing::{instrument, warn};

/// A move list entry that could not be read as a cell index.
#[derive(Debug, Clone, Display, Error)]
#[display("Move list error: {} at {}:{}", message, file, line)]
pub struct MoveListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveListError {
    /// Creates a new move list error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// One entry of a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellRequest {
    /// The entry as written.
    pub text: String,
    /// Cell index, or `None` for integers no board index can hold
    /// (negative or too large).
    pub index: Option<usize>,
}

impl From<usize> for CellRequest {
    fn from(index: usize) -> Self {
        Self {
            text: index.to_string(),
            index: Some(index),
        }
    }
}

fn is_integer(entry: &str) -> bool {
    let digits = entry.strip_prefix(['-', '+']).unwrap_or(entry);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `"0,1,3"` or `"0 1 3"` into cell requests.
///
/// Any integer is accepted, including negative and oversized ones; the
/// game rejects out-of-range cells like any other illegal move. Only
/// entries that are not integers are an error.
#[instrument]
pub fn parse_move_list(input: &str) -> Result<Vec<CellRequest>, MoveListError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            if !is_integer(entry) {
                return Err(MoveListError::new(format!(
                    "Invalid cell index {:?}: not an integer",
                    entry
                )));
            }
            let unsigned = entry.strip_prefix('+').unwrap_or(entry);
            Ok(CellRequest {
                text: entry.to_string(),
                index: unsigned.parse::<usize>().ok(),
            })
        })
        .collect()
}

/// A requested cell the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Zero-based offset of the request in the move list.
    pub offset: usize,
    /// The requested cell as written.
    pub cell: String,
    /// Why it was refused.
    pub reason: String,
}

/// Applies every request in order, skipping rejected ones.
#[instrument]
pub fn replay_forgiving(requests: &[CellRequest]) -> (Game, Vec<RejectedMove>) {
    let mut game = Game::new();
    let mut rejected = Vec::new();

    for (offset, request) in requests.iter().enumerate() {
        // Unrepresentable integers are still out of range; the game applies
        // its own guard order (a finished game reports GameOver first).
        let index = request.index.unwrap_or(usize::MAX);
        if let Err(e) = game.apply_move(index) {
            let reason = match e {
                MoveError::OutOfRange(_) => {
                    format!("Cell index {} is out of range (must be 0-8)", request.text)
                }
                other => other.to_string(),
            };
            warn!(offset, cell = %request.text, %reason, "Move rejected");
            rejected.push(RejectedMove {
                offset,
                cell: request.text.clone(),
                reason,
            });
        }
    }

    (game, rejected)
}

/// Text view of a replayed game: board, status, move list, then one
/// line per rejected request numbered from 1.
pub fn render_replay(game: &Game, rejected: &[RejectedMove]) -> String {
    let mut out = render_game(game);
    for r in rejected {
        out.push_str(&format!(
            "rejected move {} (cell {}): {}\n",
            r.offset + 1,
            r.cell,
            r.reason
        ));
    }
    out
}

/// JSON view of a replayed game.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Latest snapshot.
    pub board: Board,
    /// Winner or next mark.
    pub status: Status,
    /// Human-readable status line.
    pub status_text: String,
    /// Number of snapshots, including the empty start.
    pub history_len: usize,
    /// Accepted moves in order.
    pub moves: Vec<Move>,
    /// Requests that were refused.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Builds a report from a replayed game.
    pub fn new(game: &Game, rejected: Vec<RejectedMove>) -> Self {
        let status = game.status();
        Self {
            board: game.current_snapshot().clone(),
            status,
            status_text: status.to_string(),
            history_len: game.history().len(),
            moves: game.moves(),
            rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(requests: &[CellRequest]) -> Vec<Option<usize>> {
        requests.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_parse_commas_and_spaces() {
        let requests = parse_move_list("0,1, 3 2\t6").unwrap();
        assert_eq!(indices(&requests), [0, 1, 3, 2, 6].map(Some));
        assert!(parse_move_list("").unwrap().is_empty());
        assert_eq!(indices(&parse_move_list("12 +3").unwrap()), [Some(12), Some(3)]);
    }

    #[test]
    fn test_parse_keeps_unrepresentable_integers() {
        let requests = parse_move_list("-1,99999999999999999999999").unwrap();
        assert_eq!(requests[0].text, "-1");
        assert_eq!(requests[0].index, None);
        assert_eq!(requests[1].index, None);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let err = parse_move_list("0,x,2").unwrap_err();
        assert!(err.message.contains("\"x\""));
        assert!(parse_move_list("-").is_err());
        assert!(parse_move_list("1.5").is_err());
    }

    #[test]
    fn test_negative_index_is_rejected_not_fatal() {
        let requests = parse_move_list("4,-1,0").unwrap();
        let (game, rejected) = replay_forgiving(&requests);
        assert_eq!(game.move_count(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].offset, 1);
        assert_eq!(rejected[0].cell, "-1");
        assert_eq!(rejected[0].reason, "Cell index -1 is out of range (must be 0-8)");
    }

    #[test]
    fn test_oversized_index_is_rejected_not_fatal() {
        let requests = parse_move_list("4,99999999999999999999999,0").unwrap();
        let (game, rejected) = replay_forgiving(&requests);
        assert_eq!(game.move_count(), 2);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].reason.contains("99999999999999999999999"));
    }

    #[test]
    fn test_replay_skips_illegal_moves() {
        let requests = parse_move_list("4 4 9 0").unwrap();
        let (game, rejected) = replay_forgiving(&requests);
        assert_eq!(game.move_count(), 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].offset, 1);
        assert_eq!(rejected[1].cell, "9");
    }

    #[test]
    fn test_game_over_reported_before_range() {
        let requests = parse_move_list("0,1,3,2,6,-5").unwrap();
        let (_, rejected) = replay_forgiving(&requests);
        assert!(rejected[0].reason.contains("already over"));
    }

    #[test]
    fn test_render_numbers_rejections_from_one() {
        let requests = parse_move_list("4,4").unwrap();
        let (game, rejected) = replay_forgiving(&requests);
        let text = render_replay(&game, &rejected);
        assert!(text.ends_with("rejected move 2 (cell 4): Square Center is already occupied\n"));
    }

    #[test]
    fn test_report_after_win() {
        let requests = parse_move_list("0,1,3,2,6,4").unwrap();
        let (game, rejected) = replay_forgiving(&requests);
        let report = ReplayReport::new(&game, rejected);
        assert_eq!(report.status_text, "winner: X");
        assert_eq!(report.history_len, 6);
        assert_eq!(report.moves.len(), 5);
        assert_eq!(report.rejected.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], serde_json::json!({ "Winner": "X" }));
        assert_eq!(json["rejected"][0]["cell"], "4");
        assert_eq!(json["rejected"][0]["offset"], 5);
    }
}
