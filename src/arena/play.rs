use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameOutcome, GameState, Move, Player};

/// Result of playing a single game between two agents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub outcome: GameOutcome,
    /// Moves in the order they were played, with the mover
    pub moves: Vec<(Player, Move)>,
    /// Flattened indices of the winning run; empty on a draw
    pub winning_cells: Vec<usize>,
}

impl MatchResult {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }

    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Drive `state` to the end, asking `x` and `o` for moves in turn.
pub fn play_match(
    state: &mut GameState,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
) -> Result<MatchResult, MatchError> {
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let mv = agent
            .select_move(state.board(), player)
            .ok_or_else(|| MatchError::NoMove {
                agent: agent.name().to_string(),
                player,
            })?;
        state
            .apply_move(mv.row, mv.col)
            .map_err(|source| MatchError::IllegalMove {
                agent: agent.name().to_string(),
                player,
                source,
            })?;
        debug!(agent = agent.name(), ?player, row = mv.row, col = mv.col, "move played");
        moves.push((player, mv));
    }

    let outcome = match state.outcome() {
        Some(outcome) => outcome,
        None => unreachable!("loop exits only on a terminal state"),
    };
    info!(?outcome, moves = moves.len(), x = x.name(), o = o.name(), "match finished");

    Ok(MatchResult {
        outcome,
        moves,
        winning_cells: state.win_info().winning_cells().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HeuristicAgent, MinimaxAgent, RandomAgent};
    use crate::game::Board;

    /// Always plays the top-left cell, legal or not
    struct Stubborn;

    impl Agent for Stubborn {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            Some(Move::new(0, 0))
        }

        fn name(&self) -> &str {
            "Stubborn"
        }

        fn clone_agent(&self) -> Box<dyn Agent> {
            Box::new(Stubborn)
        }
    }

    /// Never has a move
    struct Silent;

    impl Agent for Silent {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            None
        }

        fn name(&self) -> &str {
            "Silent"
        }

        fn clone_agent(&self) -> Box<dyn Agent> {
            Box::new(Silent)
        }
    }

    #[test]
    fn random_game_completes_on_every_size() {
        for size in 3..=6 {
            let mut state = GameState::new(size);
            let result = play_match(
                &mut state,
                &mut RandomAgent::seeded(size as u64),
                &mut RandomAgent::seeded(100 + size as u64),
            )
            .unwrap();

            assert!(state.is_terminal());
            assert_eq!(result.game_length(), state.move_count());
            match result.outcome {
                GameOutcome::Winner(_) => {
                    assert_eq!(result.winning_cells.len(), state.board().win_condition())
                }
                GameOutcome::Draw => assert!(result.winning_cells.is_empty()),
            }
        }
    }

    #[test]
    fn moves_alternate_starting_with_x() {
        let mut state = GameState::new(3);
        let result = play_match(
            &mut state,
            &mut HeuristicAgent::seeded(1),
            &mut RandomAgent::seeded(2),
        )
        .unwrap();
        for (i, (player, _)) in result.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(*player, expected);
        }
    }

    #[test]
    fn minimax_beats_or_draws_heuristic() {
        let mut state = GameState::new(3);
        let result = play_match(&mut state, &mut HeuristicAgent::seeded(5), &mut MinimaxAgent).unwrap();
        assert_ne!(result.winner(), Some(Player::X));
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut state = GameState::new(3);
        let err = play_match(&mut state, &mut Stubborn, &mut Stubborn).unwrap_err();
        assert!(matches!(
            err,
            MatchError::IllegalMove {
                player: Player::O,
                ..
            }
        ));
    }

    #[test]
    fn missing_move_is_reported() {
        let mut state = GameState::new(3);
        let err = play_match(&mut state, &mut Silent, &mut Silent).unwrap_err();
        assert!(matches!(err, MatchError::NoMove { player: Player::X, .. }));
    }
}
