use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Playing
/// - Playing -> Cleared
/// - Playing -> Quit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the next command
    Playing,
    /// Every block is on a goal
    Cleared,
    /// The player gave up
    Quit,
}

impl SessionState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the session has ended and no commands are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Cleared | Self::Quit)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}

/// One play-through of a stage, from loading to cleared or quit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    grid: Grid,
    state: SessionState,
}

impl Session {
    pub fn new(grid: Grid) -> Result<Self> {
        if grid.is_empty() {
            return Err(GameError::EmptyStage);
        }

        let players = grid.player_count();
        if players != 1 {
            return Err(GameError::MalformedStage { players });
        }

        let state = if grid.has_cleared() {
            log::debug!("Stage is cleared from the start");
            SessionState::Cleared
        } else {
            SessionState::Playing
        };

        Ok(Self { grid, state })
    }

    pub fn from_stage(data: &[u8]) -> Result<Self> {
        Self::new(Grid::from_stage(data)?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn has_cleared(&self) -> bool {
        matches!(self.state, SessionState::Cleared)
    }

    /// Applies one command and re-checks the win condition.
    ///
    /// Blocked moves are not errors, they report [`MoveOutcome::NoChange`] and the session keeps
    /// playing.
    pub fn apply(&mut self, command: Command) -> Result<MoveOutcome> {
        self.check_playing()?;

        match command {
            Command::Quit => {
                self.end(SessionState::Quit);
                Ok(MoveOutcome::NoChange)
            }
            Command::Move(direction) => {
                let outcome = self.grid.update(direction);
                if outcome.has_update() && self.grid.has_cleared() {
                    self.end(SessionState::Cleared);
                }
                Ok(outcome)
            }
        }
    }

    pub fn step(&mut self, direction: Direction) -> Result<MoveOutcome> {
        self.apply(Command::Move(direction))
    }

    pub fn quit(&mut self) -> Result<()> {
        self.apply(Command::Quit).map(|_| ())
    }

    fn end(&mut self, state: SessionState) {
        log::debug!("Session ended: {:?}", state);
        self.state = state;
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Down, Left, Right};

    fn session(stage: &str) -> Session {
        Session::from_stage(stage.as_bytes()).unwrap()
    }

    #[test]
    fn single_push_clears_small_stage() {
        let mut session = session("#####\n#po.#\n#####");

        assert_eq!(session.grid().size(), (5, 3));
        assert_eq!(session.state(), SessionState::Playing);
        assert!(!session.grid().has_cleared());

        assert_eq!(session.step(Right).unwrap(), MoveOutcome::Pushed);

        assert!(session.grid().has_cleared());
        assert_eq!(session.state(), SessionState::Cleared);
    }

    #[test]
    fn known_solution_clears_room() {
        let mut session = session("######\n#p o.#\n#  o.#\n######\n");
        let solution = [Right, Right, Left, Down, Right];

        for (turn, &direction) in solution.iter().enumerate() {
            assert!(!session.is_finished(), "finished early at turn {}", turn);
            assert!(session.step(direction).unwrap().has_update());
        }

        assert!(session.has_cleared());
        assert_eq!(session.grid().misplaced_blocks(), 0);
        assert_eq!(session.grid().find_player(), Some((3, 2)));
    }

    #[test]
    fn blocked_moves_keep_playing() {
        let mut session = session("####\n#po#\n#. #\n####\n");
        let before = session.grid().clone();

        assert_eq!(session.step(Right).unwrap(), MoveOutcome::NoChange);
        assert_eq!(session.step(Left).unwrap(), MoveOutcome::NoChange);
        assert_eq!(session.step(Direction::None).unwrap(), MoveOutcome::NoChange);

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn finished_session_rejects_commands() {
        let mut session = session("#####\n#po.#\n#####\n");
        session.step(Right).unwrap();

        assert_eq!(session.step(Left), Err(GameError::AlreadyEnded));
        assert_eq!(session.quit(), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn quit_ends_session() {
        let mut session = session("#####\n#po.#\n#####\n");

        session.quit().unwrap();

        assert_eq!(session.state(), SessionState::Quit);
        assert!(session.is_finished());
        assert!(!session.has_cleared());
        assert_eq!(session.step(Right), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn stage_without_blocks_starts_cleared() {
        let session = session("####\n#p #\n####\n");

        assert_eq!(session.state(), SessionState::Cleared);
    }

    #[test]
    fn empty_stage_is_rejected() {
        assert_eq!(Session::from_stage(b""), Err(GameError::EmptyStage));
        assert_eq!(Session::new(Grid::empty()), Err(GameError::EmptyStage));
    }

    #[test]
    fn hand_built_grid_needs_one_player() {
        let mut grid = Grid::new((3, 1));
        grid.set((1, 0), Cell::new(Occupant::Block, false)).unwrap();

        assert_eq!(
            Session::new(grid),
            Err(GameError::MalformedStage { players: 0 })
        );
    }
}
