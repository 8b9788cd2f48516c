use crate::*;

impl Grid {
    /// First player found scanning row by row.
    pub fn find_player(&self) -> Option<Coord2> {
        self.iter()
            .find(|(_, cell)| cell.occupant.is_player())
            .map(|(coords, _)| coords)
    }

    pub fn player_count(&self) -> CellCount {
        self.iter()
            .filter(|(_, cell)| cell.occupant.is_player())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Moves the player one step, pushing a single block when one is in the way.
    ///
    /// Blocked moves (walls, the grid border, a block backed by a wall, another block or the
    /// border) leave every cell untouched and report [`MoveOutcome::NoChange`].
    pub fn update(&mut self, direction: Direction) -> MoveOutcome {
        use Occupant::*;

        if direction.is_none() {
            return MoveOutcome::NoChange;
        }

        let Some(origin) = self.find_player() else {
            log::warn!("No player on the grid, ignoring move {}", direction);
            return MoveOutcome::NoChange;
        };

        let Some(target) = self.offset(origin, direction) else {
            log::trace!("Move {} from {:?} blocked by the border", direction, origin);
            return MoveOutcome::NoChange;
        };

        match self.occupant_at(target) {
            Empty => {
                self.put(target, Player);
                self.put(origin, Empty);
                log::trace!("Walked {} from {:?} to {:?}", direction, origin, target);
                MoveOutcome::Walked
            }
            Block => {
                let Some(landing) = self.offset(target, direction) else {
                    log::trace!("Push {} at {:?} blocked by the border", direction, target);
                    return MoveOutcome::NoChange;
                };
                if !self.occupant_at(landing).is_empty() {
                    log::trace!("Push {} at {:?} blocked at {:?}", direction, target, landing);
                    return MoveOutcome::NoChange;
                }
                self.put(landing, Block);
                self.put(target, Player);
                self.put(origin, Empty);
                log::trace!("Pushed block {} from {:?} to {:?}", direction, target, landing);
                MoveOutcome::Pushed
            }
            Wall | Player => {
                log::trace!("Move {} from {:?} blocked at {:?}", direction, origin, target);
                MoveOutcome::NoChange
            }
        }
    }
}
