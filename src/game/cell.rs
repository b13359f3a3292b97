/// What a single grid location currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Occupied by a snake segment
    Actor,
    /// Holds the consumable target
    Target,
}

/// A single grid location.
///
/// Cells carry no logic beyond their state transitions; every setter is
/// unconditional and idempotent. The renderer reads [`Cell::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn set_occupied_by_actor(&mut self) {
        self.state = CellState::Actor;
    }

    pub fn set_as_target(&mut self) {
        self.state = CellState::Target;
    }

    pub fn clear(&mut self) {
        self.state = CellState::Empty;
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.state(), CellState::Empty);
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut cell = Cell::new();

        cell.set_as_target();
        cell.set_as_target();
        assert_eq!(cell.state(), CellState::Target);

        cell.set_occupied_by_actor();
        cell.set_occupied_by_actor();
        assert_eq!(cell.state(), CellState::Actor);

        cell.clear();
        cell.clear();
        assert!(cell.is_empty());
    }

    #[test]
    fn test_actor_overwrites_target() {
        let mut cell = Cell::new();
        cell.set_as_target();
        cell.clear();
        cell.set_occupied_by_actor();
        assert_eq!(cell.state(), CellState::Actor);
    }
}
