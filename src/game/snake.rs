use std::collections::{HashSet, VecDeque};

use super::action::Direction;
use super::grid::{Coordinate, Grid};
use crate::error::SnakeError;

/// Type of collision that ends a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Snake left the grid
    Boundary,
    /// Snake ran into its own body
    SelfCollision,
}

/// Everything one tick would do to the snake, computed without mutating it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    /// Coordinate the head moves into
    pub new_head: Coordinate,
    /// Whether the new head lands on the target
    pub grew: bool,
    /// Tail segment dropped this tick (`None` when growing)
    pub vacated_tail: Option<Coordinate>,
    /// Terminal collision, if the move ends the round
    pub collision: Option<Collision>,
}

/// The snake. Tail is the front of `body`, head is the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
    heading: Direction,
}

impl Snake {
    /// Create a snake from its body (tail first, head last) and heading
    pub fn new<I>(body: I, heading: Direction) -> Result<Self, SnakeError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let body: VecDeque<Coordinate> = body.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }

        let mut seen = HashSet::with_capacity(body.len());
        for &segment in &body {
            if !seen.insert(segment) {
                return Err(SnakeError::DuplicateSegment(segment));
            }
        }

        Ok(Self { body, heading })
    }

    /// Get the head position
    pub fn head(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    /// Get the tail position
    pub fn tail(&self) -> Coordinate {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Body segments from tail to head
    pub fn body(&self) -> impl ExactSizeIterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.body.contains(&coordinate)
    }

    /// Request a new heading. A 180-degree turn is rejected and leaves the
    /// heading unchanged; anything else takes effect on the next step.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.heading = direction;
        true
    }

    /// Work out the next step against the current target and grid bounds.
    ///
    /// The tail is released before the self-collision test, so a head moving
    /// into the cell the tail vacates on this same tick is not a collision.
    pub fn plan_step(&self, target: Option<Coordinate>, grid: &Grid) -> StepPlan {
        let new_head = self.head().moved_in_direction(self.heading);
        let grew = target == Some(new_head);
        let vacated_tail = (!grew).then(|| self.tail());

        let collision = if !grid.contains(new_head) {
            Some(Collision::Boundary)
        } else {
            let skip = usize::from(vacated_tail.is_some());
            self.body
                .iter()
                .skip(skip)
                .any(|&segment| segment == new_head)
                .then_some(Collision::SelfCollision)
        };

        StepPlan {
            new_head,
            grew,
            vacated_tail,
            collision,
        }
    }

    /// Commit a planned step: drop the vacated tail and push the new head
    pub fn apply(&mut self, plan: &StepPlan) {
        if plan.vacated_tail.is_some() {
            self.body.pop_front();
        }
        self.body.push_back(plan.new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(body: &[(i32, i32)], heading: Direction) -> Snake {
        Snake::new(body.iter().copied().map(Coordinate::from), heading).unwrap()
    }

    fn coords(body: &[(i32, i32)]) -> Vec<Coordinate> {
        body.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_snake_creation() {
        let snake = snake(&[(0, 0), (0, 1), (0, 2)], Direction::Right);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Coordinate::new(0, 0));
        assert_eq!(snake.head(), Coordinate::new(0, 2));
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn test_invalid_bodies_rejected() {
        assert_eq!(
            Snake::new(Vec::new(), Direction::Up),
            Err(SnakeError::EmptyBody)
        );
        assert_eq!(
            Snake::new(coords(&[(0, 0), (0, 1), (0, 0)]), Direction::Up),
            Err(SnakeError::DuplicateSegment(Coordinate::new(0, 0)))
        );
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut snake = snake(&[(5, 4), (5, 5)], Direction::Right);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.heading(), Direction::Right);

        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let mut snake = snake(&[(5, 4), (5, 5)], Direction::Right);
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Right);
        snake.set_direction(Direction::Down);

        let grid = Grid::new(10, 10).unwrap();
        let plan = snake.plan_step(None, &grid);
        assert_eq!(plan.new_head, Coordinate::new(6, 5));
    }

    #[test]
    fn test_plain_move_drops_tail() {
        let mut snake = snake(&[(0, 0), (0, 1), (0, 2)], Direction::Right);
        let grid = Grid::new(10, 10).unwrap();

        let plan = snake.plan_step(Some(Coordinate::new(9, 9)), &grid);
        assert!(!plan.grew);
        assert_eq!(plan.vacated_tail, Some(Coordinate::new(0, 0)));
        assert_eq!(plan.collision, None);

        snake.apply(&plan);
        assert_eq!(snake.body().collect::<Vec<_>>(), coords(&[(0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn test_growth_keeps_tail() {
        let mut snake = snake(&[(0, 0), (0, 1), (0, 2)], Direction::Right);
        let grid = Grid::new(10, 10).unwrap();

        let plan = snake.plan_step(Some(Coordinate::new(0, 3)), &grid);
        assert!(plan.grew);
        assert_eq!(plan.vacated_tail, None);

        snake.apply(&plan);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            coords(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_boundary_collision() {
        let snake = snake(&[(0, 1), (0, 0)], Direction::Left);
        let grid = Grid::new(10, 10).unwrap();

        let plan = snake.plan_step(None, &grid);
        assert_eq!(plan.new_head, Coordinate::new(0, -1));
        assert_eq!(plan.collision, Some(Collision::Boundary));
    }

    #[test]
    fn test_moving_into_vacating_tail_is_safe() {
        let snake = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)], Direction::Left);
        let grid = Grid::new(10, 10).unwrap();

        let plan = snake.plan_step(None, &grid);
        assert_eq!(plan.new_head, Coordinate::new(0, 0));
        assert_eq!(plan.collision, None);
    }

    #[test]
    fn test_moving_into_tail_while_growing_collides() {
        let snake = snake(&[(0, 0), (1, 0), (1, 1), (0, 1)], Direction::Left);
        let grid = Grid::new(10, 10).unwrap();

        // The target never sits on the body during play, but the rule holds:
        // a growing snake keeps its tail, so the tail cell is still occupied.
        let plan = snake.plan_step(Some(Coordinate::new(0, 0)), &grid);
        assert!(plan.grew);
        assert_eq!(plan.collision, Some(Collision::SelfCollision));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = snake(&[(0, 0), (0, 1), (0, 2), (1, 2), (1, 1)], Direction::Left);
        assert!(snake.set_direction(Direction::Up));

        let grid = Grid::new(10, 10).unwrap();
        let plan = snake.plan_step(None, &grid);
        assert_eq!(plan.new_head, Coordinate::new(0, 1));
        assert_eq!(plan.collision, Some(Collision::SelfCollision));
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let snake = snake(&[(0, 0), (0, 1), (0, 2)], Direction::Right);
        let before = snake.clone();
        let grid = Grid::new(10, 10).unwrap();

        let _ = snake.plan_step(Some(Coordinate::new(0, 3)), &grid);
        assert_eq!(snake, before);
    }
}
