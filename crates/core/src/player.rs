//! Player pose and the actions that mutate it.

use crate::geom::{degrees_to_radians, Point, Vector};
use crate::types::{Action, PlayerInfo};

/// The viewer: a position, a facing direction and a fixed turn step.
///
/// `direction` is not normalized; its length is also the distance covered by
/// one move step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Point,
    pub direction: Vector,
    /// Turn step in degrees.
    pub rotation_step: f64,
}

impl Player {
    pub fn new(position: Point, direction: Vector, rotation_step: f64) -> Self {
        Self {
            position,
            direction,
            rotation_step,
        }
    }

    /// Rotate the facing direction by one turn step (left = counter-clockwise).
    pub fn turn(&mut self, left: bool) {
        let sign = if left { 1.0 } else { -1.0 };
        self.direction
            .rotate(degrees_to_radians(self.rotation_step * sign));
    }

    /// Step one direction-length forward or backward. There is no collision.
    pub fn advance(&mut self, forward: bool) {
        let sign = if forward { 1.0 } else { -1.0 };
        self.position.x += self.direction.x * sign;
        self.position.y += self.direction.y * sign;
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::TurnLeft => self.turn(true),
            Action::TurnRight => self.turn(false),
            Action::MoveForward => self.advance(true),
            Action::MoveBackward => self.advance(false),
        }
    }

    pub fn info(&self) -> PlayerInfo {
        PlayerInfo {
            pos_x: self.position.x,
            pos_y: self.position.y,
            dir_x: self.direction.x,
            dir_y: self.direction.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Point::new(45.0, 45.0), Vector::new(1.0, 0.0), 100.0 / 260.0 * 9.0)
    }

    #[test]
    fn test_turn_left_then_right_restores_direction() {
        let mut p = player();
        let start = p.direction;
        p.apply_action(Action::TurnLeft);
        assert!(p.direction.y > 0.0);
        p.apply_action(Action::TurnRight);
        assert!((p.direction.x - start.x).abs() < 1e-12);
        assert!((p.direction.y - start.y).abs() < 1e-12);
    }

    #[test]
    fn test_move_forward_and_back() {
        let mut p = player();
        p.apply_action(Action::MoveForward);
        assert_eq!(p.position, Point::new(46.0, 45.0));
        p.apply_action(Action::MoveBackward);
        p.apply_action(Action::MoveBackward);
        assert_eq!(p.position, Point::new(44.0, 45.0));
        assert_eq!(p.direction, Vector::new(1.0, 0.0));
    }

    #[test]
    fn test_info_snapshot() {
        let info = player().info();
        assert_eq!(
            info,
            PlayerInfo {
                pos_x: 45.0,
                pos_y: 45.0,
                dir_x: 1.0,
                dir_y: 0.0
            }
        );
    }
}
