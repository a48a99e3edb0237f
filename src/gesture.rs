use crate::shape::Point;

/// Press → drag* → release pointer gesture on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing {
        start: Point,
    },
}

impl Gesture {
    /// Starts a gesture. A second press without a release restarts from the new point.
    pub fn press(&mut self, point: Point) {
        *self = Self::Drawing { start: point };
    }

    /// Ends the gesture, returning the press point if one was in progress.
    pub fn release(&mut self) -> Option<Point> {
        match std::mem::take(self) {
            Self::Drawing { start } => Some(start),
            Self::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Drawing { start } => Some(*start),
            Self::Idle => None,
        }
    }
}
