use crate::shape::Shape;

/// Ordered list of committed shapes.
///
/// Insertion order is paint order: later shapes cover earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        log::debug!("Committed {} #{}", shape.kind_name(), self.shapes.len());
        self.shapes.push(shape);
    }

    /// Removes the most recent shape. Does nothing on an empty document.
    pub fn undo(&mut self) -> Option<Shape> {
        let removed = self.shapes.pop();
        match &removed {
            Some(shape) => log::info!("Undo removed {}", shape.kind_name()),
            None => log::debug!("Undo on empty document"),
        }
        removed
    }

    pub fn clear(&mut self) {
        log::info!("Cleared {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }
}
