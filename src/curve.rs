use crate::{LineString, Position};

/// A one-dimensional primitive made of one or more connected segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    segments: Vec<LineString>,
}

impl Curve {
    pub fn new(segments: Vec<LineString>) -> Self {
        Curve { segments }
    }

    pub fn segments(&self) -> &[LineString] {
        &self.segments
    }

    /// All positions of all segments, in order.
    pub fn positions(&self) -> Vec<Position> {
        self.segments
            .iter()
            .flat_map(|s| s.positions().iter().copied())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(LineString::is_empty)
    }
}
