use crate::Position;

/// A single curve segment: positions joined by straight lines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    positions: Vec<Position>,
}

impl LineString {
    pub fn new(positions: Vec<Position>) -> Self {
        LineString { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl<IP: Into<Position>> From<Vec<IP>> for LineString {
    fn from(coords: Vec<IP>) -> Self {
        LineString::new(coords.into_iter().map(|ip| ip.into()).collect())
    }
}
