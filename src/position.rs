use crate::errors::GeometryError;
use std::fmt;

/// A 2- or 3-dimensional ordinate tuple.  Ordinates past the dimension are
/// always zero, so derived equality only compares what is in use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    ordinates: [f64; 3],
    dimension: usize,
}

impl From<(f64, f64)> for Position {
    fn from(coord: (f64, f64)) -> Self {
        Position::new(coord.0, coord.1)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from(coord: (f64, f64, f64)) -> Self {
        Position::new_3d(coord.0, coord.1, coord.2)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z() {
            Some(z) => write!(f, "({}, {}, {})", self.x(), self.y(), z),
            None => write!(f, "({}, {})", self.x(), self.y()),
        }
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position {
            ordinates: [x, y, 0.],
            dimension: 2,
        }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Position {
            ordinates: [x, y, z],
            dimension: 3,
        }
    }

    /// All-zero position of the given dimension.
    pub fn zeroed(dimension: usize) -> Result<Self, GeometryError> {
        match dimension {
            2 | 3 => Ok(Position {
                ordinates: [0.; 3],
                dimension,
            }),
            _ => Err(GeometryError::UnsupportedDimension(dimension)),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn x(&self) -> f64 {
        self.ordinates[0]
    }

    pub fn y(&self) -> f64 {
        self.ordinates[1]
    }

    pub fn z(&self) -> Option<f64> {
        if self.dimension == 3 {
            Some(self.ordinates[2])
        } else {
            None
        }
    }

    pub fn ordinate(&self, index: usize) -> Option<f64> {
        self.ordinates().get(index).copied()
    }

    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates[..self.dimension]
    }

    pub fn set_ordinate(&mut self, index: usize, value: f64) -> Result<(), GeometryError> {
        if index >= self.dimension {
            return Err(GeometryError::OrdinateOutOfRange {
                index,
                dimension: self.dimension,
            });
        }
        self.ordinates[index] = value;
        Ok(())
    }
}
