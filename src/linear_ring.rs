use crate::errors::GeometryError;
use crate::{Curve, Position};
use std::convert::TryFrom;

/// A boundary ring, generated by one or more curves.
///
/// Only the structure is checked: closure and simplicity are left to the
/// caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    generators: Vec<Curve>,
}

impl Ring {
    pub fn new(generators: Vec<Curve>) -> Result<Self, GeometryError> {
        if generators.is_empty() {
            return Err(GeometryError::EmptyRing);
        }
        Ok(Ring { generators })
    }

    pub fn generators(&self) -> &[Curve] {
        &self.generators
    }

    pub fn positions(&self) -> Vec<Position> {
        self.generators.iter().flat_map(Curve::positions).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.iter().all(Curve::is_empty)
    }

    /// Whether the first and last positions coincide.
    pub fn is_closed(&self) -> bool {
        let positions = self.positions();
        !positions.is_empty() && positions.first() == positions.last()
    }
}

impl TryFrom<Curve> for Ring {
    type Error = GeometryError;

    fn try_from(curve: Curve) -> Result<Self, Self::Error> {
        Ring::new(vec![curve])
    }
}
