//! Construction seams used by the parser.
//!
//! The parser never builds geometry values itself: every position, segment,
//! primitive and aggregate goes through one of the four factory traits, so a
//! caller can swap in its own construction strategy (attach a reference
//! system, intern positions, reject unsupported shapes).  [`GeometryBuilder`]
//! bundles a plain implementation of all four.

use crate::errors::GeometryError;
use crate::{
    Curve, Geometry, LineString, MultiKind, MultiPrimitive, Point, Position, Ring, Surface,
    SurfaceBoundary,
};

pub trait PositionFactory {
    fn dimension(&self) -> usize;

    /// A zero-filled position of [`PositionFactory::dimension`] ordinates.
    fn create_direct_position(&self) -> Result<Position, GeometryError>;
}

pub trait GeometryFactory {
    fn create_line_string(&self, positions: Vec<Position>) -> Result<LineString, GeometryError>;

    /// A heterogeneous collection.
    fn create_multi_primitive(
        &self,
        elements: Vec<Geometry>,
    ) -> Result<MultiPrimitive, GeometryError>;
}

pub trait PrimitiveFactory {
    fn create_point(&self, position: Position) -> Result<Point, GeometryError>;

    fn create_curve(&self, segments: Vec<LineString>) -> Result<Curve, GeometryError>;

    fn create_ring(&self, curves: Vec<Curve>) -> Result<Ring, GeometryError>;

    fn create_surface_boundary(
        &self,
        exterior: Ring,
        interiors: Vec<Ring>,
    ) -> Result<SurfaceBoundary, GeometryError>;

    /// `None` creates the empty surface.
    fn create_surface(&self, boundary: Option<SurfaceBoundary>) -> Result<Surface, GeometryError>;
}

pub trait AggregateFactory {
    fn create_multi_point(&self, points: Vec<Point>) -> Result<MultiPrimitive, GeometryError>;

    fn create_multi_curve(&self, curves: Vec<Curve>) -> Result<MultiPrimitive, GeometryError>;

    fn create_multi_surface(&self, surfaces: Vec<Surface>)
        -> Result<MultiPrimitive, GeometryError>;
}

/// Anything that can stand in for all four factories at once.
pub trait Factories: PositionFactory + GeometryFactory + PrimitiveFactory + AggregateFactory {}

impl<T> Factories for T where
    T: PositionFactory + GeometryFactory + PrimitiveFactory + AggregateFactory
{
}

/// Builds geometries whose positions all share one dimension.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryBuilder {
    dimension: usize,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        GeometryBuilder { dimension: 2 }
    }
}

impl GeometryBuilder {
    pub fn new(dimension: usize) -> Result<Self, GeometryError> {
        match dimension {
            2 | 3 => Ok(GeometryBuilder { dimension }),
            _ => Err(GeometryError::UnsupportedDimension(dimension)),
        }
    }

    fn check_dimension(&self, position: &Position) -> Result<(), GeometryError> {
        if position.dimension() != self.dimension {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension,
                found: position.dimension(),
            });
        }
        Ok(())
    }
}

impl PositionFactory for GeometryBuilder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn create_direct_position(&self) -> Result<Position, GeometryError> {
        Position::zeroed(self.dimension)
    }
}

impl GeometryFactory for GeometryBuilder {
    fn create_line_string(&self, positions: Vec<Position>) -> Result<LineString, GeometryError> {
        for position in &positions {
            self.check_dimension(position)?;
        }
        Ok(LineString::new(positions))
    }

    fn create_multi_primitive(
        &self,
        elements: Vec<Geometry>,
    ) -> Result<MultiPrimitive, GeometryError> {
        Ok(MultiPrimitive::new(MultiKind::Collection, elements))
    }
}

impl PrimitiveFactory for GeometryBuilder {
    fn create_point(&self, position: Position) -> Result<Point, GeometryError> {
        self.check_dimension(&position)?;
        Ok(Point::new(position))
    }

    fn create_curve(&self, segments: Vec<LineString>) -> Result<Curve, GeometryError> {
        Ok(Curve::new(segments))
    }

    fn create_ring(&self, curves: Vec<Curve>) -> Result<Ring, GeometryError> {
        Ring::new(curves)
    }

    fn create_surface_boundary(
        &self,
        exterior: Ring,
        interiors: Vec<Ring>,
    ) -> Result<SurfaceBoundary, GeometryError> {
        Ok(SurfaceBoundary::new(exterior, interiors))
    }

    fn create_surface(&self, boundary: Option<SurfaceBoundary>) -> Result<Surface, GeometryError> {
        Ok(Surface::new(boundary))
    }
}

impl AggregateFactory for GeometryBuilder {
    fn create_multi_point(&self, points: Vec<Point>) -> Result<MultiPrimitive, GeometryError> {
        let elements = points.into_iter().map(Geometry::from).collect();
        Ok(MultiPrimitive::new(MultiKind::Point, elements))
    }

    fn create_multi_curve(&self, curves: Vec<Curve>) -> Result<MultiPrimitive, GeometryError> {
        let elements = curves.into_iter().map(Geometry::from).collect();
        Ok(MultiPrimitive::new(MultiKind::Curve, elements))
    }

    fn create_multi_surface(
        &self,
        surfaces: Vec<Surface>,
    ) -> Result<MultiPrimitive, GeometryError> {
        let elements = surfaces.into_iter().map(Geometry::from).collect();
        Ok(MultiPrimitive::new(MultiKind::Surface, elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_dimension() {
        assert_eq!(GeometryBuilder::default().dimension(), 2);
        assert_eq!(GeometryBuilder::new(3).unwrap().dimension(), 3);
        assert_eq!(
            GeometryBuilder::new(1),
            Err(GeometryError::UnsupportedDimension(1))
        );
    }

    #[test]
    fn test_direct_position_is_zeroed() {
        let builder = GeometryBuilder::new(3).unwrap();
        let pos = builder.create_direct_position().unwrap();
        assert_eq!(pos, Position::new_3d(0., 0., 0.));
    }

    #[test]
    fn test_rejects_mixed_dimensions() {
        let builder = GeometryBuilder::default();
        assert_eq!(
            builder.create_point(Position::new_3d(1., 2., 3.)),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(builder
            .create_line_string(vec![Position::new(0., 0.), Position::new_3d(1., 1., 1.)])
            .is_err());
    }

    #[test]
    fn test_aggregates_are_tagged() {
        let builder = GeometryBuilder::default();
        let point = builder.create_point(Position::new(1., 2.)).unwrap();
        let multi = builder.create_multi_point(vec![point]).unwrap();
        assert_eq!(multi.kind(), MultiKind::Point);
        assert_eq!(multi.len(), 1);
        let collection = builder
            .create_multi_primitive(vec![Geometry::from(point)])
            .unwrap();
        assert_eq!(collection.kind(), MultiKind::Collection);
    }

    #[test]
    fn test_ring_requires_curves() {
        let builder = GeometryBuilder::default();
        assert_eq!(builder.create_ring(Vec::new()), Err(GeometryError::EmptyRing));
    }
}
