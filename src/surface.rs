use crate::Ring;

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceBoundary {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl SurfaceBoundary {
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        SurfaceBoundary {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }
}

/// A two-dimensional primitive.  A surface without a boundary is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    boundary: Option<SurfaceBoundary>,
}

impl Surface {
    pub fn new(boundary: Option<SurfaceBoundary>) -> Self {
        Surface { boundary }
    }

    pub fn boundary(&self) -> Option<&SurfaceBoundary> {
        self.boundary.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_none()
    }

    /// Number of holes; zero for an empty surface.
    pub fn num_interiors(&self) -> usize {
        self.boundary.as_ref().map_or(0, |b| b.interiors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Curve, LineString};
    use std::convert::TryFrom;

    fn make_ring(coords: Vec<(f64, f64)>) -> Ring {
        Ring::try_from(Curve::new(vec![LineString::from(coords)])).unwrap()
    }

    #[test]
    fn test_surface_with_hole() {
        let shell = make_ring(vec![(0., 0.), (4., 0.), (4., 4.), (0., 4.), (0., 0.)]);
        let hole = make_ring(vec![(1., 1.), (2., 1.), (2., 2.), (1., 2.), (1., 1.)]);
        let surface = Surface::new(Some(SurfaceBoundary::new(shell.clone(), vec![hole])));
        assert!(!surface.is_empty());
        assert_eq!(surface.num_interiors(), 1);
        assert_eq!(surface.boundary().unwrap().exterior(), &shell);
    }

    #[test]
    fn test_empty_surface() {
        let surface = Surface::new(None);
        assert!(surface.is_empty());
        assert_eq!(surface.num_interiors(), 0);
        assert!(surface.boundary().is_none());
    }
}
