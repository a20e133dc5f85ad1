use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use wkt_geom::{
    Curve, Geometry, LineString, MultiKind, MultiPrimitive, Point, Position, Ring, Surface,
    SurfaceBoundary,
};

//// Utility functions

/// A star-shaped ring of `n` vertices around `center`, closed.
pub(crate) fn random_ring(rng: &mut SmallRng, center: Position, radius: f64, n: usize) -> Ring {
    let mut positions: Vec<Position> = (0..n)
        .map(|i| {
            let angle = 2. * PI * (i as f64) / (n as f64);
            let r = rng.gen_range(0.5 * radius, radius);
            Position::new(center.x() + r * angle.cos(), center.y() + r * angle.sin())
        })
        .collect();
    positions.push(positions[0]);
    Ring::new(vec![Curve::new(vec![LineString::new(positions)])]).unwrap()
}

pub(crate) fn random_polygon(n: usize, holes: usize, seed: u64) -> Geometry {
    let mut rng = SmallRng::seed_from_u64(seed);
    let shell = random_ring(&mut rng, Position::new(0., 0.), 100., n);
    let interiors = (0..holes)
        .map(|i| {
            let angle = 2. * PI * (i as f64) / (holes as f64);
            let center = Position::new(25. * angle.cos(), 25. * angle.sin());
            random_ring(&mut rng, center, 5., n / 10 + 3)
        })
        .collect();
    Surface::new(Some(SurfaceBoundary::new(shell, interiors))).into()
}

pub(crate) fn random_multi_point(n: usize, seed: u64) -> Geometry {
    let mut rng = SmallRng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| {
            let position = Position::new(rng.gen_range(-180., 180.), rng.gen_range(-90., 90.));
            Geometry::from(Point::new(position))
        })
        .collect();
    MultiPrimitive::new(MultiKind::Point, points).into()
}
