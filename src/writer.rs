//! Well-Known Text output, in the form the parser reads back.

use crate::{Curve, Geometry, MultiKind, Position, Ring, Surface};
use std::fmt::{self, Write};

const EMPTY: &str = "EMPTY";

impl Geometry {
    /// Serialise as WKT.  The text reads back to an equal geometry except in
    /// three cases:
    ///
    /// - a non-finite ordinate is written as `inf` or `NaN`, which the parser
    ///   rejects;
    /// - a member whose type doesn't match its typed aggregate is written in
    ///   full, e.g. `MULTIPOINT (LINESTRING (0 0))`, which the parser
    ///   rejects;
    /// - a [`Curve`] of several segments is written as one coordinate list
    ///   and reads back as a single-segment curve.
    pub fn to_wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.geometry_type())?;
        write_body(f, self)
    }
}

/// Everything after the keyword.
fn write_body<W: Write>(w: &mut W, geometry: &Geometry) -> fmt::Result {
    match geometry {
        Geometry::Point(point) => {
            w.write_char('(')?;
            write_position(w, &point.position())?;
            w.write_char(')')
        }
        Geometry::Curve(curve) => write_curve(w, curve),
        Geometry::Surface(surface) => write_surface(w, surface),
        Geometry::MultiPrimitive(multi) => {
            if multi.is_empty() {
                return w.write_str(EMPTY);
            }
            w.write_char('(')?;
            for (i, element) in multi.elements().iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                write_member(w, multi.kind(), element)?;
            }
            w.write_char(')')
        }
    }
}

/// Members of typed aggregates are written without their keyword.  A member
/// whose type doesn't match the aggregate is written in full.
fn write_member<W: Write>(w: &mut W, kind: MultiKind, element: &Geometry) -> fmt::Result {
    match (kind, element) {
        (MultiKind::Point, Geometry::Point(point)) => write_position(w, &point.position()),
        (MultiKind::Curve, Geometry::Curve(curve)) => write_curve(w, curve),
        (MultiKind::Surface, Geometry::Surface(surface)) => write_surface(w, surface),
        _ => write!(w, "{}", element),
    }
}

fn write_position<W: Write>(w: &mut W, position: &Position) -> fmt::Result {
    for (i, ordinate) in position.ordinates().iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{}", ordinate)?;
    }
    Ok(())
}

fn write_positions<W: Write>(w: &mut W, positions: &[Position]) -> fmt::Result {
    if positions.is_empty() {
        return w.write_str(EMPTY);
    }
    w.write_char('(')?;
    for (i, position) in positions.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write_position(w, position)?;
    }
    w.write_char(')')
}

fn write_curve<W: Write>(w: &mut W, curve: &Curve) -> fmt::Result {
    write_positions(w, &curve.positions())
}

fn write_ring<W: Write>(w: &mut W, ring: &Ring) -> fmt::Result {
    write_positions(w, &ring.positions())
}

fn write_surface<W: Write>(w: &mut W, surface: &Surface) -> fmt::Result {
    let boundary = match surface.boundary() {
        Some(boundary) => boundary,
        None => return w.write_str(EMPTY),
    };
    w.write_char('(')?;
    write_ring(w, boundary.exterior())?;
    for ring in boundary.interiors() {
        w.write_str(", ")?;
        write_ring(w, ring)?;
    }
    w.write_char(')')
}
