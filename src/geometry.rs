use crate::{Curve, Position, Surface};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    position: Position,
}

impl Point {
    pub fn new(position: Position) -> Self {
        Point { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// The tagged-text keywords a WKT literal can start with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

static GEOMETRY_TYPES: [GeometryType; 8] = [
    GeometryType::Point,
    GeometryType::LineString,
    GeometryType::LinearRing,
    GeometryType::Polygon,
    GeometryType::MultiPoint,
    GeometryType::MultiLineString,
    GeometryType::MultiPolygon,
    GeometryType::GeometryCollection,
];

impl GeometryType {
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::LinearRing => "LINEARRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(word: &str) -> Option<Self> {
        GEOMETRY_TYPES
            .iter()
            .copied()
            .find(|t| t.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a multi-primitive was built to hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MultiKind {
    Point,
    Curve,
    Surface,
    Collection,
}

/// An unordered collection of geometries.
///
/// Elements keep the order they were added in, but equality ignores it.
#[derive(Clone, Debug)]
pub struct MultiPrimitive {
    kind: MultiKind,
    elements: Vec<Geometry>,
}

impl MultiPrimitive {
    pub fn new(kind: MultiKind, elements: Vec<Geometry>) -> Self {
        MultiPrimitive { kind, elements }
    }

    pub fn kind(&self) -> MultiKind {
        self.kind
    }

    pub fn elements(&self) -> &[Geometry] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl PartialEq for MultiPrimitive {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind || self.elements.len() != other.elements.len() {
            return false;
        }
        // Multiset comparison: each element must pair with a distinct match.
        let mut used = vec![false; other.elements.len()];
        self.elements.iter().all(|elem| {
            let found = other
                .elements
                .iter()
                .enumerate()
                .position(|(i, o)| !used[i] && o == elem);
            match found {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    Curve(Curve),
    Surface(Surface),
    MultiPrimitive(MultiPrimitive),
}

impl Geometry {
    /// The keyword this geometry is written with.  Curves always report
    /// `LineString`, since a ring-tagged curve is not distinguishable.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Curve(_) => GeometryType::LineString,
            Geometry::Surface(_) => GeometryType::Polygon,
            Geometry::MultiPrimitive(multi) => match multi.kind() {
                MultiKind::Point => GeometryType::MultiPoint,
                MultiKind::Curve => GeometryType::MultiLineString,
                MultiKind::Surface => GeometryType::MultiPolygon,
                MultiKind::Collection => GeometryType::GeometryCollection,
            },
        }
    }

    /// Points are never empty: `POINT EMPTY` is the all-zero point.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::Curve(curve) => curve.is_empty(),
            Geometry::Surface(surface) => surface.is_empty(),
            Geometry::MultiPrimitive(multi) => multi.is_empty(),
        }
    }

    /// Topological dimension; `None` for an empty geometry collection.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Geometry::Point(_) => Some(0),
            Geometry::Curve(_) => Some(1),
            Geometry::Surface(_) => Some(2),
            Geometry::MultiPrimitive(multi) => match multi.kind() {
                MultiKind::Point => Some(0),
                MultiKind::Curve => Some(1),
                MultiKind::Surface => Some(2),
                MultiKind::Collection => {
                    multi.elements().iter().filter_map(Geometry::dimension).max()
                }
            },
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<Curve> for Geometry {
    fn from(curve: Curve) -> Self {
        Geometry::Curve(curve)
    }
}

impl From<Surface> for Geometry {
    fn from(surface: Surface) -> Self {
        Geometry::Surface(surface)
    }
}

impl From<MultiPrimitive> for Geometry {
    fn from(multi: MultiPrimitive) -> Self {
        Geometry::MultiPrimitive(multi)
    }
}
