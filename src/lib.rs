mod curve;
mod geometry;
mod line_string;
mod linear_ring;
mod position;
mod surface;
mod writer;

pub mod config;
pub mod errors;
pub mod factory;
pub mod parser;
pub mod tokenizer;

pub use config::{ParserConfig, ThirdOrdinate};
pub use curve::Curve;
pub use errors::{GeometryError, ParseError};
pub use geometry::{Geometry, GeometryType, MultiKind, MultiPrimitive, Point};
pub use line_string::LineString;
pub use linear_ring::Ring;
pub use parser::WktParser;
pub use position::Position;
pub use surface::{Surface, SurfaceBoundary};
