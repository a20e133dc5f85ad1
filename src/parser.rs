//! Recursive-descent reader for OGC Simple Features Well-Known Text.
//!
//! Grammar, with keywords matched case-insensitively:
//!
//! ```text
//! geometry     := POINT point
//!               | LINESTRING coords | LINEARRING coords
//!               | POLYGON polygon
//!               | MULTIPOINT coords
//!               | MULTILINESTRING (EMPTY | "(" coords ("," coords)* ")")
//!               | MULTIPOLYGON (EMPTY | "(" polygon ("," polygon)* ")")
//!               | GEOMETRYCOLLECTION (EMPTY | "(" geometry ("," geometry)* ")")
//! point        := EMPTY | "(" coordinate ")"
//! polygon      := EMPTY | "(" coords ("," coords)* ")"
//! coords       := EMPTY | "(" coordinate ("," coordinate)* ")"
//! coordinate   := number number [number]
//! ```

use crate::config::ParserConfig;
use crate::errors::{GeometryError, ParseError};
use crate::factory::{
    AggregateFactory, Factories, GeometryBuilder, GeometryFactory, PositionFactory,
    PrimitiveFactory,
};
use crate::tokenizer::{parse_number, Token, Tokenizer};
use crate::{Curve, Geometry, GeometryType, MultiPrimitive, Point, Position, Ring, Surface};
use log::{debug, trace};
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

const EMPTY: &str = "EMPTY";

/// Parses WKT text into [`Geometry`] values built by the configured
/// factories.
///
/// A parser is immutable; the `with_*` methods return a new parser.  All
/// per-parse state lives on the stack of the call, so one parser can serve
/// any number of threads.
#[derive(Clone)]
pub struct WktParser {
    geometry_factory: Arc<dyn GeometryFactory + Send + Sync>,
    primitive_factory: Arc<dyn PrimitiveFactory + Send + Sync>,
    position_factory: Arc<dyn PositionFactory + Send + Sync>,
    aggregate_factory: Arc<dyn AggregateFactory + Send + Sync>,
    config: ParserConfig,
}

impl Default for WktParser {
    fn default() -> Self {
        WktParser::from_builder(Arc::new(GeometryBuilder::default()))
    }
}

impl WktParser {
    pub fn new(
        geometry_factory: Arc<dyn GeometryFactory + Send + Sync>,
        primitive_factory: Arc<dyn PrimitiveFactory + Send + Sync>,
        position_factory: Arc<dyn PositionFactory + Send + Sync>,
        aggregate_factory: Arc<dyn AggregateFactory + Send + Sync>,
    ) -> Self {
        WktParser {
            geometry_factory,
            primitive_factory,
            position_factory,
            aggregate_factory,
            config: ParserConfig::default(),
        }
    }

    /// Use one object for all four factories.
    pub fn from_builder<B>(builder: Arc<B>) -> Self
    where
        B: Factories + Send + Sync + 'static,
    {
        WktParser::new(builder.clone(), builder.clone(), builder.clone(), builder)
    }

    pub fn with_geometry_factory(
        mut self,
        factory: Arc<dyn GeometryFactory + Send + Sync>,
    ) -> Self {
        self.geometry_factory = factory;
        self
    }

    pub fn with_primitive_factory(
        mut self,
        factory: Arc<dyn PrimitiveFactory + Send + Sync>,
    ) -> Self {
        self.primitive_factory = factory;
        self
    }

    pub fn with_position_factory(
        mut self,
        factory: Arc<dyn PositionFactory + Send + Sync>,
    ) -> Self {
        self.position_factory = factory;
        self
    }

    pub fn with_aggregate_factory(
        mut self,
        factory: Arc<dyn AggregateFactory + Send + Sync>,
    ) -> Self {
        self.aggregate_factory = factory;
        self
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a single geometry from a string.
    pub fn parse(&self, wkt: &str) -> Result<Geometry, ParseError> {
        self.read_buffered(wkt.as_bytes())
    }

    /// Parse a single geometry from a reader.  The whole stream must hold
    /// exactly one geometry.
    pub fn read<R: Read>(&self, reader: R) -> Result<Geometry, ParseError> {
        self.read_buffered(BufReader::new(reader))
    }

    fn read_buffered<R: BufRead>(&self, reader: R) -> Result<Geometry, ParseError> {
        let mut state = ParseState {
            parser: self,
            tokens: Tokenizer::new(reader),
            depth: 0,
        };
        match state.document() {
            Ok(geometry) => {
                debug!(
                    "Parsed {} from {} line(s) of WKT",
                    geometry.geometry_type(),
                    state.tokens.line()
                );
                Ok(geometry)
            }
            Err(err) => {
                debug!("Failed to parse WKT: {}", err);
                Err(err)
            }
        }
    }
}

/// One parse in progress: the token cursor plus collection nesting depth.
struct ParseState<'p, R> {
    parser: &'p WktParser,
    tokens: Tokenizer<R>,
    depth: usize,
}

impl<'p, R: BufRead> ParseState<'p, R> {
    fn document(&mut self) -> Result<Geometry, ParseError> {
        let geometry = self.geometry_tagged_text()?;
        match self.next_token()? {
            Token::Eof => Ok(geometry),
            token => Err(self.unexpected("end of input", &token)),
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        Ok(self.tokens.next_token()?)
    }

    fn unexpected(&self, expected: &str, found: &Token) -> ParseError {
        ParseError::Unexpected {
            expected: expected.to_string(),
            found: found.to_string(),
            line: self.tokens.line(),
        }
    }

    /// Attach the current line to a factory failure.
    fn built<T>(&self, result: Result<T, GeometryError>) -> Result<T, ParseError> {
        result.map_err(|source| ParseError::Geometry {
            source,
            line: self.tokens.line(),
        })
    }

    fn geometry_tagged_text(&mut self) -> Result<Geometry, ParseError> {
        let keyword = match self.next_token()? {
            Token::Word(word) => word,
            token => return Err(self.unexpected("a geometry type", &token)),
        };
        let geometry_type = match GeometryType::from_keyword(&keyword) {
            Some(t) => t,
            None => {
                return Err(ParseError::UnknownGeometryType {
                    keyword,
                    line: self.tokens.line(),
                })
            }
        };
        trace!("Reading {} at line {}", geometry_type, self.tokens.line());

        let geometry: Geometry = match geometry_type {
            GeometryType::Point => self.point_text()?.into(),
            // Ring closure is not checked, so a ring reads like a line string.
            GeometryType::LineString | GeometryType::LinearRing => {
                self.line_string_text()?.into()
            }
            GeometryType::Polygon => self.polygon_text()?.into(),
            GeometryType::MultiPoint => self.multi_point_text()?.into(),
            GeometryType::MultiLineString => self.multi_line_string_text()?.into(),
            GeometryType::MultiPolygon => self.multi_polygon_text()?.into(),
            GeometryType::GeometryCollection => self.geometry_collection_text()?.into(),
        };
        Ok(geometry)
    }

    /// `EMPTY` gives `true`; an opening paren gives `false`.
    fn empty_or_opener(&mut self) -> Result<bool, ParseError> {
        let token = self.next_token()?;
        if token.is_word(EMPTY) {
            return Ok(true);
        }
        match token {
            Token::LeftParen => Ok(false),
            token => Err(self.unexpected("EMPTY or '('", &token)),
        }
    }

    /// A comma gives `true` (another element follows); a closing paren
    /// gives `false`.
    fn comma_or_closer(&mut self) -> Result<bool, ParseError> {
        match self.next_token()? {
            Token::Comma => Ok(true),
            Token::RightParen => Ok(false),
            token => Err(self.unexpected("',' or ')'", &token)),
        }
    }

    fn closer(&mut self) -> Result<(), ParseError> {
        match self.next_token()? {
            Token::RightParen => Ok(()),
            token => Err(self.unexpected("')'", &token)),
        }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        match self.next_token()? {
            Token::Word(word) => match parse_number(&word) {
                Some(value) => Ok(value),
                None => Err(ParseError::InvalidNumber {
                    literal: word,
                    line: self.tokens.line(),
                }),
            },
            token => Err(self.unexpected("a number", &token)),
        }
    }

    fn precise_coordinate(&mut self) -> Result<Position, ParseError> {
        let mut position = self.built(self.parser.position_factory.create_direct_position())?;
        let x = self.number()?;
        let y = self.number()?;
        self.built(position.set_ordinate(0, x))?;
        self.built(position.set_ordinate(1, y))?;

        let has_third = match self.tokens.peek_token()? {
            Token::Word(word) => parse_number(&word).is_some(),
            _ => false,
        };
        if has_third {
            let third = self.number()?;
            let index = self.parser.config.third_ordinate.index();
            self.built(position.set_ordinate(index, third))?;
        }
        Ok(position)
    }

    fn coordinates(&mut self) -> Result<Vec<Position>, ParseError> {
        let mut positions = Vec::new();
        if self.empty_or_opener()? {
            return Ok(positions);
        }
        loop {
            positions.push(self.precise_coordinate()?);
            if !self.comma_or_closer()? {
                return Ok(positions);
            }
        }
    }

    fn point_text(&mut self) -> Result<Point, ParseError> {
        let position = if self.empty_or_opener()? {
            self.built(self.parser.position_factory.create_direct_position())?
        } else {
            let position = self.precise_coordinate()?;
            self.closer()?;
            position
        };
        self.built(self.parser.primitive_factory.create_point(position))
    }

    fn line_string_text(&mut self) -> Result<Curve, ParseError> {
        let positions = self.coordinates()?;
        let segment = self.built(self.parser.geometry_factory.create_line_string(positions))?;
        self.built(self.parser.primitive_factory.create_curve(vec![segment]))
    }

    fn linear_ring_text(&mut self) -> Result<Ring, ParseError> {
        let curve = self.line_string_text()?;
        self.built(self.parser.primitive_factory.create_ring(vec![curve]))
    }

    fn polygon_text(&mut self) -> Result<Surface, ParseError> {
        if self.empty_or_opener()? {
            return self.built(self.parser.primitive_factory.create_surface(None));
        }
        let exterior = self.linear_ring_text()?;
        let mut interiors = Vec::new();
        while self.comma_or_closer()? {
            interiors.push(self.linear_ring_text()?);
        }
        let boundary = self.built(
            self.parser
                .primitive_factory
                .create_surface_boundary(exterior, interiors),
        )?;
        self.built(self.parser.primitive_factory.create_surface(Some(boundary)))
    }

    fn multi_point_text(&mut self) -> Result<MultiPrimitive, ParseError> {
        let mut points = Vec::new();
        if !self.empty_or_opener()? {
            loop {
                let position = self.precise_coordinate()?;
                points.push(self.built(self.parser.primitive_factory.create_point(position))?);
                if !self.comma_or_closer()? {
                    break;
                }
            }
        }
        self.built(self.parser.aggregate_factory.create_multi_point(points))
    }

    fn multi_line_string_text(&mut self) -> Result<MultiPrimitive, ParseError> {
        let mut curves = Vec::new();
        if !self.empty_or_opener()? {
            loop {
                curves.push(self.line_string_text()?);
                if !self.comma_or_closer()? {
                    break;
                }
            }
        }
        self.built(self.parser.aggregate_factory.create_multi_curve(curves))
    }

    fn multi_polygon_text(&mut self) -> Result<MultiPrimitive, ParseError> {
        let mut surfaces = Vec::new();
        if !self.empty_or_opener()? {
            loop {
                surfaces.push(self.polygon_text()?);
                if !self.comma_or_closer()? {
                    break;
                }
            }
        }
        self.built(self.parser.aggregate_factory.create_multi_surface(surfaces))
    }

    fn geometry_collection_text(&mut self) -> Result<MultiPrimitive, ParseError> {
        let mut members = Vec::new();
        if !self.empty_or_opener()? {
            if self.depth >= self.parser.config.max_depth {
                return Err(ParseError::TooDeep {
                    max_depth: self.parser.config.max_depth,
                    line: self.tokens.line(),
                });
            }
            self.depth += 1;
            loop {
                members.push(self.geometry_tagged_text()?);
                if !self.comma_or_closer()? {
                    break;
                }
            }
            self.depth -= 1;
        }
        self.built(self.parser.geometry_factory.create_multi_primitive(members))
    }
}
