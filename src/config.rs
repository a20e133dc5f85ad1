/// Where a coordinate's third ordinate is stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThirdOrdinate {
    /// Write it into ordinate 1, replacing y.  Long-standing behaviour that
    /// existing consumers may rely on.
    OverwriteY,
    /// Write it into ordinate 2.  Needs a 3-dimensional position factory.
    Elevation,
}

impl Default for ThirdOrdinate {
    fn default() -> Self {
        ThirdOrdinate::OverwriteY
    }
}

impl ThirdOrdinate {
    pub(crate) fn index(self) -> usize {
        match self {
            ThirdOrdinate::OverwriteY => 1,
            ThirdOrdinate::Elevation => 2,
        }
    }
}

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    pub third_ordinate: ThirdOrdinate,
    /// Deepest GEOMETRYCOLLECTION nesting accepted.  Members of a top-level
    /// collection sit at depth 1; an EMPTY collection adds no depth.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            third_ordinate: ThirdOrdinate::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_third_ordinate(mut self, third_ordinate: ThirdOrdinate) -> Self {
        self.third_ordinate = third_ordinate;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.third_ordinate, ThirdOrdinate::OverwriteY);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builder_methods() {
        let config = ParserConfig::default()
            .with_third_ordinate(ThirdOrdinate::Elevation)
            .with_max_depth(3);
        assert_eq!(config.third_ordinate.index(), 2);
        assert_eq!(config.max_depth, 3);
        assert_eq!(ThirdOrdinate::OverwriteY.index(), 1);
    }
}
