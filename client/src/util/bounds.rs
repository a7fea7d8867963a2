//! Latitude/longitude bounds parsing and validation.
//!
//! DESIGN
//! ======
//! Form fields arrive as raw strings. A field is valid when it is empty
//! (unconstrained, so it takes its interval's extreme) or parses as a
//! number inside its closed interval. Validation is all-or-nothing: the first
//! failing field rejects the whole rectangle.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

/// Maximum keyword length, in characters, accepted by note search.
pub const MAX_KEYWORD_LEN: usize = 100;

/// Prefix shared by every validation-failure message.
pub const INVALID_INPUT_PREFIX: &str = "invalid input:";

/// Coordinate axis of a bounds field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Absolute limit of the axis' closed interval.
    #[must_use]
    pub const fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let limit = self.limit();
        (-limit..=limit).contains(&value)
    }
}

/// One of the four numeric fields of the bounds rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundField {
    MinLat,
    MaxLat,
    MinLon,
    MaxLon,
}

impl BoundField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::MinLat, Self::MaxLat, Self::MinLon, Self::MaxLon];

    /// Human-readable field name used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinLat => "Min Latitude",
            Self::MaxLat => "Max Latitude",
            Self::MinLon => "Min Longitude",
            Self::MaxLon => "Max Longitude",
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::MinLat | Self::MaxLat => Axis::Latitude,
            Self::MinLon | Self::MaxLon => Axis::Longitude,
        }
    }

    /// Position in [`BoundField::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Self::MaxLat | Self::MaxLon)
    }

    /// Value an empty field stands for: the extreme of its interval.
    #[must_use]
    pub fn unconstrained(self) -> f64 {
        let limit = self.axis().limit();
        if self.is_max() { limit } else { -limit }
    }
}

/// A bounds or keyword value failed its range/format rule.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} {raw:?} is not a number", .field.label())]
    NotANumber { field: BoundField, raw: String },
    /// The browser rejected the typed text and reported an empty value.
    #[error("{} is not a number", .field.label())]
    BadInput { field: BoundField },
    #[error("{} {value} is outside [-{limit}, {limit}]", .field.label(), limit = .field.axis().limit())]
    OutOfRange { field: BoundField, value: f64 },
    #[error("keyword is {len} characters long, the limit is {max}", max = MAX_KEYWORD_LEN)]
    KeywordTooLong { len: usize },
}

impl ValidationError {
    /// User-facing message shown by the message box.
    #[must_use]
    pub fn notice(&self) -> String {
        format!("{INVALID_INPUT_PREFIX} {self}")
    }
}

/// A validated latitude/longitude rectangle with `min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// The whole globe.
    pub const WORLD: Self = Self { min_lat: -90.0, max_lat: 90.0, min_lon: -180.0, max_lon: 180.0 };

    /// Read each field in [`BoundField::ALL`] order with `read`, stopping at
    /// the first failure.
    ///
    /// An inverted pair (min above max) describes the same rectangle and is
    /// swapped rather than rejected.
    pub fn parse_fields(
        mut read: impl FnMut(BoundField) -> Result<f64, ValidationError>,
    ) -> Result<Self, ValidationError> {
        let mut values = [0.0; 4];
        for (slot, field) in values.iter_mut().zip(BoundField::ALL) {
            *slot = read(field)?;
        }
        Ok(Self::ordered(values))
    }

    fn ordered(values: [f64; 4]) -> Self {
        let [min_lat, max_lat, min_lon, max_lon] = values;
        Self {
            min_lat: min_lat.min(max_lat),
            max_lat: min_lat.max(max_lat),
            min_lon: min_lon.min(max_lon),
            max_lon: min_lon.max(max_lon),
        }
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Parse a single field. Surrounding whitespace is ignored; an empty field
/// is unconstrained. Values that overflow to infinity are out of range.
pub fn parse_coordinate(field: BoundField, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(field.unconstrained());
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| ValidationError::NotANumber { field, raw: trimmed.to_owned() })?;
    if !field.axis().contains(value) {
        return Err(ValidationError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Trim a keyword and check its length.
pub fn validate_keyword(raw: &str) -> Result<String, ValidationError> {
    let keyword = raw.trim();
    let len = keyword.chars().count();
    if len > MAX_KEYWORD_LEN {
        return Err(ValidationError::KeywordTooLong { len });
    }
    Ok(keyword.to_owned())
}
