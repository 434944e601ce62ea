use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A located transit stop, the record the spatial index holds.
///
/// Equality and ordering only look at `id`, so sorting a list of stops
/// gives the same lexicographic order regardless of how the index
/// traversed them.
///
/// # Examples
///
/// ```
/// use transit_index_types::{Location, Stop};
///
/// let mut stops = vec![
///     Stop::new("20", Location::new(1.0, 1.0), false),
///     Stop::new("100", Location::new(0.0, 0.0), true),
/// ];
/// stops.sort();
/// assert_eq!(stops[0].id, "100");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// Feed identifier of the stop
    pub id: String,
    /// Projected position
    pub location: Location,
    /// Whether the stop supports wheelchair boarding
    pub accessible: bool,
}

impl Stop {
    pub fn new(id: impl Into<String>, location: Location, accessible: bool) -> Self {
        Self {
            id: id.into(),
            location,
            accessible,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn x(&self) -> f64 {
        self.location.x
    }

    pub fn y(&self) -> f64 {
        self.location.y
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl PartialOrd for Stop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({:?}, {}, {})", self.id, self.location, self.accessible)
    }
}
