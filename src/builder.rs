//! Index builder for raw latitude/longitude input
//!
//! Collects stops from an ingestion source, validating and projecting each
//! one, then hands the batch to [`KdTree::build`].

use crate::compute::projection::Projection;
use crate::compute::validation::{validate_lat_lon, validate_point};
use crate::config::Config;
use crate::error::{IndexError, Result};
use crate::tree::KdTree;
use geo::Point;
use transit_index_types::Stop;

/// Builder that projects stops onto the configured hub before indexing.
///
/// ```rust
/// use transit_index::IndexBuilder;
///
/// let mut builder = IndexBuilder::new();
/// builder.add_stop("capitol", 43.074683, -89.384261, true)?;
/// builder.add_stop("campus", 43.0731, -89.4012, false)?;
///
/// let tree = builder.build();
/// assert_eq!(tree.len(), 2);
/// # Ok::<(), transit_index::IndexError>(())
/// ```
#[derive(Debug)]
pub struct IndexBuilder {
    config: Config,
    projection: Projection,
    stops: Vec<Stop>,
}

impl IndexBuilder {
    /// Create a new builder centred on the default hub.
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            projection: Projection::from_config(&config),
            config,
            stops: Vec::new(),
        }
    }

    /// Create a builder from a validated configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            projection: Projection::from_config(&config),
            config,
            stops: Vec::new(),
        })
    }

    /// Pre-allocate room for `additional` more stops.
    pub fn reserve(&mut self, additional: usize) {
        self.stops.reserve(additional);
    }

    /// Validate, project and queue one stop.
    pub fn add_stop(
        &mut self,
        id: impl Into<String>,
        lat: f64,
        lon: f64,
        accessible: bool,
    ) -> Result<()> {
        let id = id.into();
        validate_lat_lon(lat, lon).map_err(|e| with_stop_id(&id, e))?;

        let location = self.projection.project(lat, lon);
        self.stops.push(Stop::new(id, location, accessible));
        Ok(())
    }

    /// Same as [`add_stop`](Self::add_stop) for a `geo::Point` whose x is
    /// longitude and y is latitude.
    pub fn add_point(&mut self, id: impl Into<String>, point: &Point, accessible: bool) -> Result<()> {
        let id = id.into();
        validate_point(point).map_err(|e| with_stop_id(&id, e))?;

        let location = self.projection.project_point(point);
        self.stops.push(Stop::new(id, location, accessible));
        Ok(())
    }

    /// Queue a stop that is already projected.
    pub fn add_located(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Build the tree. Consumes the builder.
    pub fn build(self) -> KdTree {
        KdTree::build(self.stops)
    }
}

fn with_stop_id(id: &str, err: IndexError) -> IndexError {
    match err {
        IndexError::InvalidInput(msg) => IndexError::InvalidInput(format!("Stop {}: {}", id, msg)),
        other => other,
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Stop> for IndexBuilder {
    fn extend<I: IntoIterator<Item = Stop>>(&mut self, iter: I) {
        self.stops.extend(iter);
    }
}
