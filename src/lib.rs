//! Static spatial index for transit stops: a fixed-depth k-d tree over
//! stops projected onto a planar frame around a hub, with rectangle and
//! radius queries.
//!
//! ```rust
//! use transit_index::{IndexBuilder, Location};
//!
//! let mut builder = IndexBuilder::new();
//! builder.add_stop("capitol", 43.074683, -89.384261, true)?;
//! builder.add_stop("campus", 43.0731, -89.4012, false)?;
//! builder.add_stop("airport", 43.1399, -89.3375, true)?;
//! let tree = builder.build();
//!
//! // Everything within two miles of the capitol
//! let mut nearby = tree.query_circle(Location::origin(), 2.0);
//! nearby.sort();
//! let ids: Vec<_> = nearby.iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(ids, ["campus", "capitol"]);
//! # Ok::<(), transit_index::IndexError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod tree;

pub use builder::IndexBuilder;
pub use config::{Config, ReferencePoint};
pub use error::{IndexError, Result};

pub use compute::{Projection, haversine_miles};
pub use tree::{Axis, KdTree, MAX_DEPTH, NodeView, SplitLine};

pub use transit_index_types::{Bounds, Location, Stop};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{IndexBuilder, IndexError, Result};

    pub use crate::{Bounds, Location, Stop};

    pub use crate::{KdTree, NodeView, Projection};

    pub use crate::{Config, ReferencePoint};
}
