//! # transit-index-types
//!
//! Plain data types shared by the `transit-index` crate and its collaborators.
//!
//! - **Location**: a projected (x, y) position in miles relative to a hub
//! - **Stop**: an identified, located record with an accessibility flag
//! - **Bounds**: an axis-aligned box over projected locations
//!
//! All types are serializable with Serde and convert to the `geo` crate's
//! primitives where that makes sense.
//!
//! ## Examples
//!
//! ```rust
//! use transit_index_types::{Location, Stop};
//!
//! let stop = Stop::new("1391", Location::new(-3.0, 4.0), true);
//! assert_eq!(stop.location.distance(&Location::origin()), 5.0);
//! ```

pub mod bounds;
pub mod location;
pub mod stop;

pub use bounds::Bounds;
pub use location::Location;
pub use stop::Stop;
