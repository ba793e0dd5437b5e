//! Language Tour - Runnable Feature Demonstrations
//!
//! Every binary under `src/bin/` is a standalone program that exercises one
//! language feature against hard-coded input and prints what happens.
//! The library holds the few types more than one demo needs: the
//! structural-equality [`Point`], the disposable [`Resource`] and the named
//! [`Status`] constants, plus shared error, config and logging plumbing.
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin <demo_name>
//! ```

pub mod banner;
pub mod config;
pub mod error;
pub mod logging;
pub mod point;
pub mod resource;
pub mod status;

pub use config::TourConfig;
pub use error::{TourError, TourResult};
pub use point::Point;
pub use resource::{ExternalHandle, LoggedHandle, ReleasePath, Resource, ResourceState};
pub use status::{DayOfWeek, Status};
