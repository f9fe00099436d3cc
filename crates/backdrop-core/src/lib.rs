//! Platform-free particle backdrop engine.
//!
//! Nothing here touches the DOM; the web front end feeds input into
//! [`PointerTracker`] and paints through a [`Surface`] implementation.

pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod palette;
pub mod particle;
pub mod physics;
pub mod pointer;
pub mod surface;

pub use config::*;
pub use error::*;
pub use field::*;
pub use palette::*;
pub use particle::*;
pub use pointer::*;
pub use surface::*;
