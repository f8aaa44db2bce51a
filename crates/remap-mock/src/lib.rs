//! Fixtures for testing source map remapping.
//!
//! [`MapBuilder`] assembles small maps segment by segment, [`MockLoader`]
//! serves them from memory while recording every call, and
//! [`MapAssertions`] checks where generated positions of a flattened map land.

pub mod assertions;
pub mod builder;
pub mod mock;

pub use assertions::MapAssertions;
pub use builder::MapBuilder;
pub use mock::{LoaderCall, MockLoader, MockLoaderError};
