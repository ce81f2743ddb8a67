//! Safe SQL builder: identifiers from declared layouts only, values as `?` parameters.

mod builder;
mod descriptor;
pub mod params;
pub use builder::*;
pub use descriptor::*;
pub use params::*;
