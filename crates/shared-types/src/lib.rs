pub mod address;
pub mod error;
pub mod geo;
pub mod outbreak;
pub mod profile;
pub mod requests;

pub use address::*;
pub use error::*;
pub use geo::*;
pub use outbreak::*;
pub use profile::*;
pub use requests::*;
