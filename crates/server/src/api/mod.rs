mod account;
pub use account::*;

mod address;
pub use address::*;

mod geocode;
pub use geocode::*;

mod outbreak;
pub use outbreak::*;

mod profile;
pub use profile::*;
