#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod context;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod geocode;

#[cfg(feature = "server")]
pub mod realtime;

#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub mod supabase;

#[cfg(feature = "server")]
pub mod telemetry;
