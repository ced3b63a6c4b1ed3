use std::sync::OnceLock;

use shared_types::AppError;

use crate::config::BackendConfig;
use crate::geocode::GeocoderClient;
use crate::supabase::SupabaseClient;

/// Everything the server functions need to talk to the outside world.
/// Built once at startup from [`BackendConfig`] and installed with
/// [`init`]; server functions fetch it through [`get`] instead of
/// reaching for a process-global client of their own.
#[derive(Clone)]
pub struct AppContext {
    pub supabase: SupabaseClient,
    pub geocoder: GeocoderClient,
    pub config: BackendConfig,
}

static CONTEXT: OnceLock<AppContext> = OnceLock::new();

impl AppContext {
    pub fn from_env() -> Result<Self, AppError> {
        let config = BackendConfig::from_env()?;
        Ok(Self {
            supabase: SupabaseClient::new(&config),
            geocoder: GeocoderClient::new(&config),
            config,
        })
    }
}

/// Install the context. Returns an error if called twice.
pub fn init(context: AppContext) -> Result<(), AppError> {
    CONTEXT
        .set(context)
        .map_err(|_| AppError::internal("Application context initialized twice"))
}

/// Fetch the installed context. Server functions call this at the top
/// and propagate the error rather than panicking.
pub fn get() -> Result<&'static AppContext, AppError> {
    CONTEXT
        .get()
        .ok_or_else(|| AppError::internal("Application context is not initialized"))
}
