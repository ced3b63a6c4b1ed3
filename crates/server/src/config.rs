use shared_types::AppError;

/// Deployment configuration, supplied entirely through the environment.
/// Loaded once at process start and turned into an [`crate::context::AppContext`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Anon (publishable) API key for the Supabase project.
    pub supabase_anon_key: String,
    /// Base URL of the Nominatim-compatible geocoder.
    pub geocoder_base_url: String,
    /// Poll interval for the profiles change watcher, in seconds.
    pub profile_watch_secs: u64,
}

const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_PROFILE_WATCH_SECS: u64 = 30;

impl BackendConfig {
    /// Read configuration from the environment. Loads `.env` if present
    /// (ignored in production where env vars are set directly).
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let supabase_url = require_env("SUPABASE_URL")?;
        let supabase_anon_key = require_env("SUPABASE_ANON_KEY")?;

        let geocoder_base_url = std::env::var("GEOCODER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODER_BASE_URL.to_string());

        let profile_watch_secs = std::env::var("PROFILE_WATCH_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROFILE_WATCH_SECS);

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key,
            geocoder_base_url: geocoder_base_url.trim_end_matches('/').to_string(),
            profile_watch_secs,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name)
        .map_err(|_| AppError::internal(format!("{} is not configured", name)))
}
