use dioxus::prelude::*;
use shared_types::UserProfile;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session;

/// List every account profile. The dashboard only needs the count, but
/// the rows come back whole so the admin view can grow without a new
/// endpoint.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_profiles() -> Result<Vec<UserProfile>, ServerFnError> {
    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    let token = session::require_session().map_err(|e| e.into_server_fn_error())?;

    ctx.supabase
        .select_all(&token, "profiles")
        .await
        .map_err(|e| e.into_server_fn_error())
}
