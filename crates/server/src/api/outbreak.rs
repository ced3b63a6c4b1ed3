use dioxus::prelude::*;
use shared_types::{NewOutbreakLocation, OutbreakCategory, OutbreakLocation};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session;

/// List every tracked location for one outbreak category.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_outbreaks(
    category: OutbreakCategory,
) -> Result<Vec<OutbreakLocation>, ServerFnError> {
    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    let token = session::require_session().map_err(|e| e.into_server_fn_error())?;

    ctx.supabase
        .select_all(&token, category.table())
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Record a new outbreak location. Returns the inserted rows exactly as
/// the storage layer reports them, so the client can append them to its
/// list without a refetch.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn add_outbreak(
    category: OutbreakCategory,
    location: NewOutbreakLocation,
) -> Result<Vec<OutbreakLocation>, ServerFnError> {
    use shared_types::AppError;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    let token = session::require_session().map_err(|e| e.into_server_fn_error())?;

    if location.location.trim().is_empty() {
        return Err(AppError::bad_request("Location name must not be empty")
            .into_server_fn_error());
    }

    let inserted = ctx
        .supabase
        .insert_returning(&token, category.table(), &location)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(category = category.label(), "outbreak location added");
    Ok(inserted)
}

/// Remove one outbreak location by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_outbreak(category: OutbreakCategory, id: i64) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    let token = session::require_session().map_err(|e| e.into_server_fn_error())?;

    let deleted = ctx
        .supabase
        .delete_by_id(&token, category.table(), id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if !deleted {
        return Err(AppError::not_found("Location not found").into_server_fn_error());
    }

    tracing::info!(category = category.label(), id, "outbreak location removed");
    Ok(())
}
