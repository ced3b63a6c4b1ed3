use dioxus::prelude::*;
use shared_types::NominatimPlace;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session;

/// Forward-geocode a free-text query and return the top result, if any.
/// Acceptance (Philippines-only, bounding box required) is decided by
/// the caller against the returned place.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn geocode_search(query: String) -> Result<Option<NominatimPlace>, ServerFnError> {
    use shared_types::AppError;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    session::require_session().map_err(|e| e.into_server_fn_error())?;

    let query = query.trim().to_string();
    if query.is_empty() {
        return Err(AppError::bad_request("Enter a location to search for")
            .into_server_fn_error());
    }

    ctx.geocoder
        .search_first(&query)
        .await
        .map_err(|e| e.into_server_fn_error())
}
