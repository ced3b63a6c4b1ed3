use dioxus::prelude::*;
use shared_types::{AddressTier, AddressUnit};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session;

/// List one tier of the Philippine address reference data.
///
/// Regions are listed whole; every lower tier requires the parent
/// tier's code so the cascade only ever loads the rows under the
/// current selection.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_address_units(
    tier: AddressTier,
    parent_code: Option<String>,
) -> Result<Vec<AddressUnit>, ServerFnError> {
    use shared_types::AppError;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;
    let token = session::require_session().map_err(|e| e.into_server_fn_error())?;

    if tier.parent_column().is_some() && parent_code.is_none() {
        return Err(
            AppError::bad_request(format!("Select the area above {} first", tier.label()))
                .into_server_fn_error(),
        );
    }

    ctx.supabase
        .list_address_units(&token, tier, parent_code.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())
}
