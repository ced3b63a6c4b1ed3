use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a reqwest transport error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::upstream("Upstream request timed out")
    } else if err.is_connect() {
        AppError::upstream("Could not reach the upstream service")
    } else if err.is_decode() {
        AppError::upstream("Upstream returned an unreadable response")
    } else {
        AppError::upstream(err.to_string())
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON,
/// so the client can parse the structured error back out.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
