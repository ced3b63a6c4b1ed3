use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session;

/// Sign in with email and password. Only accounts whose profile carries
/// the admin role are allowed through; everyone else has their fresh
/// session revoked and gets a denial error. Sets the HTTP-only session
/// cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use shared_types::{evaluate_gate, AppError, GateDecision, GateDenyReason, LoginRequest};
    use validator::Validate;

    let request = LoginRequest {
        email: email.clone(),
        password,
    };
    request
        .validate()
        .map_err(|e| AppError::from(e).into_server_fn_error())?;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;

    let auth = ctx
        .supabase
        .sign_in(&request.email, &request.password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let lookup = ctx
        .supabase
        .fetch_profile(&auth.access_token, auth.user.id)
        .await;
    let role = lookup.as_ref().ok().and_then(|p| p.as_ref()).map(|p| p.role);

    match evaluate_gate(lookup.map_err(|_| ())) {
        GateDecision::Allow => {
            session::schedule_session_cookie(&auth.access_token);
            tracing::info!(user_id = %auth.user.id, "admin signed in");
            Ok(AuthUser {
                id: auth.user.id,
                email: auth.user.email,
                role: role.unwrap_or_default(),
            })
        }
        GateDecision::Deny {
            revoke_session,
            reason,
        } => {
            if revoke_session {
                if let Err(err) = ctx.supabase.sign_out(&auth.access_token).await {
                    tracing::warn!(error = %err, "failed to revoke denied session");
                }
            }
            let app_error = match reason {
                GateDenyReason::NotAllowed => AppError::forbidden(reason.message()),
                GateDenyReason::ProfileMissing => AppError::not_found(reason.message()),
            };
            Err(app_error.into_server_fn_error())
        }
    }
}

/// Sign out. Revokes the upstream session (best effort) and clears the
/// session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;

    if let Ok(token) = session::require_session() {
        if let Err(err) = ctx.supabase.sign_out(&token).await {
            tracing::warn!(error = %err, "sign-out against backend failed");
        }
    }

    session::schedule_clear_cookie();
    Ok(())
}

/// Resolve the signed-in admin behind the session cookie.
///
/// Returns `Ok(None)` — and clears the stale cookie — whenever the
/// session is absent, no longer valid, or no longer backed by an admin
/// profile, so route guards can redirect instead of surfacing an error.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use shared_types::ADMIN_ROLE;

    let ctx = crate::context::get().map_err(|e| e.into_server_fn_error())?;

    let token = match session::require_session() {
        Ok(token) => token,
        Err(_) => return Ok(None),
    };

    let user = match ctx.supabase.current_user(&token).await {
        Ok(user) => user,
        Err(err) => {
            tracing::debug!(error = %err, "session token no longer valid");
            session::schedule_clear_cookie();
            return Ok(None);
        }
    };

    match ctx.supabase.fetch_profile(&token, user.id).await {
        Ok(Some(profile)) if profile.role == ADMIN_ROLE => Ok(Some(AuthUser {
            id: user.id,
            email: user.email,
            role: profile.role,
        })),
        Ok(_) => {
            tracing::warn!(user_id = %user.id, "session is not backed by an admin profile");
            session::schedule_clear_cookie();
            Ok(None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "profile lookup failed for current session");
            session::schedule_clear_cookie();
            Ok(None)
        }
    }
}
