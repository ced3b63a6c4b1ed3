//! Thin client for the Supabase project: GoTrue auth endpoints and
//! PostgREST row access. One instance is constructed at process start
//! and passed explicitly to every data-access call site — there is no
//! ambient global handle.
//!
//! Every operation is a single best-effort request: no retry, no
//! backoff, no explicit timeout beyond the transport default.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{AddressTier, AddressUnit, AppError, UserProfile};
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error_convert::ReqwestErrorExt;

/// Upstream session returned by a successful password sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUserInfo,
}

/// The authenticated user as GoTrue reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserInfo {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

/// Error body GoTrue returns on auth failures.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    /// The anon key doubles as the bearer token for unauthenticated
    /// reads (e.g. the profiles change watcher).
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    // ── Auth ────────────────────────────────────────────────

    /// Exchange email/password credentials for a session.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<AuthErrorBody>(&body)
                .ok()
                .and_then(|b| b.error_description.or(b.msg))
                .unwrap_or_else(|| "Invalid login credentials".to_string());
            return Err(AppError::unauthorized(format!("Login failed: {}", detail)));
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| e.into_app_error())
    }

    /// Invalidate the session behind the given access token. Best effort —
    /// callers log failures and move on.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        self.check_status(response).await.map(|_| ())
    }

    /// Resolve the user behind an access token.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn current_user(&self, access_token: &str) -> Result<AuthUserInfo, AppError> {
        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let response = self.check_status(response).await?;
        response
            .json::<AuthUserInfo>()
            .await
            .map_err(|e| e.into_app_error())
    }

    // ── Row storage ─────────────────────────────────────────

    /// `SELECT *` over a whole table.
    pub async fn select_all<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
    ) -> Result<Vec<T>, AppError> {
        self.select(token, table, None).await
    }

    /// `SELECT *` filtered by one `column = value` equality.
    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<T>, AppError> {
        self.select(token, table, Some((column, value))).await
    }

    async fn select<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<T>, AppError> {
        let mut request = self
            .http
            .get(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .query(&[("select", "*")]);

        if let Some((column, value)) = filter {
            request = request.query(&[(column, format!("eq.{}", value))]);
        }

        let response = request.send().await.map_err(|e| e.into_app_error())?;
        let response = self.check_status(response).await?;
        response.json::<Vec<T>>().await.map_err(|e| e.into_app_error())
    }

    /// Insert one row and return the inserted row(s) verbatim.
    pub async fn insert_returning<T, B>(
        &self,
        token: &str,
        table: &str,
        row: &B,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let response = self.check_status(response).await?;
        response.json::<Vec<T>>().await.map_err(|e| e.into_app_error())
    }

    /// Delete one row by id. Returns `false` when no row matched.
    pub async fn delete_by_id(&self, token: &str, table: &str, id: i64) -> Result<bool, AppError> {
        let response = self
            .http
            .delete(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let response = self.check_status(response).await?;
        let deleted: Vec<serde_json::Value> =
            response.json().await.map_err(|e| e.into_app_error())?;
        Ok(!deleted.is_empty())
    }

    /// Fetch the profile row for a user id, if one exists.
    pub async fn fetch_profile(
        &self,
        token: &str,
        user_id: Uuid,
    ) -> Result<Option<UserProfile>, AppError> {
        let rows: Vec<UserProfile> = self
            .select_eq(token, "profiles", "id", &user_id.to_string())
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Fetch one tier of the address reference data, optionally filtered
    /// by the parent tier's code. The region tier has no parent; lower
    /// tiers are only fetched once the parent code is known.
    pub async fn list_address_units(
        &self,
        token: &str,
        tier: AddressTier,
        parent_code: Option<&str>,
    ) -> Result<Vec<AddressUnit>, AppError> {
        let rows: Vec<serde_json::Value> = match (tier.parent_column(), parent_code) {
            (Some(column), Some(code)) => self.select_eq(token, tier.table(), column, code).await?,
            _ => self.select_all(token, tier.table()).await?,
        };
        Ok(normalize_address_rows(tier, &rows))
    }

    /// Map a non-2xx response to an AppError by status class.
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, body = %body, "supabase request rejected");
        Err(match status {
            StatusCode::UNAUTHORIZED => AppError::unauthorized("Session is not valid"),
            StatusCode::FORBIDDEN => AppError::forbidden("Not allowed"),
            StatusCode::NOT_FOUND => AppError::not_found("Resource not found"),
            s if s.is_client_error() => AppError::bad_request(format!("Rejected by backend: {}", s)),
            s => AppError::upstream(format!("Backend error: {}", s)),
        })
    }
}

/// Normalize raw reference rows into [`AddressUnit`]s using the tier's
/// column names. Rows missing the code or description columns are dropped.
pub fn normalize_address_rows(tier: AddressTier, rows: &[serde_json::Value]) -> Vec<AddressUnit> {
    rows.iter()
        .filter_map(|row| {
            let code = string_field(row, tier.code_column())?;
            let description = string_field(row, tier.description_column())?;
            let parent_code = tier
                .parent_column()
                .and_then(|column| string_field(row, column));
            Some(AddressUnit {
                code,
                description,
                parent_code,
            })
        })
        .collect()
}

/// Read a column that may arrive as a string or a bare number.
fn string_field(row: &serde_json::Value, column: &str) -> Option<String> {
    match row.get(column)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
