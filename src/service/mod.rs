//! Per-resource API facade.
//!
//! Maps the application's named operations onto executor calls, supplying
//! endpoint paths, HTTP methods and payload shapes so screens only provide
//! intent. Mutating operations take a [`Feedback`] value describing the
//! per-call user feedback; listing operations return the outcome silently
//! for the caller to render.

pub mod extract;

use crate::endpoints;
use crate::execution::executor::RequestExecutor;
use crate::types::outcome::ApiOutcome;
use crate::types::request::RequestOptions;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Per-call user feedback settings.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    /// Confirmation dialog text on success.
    pub success_message: Option<String>,
    /// Navigation target applied after success.
    pub redirect_on_success: Option<String>,
    /// Suppress the error dialog; the caller still inspects the outcome.
    pub silent: bool,
}

impl Feedback {
    /// Confirmation dialog with `text` on success.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            success_message: Some(text.into()),
            ..Self::default()
        }
    }

    /// No dialogs at all (background polling).
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_on_success = Some(target.into());
        self
    }
}

fn apply_feedback(mut options: RequestOptions, feedback: Feedback) -> RequestOptions {
    if let Some(text) = feedback.success_message {
        options = options.success_message(text);
    }
    if let Some(target) = feedback.redirect_on_success {
        options = options.redirect_to(target);
    }
    if feedback.silent {
        options = options.silent();
    }
    options
}

/// Login request body. The backend expects PascalCase field names here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A needy-beneficiary registration record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedyProfile {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub address: String,
    pub family_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An administrator record. `role` distinguishes admins from group admins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub name: String,
    pub username: String,
    pub phone: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A map marker as returned by the location listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "needyID", alias = "adminID")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Registration statistics for the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    #[serde(default)]
    pub total_needy: u64,
    #[serde(default)]
    pub total_admins: u64,
    #[serde(default)]
    pub registered_this_month: u64,
}

/// The per-resource service facade.
pub struct ApiService {
    executor: RequestExecutor,
}

impl ApiService {
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// The underlying executor, for calls the facade does not cover.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Authenticate an administrator. No bearer token is attached.
    pub async fn login(&self, username: &str, password: &str) -> ApiOutcome {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let value = match serde_json::to_value(&payload) {
            Ok(value) => value,
            Err(err) => return ApiOutcome::failed(format!("Failed to encode request body: {err}")),
        };
        self.executor
            .execute(RequestOptions::new(endpoints::LOGIN).json(value).without_auth())
            .await
    }

    pub async fn create_needy(&self, profile: &NeedyProfile, feedback: Feedback) -> ApiOutcome {
        self.submit(endpoints::CREATE_NEEDY.to_string(), Method::POST, profile, feedback)
            .await
    }

    pub async fn list_needy(&self) -> ApiOutcome {
        self.fetch(endpoints::LIST_NEEDY.to_string()).await
    }

    pub async fn get_needy(&self, id: u64) -> ApiOutcome {
        self.fetch(endpoints::get_needy(id)).await
    }

    pub async fn edit_needy(&self, id: u64, profile: &NeedyProfile, feedback: Feedback) -> ApiOutcome {
        self.submit(endpoints::edit_needy(id), Method::PUT, profile, feedback)
            .await
    }

    pub async fn delete_needy(&self, id: u64, feedback: Feedback) -> ApiOutcome {
        let options = RequestOptions::new(endpoints::delete_needy(id)).method(Method::DELETE);
        self.executor.execute(apply_feedback(options, feedback)).await
    }

    pub async fn list_admins(&self) -> ApiOutcome {
        self.fetch(endpoints::LIST_ADMINS.to_string()).await
    }

    pub async fn get_admin(&self, id: u64) -> ApiOutcome {
        self.fetch(endpoints::get_admin(id)).await
    }

    pub async fn edit_admin(&self, id: u64, profile: &AdminProfile, feedback: Feedback) -> ApiOutcome {
        self.submit(endpoints::edit_admin(id), Method::PUT, profile, feedback)
            .await
    }

    pub async fn delete_admin(&self, id: u64, feedback: Feedback) -> ApiOutcome {
        let options = RequestOptions::new(endpoints::delete_admin(id)).method(Method::DELETE);
        self.executor.execute(apply_feedback(options, feedback)).await
    }

    /// Needy geo points for the map screen. Decode with `Vec<GeoPoint>`.
    pub async fn needy_locations(&self) -> ApiOutcome {
        self.fetch(endpoints::NEEDY_LOCATIONS.to_string()).await
    }

    /// Admin geo points for the map screen. Decode with `Vec<GeoPoint>`.
    pub async fn admin_locations(&self) -> ApiOutcome {
        self.fetch(endpoints::ADMIN_LOCATIONS.to_string()).await
    }

    /// Registration statistics. Decode with [`RegistrationStats`].
    pub async fn registration_stats(&self) -> ApiOutcome {
        self.fetch(endpoints::REGISTRATION_STATS.to_string()).await
    }

    async fn fetch(&self, endpoint: String) -> ApiOutcome {
        self.executor
            .execute(RequestOptions::new(endpoint).method(Method::GET))
            .await
    }

    async fn submit<T: Serialize>(
        &self,
        endpoint: String,
        method: Method,
        payload: &T,
        feedback: Feedback,
    ) -> ApiOutcome {
        let value = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(err) => return ApiOutcome::failed(format!("Failed to encode request body: {err}")),
        };
        let options = RequestOptions::new(endpoint).method(method).json(value);
        self.executor.execute(apply_feedback(options, feedback)).await
    }
}
