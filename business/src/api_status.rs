//! Reachability probe for the remote API root.

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Deserialize;

use crate::BusinessConfig;
use crate::http::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAvailability {
    /// The root answered 2xx. `message` is its `mensaje` field, when present.
    Available { message: Option<String> },
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    checked_at: DateTime<Utc>,
    availability: ApiAvailability,
}

impl ApiStatus {
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    pub fn api_availability(&self) -> &ApiAvailability {
        &self.availability
    }

    pub fn is_available(&self) -> bool {
        matches!(self.availability, ApiAvailability::Available { .. })
    }
}

#[derive(Deserialize)]
struct RootBody {
    mensaje: Option<String>,
}

/// `GET /` on the configured base URL.
pub async fn check_api_status(config: &BusinessConfig) -> ApiStatus {
    let now = Utc::now();
    let url = config.endpoint("");
    info!("Get API status at {now:?}");

    let availability = match Client::get(url).send().await {
        Ok(response) if response.is_success() => {
            let message = response
                .json::<RootBody>()
                .ok()
                .and_then(|body| body.mensaje);
            info!("Backend available, checked at {now:?}");
            ApiAvailability::Available { message }
        }
        Ok(response) => {
            warn!("Backend returned status code {}", response.status);
            ApiAvailability::Unavailable(format!("status {}", response.status))
        }
        Err(err) => {
            warn!("API status check failed: {err}");
            ApiAvailability::Unavailable(err.to_string())
        }
    };

    ApiStatus {
        checked_at: now,
        availability,
    }
}
