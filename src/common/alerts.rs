// src/common/alerts.rs
//! Alert headers attached to REST responses for client-side notifications
//!
//! Success alerts carry a translatable message key (`<app>.<entity>.<action>`)
//! and the entity identifier. Failure alerts carry `error.<key>` and the
//! entity name.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
#[error("Invalid application name for alert headers: {0}")]
pub struct InvalidAppName(pub String);

/// Builds the `X-<app>-alert`, `X-<app>-error` and `X-<app>-params` headers
#[derive(Debug, Clone)]
pub struct HeaderUtil {
    app_name: String,
    alert_header: HeaderName,
    error_header: HeaderName,
    params_header: HeaderName,
}

impl HeaderUtil {
    pub fn new(app_name: &str) -> Result<Self, InvalidAppName> {
        let header = |suffix: &str| {
            HeaderName::from_bytes(format!("X-{}-{}", app_name, suffix).as_bytes())
                .map_err(|_| InvalidAppName(app_name.to_string()))
        };

        Ok(Self {
            app_name: app_name.to_string(),
            alert_header: header("alert")?,
            error_header: header("error")?,
            params_header: header("params")?,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn header_names(&self) -> [HeaderName; 3] {
        [
            self.alert_header.clone(),
            self.error_header.clone(),
            self.params_header.clone(),
        ]
    }

    pub fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, &self.alert_header, message);
        insert_header(&mut headers, &self.params_header, param);
        headers
    }

    pub fn entity_creation_alert(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(&self.message_key(entity_name, "created"), param)
    }

    pub fn entity_update_alert(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(&self.message_key(entity_name, "updated"), param)
    }

    pub fn entity_deletion_alert(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(&self.message_key(entity_name, "deleted"), param)
    }

    /// Failure alert; the human readable message only goes to the log
    pub fn failure_alert(
        &self,
        entity_name: &str,
        error_key: &str,
        default_message: &str,
    ) -> HeaderMap {
        warn!(
            entity = %entity_name,
            error_key = %error_key,
            "Entity processing failed, {}",
            default_message
        );

        let mut headers = HeaderMap::new();
        insert_header(&mut headers, &self.error_header, &format!("error.{}", error_key));
        insert_header(&mut headers, &self.params_header, entity_name);
        headers
    }

    fn message_key(&self, entity_name: &str, action: &str) -> String {
        format!("{}.{}.{}", self.app_name, entity_name, action)
    }
}

fn insert_header(headers: &mut HeaderMap, name: &HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name.clone(), value);
        }
        Err(e) => warn!(header = %name, error = %e, "Skipping alert header with invalid value"),
    }
}
