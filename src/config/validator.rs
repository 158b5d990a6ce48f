use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{ClientSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Cross-reference error: {0}")]
    CrossReference(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Collect every problem rather than stopping at the first.
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if settings.renderer.url.trim().is_empty() {
            errors.push(ValidationError::MissingField("renderer.url".to_string()));
        }

        if settings.renderer.batch_url.trim().is_empty() {
            errors.push(ValidationError::MissingField("renderer.batch_url".to_string()));
        }

        if settings.assets.bundle.trim().is_empty() {
            errors.push(ValidationError::MissingField("assets.bundle".to_string()));
        }

        if let Err(e) = Self::validate_client(&settings.client) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_catalog(&settings.catalog) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &crate::config::ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_client(client: &ClientSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if client.storage_key.is_empty() {
            errors.push(ValidationError::MissingField("client.storage_key".to_string()));
        }

        for (field, value) in [
            ("client.toast_delay_ms", client.toast_delay_ms),
            ("client.error_toast_delay_ms", client.error_toast_delay_ms),
        ] {
            if value == 0 {
                errors.push(ValidationError::InvalidValue {
                    field: field.to_string(),
                    reason: "Delay must be greater than 0".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        Self::check_ids(
            "catalog.templates",
            catalog.templates.iter().map(|t| t.id.as_str()),
            &mut errors,
        );
        Self::check_ids(
            "catalog.fonts",
            catalog.fonts.iter().map(|f| f.id.as_str()),
            &mut errors,
        );
        Self::check_ids(
            "catalog.colors",
            catalog.colors.iter().map(|c| c.id.as_str()),
            &mut errors,
        );

        if !catalog.templates.is_empty() && catalog.template(&catalog.default_template).is_none() {
            errors.push(ValidationError::CrossReference(format!(
                "catalog.default_template '{}' is not a known template",
                catalog.default_template
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_ids<'a>(
        list: &str,
        ids: impl Iterator<Item = &'a str>,
        errors: &mut Vec<ValidationError>,
    ) {
        let mut seen = HashMap::new();
        let mut count = 0;

        for (idx, id) in ids.enumerate() {
            count += 1;
            if id.is_empty() {
                errors.push(ValidationError::MissingField(format!("{}[{}].id", list, idx)));
                continue;
            }
            if let Some(prev_idx) = seen.insert(id, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "{} id '{}' appears at indices {} and {}",
                    list, id, prev_idx, idx
                )));
            }
        }

        if count == 0 {
            errors.push(ValidationError::InvalidValue {
                field: list.to_string(),
                reason: "At least one entry is required".to_string(),
            });
        }
    }
}
