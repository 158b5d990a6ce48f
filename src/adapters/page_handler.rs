use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

use crate::config::Settings;
use crate::error::AppError;

const INDEX_TEMPLATE: &str = "index.html";

/// Alignment radios offered on the form, first one checked.
pub const TEXT_ALIGNMENTS: [&str; 3] = ["left", "center", "right"];

/// Renders the card form page.
///
/// The template is compiled once at construction; the bundle picks up its
/// runtime settings from the JSON island the page embeds.
pub struct PageHandler {
    tera: Tera,
    settings: Arc<Settings>,
}

impl PageHandler {
    pub fn new(settings: Arc<Settings>) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            INDEX_TEMPLATE,
            include_str!("../../templates/index.html.tera"),
        )?;
        Ok(Self { tera, settings })
    }

    pub fn render_index(&self) -> Result<String, AppError> {
        let catalog = &self.settings.catalog;

        let mut context = Context::new();
        context.insert("templates", &catalog.templates);
        context.insert("fonts", &catalog.fonts);
        context.insert("colors", &catalog.colors);
        context.insert("default_template", &catalog.default_template);
        context.insert("alignments", &TEXT_ALIGNMENTS);
        context.insert("renderer_url", &self.settings.renderer.url);
        context.insert("batch_url", &self.settings.renderer.batch_url);
        context.insert("bundle", &self.settings.assets.bundle);
        context.insert("client_settings", &client_settings_json(&self.settings)?);

        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }

    pub async fn index(&self) -> Result<Html<String>, AppError> {
        self.render_index().map(Html)
    }
}

/// Serialized client settings, safe to embed inside a `<script>` element.
fn client_settings_json(settings: &Settings) -> Result<String, AppError> {
    let json = serde_json::to_string(&settings.client)?;
    Ok(json.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{AssetSettings, ClientSettings, RendererSettings, ServerSettings};

    fn settings() -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            renderer: RendererSettings::default(),
            assets: AssetSettings::default(),
            client: ClientSettings::default(),
            catalog: Catalog::default(),
        }
    }

    #[test]
    fn test_index_carries_form_contract() {
        let handler = PageHandler::new(Arc::new(settings())).unwrap();
        let page = handler.render_index().unwrap();

        for id in [
            r#"id="cardForm""#,
            r#"id="batchForm""#,
            r#"id="template""#,
            r#"id="social-media-container""#,
            r#"id="add-social-media""#,
            r#"id="clear-form""#,
            r#"id="logo""#,
            r#"id="csv_file""#,
            r#"id="cardform-settings""#,
        ] {
            assert!(page.contains(id), "page is missing {}", id);
        }
        assert_eq!(page.matches(r#"class="template-preview"#).count(), 13);
        assert!(page.contains(r#"<option value="modern" selected>"#));
        // attribute values go through html escaping
        assert!(page.contains(r#"action="&#x2F;preview""#));
        assert!(page.contains("/pkg/cardform_ui.js"));
    }

    #[test]
    fn test_left_alignment_checked_by_default() {
        let handler = PageHandler::new(Arc::new(settings())).unwrap();
        let page = handler.render_index().unwrap();

        assert!(page.contains(r#"value="left" checked"#));
        assert!(!page.contains(r#"value="right" checked"#));
    }

    #[test]
    fn test_client_settings_cannot_close_script() {
        let mut settings = settings();
        settings.client.storage_key = "</script><b>".to_string();

        let json = client_settings_json(&settings).unwrap();
        assert!(!json.contains('<'));

        let parsed: ClientSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.storage_key, "</script><b>");
    }
}
