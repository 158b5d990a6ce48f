use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::catalog::Catalog;
use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub renderer: RendererSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    /// Handed to the browser bundle through the page
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// The external service that turns a submitted form into a card.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RendererSettings {
    /// Form action; may be relative to this server
    #[serde(default = "default_renderer_url")]
    pub url: String,
    /// Action of the CSV batch form
    #[serde(default = "default_batch_url")]
    pub batch_url: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            url: default_renderer_url(),
            batch_url: default_batch_url(),
        }
    }
}

fn default_renderer_url() -> String {
    "/preview".to_string()
}

fn default_batch_url() -> String {
    "/batch/upload".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory served under `/pkg`
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
    /// wasm-bindgen output name, without extension
    #[serde(default = "default_bundle")]
    pub bundle: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            bundle: default_bundle(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("ui/dist")
}

fn default_bundle() -> String {
    "cardform_ui".to_string()
}

/// Browser-side settings. Field names match what the bundle parses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_toast_delay_ms")]
    pub toast_delay_ms: u32,
    #[serde(default = "default_error_toast_delay_ms")]
    pub error_toast_delay_ms: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            toast_delay_ms: default_toast_delay_ms(),
            error_toast_delay_ms: default_error_toast_delay_ms(),
        }
    }
}

fn default_storage_key() -> String {
    "businessCardForm".to_string()
}

fn default_toast_delay_ms() -> u32 {
    3000
}

fn default_error_toast_delay_ms() -> u32 {
    5000
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file, then CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `cardform.{toml,yaml,json}` from `root` if present.
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let settings = Self::load(&Path::new(root).join("cardform"))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(url) = &cli.renderer_url {
            self.renderer.url = url.clone();
        }
        if let Some(dir) = &cli.assets_dir {
            self.assets.dir = dir.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_root(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.renderer.url, "/preview");
        assert_eq!(settings.renderer.batch_url, "/batch/upload");
        assert_eq!(settings.assets.dir, PathBuf::from("ui/dist"));
        assert_eq!(settings.assets.bundle, "cardform_ui");
        assert_eq!(settings.client, ClientSettings::default());
        assert_eq!(settings.catalog, Catalog::default());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cardform.toml");
        fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 4000

[renderer]
url = "http://renderer.internal/preview"
"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "cardform",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9090",
        ]);
        let settings = Settings::new_with_cli(&cli).unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.renderer.url, "http://renderer.internal/preview");
    }
}
