use clap::Parser;
use std::path::PathBuf;

/// Business card form server - hosts the form page and its browser bundle
#[derive(Parser, Debug, Clone)]
#[command(name = "cardform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "CARDFORM_CONFIG", default_value = "cardform.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "CARDFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "CARDFORM_PORT")]
    pub port: Option<u16>,

    /// URL the form posts to for card rendering
    #[arg(long, env = "CARDFORM_RENDERER_URL")]
    pub renderer_url: Option<String>,

    /// Directory holding the compiled browser bundle
    #[arg(long, env = "CARDFORM_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,
}
