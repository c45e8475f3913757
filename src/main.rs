// Stdio MCP server: resource description validator
//
// Serves the resource tools over stdin/stdout. Logs go to stderr so they
// never interleave with the protocol stream.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use kodegen_tools_resource_validator::ServerConfig;
use kodegen_tools_resource_validator::config::{DEFAULT_DATA_DIR, DEFAULT_REPORTS_DIR};
use kodegen_tools_resource_validator::utils::{DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "kodegen-resource-validator", version, about = "MCP tools for validating resource descriptions")]
struct Cli {
    /// Directory holding the resource JSON files
    #[arg(long, env = "RESOURCE_VALIDATOR_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory validation reports are written to
    #[arg(long, env = "RESOURCE_VALIDATOR_REPORTS_DIR", default_value = DEFAULT_REPORTS_DIR)]
    reports_dir: PathBuf,

    /// Fetch attempts per page, including the first
    #[arg(long, env = "RESOURCE_VALIDATOR_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "RESOURCE_VALIDATOR_REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// File of extra stop words, one per line
    #[arg(long = "stop-words", env = "RESOURCE_VALIDATOR_STOP_WORDS")]
    stop_words: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = ServerConfig::builder()
        .data_dir(cli.data_dir)
        .reports_dir(cli.reports_dir)
        .max_attempts(cli.max_attempts)
        .request_timeout(Duration::from_secs(cli.request_timeout_secs));
    if let Some(path) = cli.stop_words {
        builder = builder.extra_stop_words_file(path);
    }
    let config = builder.build()?;

    log::info!("Resource validator MCP server starting");
    kodegen_tools_resource_validator::serve(config).await
}
