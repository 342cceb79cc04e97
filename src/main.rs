use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_metadata::api::{ColorApiClient, ColorApiConfig, ColorApiError, ConfigError, config::DEFAULT_COLOR_API_BASE_URL};
use color_metadata::assistant::{ColorMetadataAssistant, PanelState};
use color_metadata::color::{self, RawColorRecord, RenderOptions};
use color_metadata::error::ErrorCode;
use color_metadata::host::{CliHost, InsertTarget};
use color_metadata::{routes, state};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("colors API client failed: {0}")]
    Api(#[from] ColorApiError),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON record: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Api(e) => e.error_code(),
            Self::Io(_) => "E_CLI_IO",
            Self::InvalidJson(_) => "E_CLI_INVALID_JSON",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "color-metadata", about = "Color metadata lookup and block insertion")]
struct Cli {
    #[arg(long, env = "COLOR_API_BASE_URL", default_value = DEFAULT_COLOR_API_BASE_URL)]
    api_base: String,

    /// HTML-escape values in the rendered table.
    #[arg(long, global = true, default_value_t = false)]
    escape: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the color for a document path and optionally insert its block.
    Lookup {
        /// Document path, e.g. /colors/color-detail/BEHR-001
        path: String,

        #[arg(long, help = "Insert the metadata block into this file, or - for stdout")]
        insert: Option<String>,
    },
    /// Render a raw color record without contacting the API.
    Render {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Serve the plugin HTTP API.
    Serve {
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: [{}] {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let render = RenderOptions { escape: cli.escape };

    match cli.command {
        Command::Lookup { path, insert } => {
            let client = ColorApiClient::new(&ColorApiConfig::new(&cli.api_base)?)?;
            let assistant = ColorMetadataAssistant::new(Arc::new(client)).with_render_options(render);
            let host = CliHost::new(path, insert.as_deref().map(InsertTarget::parse));

            let mut panel = PanelState::default();
            if let Some(session) = assistant.open(&host, &mut panel).await {
                print_panel(&panel);
                if insert.is_some() {
                    session.insert(&host, &mut panel).await;
                }
            }
            print_message(&panel);

            Ok(if panel.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Command::Render { input } => {
            let raw = read_record(&input)?;
            println!("{}", color::render_metadata_table_with(&color::normalize(&raw), render));
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { port } => {
            let client = ColorApiClient::new(&ColorApiConfig::new(&cli.api_base)?)?;
            let app_state = state::AppState::new(Arc::new(client), render);
            let app = routes::app(app_state);
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

            tracing::info!(%port, api_base = %cli.api_base, "color-metadata listening");
            axum::serve(listener, app).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_record(input: &str) -> Result<RawColorRecord, CliError> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&text)?)
}

fn print_panel(panel: &PanelState) {
    let Some(preview) = &panel.preview else {
        return;
    };
    eprintln!("{}", preview.title);
    for line in [&preview.code_line, &preview.hex_line] {
        if !line.is_empty() {
            eprintln!("  {line}");
        }
    }
    if let Some(swatch) = &preview.swatch {
        eprintln!("  {}", swatch.aria_label);
    }
}

fn print_message(panel: &PanelState) {
    if let Some(message) = &panel.message {
        if message.is_error {
            eprintln!("error: {}", message.text);
        } else {
            eprintln!("{}", message.text);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
