//! Clinic Admin CLI
//!
//! Terminal console for the clinic admin dashboard:
//! - Check who the session cookie belongs to
//! - Show the appointment dashboard
//! - Accept or reject appointments
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clinic_admin::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use clinic_admin::dashboard::render;
use clinic_admin::{Access, AdminApp, ApiClient, AppointmentStatus, Notification, Route};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "clinic-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin console for the clinic appointment backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/clinic-admin/config.toml, ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session cookie value, overrides the config file
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the admin behind the current session
    Whoami,

    /// Resolve a route against the current session
    Open {
        /// Path, e.g. "/" or "/doctors"
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show appointments and doctor counts
    Dashboard,

    /// Change an appointment's status
    UpdateStatus {
        /// Appointment id
        id: String,
        /// New status: Pending, Accepted or Rejected
        status: AppointmentStatus,
    },

    /// Print a default config file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let LoadedConfig {
        mut config,
        source,
        skipped,
    } = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }
    if let Some(token) = cli.token.clone() {
        config.auth.token = Some(token);
    }

    init_logging(&config.logging);
    for error in &skipped {
        tracing::warn!(%error, "Skipping config file");
    }
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    tracing::debug!("Clinic Admin v{} against {}", env!("CARGO_PKG_VERSION"), config.api.base_url);

    let client = ApiClient::new(&config.client_config()).context("building backend client")?;
    let mut app = AdminApp::new(Arc::new(client));
    app.start().await;

    match cli.command {
        Commands::Whoami => {
            let session = app.session();
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(session)?);
            } else if let Some(name) = session.display_name() {
                println!("Logged in as {}", name);
            } else {
                println!("Not logged in");
            }
        }

        Commands::Open { path } => {
            let access = app.open(&path);
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&access)?);
            } else {
                match access {
                    Access::Allowed(route) => println!("Showing {}", route),
                    Access::Denied { redirect } => println!("Redirected to {}", redirect),
                }
            }
        }

        Commands::Dashboard => {
            require_dashboard(&app);
            let state = app.load_dashboard().await;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", render::render_dashboard(app.session().user.as_ref(), &state));
            }
        }

        Commands::UpdateStatus { id, status } => {
            require_dashboard(&app);
            let mut state = app.load_dashboard().await;
            let toast = app.update_status(&mut state, &id, status).await;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&toast)?);
            } else {
                print_toast(&toast);
                if !toast.is_error() {
                    println!();
                    print!("{}", render::render_table(&state));
                }
            }

            if toast.is_error() {
                std::process::exit(1);
            }
        }

        // printed before the probe
        Commands::Config => {}
    }

    Ok(())
}

/// Exit unless the guard lets the dashboard through
fn require_dashboard(app: &AdminApp) {
    if let Access::Denied { redirect } = app.open(Route::Dashboard.path()) {
        eprintln!("Not logged in as an admin; redirected to {}", redirect);
        eprintln!();
        eprintln!("Pass the admin session cookie with --token or CLINIC_ADMIN_TOKEN.");
        std::process::exit(1);
    }
}

fn print_toast(toast: &Notification) {
    let line = format!("{} {}", toast.icon(), toast.message);
    if toast.is_error() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clinic_admin={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
