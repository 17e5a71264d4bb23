use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tech_dev_club::analytics::Analytics;
use tech_dev_club::api::{self, AppState};
use tech_dev_club::auth::{self, AuthClient, SessionStore};
use tech_dev_club::catalog::Catalog;
use tech_dev_club::config::AppConfig;
use tech_dev_club::email::EmailClient;
use tech_dev_club::hosting::HostingConfig;
use tech_dev_club::models::{SignupForm, SignupRequest};
use tech_dev_club::weather::WeatherClient;

#[derive(Parser)]
#[command(name = "tdc")]
#[command(about = "Tech Dev Club community site backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "4173")]
        port: u16,

        /// Catalog file to serve instead of the bundled one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Sign up against the auth backend and store the session locally
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Confirmation; defaults to the password when omitted
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Write static-hosting deploy artifacts (.htaccess, checklist)
    Hosting {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Domain the site is served from
        #[arg(long, default_value = "techdevclub.com")]
        domain: String,
    },
    /// Parse and validate a catalog document
    Validate {
        /// Catalog file; the bundled catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tech_dev_club=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .map_err(|e| anyhow::anyhow!("catalog {} rejected: {e}", path.display())),
        None => Ok(Catalog::bundled()?),
    }
}

fn build_state(config: &AppConfig, catalog: Catalog) -> AppState {
    AppState {
        catalog: Arc::new(catalog),
        weather: WeatherClient::new(&config.weather_base_url, &config.weather_api_key),
        auth: AuthClient::new(&config.auth_base_url),
        email: EmailClient::new(config.email.clone()),
        analytics: Analytics::new(config.analytics_enabled),
    }
}

async fn serve(port: u16, catalog: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let catalog = load_catalog(catalog.as_ref())?;
    tracing::info!(resources = catalog.len(), "catalog loaded");

    let app = api::create_router(build_state(&config, catalog));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Tech Dev Club server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, catalog }) => {
            serve(port, catalog).await?;
        }
        Some(Commands::Signup {
            name,
            email,
            password,
            confirm,
        }) => {
            let form = SignupForm {
                confirm_password: confirm.unwrap_or_else(|| password.clone()),
                name,
                email,
                password,
            };
            if let Err(e) = auth::validate(&form) {
                anyhow::bail!("{e}");
            }

            let config = AppConfig::from_env();
            let client = AuthClient::new(&config.auth_base_url);
            let response = client.signup(&SignupRequest::from_form(&form)).await?;

            if !response.success {
                anyhow::bail!(
                    "{}",
                    response
                        .message
                        .unwrap_or_else(|| "Signup failed. Please try again.".to_string())
                );
            }

            match response.data {
                Some(session) => {
                    SessionStore::open_default()?.save(&session)?;
                    println!("Welcome to Tech Dev Club, {}!", session.user.name);
                }
                None => println!("Signup succeeded, but no session was returned."),
            }
        }
        Some(Commands::Hosting { out, domain }) => {
            let config = HostingConfig {
                domain,
                ..Default::default()
            };
            config.write_artifacts(&out)?;
            println!("Wrote .htaccess and deploy-checklist.txt to {}", out.display());
        }
        Some(Commands::Validate { catalog }) => {
            let catalog = load_catalog(catalog.as_ref())?;
            println!("Catalog is valid: {} resources", catalog.len());
        }
        None => {
            serve(4173, None).await?;
        }
    }

    Ok(())
}
