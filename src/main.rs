use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use trove::auth::{AuthState, Session};
use trove::config::GlobalConfig;
use trove::domain::{Field, ToolFields};
use trove::store::{DocumentStore, HttpStore, HttpStoreConfig};
use trove::tui::{self, TuiRunner};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trove")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("trove.log");

    // Setup env_logger with file output; stdout belongs to the TUI
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Build the HTTP store client from config, attaching the session token.
fn build_store(config: &GlobalConfig, auth: &AuthState) -> Result<HttpStore> {
    let store_config = HttpStoreConfig {
        base_url: config.store.base_url.clone(),
        collection: config.store.collection.clone(),
        timeout: Duration::from_millis(config.store.timeout_ms),
    };
    Ok(HttpStore::new(
        store_config,
        auth.token().map(str::to_string),
    )?)
}

async fn run_application(cli: &Cli, config: &GlobalConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: launch TUI mode
            run_tui(config).await
        }
        Some(Commands::List) => handle_list_command(config).await,
        Some(Commands::Add {
            title,
            description,
            url,
        }) => {
            handle_add_command(
                title.as_deref(),
                description.as_deref(),
                url.as_deref(),
                config,
            )
            .await
        }
        Some(Commands::Update {
            id,
            title,
            description,
            url,
        }) => {
            handle_update_command(
                id,
                title.as_deref(),
                description.as_deref(),
                url.as_deref(),
                config,
            )
            .await
        }
        Some(Commands::Login { account, token }) => handle_login_command(account, token, config),
        Some(Commands::Logout) => handle_logout_command(config),
    }
}

async fn run_tui(config: &GlobalConfig) -> Result<()> {
    info!("Launching TUI mode");

    let session_path = config.session.path();
    let auth = AuthState::load(&session_path)?;
    let store: Arc<dyn DocumentStore> = Arc::new(build_store(config, &auth)?);

    let terminal = tui::init_terminal()?;
    let mut runner = TuiRunner::new(terminal, store, auth, session_path, config.ui.tick_rate_ms);
    let result = runner.run().await;
    tui::restore_terminal()?;

    result?;
    Ok(())
}

async fn handle_list_command(config: &GlobalConfig) -> Result<()> {
    info!("Listing tools");
    let auth = AuthState::load(&config.session.path())?;
    let store = build_store(config, &auth)?;

    let docs = store.list().await?;
    if docs.is_empty() {
        println!("{}", "No tools in the collection yet".yellow());
        return Ok(());
    }

    for doc in &docs {
        println!(
            "{}  {}",
            doc.id.cyan(),
            doc.fields.get(Field::Title).unwrap_or("").bold()
        );
        if let Some(description) = doc.fields.get(Field::Description)
            && !description.is_empty()
        {
            println!("    {}", description);
        }
        if let Some(url) = doc.fields.get(Field::Url)
            && !url.is_empty()
        {
            println!("    {}", url.blue().underline());
        }
    }
    Ok(())
}

/// Collect the provided field flags into a partial record.
fn collect_fields(
    title: Option<&str>,
    description: Option<&str>,
    url: Option<&str>,
) -> ToolFields {
    let mut fields = ToolFields::new();
    if let Some(title) = title {
        fields.set(Field::Title, title);
    }
    if let Some(description) = description {
        fields.set(Field::Description, description);
    }
    if let Some(url) = url {
        fields.set(Field::Url, url);
    }
    fields
}

async fn handle_add_command(
    title: Option<&str>,
    description: Option<&str>,
    url: Option<&str>,
    config: &GlobalConfig,
) -> Result<()> {
    info!("Adding tool: {:?}", title);
    let auth = AuthState::load(&config.session.path())?;
    let store = build_store(config, &auth)?;

    let fields = collect_fields(title, description, url);
    let id = store.create(&fields).await?;
    println!("{} {}", "Saved tool:".green(), id);
    Ok(())
}

async fn handle_update_command(
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    url: Option<&str>,
    config: &GlobalConfig,
) -> Result<()> {
    info!("Updating tool: {}", id);
    let auth = AuthState::load(&config.session.path())?;
    let store = build_store(config, &auth)?;

    let changes = collect_fields(title, description, url);
    if changes.is_empty() {
        println!("{}", "Nothing to update - pass at least one field flag".yellow());
        return Ok(());
    }
    store.patch(id, &changes).await?;
    println!("{} {}", "Updated tool:".green(), id);
    Ok(())
}

fn handle_login_command(account: &str, token: &str, config: &GlobalConfig) -> Result<()> {
    info!("Storing session for: {}", account);
    let session = Session::new(account, token);
    session.save(&config.session.path())?;
    println!("{} {}", "Signed in as".green(), account.bold());
    Ok(())
}

fn handle_logout_command(config: &GlobalConfig) -> Result<()> {
    info!("Removing session");
    Session::clear(&config.session.path())?;
    println!("{}", "Signed out".green());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = trove::config::load_config(cli.config.as_ref())
        .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
