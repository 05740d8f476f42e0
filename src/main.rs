mod cli;

use playtime::{calculator::Calculator, config, server, youtube::YouTubeClient};
use playtime_common::{extract_playlist_id, Error};
use playtime_duration::Speed;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "playtime=trace,playtime_common=debug,tower_http=debug".to_string()
        } else {
            "playtime=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;
            config::apply_server_overrides(&mut config, host, port)?;

            tracing::info!("Starting playtime server");
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start_server(config))
        }
        Commands::Calculate { url, json } => calculate(&url, json, cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("playtime {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn calculate(url: &str, json: bool, config_path: Option<&std::path::Path>) -> Result<()> {
    let Some(playlist_id) = extract_playlist_id(url) else {
        anyhow::bail!("{}", Error::invalid_reference(url).user_message());
    };

    let config = config::load_config_or_default(config_path)?;
    if config.youtube.api_key().is_none() {
        anyhow::bail!(
            "No YouTube API key configured; set youtube.api_key or {}",
            config::API_KEY_ENV
        );
    }

    let client = YouTubeClient::from_config(&config.youtube)?;
    let calculator = Calculator::new(Arc::new(client));

    let rt = tokio::runtime::Runtime::new()?;
    let calculation = match rt.block_on(calculator.calculate_playlist(&playlist_id)) {
        Ok(calculation) => calculation,
        Err(err) => {
            tracing::error!("Calculation failed: {}", err);
            anyhow::bail!("{}", err.user_message());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
        return Ok(());
    }

    println!("Playlist: {}", calculation.playlist_id);
    println!("Videos: {}", calculation.video_count);
    for entry in calculation.durations.entries() {
        if entry.speed == Speed::Normal {
            println!("Length at Normal Speed: {}", entry.formatted);
        } else {
            println!("Length at {} Speed: {}", entry.label, entry.formatted);
        }
    }
    println!("Player: {}", calculation.embed_url);

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  API base: {}", config.youtube.api_base);
            println!(
                "  API key configured: {}",
                config.youtube.api_key().is_some()
            );
            println!(
                "  Request timeout: {}s",
                config.youtube.request_timeout_secs
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  API base: {}", config.youtube.api_base);
        }
    }

    Ok(())
}
