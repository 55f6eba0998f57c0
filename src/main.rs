use std::fs;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;

use cosmos_directory::cli::{ApplyArgs, Cli, Commands};
use cosmos_directory::config::{get_default_config, load_configuration, write_config_to};
use cosmos_directory::convert::{self, to_json};
use cosmos_directory::http::DirectoryClient;
use cosmos_directory::log::init_logging;
use cosmos_directory::payloads::chain_validators::ChainValidator;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists, pass --force to overwrite it", path.display());
            }
            write_config_to(&path, get_default_config()).context("Could not write configuration")?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        },
        Commands::Validate { kind, file } => {
            let content =
                fs::read_to_string(&file).with_context(|| format!("Could not read {}", file.display()))?;
            let value: serde_json::Value =
                serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", file.display()))?;
            convert::validate(kind, &value)
                .with_context(|| format!("{} is not a valid {} document", file.display(), kind))?;
            println!("{} is a valid {} document", file.display(), kind);
            Ok(())
        },
        command => {
            let mut config = load_configuration(cli.config.as_deref()).context("Could not load configuration")?;
            config.apply_connection(&cli.connection);
            info!(network:% = config.network, domain = config.domain(); "Querying directory");

            let client =
                DirectoryClient::with_options(config.to_client_options()).context("Could not create directory client")?;
            let output = query(&client, command).await?;
            println!("{output}");
            Ok(())
        },
    }
}

async fn query(client: &DirectoryClient, command: Commands) -> Result<String, anyhow::Error> {
    let output = match command {
        Commands::Chains => to_json(&client.fetch_chains().await.context("Could not fetch chains")?)?,
        Commands::Chain { path } => to_json(
            &client
                .fetch_chain(&path)
                .await
                .with_context(|| format!("Could not fetch chain {path}"))?,
        )?,
        Commands::Status => to_json(&client.fetch_status().await.context("Could not fetch status")?)?,
        Commands::Validators => to_json(&client.fetch_validators().await.context("Could not fetch validators")?)?,
        Commands::Validator { path } => to_json(
            &client
                .fetch_validator(&path)
                .await
                .with_context(|| format!("Could not fetch validator {path}"))?,
        )?,
        Commands::ChainValidators { path, active } => {
            let mut validators = client
                .fetch_chain_validators(&path)
                .await
                .with_context(|| format!("Could not fetch validators of chain {path}"))?;
            if active {
                let ranked: Vec<ChainValidator> = validators.active().into_iter().cloned().collect();
                validators.validators = ranked;
            }
            to_json(&validators)?
        },
        Commands::InitConfig { .. } | Commands::Validate { .. } => bail!("This command does not query the directory"),
    };
    Ok(output)
}
