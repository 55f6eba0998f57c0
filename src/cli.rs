use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Network;
use crate::payloads::PayloadKind;

#[derive(Parser)]
#[command(name = "cosmos-directory")]
#[command(about = "Query the cosmos.directory chain, status and validator APIs", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file. Created with defaults if it does not exist"
    )]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub connection: ConnectionArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the connection settings from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    #[arg(short, long, global = true, help = "The directory network to query")]
    pub network: Option<Network>,
    #[arg(
        short,
        long,
        global = true,
        help = "Directory domain, e.g. cosmos.directory. Overrides --network"
    )]
    pub domain: Option<String>,
    #[arg(long, global = true, help = "URL scheme used to reach the directory hosts")]
    pub protocol: Option<String>,
    #[arg(long, global = true, help = "Skip schema validation of responses")]
    pub no_validate: bool,
}

/// Settings that can be overridden from the command line.
pub trait ApplyArgs {
    fn apply_connection(&mut self, args: &ConnectionArgs);
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every chain in the chain registry
    Chains,
    /// Show one chain in detail
    Chain {
        #[arg(help = "Directory path of the chain, e.g. osmosis")]
        path: String,
    },
    /// Show which chains currently have healthy REST and RPC endpoints
    Status,
    /// List every validator in the validator registry
    Validators,
    /// Show one validator and its chains
    Validator {
        #[arg(help = "Directory path of the validator, e.g. ecostake")]
        path: String,
    },
    /// Show the validator set of one chain
    ChainValidators {
        #[arg(help = "Directory path of the chain, e.g. juno")]
        path: String,
        #[arg(short, long, help = "Only list validators in the active set")]
        active: bool,
    },
    /// Check a saved JSON document against a payload schema, offline
    Validate {
        #[arg(value_enum, help = "Which directory document the file holds")]
        kind: PayloadKind,
        #[arg(help = "Path to the JSON file")]
        file: PathBuf,
    },
    /// Write the default configuration file
    InitConfig {
        #[arg(help = "Where to write the configuration file", default_value = "config.toml")]
        path: PathBuf,
        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },
}
