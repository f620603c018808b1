//! roottag CLI - tag scene objects with GameObject types from a shared list

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{camera, config, purge, show, tag, types};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "roottag")]
#[command(about = "Tag scene objects with GameObject types from an external list", long_about = None)]
#[command(version)]
struct Cli {
    /// Use this GameObject type list instead of the configured one
    #[arg(long, global = true)]
    list: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reload the type list and print the available types
    Types {
        /// Output format (text or toml)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the type panel for an object
    Show {
        /// Path to scene file
        #[arg(long)]
        scene: String,

        /// Object to select first
        #[arg(long)]
        object: Option<String>,
    },

    /// Make an object the active one
    Select {
        /// Object name
        object: String,

        /// Path to scene file
        #[arg(long)]
        scene: String,
    },

    /// Assign a GameObject type to an object
    SetType {
        /// Type name, or "None" to clear
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Path to scene file
        #[arg(long)]
        scene: String,

        /// Object to select first
        #[arg(long)]
        object: Option<String>,
    },

    /// Reset an object to a default GameObject
    Reset {
        /// Path to scene file
        #[arg(long)]
        scene: String,

        /// Object to select first
        #[arg(long)]
        object: Option<String>,
    },

    /// Reload the type list and remove tags naming types that no longer exist
    Purge {
        /// Path to scene file
        #[arg(long)]
        scene: String,
    },

    /// Mark a camera as the main camera
    MainCamera {
        /// Path to scene file
        #[arg(long)]
        scene: String,

        /// Object to select first
        #[arg(long)]
        object: Option<String>,
    },

    /// Preferences
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "roottag=debug" } else { "roottag=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Keep an already installed subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let list = cli.list.as_deref();
    match cli.command {
        Commands::Types { format } => types::run(list, &format),
        Commands::Show { scene, object } => show::run(&scene, object.as_deref(), list),
        Commands::Select { object, scene } => tag::select(&scene, &object, list),
        Commands::SetType {
            type_name,
            scene,
            object,
        } => tag::set_type(&scene, object.as_deref(), &type_name, list),
        Commands::Reset { scene, object } => tag::reset(&scene, object.as_deref(), list),
        Commands::Purge { scene } => purge::run(&scene, list),
        Commands::MainCamera { scene, object } => camera::run(&scene, object.as_deref(), list),
        Commands::Config(cmd) => config::run(cmd, list),
    }
}
