use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::{
    nearest::NearestArgs, output::OutputFormat, route::RouteArgs, tree::TreeArgs,
    waypoints::WaypointsArgs,
};

mod nearest;
mod network_file;
mod output;
mod parsers;
mod route;
mod tree;
mod waypoints;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,

    /// Network file with the nodes and edges to load
    #[arg(short, long, env = "GEOGRAPH_NETWORK", global = true)]
    network: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest path between two nodes
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Minimum spanning tree of a node's component
    #[command(visible_alias = "t")]
    Tree {
        #[command(flatten)]
        args: TreeArgs,
    },
    /// Node closest to a coordinate
    Nearest {
        #[command(flatten)]
        args: NearestArgs,
    },
    /// Spanning tree connecting waypoints along the network
    #[command(visible_alias = "w")]
    Waypoints {
        #[command(flatten)]
        args: WaypointsArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let network = cli
        .network
        .context("no network file, pass --network or set GEOGRAPH_NETWORK")?;
    let engine = network_file::load_engine(&network)?;

    match cli.command {
        Commands::Route { args } => route::run(&engine, args, cli.format)?,
        Commands::Tree { args } => tree::run(&engine, args, cli.format)?,
        Commands::Nearest { args } => nearest::run(&engine, args, cli.format)?,
        Commands::Waypoints { args } => waypoints::run(&engine, args, cli.format)?,
    }

    Ok(())
}
