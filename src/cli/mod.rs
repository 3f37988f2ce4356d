//! CLI module for the Simulink OSLC adapter
//!
//! - `serve`: bootstrap the adapter and serve the OSLC endpoints
//! - `catalog`: bootstrap, print the service provider catalog as JSON, exit

pub mod catalog;
pub mod serve;

use clap::{Parser, Subcommand};

/// Simulink OSLC Adapter - Simulink models as OSLC resources
#[derive(Parser)]
#[command(name = "simulink-oslc-adapter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the OSLC HTTP server
    Serve,

    /// Print the service provider catalog and exit
    Catalog(catalog::CatalogArgs),
}
