use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect, serve};

#[derive(Parser)]
#[command(name = "storecast")]
#[command(about = "Retail sales forecast dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the observations artifact
        ///
        /// A CSV file with a header row and at minimum the columns
        /// Store, Date and Sales, plus one numeric column per forecast
        /// model.
        #[arg(short, long, env = "DATA_PATH", default_value = "data/predictions.csv")]
        data_path: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load and validate an observations artifact, then print a summary
    ///
    /// Useful for checking a freshly exported artifact before pointing
    /// the server at it.
    Inspect {
        /// Path to the observations artifact
        #[arg(short, long, env = "DATA_PATH", default_value = "data/predictions.csv")]
        data_path: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_path,
                bind_address,
            } => {
                serve(&data_path, &bind_address).await?;
            }
            Commands::Inspect { data_path } => {
                inspect(&data_path)?;
            }
        }
        Ok(())
    }
}
