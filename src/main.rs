//! `hotel`: hotel booking client.
//!
//! # Architecture Overview
//!
//! ```text
//!   hotel <command>
//!        │
//!        ▼
//!   ┌─────────┐   ┌──────────────┐   ┌──────────┐
//!   │  cli    │──▶│  security    │──▶│  views   │   page logic, banner messages
//!   │ (clap)  │   │  page guard  │   │          │
//!   └────┬────┘   └──────┬───────┘   └────┬─────┘
//!        │               │                │
//!        ▼               ▼                ▼
//!   ┌─────────┐   ┌──────────────┐   ┌──────────┐        ┌──────────────┐
//!   │ config  │   │   session    │   │   api    │──HTTP─▶│ JSON REST    │
//!   │ (toml)  │   │ file storage │   │ reqwest  │◀───────│ data store   │
//!   └─────────┘   └──────────────┘   └──────────┘        └──────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use hotel_booking::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
