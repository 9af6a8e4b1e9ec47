//! `hotel` command-line front end.
//!
//! Each subcommand stands for one page of the booking interface: it checks
//! that page's guard against the stored session, drives the page's view and
//! prints the result.

pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::config::{load_or_default, validate_config, ConfigError};
use crate::error::AppError;
use crate::observability::init_logging;
use crate::session::{FileStorage, Session};

#[derive(Parser, Debug)]
#[command(name = "hotel")]
#[command(about = "Hotel booking client for a JSON REST data store", long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Data store base URL (overrides configuration).
    #[arg(short, long)]
    pub url: Option<String>,

    /// Print records as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse rooms; create, update and delete them as admin
    Rooms {
        #[command(subcommand)]
        action: RoomsCommand,
    },
    /// Book a room (guest login required)
    Book {
        /// Room id
        room_id: String,
        #[arg(long)]
        guest: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
    },
    /// List, edit and delete bookings
    Bookings {
        #[command(subcommand)]
        action: BookingsCommand,
    },
    /// Create a guest account and log in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in as a guest
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in as an administrator
    AdminLogin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in account
    Profile,
    /// Show the navigation entries for the current session
    Nav,
}

#[derive(Subcommand, Debug)]
pub enum RoomsCommand {
    /// List all rooms
    List,
    /// Show the featured rooms from the home page
    Featured,
    /// Show one room
    Show { id: String },
    /// Create a room (admin)
    Create(RoomFields),
    /// Update a room; omitted fields keep their value (admin)
    Update {
        id: String,
        #[command(flatten)]
        fields: RoomFields,
    },
    /// Delete a room (admin)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct RoomFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub room_type: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    /// Comma separated list
    #[arg(long)]
    pub amenities: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum BookingsCommand {
    /// List the bookings visible to the session
    List,
    /// Change guest name or dates of a booking
    Edit {
        id: String,
        #[arg(long)]
        guest: Option<String>,
        #[arg(long)]
        check_in: Option<String>,
        #[arg(long)]
        check_out: Option<String>,
    },
    /// Delete a booking
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Load configuration, set up logging, restore the session and run.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.api.base_url = url;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability);

    let api = ApiClient::from_config(&config)?;
    let storage = FileStorage::open(&config.session.path)?;
    tracing::debug!(
        base_url = %api.base_url(),
        session_path = %storage.path().display(),
        "Configuration loaded"
    );
    let mut session = Session::restore_from(storage);

    commands::execute(cli.command, cli.json, &api, &mut session).await
}
