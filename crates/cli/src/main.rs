//! ETHIOPIA CLI - order from the menu without a browser.
//!
//! # Usage
//!
//! ```bash
//! # Show the hot dishes
//! ethiopia menu --spice hot
//!
//! # Put two plates of tibs in the cart, then take one out
//! ethiopia add tibs
//! ethiopia add tibs
//! ethiopia adjust tibs -1
//!
//! # Place the demo order
//! ethiopia checkout
//!
//! # Write the rendered page
//! ethiopia render --out index.html
//!
//! # Interactive session
//! ethiopia shell
//! ```
//!
//! State persists in `--data-dir` (or `ETHIOPIA_DATA_DIR`, or the platform
//! data directory) between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ethiopia_core::SpiceFilter;
use ethiopia_storefront::config::StorefrontConfig;
use ethiopia_storefront::telemetry;

mod commands;

#[derive(Parser)]
#[command(name = "ethiopia")]
#[command(author, version, about = "ETHIOPIA restaurant ordering")]
struct Cli {
    /// Directory holding the saved cart, favorites and profile
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu
    Menu {
        /// Spice filter (`all`, `mild`, `medium`, `hot`)
        #[arg(short, long, default_value = "all")]
        spice: SpiceFilter,

        /// Case-insensitive search in dish names and descriptions
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// Add one of a dish to the cart
    Add {
        /// Dish id (e.g. `doro-wot`)
        id: String,
    },
    /// Change a cart line's quantity by a signed amount
    Adjust {
        /// Dish id
        id: String,

        /// Quantity change, e.g. `1` or `-1`
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Remove a dish from the cart
    Remove {
        /// Dish id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the cart and totals
    Cart,
    /// Toggle a dish as favorite
    Favorite {
        /// Dish id
        id: String,
    },
    /// List favorite dishes
    Favorites,
    /// Save a demo sign-in profile on this device
    SignIn {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address (optional)
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// Request a table
    Book {
        /// Date, `YYYY-MM-DD`
        #[arg(short, long)]
        date: String,

        /// Time, `HH:MM`
        #[arg(short, long)]
        time: String,
    },
    /// Place the demo order for the current cart
    Checkout,
    /// Send the contact form
    Contact {
        /// Your name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Read the restaurant's story
    Story,
    /// Render the full page as HTML
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Interactive session reading actions from stdin
    Shell,
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env_with_data_dir(cli.data_dir.clone()) {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(&StorefrontConfig::with_data_dir(PathBuf::new()));
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(&config);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = commands::session::open(&config.data_dir)?;

    match cli.command {
        Commands::Menu { spice, search } => {
            commands::menu::list(&mut session, spice, search.as_deref())?;
        }
        Commands::Add { id } => commands::cart::add(&mut session, &id)?,
        Commands::Adjust { id, delta } => commands::cart::adjust(&mut session, &id, delta)?,
        Commands::Remove { id } => commands::cart::remove(&mut session, &id)?,
        Commands::Clear => commands::cart::clear(&mut session)?,
        Commands::Cart => commands::cart::show(&session),
        Commands::Favorite { id } => commands::menu::toggle_favorite(&mut session, &id)?,
        Commands::Favorites => commands::menu::favorites(&mut session)?,
        Commands::SignIn { name, email } => {
            commands::forms::sign_in(&mut session, name, email)?;
        }
        Commands::Book { date, time } => commands::forms::book(&mut session, date, time)?,
        Commands::Checkout => commands::cart::checkout(&mut session)?,
        Commands::Contact { name } => commands::forms::contact(&mut session, name)?,
        Commands::Story => commands::forms::story(&mut session)?,
        Commands::Render { out } => commands::render::page(&session, out.as_deref())?,
        Commands::Shell => {
            let stdin = std::io::stdin();
            commands::shell::run(&mut session, stdin.lock(), std::io::stderr())?;
        }
    }
    Ok(())
}
