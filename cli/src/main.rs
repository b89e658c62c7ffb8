//! Finance Ledger — CLI
//!
//! ```sh
//! # Show the effective configuration (~/.config/finance-ledger/config.toml)
//! finance-ledger check
//!
//! # Check a launch against the required-field rules
//! finance-ledger validate --description Salary --month 1 --year 2022 \
//!     --user-id 1 --value 10 --type income
//!
//! # Authenticate against the seeded default user
//! finance-ledger login --email admin@localhost --password admin
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use finance_ledger::config::config_path_from_env;
use finance_ledger::domain::launch::validate;
use finance_ledger::domain::{Launch, LaunchStatus, LaunchType};
use finance_ledger::{init_tracing, AppContext, AppOptions};

/// Finance Ledger — personal income and expense tracking.
#[derive(Parser, Debug)]
#[command(name = "finance-ledger", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FINANCE_LEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip creating the default user.
    #[arg(long)]
    no_admin: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file and print it.
    Check,

    /// Run the required-field rules on a launch built from flags.
    Validate {
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        user_id: Option<i64>,
        #[arg(long)]
        value: Option<Decimal>,
        /// income | expense
        #[arg(long = "type", value_parser = parse_type)]
        launch_type: Option<LaunchType>,
        /// pending | confirmed | cancelled
        #[arg(long, value_parser = parse_status)]
        status: Option<LaunchStatus>,
    },

    /// Authenticate an email/password pair.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

fn parse_type(s: &str) -> Result<LaunchType, String> {
    LaunchType::from_str(s).ok_or_else(|| {
        format!(
            "unknown launch type '{}', expected {} or {}",
            s,
            LaunchType::Income.as_str(),
            LaunchType::Expense.as_str()
        )
    })
}

fn parse_status(s: &str) -> Result<LaunchStatus, String> {
    LaunchStatus::from_str(s).ok_or_else(|| {
        format!(
            "unknown launch status '{}', expected {}, {} or {}",
            s,
            LaunchStatus::Pending.as_str(),
            LaunchStatus::Confirmed.as_str(),
            LaunchStatus::Cancelled.as_str()
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(config_path_from_env);

    let mut opts = match AppOptions::from_file(&config_path) {
        Ok(opts) => opts,
        // `check` exists to report a broken config file
        Err(e) if matches!(cli.command, Command::Check) => return Err(e.into()),
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("Using default configuration.");
            AppOptions::default()
        }
    };

    opts.create_default_admin = !cli.no_admin;
    if let Some(ref level) = cli.log_level {
        opts.config.logging.level = level.clone();
    }
    init_tracing(&opts.config);
    info!("Configuration path: {}", config_path.display());

    run(cli.command, opts).await
}

async fn run(command: Command, opts: AppOptions) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Check => {
            let config = &opts.config;
            println!("Configuration is valid");
            println!("   Log level   : {}", config.logging.level);
            println!("   Log format  : {:?}", config.logging.format);
            println!(
                "   Default user: {} ({})",
                config.admin.email,
                if config.admin.enabled { "enabled" } else { "disabled" }
            );
            Ok(())
        }

        Command::Validate {
            description,
            month,
            year,
            user_id,
            value,
            launch_type,
            status,
        } => {
            let launch = Launch {
                id: None,
                description,
                month,
                year,
                user_id,
                value,
                launch_type,
                status,
                registered_on: None,
            };

            validate(&launch)?;

            println!("{}", serde_json::to_string_pretty(&launch)?);
            Ok(())
        }

        Command::Login { email, password } => {
            let ctx = AppContext::start(opts).await?;
            let user = ctx.users.authenticate(&email, &password).await?;

            println!("Authenticated {} <{}> (id {})", user.name, user.email, user.id);
            Ok(())
        }
    }
}
