//! Catalog Service - schema management and administration CLI.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service_lib::config::CatalogServiceConfig;
use catalog_service_lib::MigrateAction;
use domain::UserRole;

#[derive(Parser)]
#[command(name = "catalog-service")]
#[command(about = "Game catalog persistence service")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Register a user
    AddUser {
        email: String,
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },
    /// Check database connectivity
    Ping,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    User,
    Premium,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => UserRole::Admin,
            RoleArg::User => UserRole::User,
            RoleArg::Premium => UserRole::Premium,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = CatalogServiceConfig::from_env();

    let default_level = config.log_filter(cli.verbose);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(service = %config.service.service_name, "Logging initialized");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            catalog_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::AddUser { email, password, role } => {
            let user = catalog_service_lib::add_user(email, password, role.into()).await?;
            println!("Created user {} <{}> ({})", user.id, user.email, user.role);
        }
        Commands::Ping => {
            catalog_service_lib::ping().await?;
            println!("ok");
        }
    }

    Ok(())
}
