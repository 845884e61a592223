use std::error::Error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{Engine, EngineError, NewUser};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "cost_manager_admin")]
#[command(about = "Admin utilities for the cost manager (reset data, bootstrap users)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./cost_manager.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply or inspect schema migrations.
    Migrate(MigrateArgs),
    /// Delete every cost and user.
    Reset(ResetArgs),
    User(User),
}

#[derive(Args, Debug)]
struct MigrateArgs {
    #[arg(value_enum, default_value_t = MigrateAction::Up)]
    action: MigrateAction,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MigrateAction {
    Up,
    Down,
    /// Drop every table and reapply all migrations.
    Fresh,
    Status,
}

#[derive(Args, Debug)]
struct ResetArgs {
    /// Recreate the default test user afterwards.
    #[arg(long)]
    seed: bool,
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
    Show(UserShowArgs),
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    id: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    birthday: Option<String>,
    #[arg(long)]
    marital_status: Option<String>,
}

#[derive(Args, Debug)]
struct UserShowArgs {
    #[arg(long)]
    id: String,
}

fn seed_user() -> NewUser {
    NewUser {
        id: Some("123123".to_string()),
        first_name: Some("mosh".to_string()),
        last_name: Some("israeli".to_string()),
        birthday: Some("1990-01-01".to_string()),
        marital_status: Some("single".to_string()),
    }
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn migrate(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    match action {
        MigrateAction::Up => migration::Migrator::up(&db, None).await?,
        MigrateAction::Down => migration::Migrator::down(&db, None).await?,
        MigrateAction::Fresh => migration::Migrator::fresh(&db).await?,
        MigrateAction::Status => migration::Migrator::status(&db).await?,
    }
    println!("migrate {action:?}: done");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    if let Command::Migrate(args) = &cli.command {
        return migrate(&cli.database_url, args.action).await;
    }

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Migrate(_) => {}
        Command::Reset(args) => {
            engine.reset().await?;
            println!("database reset");

            if args.seed {
                let user = engine.create_user(seed_user()).await?;
                println!(
                    "created user: {} ({} {})",
                    user.id, user.first_name, user.last_name
                );
            }
        }
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            let result = engine
                .create_user(NewUser {
                    id: Some(args.id),
                    first_name: Some(args.first_name),
                    last_name: Some(args.last_name),
                    birthday: args.birthday,
                    marital_status: args.marital_status,
                })
                .await;

            match result {
                Ok(user) => println!("created user: {}", user.id),
                Err(err @ EngineError::Database(_)) => return Err(err.into()),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Command::User(User {
            command: UserCommand::Show(args),
        }) => match engine.user_details(&args.id).await {
            Ok(user) => println!(
                "{}: {} {} (born {}, {}) total {}",
                user.id,
                user.first_name,
                user.last_name,
                user.birthday,
                user.marital_status,
                user.total
            ),
            Err(EngineError::UserNotFound(id)) => {
                eprintln!("user not found: {id}");
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        },
    }

    Ok(())
}
