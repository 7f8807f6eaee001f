use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use mercury::modules::accounts::service::AccountService;
use mercury_auth::Role;
use mercury_config::DatabaseConfig;
use mercury_db::{SqlitePool, init_and_migrate};
use mercury_models::NewProfile;

#[derive(Parser)]
#[command(name = "mercury-cli")]
#[command(about = "Mercury CLI - Administrative tools for the Mercury API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a new admin account
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// First name of the admin
        #[arg(short = 'f', long, default_value = "Admin")]
        first_name: String,

        /// Last name of the admin
        #[arg(short = 'l', long, default_value = "User")]
        last_name: String,
    },
    /// Change the role of an existing account
    SetRole {
        /// Email address of the account
        email: String,

        /// New role: admin, teacher or student
        role: Role,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_and_migrate(&DatabaseConfig::from_env())
        .await
        .context("Failed to open database")?;

    let result = match cli.command {
        Commands::Migrate => {
            println!("✅ Migrations applied");
            Ok(())
        }
        Commands::CreateAdmin {
            email,
            password,
            first_name,
            last_name,
        } => handle_create_admin(&pool, email, password, first_name, last_name).await,
        Commands::SetRole { email, role } => handle_set_role(&pool, &email, role).await,
    };

    pool.close().await;

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_create_admin(
    pool: &SqlitePool,
    email: Option<String>,
    password: Option<String>,
    first_name: String,
    last_name: String,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let profile = NewProfile {
        first_name,
        last_name,
        ..Default::default()
    };

    let uid = AccountService::create_account(pool, &email, &password, Role::Admin, &profile)
        .await
        .map_err(|e| anyhow::anyhow!("Error creating admin: {}", e.public_message()))?;

    println!("\n✅ Admin created successfully!");
    println!("   Email: {}", email);
    println!("   User ID: {}", uid);
    Ok(())
}

async fn handle_set_role(pool: &SqlitePool, email: &str, role: Role) -> anyhow::Result<()> {
    AccountService::set_role(pool, email, role)
        .await
        .map_err(|e| anyhow::anyhow!("Error changing role: {}", e.public_message()))?;

    println!("\n✅ {} is now {}", email, role);
    Ok(())
}
