//! Command-line presentation layer for the parley core. One operation
//! per invocation; the session lives only as long as the command that
//! produced it.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::debug;

use parley_core::{Core, DEFAULT_MESSAGE_LIMIT};

/// User management + chat room core
#[derive(Parser, Debug)]
#[command(name = "parley", version, about, long_about = None)]
struct Args {
    /// Database file path (overrides PARLEY_DB_PATH; default: parley.db)
    #[arg(short, long)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account
    Register {
        name: String,
        email: String,
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Check a credential pair and report who it belongs to
    Login { email: String, password: String },
    /// List all accounts (names and emails only, never digests)
    Users {
        #[arg(long)]
        json: bool,
    },
    /// Append a chat message
    Send { name: String, body: String },
    /// Show the most recent messages, oldest first
    Recent {
        #[arg(long, default_value_t = DEFAULT_MESSAGE_LIMIT)]
        limit: u32,
        #[arg(long)]
        json: bool,
    },
    /// Show a user's profile
    Profile { email: String },
    /// Set (or replace) a user's bio
    SetBio { email: String, bio: String },
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=info".into()),
        )
        .init();

    let args = Args::parse();

    let db_path = args.database.unwrap_or_else(|| {
        std::env::var("PARLEY_DB_PATH")
            .unwrap_or_else(|_| "parley.db".into())
            .into()
    });
    debug!("using database {}", db_path.display());

    let core = Core::open(&db_path)?;

    match args.command {
        Command::Register {
            name,
            email,
            password,
            phone,
        } => {
            core.register(&name, &email, &password, phone.as_deref())?;
            println!("Registered {name} <{email}>");
        }
        Command::Login { email, password } => match core.authenticate(&email, &password)? {
            Some(session) => println!("Welcome {}!", session.display_name()),
            None => bail!("wrong credentials"),
        },
        Command::Users { json } => {
            let users = core.list_users();
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else if users.is_empty() {
                println!("No users!");
            } else {
                for user in users {
                    println!("{} - {}", user.name, user.email);
                }
            }
        }
        Command::Send { name, body } => {
            core.append_message(&name, &body)?;
            println!("Sent");
        }
        Command::Recent { limit, json } => {
            let messages = core.recent_messages(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else {
                for msg in messages {
                    println!(
                        "{} ({}): {}",
                        msg.user_name,
                        msg.timestamp.format("%H:%M"),
                        msg.body
                    );
                }
            }
        }
        Command::Profile { email } => match core.get_profile(&email)? {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => bail!("no such user: {email}"),
        },
        Command::SetBio { email, bio } => {
            core.upsert_bio(&email, &bio)?;
            println!("Bio updated");
        }
    }

    Ok(())
}
