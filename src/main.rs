//! justInvest - access control for the client portal
//!
//! Non-interactive signup, login, and authorization checks

#![allow(missing_docs)]

use anyhow::Context;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use justinvest::utils::logging::init_logging;
use justinvest::{AuthSystem, Config, Operation, PermissionCheck, Principal, Role};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "justinvest", version, about = "justInvest access control")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "JUSTINVEST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enroll a new user
    Signup {
        #[arg(short, long)]
        username: String,
        /// Role to grant, e.g. "Premium Client"; repeat for several
        #[arg(short, long = "role", required = true)]
        roles: Vec<Role>,
        #[arg(short, long, env = "JUSTINVEST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and list the operations available
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "JUSTINVEST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and decide a single operation
    Check {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "JUSTINVEST_PASSWORD", hide_env_values = true)]
        password: String,
        /// Operation key, e.g. view-client-balance
        #[arg(short, long)]
        operation: Operation,
        /// Time of day to decide at (HH:MM); defaults to now
        #[arg(long, value_parser = parse_time_of_day)]
        at: Option<NaiveTime>,
    },
    /// List the operation catalog
    Operations,
}

fn parse_time_of_day(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {}", e))
}

/// `check` succeeds only when the operation is allowed
fn decision_exit_code(check: &PermissionCheck) -> ExitCode {
    if check.granted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn role_list(principal: &Principal) -> String {
    let roles: Vec<&str> = principal.sorted_roles().iter().map(Role::as_str).collect();
    if roles.is_empty() {
        "no roles".to_string()
    } else {
        roles.join(", ")
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    init_logging(config.logging())?;

    if let Command::Operations = cli.command {
        for op in Operation::ALL {
            println!("{:<36} {}", op.key(), op.label());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let auth = AuthSystem::new(&config).await?;

    match cli.command {
        Command::Signup {
            username,
            roles,
            password,
        } => {
            let principal = auth.signup(&username, &roles, &password).await?;
            println!("Enrolled {} ({})", principal.username, role_list(&principal));
        }
        Command::Login { username, password } => {
            let principal = auth.login(&username, &password).await?;
            println!("Logged in as {} ({})", principal.username, role_list(&principal));
            for op in auth.permitted_operations(&principal) {
                println!("  {:<36} {}", op.key(), op.label());
            }
        }
        Command::Check {
            username,
            password,
            operation,
            at,
        } => {
            let principal = auth.login(&username, &password).await?;
            let check = auth.authorize(&principal, operation, at);
            match check.denial_reason {
                None => {
                    let by: Vec<&str> = check.granted_by_roles.iter().map(Role::as_str).collect();
                    println!("ALLOW {} (granted by {})", operation, by.join(", "));
                }
                Some(reason) => println!("DENY {}: {}", operation, reason),
            }
            return Ok(decision_exit_code(&check));
        }
        Command::Operations => {}
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Display with context chain, not Debug
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
