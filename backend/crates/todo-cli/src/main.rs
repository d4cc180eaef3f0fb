//! todo - multi-tenant todo list CLI
//!
//! # Examples
//!
//! ```bash
//! export TODO_TOKEN=<access token>
//!
//! # List your todos
//! todo list --pretty
//!
//! # Create a todo
//! todo create --title "Buy milk"
//!
//! # Rename it
//! todo edit 1 --title "Buy oat milk"
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use todo_auth::AccessEvaluator;
use todo_cli::Client;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(token) = cli.token else {
        eprintln!("Error: no access token.");
        eprintln!();
        eprintln!("Pass one with --token or set TODO_TOKEN.");
        return ExitCode::FAILURE;
    };

    let client = match Client::new(&cli.server, &token) {
        Ok(client) => client.with_evaluator(AccessEvaluator::new(!cli.relaxed_delete)),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::List => client.list_todos().await,
        Commands::Get { id } => client.get_todo(id).await,
        Commands::Create { title, owner } => client.create_todo(&title, owner.as_deref()).await,
        Commands::Edit { id, title, owner } => {
            client
                .edit_todo(id, title.as_deref(), owner.as_deref())
                .await
        }
        Commands::Delete { id } => client.delete_todo(id).await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
