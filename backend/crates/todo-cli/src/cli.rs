use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Multi-tenant todo list CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(
        long,
        global = true,
        env = "TODO_SERVER_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub(crate) server: String,

    /// Bearer access token
    #[arg(long, global = true, env = "TODO_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Don't require ToDo.Write for deletes (match a relaxed server)
    #[arg(long, global = true)]
    pub(crate) relaxed_delete: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
