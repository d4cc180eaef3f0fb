use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the todos you can see
    List,

    /// Get a todo by ID
    Get {
        /// Todo ID
        id: i64,
    },

    /// Create a todo
    Create {
        /// Todo title
        #[arg(long)]
        title: String,

        /// Owner username (admins only; defaults to you)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Edit a todo's title or owner
    Edit {
        /// Todo ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New owner username
        #[arg(long)]
        owner: Option<String>,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },
}
