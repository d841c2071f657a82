use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Keep track of the books you want to read, are reading and have read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Whose shelf to use (defaults to the configured user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books, one page at a time
    #[command(alias = "ls")]
    List {
        /// Only show books with this status ("all", "want-to-read", "reading", "finished", ...)
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Only show books whose title or author contains this text
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort column: title, author, status, dateRead or dateAdded
        #[arg(long)]
        sort: Option<String>,

        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Show reading statistics
    Stats,

    /// Add a book to the shelf
    #[command(alias = "n")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Initial status
        #[arg(short, long, default_value = "want-to-read")]
        status: String,
    },

    /// Change the status of a book
    Mark {
        /// Book id or a unique prefix of it (as shown by `list`)
        id: String,

        /// New status (e.g. reading, finished)
        status: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, user)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory (optional utility)
    Init,
}
