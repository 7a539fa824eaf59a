use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true,
    after_help = "Run without a command to open the interactive menu."
)]
#[command(about = "Single-user inventory tracker for a book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (overrides SHELF_DATA_FILE and shelf.toml)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a book; it starts out available
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,
        /// Author of the book
        author: String,
        /// Year of publication (free text)
        year: String,
    },

    /// Remove a book by ID
    #[command(alias = "rm")]
    Delete {
        /// ID of the book
        id: String,
    },

    /// Find books whose field equals the query (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Field to compare: title, author or year
        field: String,
        /// Exact value to look for
        query: String,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every book
    #[command(alias = "ls")]
    List {
        /// Print books as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a book's status: available or checked-out
    Status {
        /// ID of the book
        id: String,
        /// New status
        status: String,
    },

    /// Interactive numbered menu (default)
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_command_means_menu() {
        let cli = parse(&["shelf"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn add_takes_three_positionals() {
        let cli = parse(&["shelf", "add", "Tales", "Chekhov", "1890"]);
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                title: "Tales".into(),
                author: "Chekhov".into(),
                year: "1890".into(),
            })
        );
        assert!(Cli::try_parse_from(["shelf", "add", "Tales"]).is_err());
    }

    #[test]
    fn file_flag_is_global() {
        let cli = parse(&["shelf", "list", "--file", "/tmp/books.json", "--json"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/books.json")));
        assert_eq!(cli.command, Some(Commands::List { json: true }));
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(
            parse(&["shelf", "rm", "3"]).command,
            Some(Commands::Delete { id: "3".into() })
        );
        assert_eq!(
            parse(&["shelf", "ls"]).command,
            Some(Commands::List { json: false })
        );
    }

    #[test]
    fn status_keeps_raw_value() {
        let cli = parse(&["shelf", "status", "2", "Checked-Out"]);
        assert_eq!(
            cli.command,
            Some(Commands::Status {
                id: "2".into(),
                status: "Checked-Out".into(),
            })
        );
    }
}
