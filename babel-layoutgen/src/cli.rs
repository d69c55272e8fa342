//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Library layout generator.
#[derive(Parser, Debug, Clone)]
#[command(name = "babel-layoutgen")]
#[command(about = "Generates the seven-floor library layout artifacts")]
#[command(version)]
pub struct Cli {
    /// Input book metadata, one JSON record per line.
    #[arg(long = "in", default_value = "data/book-meta/bookMetaById.v1.jsonl")]
    pub input: PathBuf,

    /// Output directory for the layout artifacts.
    #[arg(long = "out", default_value = "data/layout")]
    pub out: PathBuf,

    /// Maximum official subcategories per floor.
    #[arg(long, default_value_t = 8)]
    pub top_subs: usize,

    /// Merge subcategories smaller than this into Other.
    #[arg(long, default_value_t = 200)]
    pub min_sub_books: usize,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_from(["babel-layoutgen"]);
        assert_eq!(cli.input, PathBuf::from("data/book-meta/bookMetaById.v1.jsonl"));
        assert_eq!(cli.out, PathBuf::from("data/layout"));
        assert_eq!(cli.top_subs, 8);
        assert_eq!(cli.min_sub_books, 200);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "babel-layoutgen",
            "--in",
            "books.jsonl",
            "--out",
            "/tmp/layout",
            "--top-subs",
            "4",
            "--min-sub-books",
            "50",
        ]);
        assert_eq!(cli.input, PathBuf::from("books.jsonl"));
        assert_eq!(cli.out, PathBuf::from("/tmp/layout"));
        assert_eq!(cli.top_subs, 4);
        assert_eq!(cli.min_sub_books, 50);
    }
}
