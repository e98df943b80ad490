use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "precis")]
#[command(version)]
#[command(about = "Extractive text summarization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a document
    Summarize(SummarizeArgs),

    /// Compare word and sentence counts of an original and a summary
    Stats(StatsArgs),

    /// Summarize with every method side by side
    Compare(CompareArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Document to read (stdin if omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Sentences to keep; negative counts select none
    #[arg(short = 'n', long = "sentences", default_value_t = 3, allow_negative_numbers = true)]
    pub sentences: i64,

    /// JSON summarizer config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Scoring method: frequency, tfidf, position or hybrid
    #[arg(short, long, default_value = "hybrid")]
    pub method: String,

    /// Emit JSON with scores and statistics
    #[arg(long)]
    pub json: bool,

    /// Print every sentence with its score instead of a summary
    #[arg(long)]
    pub scores: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Original document
    #[arg(long)]
    pub original: PathBuf,

    /// Summary of the document
    #[arg(long)]
    pub summary: PathBuf,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["precis", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_summarize_defaults() {
        let cli = Cli::try_parse_from(["precis", "summarize"]).unwrap();
        if let Commands::Summarize(args) = cli.command {
            assert_eq!(args.input.sentences, 3);
            assert_eq!(args.method, "hybrid");
            assert!(args.input.file.is_none());
            assert!(!args.json);
        } else {
            panic!("Expected Summarize command");
        }
    }

    #[test]
    fn test_cli_parse_summarize_options() {
        let cli = Cli::try_parse_from([
            "precis",
            "summarize",
            "--file",
            "article.txt",
            "-n",
            "5",
            "--method",
            "tfidf",
            "--json",
        ])
        .unwrap();
        if let Commands::Summarize(args) = cli.command {
            assert_eq!(args.input.file, Some(PathBuf::from("article.txt")));
            assert_eq!(args.input.sentences, 5);
            assert_eq!(args.method, "tfidf");
            assert!(args.json);
        } else {
            panic!("Expected Summarize command");
        }
    }

    #[test]
    fn test_cli_accepts_negative_count() {
        let cli = Cli::try_parse_from(["precis", "compare", "-n", "-2"]).unwrap();
        if let Commands::Compare(args) = cli.command {
            assert_eq!(args.input.sentences, -2);
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn test_cli_stats_requires_both_files() {
        assert!(Cli::try_parse_from(["precis", "stats", "--original", "a.txt"]).is_err());
        assert!(Cli::try_parse_from([
            "precis",
            "stats",
            "--original",
            "a.txt",
            "--summary",
            "b.txt"
        ])
        .is_ok());
    }
}
