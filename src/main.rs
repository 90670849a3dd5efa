use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use md_quiz::{Config, DEFAULT_INPUT_PATH, DEFAULT_TITLE, Dialect, Format, Quiz};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Turn a markdown question list into an interactive quiz", long_about = None)]
struct Args {
    /// Markdown file to read the questions from
    #[arg(short, long, env = "MD_QUIZ_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output file [default: quiz.html, or docs/quiz.json with --format json]
    #[arg(short, long, env = "MD_QUIZ_OUTPUT")]
    output: Option<PathBuf>,

    /// Kind of artifact to write
    #[arg(short, long, value_enum, default_value_t = FormatArg::Html)]
    format: FormatArg,

    /// Parsing rules for text inside answer blocks
    #[arg(short, long, value_enum, default_value_t = DialectArg::Classic)]
    dialect: DialectArg,

    /// Title of the generated page
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Write single-line JSON
    #[arg(long)]
    compact: bool,

    /// Take the quiz in the terminal instead of writing a file
    #[arg(long)]
    play: bool,

    /// Log parser and runtime details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Self-contained interactive page
    Html,
    /// The parsed questions as JSON
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Format::Html,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    /// Options only; other lines in a block are ignored
    Classic,
    /// Also folds block text, images and code into the prompt
    Extended,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Classic => Dialect::Classic,
            DialectArg::Extended => Dialect::Extended,
        }
    }
}

impl Args {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            format: self.format.into(),
            dialect: self.dialect.into(),
            title: self.title.clone(),
            compact: self.compact,
        }
    }
}

fn init_tracing(args: &Args) {
    // The terminal quiz owns the screen, keep it quiet unless asked.
    let default_level = match (args.verbose, args.play) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config();

    if args.play {
        let quiz = Quiz::from_markdown(&config.input, config.dialect)
            .with_context(|| format!("failed to load {}", config.input.display()))?;
        quiz.run().context("terminal quiz failed")?;
        return Ok(());
    }

    let report = md_quiz::build(&config).context("failed to build quiz")?;
    match config.format {
        Format::Html => println!("Wrote {}", report.output.display()),
        Format::Json => println!(
            "Wrote {} items: {}",
            report.output.display(),
            report.questions
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_onto_config() {
        let args = Args::parse_from(["md-quiz", "-i", "QUIZ.md", "-f", "json", "-d", "extended"]);
        let config = args.config();

        assert_eq!(config.input, PathBuf::from("QUIZ.md"));
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.dialect, Dialect::Extended);
        assert_eq!(config.output_path(), PathBuf::from("docs/quiz.json"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["md-quiz"]).unwrap();

        assert_eq!(args.format, FormatArg::Html);
        assert_eq!(args.dialect, DialectArg::Classic);
        assert_eq!(args.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_args_reject_unknown_dialect() {
        assert!(Args::try_parse_from(["md-quiz", "--dialect", "fancy"]).is_err());
    }
}
