//! Command-line interface for timecheck.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::analysis::Language;
use crate::config::{Config, FORMATS};
use crate::detect::LanguageChoice;
use crate::orchestrator::{self, AnalysisRequest};
use crate::report::{self, Report};
use crate::samples::{self, SAMPLES};
use crate::store::LastResultStore;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Estimate the time complexity of a code snippet.
///
/// Timecheck reads a JavaScript, Python or Java snippet, counts loops,
/// loop nesting, sort calls, recursion and hash container usage, and maps
/// those signals to a Big-O label. It is a heuristic: it never runs the code.
#[derive(Parser)]
#[command(name = "timecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the complexity of a snippet
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Print the built-in sample snippets
    Samples(SamplesArgs),
    /// Show the most recent saved result
    Last(LastArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Snippet file to analyze (omit or use - for stdin)
    pub path: Option<PathBuf>,

    /// Language: auto, javascript, python or java
    #[arg(short, long)]
    pub language: Option<String>,

    /// Function name used for recursion detection
    #[arg(short = 'f', long = "function")]
    pub function: Option<String>,

    /// Output format: pretty or json
    #[arg(long)]
    pub format: Option<String>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not save the result for `timecheck last`
    #[arg(long)]
    pub no_save: bool,
}

/// Arguments for the samples command.
#[derive(Parser)]
pub struct SamplesArgs {
    /// Only show the sample for this language
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for the last command.
#[derive(Parser)]
pub struct LastArgs {
    /// Output format: pretty or json
    #[arg(long, default_value = "pretty")]
    pub format: String,
}

/// Install the tracing subscriber. Logs go to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        "timecheck=debug"
    } else {
        "timecheck=info"
    };

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    // A host process or an earlier call may already own the global subscriber.
    if let Err(e) = installed {
        debug!("keeping existing tracing subscriber: {}", e);
    }
}

/// Effective settings for one analyze run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: LanguageChoice,
    pub function_name: String,
    pub format: String,
}

/// Merge command-line flags over config values.
pub fn resolve_settings(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<Settings> {
    let language = args
        .language
        .as_deref()
        .unwrap_or_else(|| config.get_language())
        .parse::<LanguageChoice>()?;

    let format = args
        .format
        .as_deref()
        .unwrap_or_else(|| config.get_format())
        .to_string();
    if !FORMATS.contains(&format.as_str()) {
        anyhow::bail!(
            "invalid format {:?}, must be one of: {}",
            format,
            FORMATS.join(", ")
        );
    }

    let function_name = args
        .function
        .clone()
        .or_else(|| config.function.clone())
        .unwrap_or_default();

    Ok(Settings {
        language,
        function_name,
        format,
    })
}

/// Read the snippet from a file, or stdin for no path or `-`.
fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("cannot read {}", p.display()))
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("cannot read stdin")?;
            Ok(source)
        }
    }
}

fn write_report(report: &Report, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => report::write_json(report)?,
        _ => report::write_pretty(report),
    }
    Ok(())
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) = match Config::load(args.config.as_deref(), &cwd) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(ref p) = config_path {
        debug!("using config {}", p.display());
    }

    let settings = match resolve_settings(args, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let source = read_source(args.path.as_deref())?;

    let mut request = AnalysisRequest::new(source)
        .with_language(settings.language)
        .with_function(settings.function_name)
        .with_limits(config.limits);
    if let Some(ref p) = args.path {
        request = request.with_path(p);
    }

    let report = match orchestrator::run(&request) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    write_report(&report, &settings.format)?;

    if !args.no_save {
        match LastResultStore::new().save(&report) {
            Ok(path) => debug!("saved result to {}", path.display()),
            Err(e) => warn!("could not save result: {}", e),
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Run the samples command.
pub fn run_samples(args: &SamplesArgs) -> anyhow::Result<i32> {
    let selected: Vec<_> = match args.language {
        Some(ref lang) => match lang.parse::<Language>() {
            Ok(language) => vec![samples::for_language(language)],
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => SAMPLES.iter().collect(),
    };

    for sample in selected {
        println!(
            "# {} ({}, function: {})",
            sample.name, sample.language, sample.function
        );
        println!("# {}", sample.description);
        println!();
        println!("{}", sample.content.trim_end());
        println!();
    }

    Ok(EXIT_SUCCESS)
}

/// Run the last command.
pub fn run_last(args: &LastArgs) -> anyhow::Result<i32> {
    if !FORMATS.contains(&args.format.as_str()) {
        eprintln!(
            "Error: invalid format {:?}, must be one of: {}",
            args.format,
            FORMATS.join(", ")
        );
        return Ok(EXIT_ERROR);
    }

    match LastResultStore::new().load() {
        Some(report) => {
            write_report(&report, &args.format)?;
            Ok(EXIT_SUCCESS)
        }
        None => {
            eprintln!("Error: no saved result");
            eprintln!("Run 'timecheck analyze' first");
            Ok(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Analyze(args) => args,
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let args = analyze_args(&[
            "timecheck", "analyze", "snippet.py", "-l", "py", "-f", "fib", "--format", "json",
            "--no-save",
        ]);
        assert_eq!(args.path, Some(PathBuf::from("snippet.py")));
        assert_eq!(args.language.as_deref(), Some("py"));
        assert_eq!(args.function.as_deref(), Some("fib"));
        assert_eq!(args.format.as_deref(), Some("json"));
        assert!(args.no_save);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false);
        init_logging(true);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["timecheck", "last", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_flags_override_config() {
        let config =
            Config::parse_str("language: java\nfunction: walk\nformat: json\n").unwrap();

        let from_config = resolve_settings(&analyze_args(&["timecheck", "analyze"]), &config).unwrap();
        assert_eq!(from_config.language, LanguageChoice::Fixed(Language::Java));
        assert_eq!(from_config.function_name, "walk");
        assert_eq!(from_config.format, "json");

        let args = analyze_args(&["timecheck", "check", "-l", "auto", "-f", "fib", "--format", "pretty"]);
        let from_flags = resolve_settings(&args, &config).unwrap();
        assert_eq!(from_flags.language, LanguageChoice::Auto);
        assert_eq!(from_flags.function_name, "fib");
        assert_eq!(from_flags.format, "pretty");
    }

    #[test]
    fn test_invalid_settings() {
        let config = Config::default();
        assert!(resolve_settings(&analyze_args(&["timecheck", "analyze", "-l", "ruby"]), &config).is_err());
        assert!(
            resolve_settings(&analyze_args(&["timecheck", "analyze", "--format", "sarif"]), &config)
                .is_err()
        );
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.js");
        std::fs::write(&path, "let x = 1;\n").unwrap();

        assert_eq!(read_source(Some(path.as_path())).unwrap(), "let x = 1;\n");
        assert!(read_source(Some(dir.path().join("missing.js").as_path())).is_err());
    }
}
