use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;

use durparse::constants::env;
use durparse::utils::logging::{init_tracing, log_info, log_performance_metric, log_startup};
use durparse::{
    AmbiguousUnitPolicy, DurationParseError, DurationParser, FormatOptions, ParseOptions,
    ParserConfig, UnitTime,
};

#[derive(Debug, Parser)]
#[command(name = "durparse", version, about = "Parse and format human-readable durations")]
struct Cli {
    /// YAML config file (defaults to $DURPARSE_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = env::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the millisecond value of a duration
    Parse {
        input: String,
        #[command(flatten)]
        options: ParseArgs,
    },
    /// Print every component of a (possibly compound) duration as JSON
    Detailed {
        input: String,
        #[command(flatten)]
        options: ParseArgs,
    },
    /// Render a millisecond count as a human string
    Format {
        #[arg(allow_negative_numbers = true)]
        ms: f64,
        #[command(flatten)]
        options: FormatArgs,
    },
    /// Suggest known units close to a mistyped one
    Suggest {
        input: String,
        #[arg(long)]
        max: Option<usize>,
    },
    /// Exit successfully only if the input parses
    Valid {
        input: String,
        #[command(flatten)]
        options: ParseArgs,
    },
    /// Print the RFC 3339 timestamp the duration expires at, counted from now
    Expires {
        input: String,
        #[command(flatten)]
        options: ParseArgs,
    },
    /// List every recognized unit alias
    Units,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AmbiguousArg {
    Strict,
    Minutes,
    Months,
}

impl From<AmbiguousArg> for AmbiguousUnitPolicy {
    fn from(arg: AmbiguousArg) -> Self {
        match arg {
            AmbiguousArg::Strict => AmbiguousUnitPolicy::Strict,
            AmbiguousArg::Minutes => AmbiguousUnitPolicy::Minutes,
            AmbiguousArg::Months => AmbiguousUnitPolicy::Months,
        }
    }
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// How to read a bare `m`
    #[arg(long, value_enum)]
    ambiguous: Option<AmbiguousArg>,
    #[arg(long)]
    allow_negative: bool,
    #[arg(long)]
    max_length: Option<usize>,
}

impl ParseArgs {
    fn resolve(&self, defaults: &ParseOptions) -> ParseOptions {
        let mut options = defaults.clone();
        if let Some(policy) = self.ambiguous {
            options.ambiguous_unit = policy.into();
        }
        if self.allow_negative {
            options.allow_negative = true;
        }
        if let Some(max_length) = self.max_length {
            options.max_length = max_length;
        }
        options
    }
}

#[derive(Debug, Args)]
struct FormatArgs {
    #[arg(long)]
    long: bool,
    #[arg(long)]
    precision: Option<u32>,
    #[arg(long)]
    compound: bool,
    /// Comma-separated unit symbols to restrict output to (e.g. `h,m`)
    #[arg(long, value_delimiter = ',')]
    units: Vec<UnitTime>,
    /// Use this locale's plural rules
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    separator: Option<String>,
}

impl FormatArgs {
    fn resolve(&self, defaults: &FormatOptions) -> FormatOptions {
        let mut options = defaults.clone();
        options.long |= self.long;
        options.compound |= self.compound;
        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if !self.units.is_empty() {
            options.preferred_units = Some(self.units.clone());
        }
        if let Some(locale) = &self.locale {
            options = options.with_locale(locale.clone());
        }
        if let Some(separator) = &self.separator {
            options.separator = separator.clone();
        }
        options
    }
}

fn describe(err: DurationParseError) -> anyhow::Error {
    if err.has_suggestions() {
        anyhow!("{}: {} (suggestions: {})", err.code, err, err.suggestions.join(", "))
    } else {
        anyhow!("{}: {}", err.code, err)
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ParserConfig> {
    match path {
        Some(path) => {
            log_info(&format!("Loading config from {}", path.display()), "configuration", "config_file");
            ParserConfig::load(path)
        }
        None => ParserConfig::from_env(),
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    log_startup("configuration", "loading", None);
    let config = load_config(cli.config)?;
    log_startup("configuration", "loaded", None);

    let parser = DurationParser::with_config(config);
    let defaults = parser.config().clone();

    match cli.command {
        Command::Parse { input, options } => {
            let ms = parser
                .parse(input.as_str(), &options.resolve(&defaults.parse))
                .map_err(describe)?;
            println!("{ms}");
        }
        Command::Detailed { input, options } => {
            let result = parser
                .parse_detailed(input.as_str(), &options.resolve(&defaults.parse))
                .map_err(describe)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Format { ms, options } => {
            println!("{}", parser.format(ms, &options.resolve(&defaults.format))?);
        }
        Command::Suggest { input, max } => {
            let max = max.unwrap_or(defaults.suggestions.max_suggestions);
            for suggestion in parser.suggestions(&input.to_lowercase(), max) {
                println!("{suggestion}");
            }
            let memoized = parser.engine().distance().cached_entries();
            log_performance_metric("distance_cache_entries", memoized as f64, "count", "suggest");
        }
        Command::Valid { input, options } => {
            if !parser.is_valid(input.as_str(), &options.resolve(&defaults.parse)) {
                std::process::exit(1);
            }
        }
        Command::Expires { input, options } => {
            let expires = parser
                .expires_at(input.as_str(), &options.resolve(&defaults.parse))
                .map_err(describe)?;
            println!("{}", expires.to_rfc3339());
        }
        Command::Units => {
            for unit in parser.supported_units() {
                println!("{unit}");
            }
        }
    }

    Ok(())
}
