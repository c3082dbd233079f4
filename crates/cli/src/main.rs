use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use commandlines::Command;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "commandlines")]
#[command(version, about = "Inspect how command line tokens are classified", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every parsed field of a command line
    Inspect(InspectArgs),

    /// Exit with an error unless the command line meets every condition
    Check(CheckArgs),

    /// Print the value of a definition
    Get(GetArgs),
}

#[derive(Args)]
struct Tokens {
    /// Tokens to classify (put `--` before them when they start with `-`)
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Parser)]
struct InspectArgs {
    /// Print a JSON snapshot instead of the text dump
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    input: Tokens,
}

#[derive(Parser)]
struct CheckArgs {
    /// Require a switch (without dashes)
    #[arg(long = "switch", value_name = "NAME")]
    switches: Vec<String>,

    /// Require a bundled short flag
    #[arg(long = "mop", value_name = "CHAR")]
    mops: Vec<char>,

    /// Require a definition key
    #[arg(long = "def", value_name = "KEY")]
    defs: Vec<String>,

    /// Require a multi-definition key
    #[arg(long = "mdef", value_name = "KEY")]
    mdefs: Vec<String>,

    /// Require the command line to start with these tokens, in order
    #[arg(long = "sequence", value_name = "TOKEN")]
    sequence: Vec<String>,

    #[command(flatten)]
    input: Tokens,
}

#[derive(Parser)]
struct GetArgs {
    /// Definition key (without dashes)
    #[arg(value_name = "KEY")]
    key: String,

    /// Print every value of a repeated option, one per line
    #[arg(long)]
    all: bool,

    /// Value to print when the key is absent
    #[arg(long, value_name = "VALUE")]
    default: Option<String>,

    #[command(flatten)]
    input: Tokens,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => inspect(args),
        Commands::Check(args) => check(args),
        Commands::Get(args) => get(args),
    }
}

fn inspect(args: InspectArgs) -> Result<()> {
    tracing::debug!("executing inspect command");

    let command = Command::new(args.input.tokens);
    if args.json {
        let json = serde_json::to_string_pretty(&command)?;
        println!("{json}");
    } else {
        print!("{}", command.describe());
    }

    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    tracing::debug!("executing check command");

    let command = Command::new(args.input.tokens);
    let mut failed: Vec<String> = Vec::new();

    for name in &args.switches {
        if !command.has_all_switches(name.as_str()) {
            failed.push(format!("missing switch: {name}"));
        }
    }
    for flag in &args.mops {
        if !command.mops().contains(*flag) {
            failed.push(format!("missing short flag: {flag}"));
        }
    }
    for key in &args.defs {
        if !command.has_all_definitions(key.as_str()) {
            failed.push(format!("missing definition: {key}"));
        }
    }
    for key in &args.mdefs {
        if !command.has_all_multi_definitions(key.as_str()) {
            failed.push(format!("missing multi-definition: {key}"));
        }
    }
    if !args.sequence.is_empty() && !command.has_command_sequence(&args.sequence) {
        failed.push(format!(
            "command does not start with: {}",
            args.sequence.join(" ")
        ));
    }

    if !failed.is_empty() {
        for msg in &failed {
            eprintln!("  - {msg}");
        }
        bail!("{} condition(s) not met", failed.len());
    }

    eprintln!("OK: {}", command);
    Ok(())
}

fn get(args: GetArgs) -> Result<()> {
    tracing::debug!(key = %args.key, "executing get command");

    let key = args.key;
    let mut command = Command::new(args.input.tokens);
    if let Some(value) = args.default {
        command.set_default(key.as_str(), value);
    }

    let values: Vec<&str> = if args.all {
        match command.get_multi_definition(&key) {
            Ok(values) => values.iter().map(String::as_str).collect(),
            Err(_) => {
                let value = command
                    .get_default(&key)
                    .with_context(|| format!("no value for `{key}`"))?;
                vec![value]
            }
        }
    } else {
        let value = command
            .get_definition(&key)
            .or_else(|_| command.get_default(&key))
            .with_context(|| format!("no value for `{key}`"))?;
        vec![value]
    };

    for value in values {
        println!("{value}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
