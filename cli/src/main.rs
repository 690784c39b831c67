use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use magick_options_core::{
    Category, FoldField, ListParser, MnemonicEntry, OptionFlags, Registry, RegistryBuilder,
    ResolveError, TableError, is_command_option,
};
use magick_options_store::{OptionStore, OptionsConfig};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Output format for resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "magick-options")]
#[command(about = "Resolve image-processing option mnemonics, lists and channel masks")]
#[command(version)]
struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
    /// YAML configuration with parser settings and option defines.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level, overriding RUST_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the mnemonics of a category, or every category name.
    List(ListArgs),
    /// Resolve a mnemonic to its value.
    Lookup(LookupArgs),
    /// Resolve a value back to its mnemonic.
    Mnemonic(MnemonicArgs),
    /// Parse a comma- or pipe-separated mnemonic list into a bitmask.
    Parse(ParseArgs),
    /// Parse a channel mask, including letter shorthand such as "rgb".
    Channel(InputArgs),
    /// Parse a single pixel channel by name or number.
    PixelChannel(InputArgs),
    /// Look up a command-line option such as "-resize".
    Command(CommandArgs),
    /// Report whether each argument looks like a command-line option.
    IsOption(IsOptionArgs),
    /// Validate every built-in table.
    Verify,
    /// Apply key=value definitions to the option store and print it.
    Define(DefineArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Category name (e.g. filter, colorspace). Omit to list categories.
    category: Option<String>,
    /// Include hidden and deprecated mnemonics.
    #[arg(long)]
    all: bool,
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Category name.
    category: String,
    /// Mnemonic to resolve.
    #[arg(allow_hyphen_values = true)]
    name: String,
}

#[derive(Debug, Args)]
struct MnemonicArgs {
    /// Category name.
    category: String,
    /// Enumerated value.
    #[arg(allow_hyphen_values = true)]
    value: i64,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Category name.
    category: String,
    /// Mnemonic or list such as "Red,Green,!Blue".
    #[arg(allow_hyphen_values = true)]
    input: String,
    /// Read only the first token.
    #[arg(long)]
    single: bool,
    /// Fold option flags instead of values.
    #[arg(long)]
    flags: bool,
    /// Override the configured token length limit.
    #[arg(long)]
    max_token_length: Option<usize>,
}

#[derive(Debug, Args)]
struct InputArgs {
    #[arg(allow_hyphen_values = true)]
    input: String,
}

#[derive(Debug, Args)]
struct CommandArgs {
    /// Option token including its sigil.
    #[arg(allow_hyphen_values = true)]
    token: String,
}

#[derive(Debug, Args)]
struct IsOptionArgs {
    #[arg(required = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct DefineArgs {
    /// Definitions in key=value form.
    defines: Vec<String>,
    /// Keys to delete after applying definitions.
    #[arg(long = "delete")]
    delete: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LookupOutput<'a> {
    category: Category,
    index: usize,
    #[serde(flatten)]
    entry: &'a MnemonicEntry,
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    category: Category,
    input: &'a str,
    value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<OptionFlags>,
    truncated: bool,
}

#[derive(Debug, Serialize)]
struct ValueOutput<'a> {
    input: &'a str,
    value: i64,
}

#[derive(Debug, Serialize)]
struct OptionCheck<'a> {
    arg: &'a str,
    is_option: bool,
}

#[derive(Debug, Serialize)]
struct DefineEntry<'a> {
    key: &'a str,
    value: &'a str,
}

struct Context {
    registry: &'static Registry,
    config: OptionsConfig,
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_ref()).and_then(|config| {
        let ctx = Context {
            registry: Registry::builtin(),
            config,
            format: cli.format,
        };
        match cli.command {
            Command::List(args) => run_list(&ctx, args),
            Command::Lookup(args) => run_lookup(&ctx, args),
            Command::Mnemonic(args) => run_mnemonic(&ctx, args),
            Command::Parse(args) => run_parse(&ctx, args),
            Command::Channel(args) => run_channel(&ctx, args),
            Command::PixelChannel(args) => run_pixel_channel(&ctx, args),
            Command::Command(args) => run_command(&ctx, args),
            Command::IsOption(args) => run_is_option(&ctx, args),
            Command::Verify => run_verify(),
            Command::Define(args) => run_define(&ctx, args),
        }
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<OptionsConfig, String> {
    match path {
        Some(path) => OptionsConfig::load(path)
            .map_err(|e| format!("failed to load config '{}': {e}", path.display())),
        None => Ok(OptionsConfig::default()),
    }
}

fn resolve_category(ctx: &Context, name: &str) -> Result<Category, String> {
    let category = ctx.registry.category(name).map_err(|e| e.to_string())?;
    debug!(name, %category, "resolved category");
    Ok(category)
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn flag_names(flags: OptionFlags) -> String {
    if flags.is_empty() {
        return "none".to_string();
    }
    flags
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn run_list(ctx: &Context, args: ListArgs) -> Result<(), String> {
    let category = match args.category.as_deref() {
        Some(name) => resolve_category(ctx, name)?,
        None => Category::List,
    };
    let names = if args.all {
        ctx.registry.mnemonics(category)
    } else {
        ctx.registry.list(category)
    }
    .map_err(|e| e.to_string())?;

    match ctx.format {
        OutputFormat::Json => print_json(&names),
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_lookup(ctx: &Context, args: LookupArgs) -> Result<(), String> {
    let category = resolve_category(ctx, &args.category)?;
    let found = ctx
        .registry
        .lookup(category, &args.name)
        .map_err(|e| e.to_string())?;

    match ctx.format {
        OutputFormat::Json => print_json(&LookupOutput {
            category,
            index: found.index,
            entry: found.entry,
        }),
        OutputFormat::Text => {
            let entry = found.entry;
            if entry.flags.is_empty() {
                println!("{} = {}", entry.name, entry.value);
            } else {
                println!("{} = {} ({})", entry.name, entry.value, flag_names(entry.flags));
            }
            Ok(())
        }
    }
}

fn run_mnemonic(ctx: &Context, args: MnemonicArgs) -> Result<(), String> {
    let category = resolve_category(ctx, &args.category)?;
    let name = ctx
        .registry
        .mnemonic(category, args.value)
        .map_err(|e| e.to_string())?;

    match ctx.format {
        OutputFormat::Json => print_json(&name),
        OutputFormat::Text => {
            println!("{name}");
            Ok(())
        }
    }
}

fn run_parse(ctx: &Context, args: ParseArgs) -> Result<(), String> {
    let category = resolve_category(ctx, &args.category)?;
    let table = ctx.registry.table(category).map_err(|e| e.to_string())?;
    let max_token_length = args
        .max_token_length
        .unwrap_or(ctx.config.parse_settings().max_token_length);
    let field = if args.flags {
        FoldField::Flags
    } else {
        FoldField::Value
    };

    let parsed = ListParser::new(table)
        .multiple(!args.single)
        .field(field)
        .max_token_len(max_token_length)
        .parse(&args.input)
        .map_err(|e| e.to_string())?;
    if parsed.truncated {
        warn!(max_token_length, "a token was truncated while parsing");
    }
    let flags = args
        .flags
        .then(|| OptionFlags::from_bits_truncate(parsed.value as u32));

    match ctx.format {
        OutputFormat::Json => print_json(&ParseOutput {
            category,
            input: &args.input,
            value: parsed.value,
            flags,
            truncated: parsed.truncated,
        }),
        OutputFormat::Text => {
            match flags {
                Some(flags) => println!("{}", flag_names(flags)),
                None => println!("{}", parsed.value),
            }
            Ok(())
        }
    }
}

fn print_value(ctx: &Context, input: &str, value: i64, text: String) -> Result<(), String> {
    match ctx.format {
        OutputFormat::Json => print_json(&ValueOutput { input, value }),
        OutputFormat::Text => {
            println!("{text}");
            Ok(())
        }
    }
}

fn run_channel(ctx: &Context, args: InputArgs) -> Result<(), String> {
    let mask = ctx
        .registry
        .parse_channels(&args.input)
        .map_err(|e| e.to_string())?;
    print_value(ctx, &args.input, mask, format!("0x{mask:x}"))
}

fn run_pixel_channel(ctx: &Context, args: InputArgs) -> Result<(), String> {
    let channel = ctx
        .registry
        .parse_pixel_channel(&args.input)
        .map_err(|e| e.to_string())?;
    print_value(ctx, &args.input, channel, channel.to_string())
}

fn run_command(ctx: &Context, args: CommandArgs) -> Result<(), String> {
    let entry = ctx
        .registry
        .find_command(&args.token)
        .map_err(|e| e.to_string())?;
    if entry.is_undefined() {
        return Err(ResolveError::UnknownMnemonic {
            category: Category::Command,
            token: args.token,
        }
        .to_string());
    }

    match ctx.format {
        OutputFormat::Json => print_json(entry),
        OutputFormat::Text => {
            println!(
                "{}: {} argument(s), {}",
                entry.name,
                entry.value,
                flag_names(entry.flags)
            );
            Ok(())
        }
    }
}

fn run_is_option(ctx: &Context, args: IsOptionArgs) -> Result<(), String> {
    let checks: Vec<OptionCheck> = args
        .args
        .iter()
        .map(|arg| OptionCheck {
            arg,
            is_option: is_command_option(arg),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&checks),
        OutputFormat::Text => {
            for check in checks {
                println!("{}\t{}", check.arg, check.is_option);
            }
            Ok(())
        }
    }
}

fn run_verify() -> Result<(), String> {
    let registry = RegistryBuilder::with_builtin_tables()
        .build()
        .map_err(|errors| verify_failure(&errors))?;
    let tables = registry.categories().count();
    let commands = registry.command_table().map_err(|e| e.to_string())?;
    debug!(tables, "built-in tables validated");

    println!(
        "Verified {tables} table(s) and {} command option(s).",
        commands.active_len()
    );
    Ok(())
}

fn verify_failure(errors: &[TableError]) -> String {
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!(
        "{} problem(s) in built-in tables:\n{}",
        errors.len(),
        details.join("\n")
    )
}

fn run_define(ctx: &Context, args: DefineArgs) -> Result<(), String> {
    let mut options = OptionStore::new();
    ctx.config.apply(&mut options).map_err(|e| e.to_string())?;
    for define in &args.defines {
        options.define(define).map_err(|e| e.to_string())?;
    }
    for key in &args.delete {
        if !options.delete(key) {
            warn!(key = key.as_str(), "no such option to delete");
        }
    }

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<DefineEntry> = options
                .iter()
                .map(|(key, value)| DefineEntry { key, value })
                .collect();
            print_json(&entries)
        }
        OutputFormat::Text => {
            for (key, value) in options.iter() {
                println!("{key}={value}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{flag_names, verify_failure};
    use magick_options_core::{Category, OptionFlags, TableError};

    #[test]
    fn test_verify_failure_lists_every_problem() {
        let errors = [
            TableError::DuplicateCategory(Category::Gravity),
            TableError::CommandOutOfOrder {
                index: 3,
                previous: "-subimage-search",
                name: "-subimage",
            },
        ];
        let message = verify_failure(&errors);
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "2 problem(s) in built-in tables:");
        assert_eq!(lines[1], "category Gravity registered more than once");
        assert!(lines[2].starts_with("command table out of order at row 3"));
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(flag_names(OptionFlags::empty()), "none");
        assert_eq!(
            flag_names(OptionFlags::FIRE | OptionFlags::SIMPLE_OPERATOR),
            "SIMPLE_OPERATOR | FIRE"
        );
    }
}
