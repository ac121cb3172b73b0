//! dialect-ddl CLI - Dialect-aware DDL generation from schema files.

use clap::{Args, Parser, Subcommand};
use dialect_ddl::{
    Column, Config, DataType, Database, DdlAction, DdlError, DdlTarget, DialectCatalog, Script,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dialect-ddl")]
#[command(about = "Dialect-aware DDL generation from schema files")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the script creating every object of a schema file
    Create(ScriptArgs),

    /// Generate the script dropping every object of a schema file
    Drop(ScriptArgs),

    /// List registered dialects and their aliases
    Dialects,

    /// Show how each data type renders in a dialect
    Types {
        /// Dialect name or alias [default: from config]
        #[arg(short, long)]
        dialect: Option<String>,
    },
}

#[derive(Args)]
struct ScriptArgs {
    /// Schema file (YAML, or JSON with a .json extension)
    schema_file: PathBuf,

    /// Dialect name or alias [default: from config]
    #[arg(short, long)]
    dialect: Option<String>,

    /// Override the schema qualifying object names
    #[arg(long)]
    schema: Option<String>,

    /// Only this table
    #[arg(long)]
    table: Option<String>,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), DdlError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Create(args) => generate(DdlAction::Create, config, args, cli.output_json),
        Commands::Drop(args) => generate(DdlAction::Drop, config, args, cli.output_json),
        Commands::Dialects => list_dialects(cli.output_json),
        Commands::Types { dialect } => {
            let name = dialect.unwrap_or(config.dialect);
            show_types(&name, cli.output_json)
        }
    }
}

fn generate(
    action: DdlAction,
    mut config: Config,
    args: ScriptArgs,
    output_json: bool,
) -> Result<(), DdlError> {
    if let Some(dialect) = args.dialect {
        config.dialect = dialect;
    }
    if let Some(schema) = args.schema {
        config.schema = Some(schema);
    }
    config.validate()?;

    let db = Database::load(&args.schema_file)?;
    info!(
        "Loaded schema '{}' from {:?} ({} tables, {} relations)",
        db.name,
        args.schema_file,
        db.tables.len(),
        db.relations.len()
    );

    let generator = config.generator()?;
    let target = match &args.table {
        Some(table) => DdlTarget::Table(table),
        None => DdlTarget::Database,
    };

    let mut script = Script::new();
    generator.ddl_script(action, &db, target, &mut script)?;

    let text = if output_json {
        serde_json::to_string_pretty(&serde_json::json!({
            "dialect": generator.profile().name(),
            "database": db.name,
            "statements": script.statements(),
        }))? + "\n"
    } else {
        script.render(&config.terminator)
    };

    write_output(args.output.as_deref(), &text)?;
    if let Some(path) = &args.output {
        info!("Wrote {} statements to {:?}", script.len(), path);
    }
    Ok(())
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), DdlError> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}

fn list_dialects(output_json: bool) -> Result<(), DdlError> {
    let catalog = DialectCatalog::builtin();

    if output_json {
        let dialects: Vec<_> = catalog
            .profiles()
            .map(|p| {
                serde_json::json!({
                    "name": p.name(),
                    "aliases": p.aliases(),
                    "phases": p.phases().iter().map(|ph| ph.name()).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&dialects)?);
        return Ok(());
    }

    println!("Registered dialects:");
    for profile in catalog.profiles() {
        if profile.aliases().is_empty() {
            println!("  {}", profile.name());
        } else {
            println!(
                "  {} (aliases: {})",
                profile.name(),
                profile.aliases().join(", ")
            );
        }
    }
    Ok(())
}

fn show_types(dialect: &str, output_json: bool) -> Result<(), DdlError> {
    let profile = DialectCatalog::builtin().require(dialect)?;

    let rows: Vec<(DataType, Option<String>)> = DataType::ALL
        .iter()
        .map(|&data_type| {
            let column = Column::new("c", data_type, 0.0);
            (data_type, profile.resolve_type(data_type, 0.0, &column))
        })
        .collect();

    if output_json {
        let map: serde_json::Map<String, serde_json::Value> = rows
            .into_iter()
            .map(|(t, sql)| (t.to_string(), serde_json::json!(sql)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("Type mapping for {}:", profile.name());
    for (data_type, sql) in rows {
        println!(
            "  {:<10} {}",
            data_type.as_str(),
            sql.as_deref().unwrap_or("(unresolved)")
        );
    }
    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // RUST_LOG wins over --verbosity
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
