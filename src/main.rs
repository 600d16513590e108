use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tagstream::{CliError, Position, SchemaConfig, SchemaRegistry, demo_page};

/// Inspect a markup schema and render sample documents.
#[derive(Parser, Debug)]
#[command(name = "tagstream", version, about)]
struct Cli {
    /// JSON shorthand table to use instead of the built-in XHTML schema
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the sample "Hello world!" page
    Demo,
    /// List element names, optionally filtered by position class
    List {
        #[arg(long)]
        position: Option<Position>,
    },
    /// Print the compiled schema of one element as JSON
    Describe { element: String },
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    let cli = Cli::parse();

    let custom;
    let registry: &SchemaRegistry = match &cli.schema {
        Some(path) => {
            log::info!("Loading schema table from {}", path.display());
            let json = fs::read_to_string(path)?;
            custom = SchemaConfig::from_json(&json)?.compile()?;
            &custom
        }
        None => SchemaRegistry::xhtml(),
    };

    match cli.command {
        Command::Demo => println!("{}", demo_page(registry)?),
        Command::List { position } => {
            let names: Vec<&str> = match position {
                Some(p) => registry.elements_at(p).map(|e| e.name()).collect(),
                None => registry.element_names().collect(),
            };
            for name in names {
                println!("{}", name);
            }
        }
        Command::Describe { element } => {
            let schema = registry
                .get(&element)
                .ok_or(CliError::UnknownElement(element))?;
            println!("{}", serde_json::to_string_pretty(schema)?);
        }
    }
    Ok(())
}
