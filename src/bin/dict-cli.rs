use clap::{Parser, Subcommand};
use std::path::PathBuf;

use swearbot::observability::logging::init_logging;
use swearbot::SwearFilter;

#[derive(Parser)]
#[command(name = "dict-cli")]
#[command(about = "Inspect and extend a swear dictionary", long_about = None)]
struct Cli {
    /// Word list, one rule per line.
    #[arg(short, long, default_value = "data/swears.txt")]
    dict: PathBuf,

    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match single words against the dictionary
    Check { words: Vec<String> },
    /// List the swears found in a message
    Scan { text: Vec<String> },
    /// Add a rule and append it to the word list
    Add { rule: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let filter = SwearFilter::load(&cli.dict)?;

    match cli.command {
        Commands::Check { words } => {
            for word in words {
                match filter.matched_prefix(&word) {
                    Some(prefix) => println!("{}: match ({})", word, prefix),
                    None => println!("{}: no match", word),
                }
            }
        }
        Commands::Scan { text } => {
            let swears = filter.find_swears(&text.join(" "));
            println!("{} swears found", swears.len());
            for swear in swears {
                println!("{}", swear);
            }
        }
        Commands::Add { rule } => {
            let rule = filter.add_rule(&rule)?;
            println!("Rule '{}' added to {:?}", rule, filter.dict_path());
        }
    }

    Ok(())
}
