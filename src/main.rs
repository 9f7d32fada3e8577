use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use itertools::Itertools;
use log::debug;

use musictheory::{enharmonics, parse_note_list, spell_note, Pitch};

#[derive(Parser, Debug)]
#[command(name = "musictheory")]
#[command(about = "Convert between scientific pitch names and note numbers", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the note number of each name, e.g. `number C#4 Db4`
    Number {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Spell a note number on a letter, e.g. `spell 60 B`
    Spell {
        #[arg(allow_negative_numbers = true)]
        number: i64,
        letter: char,
    },
    /// Print every spelling of a note number, fewest accidentals first
    Enharmonics {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the conventional spelling of a note number
    Name {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Number { names } => {
            // names may also arrive as one quoted, space separated argument
            let notes = parse_note_list(&names.join(" ")).context("failed to parse note names")?;
            debug!("parsed {} note(s)", notes.len());
            for note in notes {
                let Pitch(number) = note
                    .pitch()
                    .with_context(|| format!("note number of {} does not fit in 64 bits", note))?;
                println!("{}\t{}", note, number);
            }
        }
        Commands::Spell { number, letter } => {
            debug!("spelling {} on {}", number, letter);
            let name = spell_note(number, letter).context("failed to spell note")?;
            println!("{}", name);
        }
        Commands::Enharmonics { number } => {
            println!("{}", enharmonics(Pitch(number)).iter().join(" "));
        }
        Commands::Name { number } => {
            println!("{}", Pitch(number));
        }
    }

    Ok(())
}
