use clap::{Parser, Args, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;

mod aliases;
mod codepoint_parser;
mod digits;
mod errors;
mod inspector;
mod mappings;
mod report;

use aliases::AliasTable;
use inspector::{single_char, summarize, Inspector};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
    /// A path to a NameAliases.txt file. Defaults to the alias data built into this tool.
    #[arg(long, global = true)]
    aliases_file: Option<PathBuf>,
    /// Log more detail; repeat for even more.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every character of a text, with its normalization forms.
    Decode(DecodeOpts),
    /// Describe characters given by their hexadecimal code points.
    Codepoint(CodepointOpts),
    /// Describe a single character.
    Char(CharOpts),
    /// Print the Unicode version of the character data.
    UnicodeVersion,
}

#[derive(Debug, Args)]
struct DecodeOpts {
    /// The text to decode.
    text: String,
    /// List every attribute of each character instead of one line per character.
    #[arg(short, long, action)]
    long: bool,
}

#[derive(Debug, Args)]
struct CodepointOpts {
    /// Code points such as `U+0041` or `1F600`, separated by spaces or commas.
    #[arg(required = true)]
    code_points: Vec<String>,
}

#[derive(Debug, Args)]
struct CharOpts {
    /// Exactly one character.
    character: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_options = Cli::parse();
    init_logging(cli_options.verbose);

    // The alias table is required for name fallback, so failing to load it ends the run here.
    let alias_table = match &cli_options.aliases_file {
        Some(path) => AliasTable::from_file(path)?,
        None => AliasTable::bundled()?,
    };
    let inspector = Inspector::new(&alias_table);

    return match cli_options.command {
        Command::Decode(options) => {
            decode(&inspector, options)
        }
        Command::Codepoint(options) => {
            codepoint(&inspector, options)
        }
        Command::Char(options) => {
            character(&inspector, options)
        }
        Command::UnicodeVersion => {
            let (major, minor, update) = inspector::UNICODE_VERSION;
            println!("{major}.{minor}.{update}");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = colog::default_builder();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}

fn decode(inspector: &Inspector, decode_opts: DecodeOpts) -> Result<(), Box<dyn std::error::Error>> {
    let text = &decode_opts.text;
    info!("Decoding {} bytes of text", text.len());

    println!("{}", summarize(text));
    println!();
    for record in inspector.inspect(text) {
        if decode_opts.long {
            println!("{record:#}");
        } else {
            println!("{record}");
        }
    }
    Ok(())
}

fn codepoint(inspector: &Inspector, codepoint_opts: CodepointOpts) -> Result<(), Box<dyn std::error::Error>> {
    let input = codepoint_opts.code_points.join(" ");
    let characters = codepoint_parser::parse_codepoints(&input)?;
    info!("Describing {} code points", characters.len());

    for (i, c) in characters.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", inspector.page_description(c));
    }
    Ok(())
}

fn character(inspector: &Inspector, char_opts: CharOpts) -> Result<(), Box<dyn std::error::Error>> {
    let c = single_char(&char_opts.character)?;
    print!("{}", inspector.page_description(c));
    Ok(())
}
