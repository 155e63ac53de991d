use std::{fs, path::Path, path::PathBuf, process, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use jsam::{
    ast::ast::tree_to_json,
    lexer::lexer::tokenize,
    parser::{
        parser::{parse, ParserConfig},
        symbols::RedeclarationPolicy,
    },
    render_error,
};

#[derive(ClapParser)]
#[command(name = "jsam")]
#[command(about = "Front end for the jsam language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print the statement tree
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fail when a name is declared twice instead of replacing it
        #[arg(long)]
        reject_redeclarations: bool,

        /// Print the symbol table after the tree
        #[arg(long)]
        symbols: bool,

        /// How to print the tree
        #[arg(long, value_enum, default_value_t = TreeFormat::Outline)]
        format: TreeFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TreeFormat {
    /// One node per line, children indented
    Outline,
    /// Full pretty-printed debug structure
    Debug,
    /// The whole tree as a JSON array
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse {
            file,
            reject_redeclarations,
            symbols,
            format,
        } => {
            let config = ParserConfig {
                redeclaration: if reject_redeclarations {
                    RedeclarationPolicy::Reject
                } else {
                    RedeclarationPolicy::Overwrite
                },
            };
            parse_file(&file, config, symbols, format)?
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

fn lex_file(path: &Path) -> Result<()> {
    let source = read_source(path)?;

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => fail(&error, &source, path),
    };
    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: &Path, config: ParserConfig, show_symbols: bool, format: TreeFormat) -> Result<()> {
    let source = read_source(path)?;

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => fail(&error, &source, path),
    };
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (parser, result) = parse(tokens, config);
    let statements = match result {
        Ok(statements) => statements,
        Err(error) => fail(&error, &source, path),
    };
    println!("Parsed in {:?}", parse_start.elapsed());

    for notice in parser.notices() {
        println!("Note: {}", notice);
    }

    println!();
    match format {
        TreeFormat::Outline => statements.iter().for_each(|stmt| print!("{}", stmt.outline())),
        TreeFormat::Debug => println!("{:#?}", statements),
        TreeFormat::Json => println!(
            "{}",
            tree_to_json(&statements).context("failed to serialize the statement tree")?
        ),
    }

    if show_symbols {
        println!("\nSymbols:");
        for declaration in parser.symbols().sorted() {
            println!("  {}: {}", declaration.name, declaration.ty.name);
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}

fn fail(error: &jsam::errors::errors::Error, source: &str, path: &Path) -> ! {
    eprintln!("{}", render_error(error, source, &path.display().to_string()));
    process::exit(1)
}
