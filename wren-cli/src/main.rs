//! Wren CLI
//!
//! Tokenizes a markup file and prints the tokens, optionally validating
//! attributes and decoding character references on the way.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use wren_common::warning::{clear_warnings, warning_count};
use wren_html::plugins::{AttributeValidator, ConsoleWarnings, EntityDecoder};
use wren_html::{Token, Tokenizer};

/// Wren: pluggable markup tokenizer
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # List the tokens of a file
    wren ./index.html

    # Tokenize inline markup
    wren --html '<p class=intro>Hi &amp; bye</p>' --decode

    # Check attributes, print only the warnings
    wren --validate --quiet ./index.html

    # Machine-readable output
    wren --json ./index.html
"#)]
struct Cli {
    /// Path to the markup file to tokenize
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize this string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print tokens as a JSON array
    #[arg(short, long)]
    json: bool,

    /// Warn about attributes not allowed on their element
    #[arg(long)]
    validate: bool,

    /// Decode character references in text and attribute values
    #[arg(short, long)]
    decode: bool,

    /// Do not print tokens, only warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (label, source) = load_source(&cli)?;

    clear_warnings();
    let mut tokenizer = Tokenizer::new();
    if cli.decode {
        tokenizer.register(EntityDecoder);
    }
    if cli.validate {
        tokenizer.register(AttributeValidator);
    }
    tokenizer.register(ConsoleWarnings::new(label));

    let tokens = tokenizer.tokenize(source)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else if !cli.quiet {
        print_tokens(&tokens);
    }

    let warnings = warning_count();
    if warnings > 0 && !cli.json {
        eprintln!("{}", format!("{warnings} warning(s)").yellow());
    }
    Ok(())
}

/// Read the input named on the command line, with a label for diagnostics.
fn load_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(ref html) = cli.html {
        Ok(("inline".to_string(), html.clone()))
    } else if let Some(ref path) = cli.path {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok((path.display().to_string(), source))
    } else {
        anyhow::bail!("no input: pass a file path or --html")
    }
}

/// Print one line per token: index, source range, kind, and rendering.
fn print_tokens(tokens: &[Token]) {
    println!("{}", format!("=== Tokens ({}) ===", tokens.len()).bold());
    for (i, token) in tokens.iter().enumerate() {
        let span = token.span();
        let kind = token.kind().to_string();
        let kind = match token {
            Token::StartTag(_) | Token::EndTag(_) => kind.cyan().to_string(),
            Token::Text(_) => kind.green().to_string(),
            Token::Comment(_) | Token::CData(_) => kind.dimmed().to_string(),
            _ => kind.magenta().to_string(),
        };
        println!("  {i:3}: {:>9} {kind:<24} {token}", span.to_string().dimmed());
    }
}
