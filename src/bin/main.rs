//! `aarch64-disasm` — decode and print AArch64 instruction words from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use aarch64_disasm::{decode, error::CliError};

/// Decode AArch64 (A64) instruction words and print them as assembly text.
#[derive(Parser, Debug)]
#[command(name = "aarch64-disasm", version, about)]
struct Args {
    /// Instruction words to decode, as hex (with or without a leading `0x`). Ignored if `--file`
    /// is given.
    words: Vec<String>,

    /// Read instruction words from this file instead (one hex word per line; blank lines and
    /// lines starting with `#` are skipped).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Base address assigned to the first word; successive words are spaced 4 bytes apart.
    #[arg(short, long, default_value_t = 0)]
    address: u64,

    /// Enable debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_word(token: &str) -> Result<u32, CliError> {
    debug!(%token, "parsing instruction word");
    let trimmed = token.strip_prefix("0x").unwrap_or(token);
    u32::from_str_radix(trimmed, 16).map_err(|e| CliError::InvalidWord {
        token: token.to_string(),
        message: e.to_string(),
    })
}

fn collect_words(args: &Args) -> Result<Vec<String>, CliError> {
    if let Some(path) = &args.file {
        let contents = std::fs::read_to_string(path)?;
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return Err(CliError::EmptyInput { path: path.display().to_string() });
        }
        Ok(words)
    } else {
        Ok(args.words.clone())
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let tokens = collect_words(args)?;
    info!(count = tokens.len(), "decoding instruction words");
    for (i, token) in tokens.iter().enumerate() {
        let word = parse_word(token)?;
        let address = args.address + (i as u64) * 4;
        match decode(word, address) {
            Some(inst) => {
                debug!(address, word, %inst, "decoded");
                println!("{address:#010x}:  {word:08x}  {inst}")
            }
            None => {
                debug!(address, word, "word not recognized");
                println!("{address:#010x}:  {word:08x}  unknown")
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aarch64_disasm=debug")),
            )
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aarch64-disasm: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_hex() {
        assert_eq!(parse_word("F9400421").unwrap(), 0xF940_0421);
        assert_eq!(parse_word("0xF9400421").unwrap(), 0xF940_0421);
    }

    #[test]
    fn rejects_non_hex_token() {
        assert!(parse_word("zzzz").is_err());
    }

    #[test]
    fn args_parse_from_cli_tokens() {
        let args = Args::try_parse_from(["aarch64-disasm", "--address", "0x1000", "F9400421"]).unwrap();
        assert_eq!(args.address, 0x1000);
        assert_eq!(args.words, vec!["F9400421".to_string()]);
    }
}
