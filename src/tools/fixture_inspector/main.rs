use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mint_authority_patcher::common::{setup_logging, LoggingFormat};
use mint_authority_patcher::patcher::read_mint_authority;
use mint_authority_patcher::snapshot::AccountSnapshot;

/// Prints the mint authority stored in account fixture files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Fixture files written by mint-authority-patcher
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Logging format
    #[arg(short, long, default_value_t = LoggingFormat::Standard)]
    logging_format: LoggingFormat,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.logging_format);

    for file in &args.files {
        let snapshot = AccountSnapshot::load(file)?;
        let data = snapshot.decode_data()?;
        let authority = read_mint_authority(&data)
            .with_context(|| format!("Failed to read mint authority from {:?}", file))?;
        println!("{}: mint authority {}", file.display(), authority);
    }
    Ok(())
}
