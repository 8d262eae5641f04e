use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};
use mint_authority_patcher::common::{default_accounts_dir, setup_logging, LoggingFormat};
use mint_authority_patcher::config::{
    default_token_entries, filter_entries, load_token_list, parse_mint_authority, PatcherConfig,
    MINT_AUTHORITY_ENV,
};
use mint_authority_patcher::fetcher::{SolanaCliFetcher, DEFAULT_CLUSTER, DEFAULT_SOLANA_PROGRAM};
use mint_authority_patcher::patcher::AccountPatcher;

/// Mint authority patcher: dumps mainnet token mints and rewrites their mint authority so they
/// can be loaded into a local test validator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base58 public key to install as the mint authority
    #[arg(long, env = MINT_AUTHORITY_ENV)]
    mint_authority: Option<String>,

    /// Directory for the `<symbol>.json` fixtures. Defaults to `scripts/accounts` under the
    /// repository root.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON object mapping token symbols to mint addresses. Defaults to the built-in list.
    #[arg(short, long)]
    tokens_file: Option<PathBuf>,

    /// Only patch these symbols
    #[arg(long)]
    only: Vec<String>,

    /// Cluster URL or moniker passed to `solana -u`
    #[arg(short, long, default_value = DEFAULT_CLUSTER)]
    url: String,

    /// Path to the solana CLI
    #[arg(long, default_value = DEFAULT_SOLANA_PROGRAM)]
    solana_bin: String,

    /// Logging format
    #[arg(short, long, default_value_t = LoggingFormat::Standard)]
    logging_format: LoggingFormat,
}

fn run(args: Args) -> anyhow::Result<()> {
    let mint_authority = parse_mint_authority(args.mint_authority.as_deref())?;

    let entries = match &args.tokens_file {
        Some(path) => load_token_list(path)?,
        None => default_token_entries()?,
    };
    let entries = filter_entries(entries, &args.only)?;
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => default_accounts_dir(&env::current_dir()?),
    };

    let config = PatcherConfig {
        mint_authority,
        output_dir,
        entries,
    };
    let patcher = AccountPatcher::new(config, SolanaCliFetcher::new(args.solana_bin, args.url));
    let report = patcher.run()?;
    info!(
        "Patched {} fixtures in {:?}",
        report.patched.len(),
        patcher.config().output_dir
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.logging_format);

    if let Err(err) = run(args) {
        error!("{:#}", err);
        process::exit(1);
    }
}
