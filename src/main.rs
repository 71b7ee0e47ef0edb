use clap::Parser;
use slide_inventory::{cli, config, error, inventory, logging};
use cli::Cli;
use config::Config;
use error::InventoryError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = Config::load(cli.rules.as_deref())
        .and_then(|config| inventory::build_inventory(&cli.folder, &cli.output, &config));

    match result {
        Ok(summary) => {
            println!("Saved {} rows to {}", summary.rows, summary.output.display());
            ExitCode::SUCCESS
        }
        // TIFFなしは正常終了扱い
        Err(InventoryError::NoTiffFound(_)) => {
            println!("No TIFF files found");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
