use anyhow::{Context, Result};
use bls12_377_cli::commands::{BenchCmd, ConstantsCmd, PairingCmd, VerifyCmd};
use clap::Parser;

// Main enum defining the subcommands.
#[derive(Parser)]
#[command(
    name = "bls12-377",
    bin_name = "bls12-377",
    version,
    about = "CLI tool for the BLS12-377 pairing",
    long_about = "Computes and checks optimal Ate pairings over the BLS12-377 curve."
)]
pub enum Cli {
    Pairing(PairingCmd),
    Verify(VerifyCmd),
    Constants(ConstantsCmd),
    Bench(BenchCmd),
}

fn main() -> Result<()> {
    // Parse command-line arguments and handle errors if they occur.
    let cli = Cli::parse();

    match cli {
        Cli::Pairing(cmd) => {
            cmd.run().context("Error executing Pairing command")?;
        }
        Cli::Verify(cmd) => {
            cmd.run().context("Error executing Verify command")?;
        }
        Cli::Constants(cmd) => {
            cmd.run().context("Error executing Constants command")?;
        }
        Cli::Bench(cmd) => {
            cmd.run().context("Error executing Bench command")?;
        }
    }

    Ok(())
}
