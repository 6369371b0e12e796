use anyhow::Result;
use bls12_377_common::{format_limbs, init_tracing};
use bls12_377_pairing::{
    ATE_LOOP_PARAM, ATE_N_COEFS, ATE_N_USED_COEFS, FINAL_EXP_Z, G1_GENERATOR, G2_GENERATOR, P,
    PRE_P_SIZE, PRE_Q_SIZE, R,
};
use clap::Parser;
use colored::Colorize;

use super::fp_to_hex;

/// Prints the curve parameters and generators
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct ConstantsCmd {
    /// Also print the generators as raw Montgomery limbs, as accepted by `pairing --p/--q`
    #[clap(long)]
    pub raw: bool,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl ConstantsCmd {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose)?;

        tracing::info!("{}", "--- BLS12-377 ---".bright_green().bold());
        tracing::info!("         p: {}", format_limbs(&P.iter().rev().copied().collect::<Vec<_>>()));
        tracing::info!("         r: {}", format_limbs(&R.iter().rev().copied().collect::<Vec<_>>()));
        tracing::info!("  ate loop: {:#x}", ATE_LOOP_PARAM);
        tracing::info!(" final exp: z = {:#x}", FINAL_EXP_Z);
        tracing::info!("line coefs: {} used of {} slots", ATE_N_USED_COEFS, ATE_N_COEFS);
        tracing::info!("  prepared: P {} bytes, Q {} bytes", PRE_P_SIZE, PRE_Q_SIZE);

        tracing::info!("{}", "--- G1 generator ---".bright_green().bold());
        tracing::info!("         x: {}", fp_to_hex(&G1_GENERATOR[0..6]));
        tracing::info!("         y: {}", fp_to_hex(&G1_GENERATOR[6..12]));

        tracing::info!("{}", "--- G2 generator ---".bright_green().bold());
        tracing::info!(
            "         x: {} + {}·u",
            fp_to_hex(&G2_GENERATOR[0..6]),
            fp_to_hex(&G2_GENERATOR[6..12])
        );
        tracing::info!(
            "         y: {} + {}·u",
            fp_to_hex(&G2_GENERATOR[12..18]),
            fp_to_hex(&G2_GENERATOR[18..24])
        );

        if self.raw {
            tracing::info!("{}", "--- raw ---".bright_green().bold());
            tracing::info!("        G1: {}", format_limbs(&G1_GENERATOR));
            tracing::info!("        G2: {}", format_limbs(&G2_GENERATOR));
        }

        Ok(())
    }
}
