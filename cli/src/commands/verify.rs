use anyhow::{bail, Result};
use bls12_377_common::init_tracing;
use bls12_377_pairing::{neg_g1_bls12_377, pairing_eq2_bls12_377, FP12_ONE, G2_GENERATOR};
use clap::Parser;
use colored::Colorize;

use super::scaled_generators;

/// Checks e([a]G1, [b]G2) == e([c]G1, G2), which holds iff c ≡ a·b (mod r)
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct VerifyCmd {
    #[clap(short = 'a', long)]
    pub a: u64,

    #[clap(short = 'b', long)]
    pub b: u64,

    #[clap(short = 'c', long)]
    pub c: u64,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl VerifyCmd {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose)?;

        tracing::info!(
            "{}",
            format!("{} Verify", format!("{: >12}", "Command").bright_green().bold())
        );

        let start = std::time::Instant::now();

        let (a_p, b_q) = scaled_generators(self.a, self.b);
        let (c_p, _) = scaled_generators(self.c, 1);
        let minus_c_p = neg_g1_bls12_377(&c_p);

        // e([a]G1, [b]G2)·e(-[c]G1, G2) = 1
        let ok = pairing_eq2_bls12_377(&a_p, &b_q, &minus_c_p, &G2_GENERATOR, &FP12_ONE);
        let elapsed = start.elapsed();

        if ok {
            tracing::info!("{}", "\u{2713} Pairing equation holds".bright_green().bold());
        } else {
            tracing::info!("{}", "\u{2717} Pairing equation does not hold".bright_red().bold());
        }
        tracing::info!("      time: {} milliseconds", elapsed.as_millis());

        if !ok {
            bail!("e([{}]G1, [{}]G2) != e([{}]G1, G2)", self.a, self.b, self.c);
        }
        Ok(())
    }
}
