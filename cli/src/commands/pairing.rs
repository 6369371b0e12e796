use anyhow::{Context, Result};
use bls12_377_common::{init_tracing, parse_limbs};
use bls12_377_pairing::{
    bytes_le_to_u64_le, pairing_bytes_bls12_377, u64_le_to_bytes_le, G1_BYTES, G2_BYTES,
};
use clap::Parser;
use colored::Colorize;

use super::{log_fp12, scaled_generators};

/// Computes e(P, Q), by default e([a]G1, [b]G2)
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct PairingCmd {
    /// Scalar applied to the G1 generator
    #[clap(short = 'a', long, default_value_t = 1)]
    pub a: u64,

    /// Scalar applied to the G2 generator
    #[clap(short = 'b', long, default_value_t = 1)]
    pub b: u64,

    /// Jacobian G1 point as hex little-endian Montgomery limbs, overrides `a`
    #[clap(long, requires = "q")]
    pub p: Option<String>,

    /// Jacobian G2 point as hex little-endian Montgomery limbs, overrides `b`
    #[clap(long, requires = "p")]
    pub q: Option<String>,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

impl PairingCmd {
    pub fn run(&self) -> Result<()> {
        init_tracing(self.verbose)?;

        tracing::info!(
            "{}",
            format!("{} Pairing", format!("{: >12}", "Command").bright_green().bold())
        );

        let (p, q) = match (&self.p, &self.q) {
            (Some(p), Some(q)) => (
                parse_limbs::<18>(p).context("Invalid G1 point")?,
                parse_limbs::<36>(q).context("Invalid G2 point")?,
            ),
            _ => {
                tracing::info!("P = [{}]G1, Q = [{}]G2", self.a, self.b);
                scaled_generators(self.a, self.b)
            }
        };

        let mut p_bytes = [0u8; G1_BYTES];
        let mut q_bytes = [0u8; G2_BYTES];
        u64_le_to_bytes_le(&p, &mut p_bytes);
        u64_le_to_bytes_le(&q, &mut q_bytes);

        let start = std::time::Instant::now();
        let e_bytes = pairing_bytes_bls12_377(&p_bytes, &q_bytes).context("Pairing failed")?;
        let elapsed = start.elapsed();

        let e: [u64; 72] = bytes_le_to_u64_le(&e_bytes)?;
        tracing::debug!("e(P, Q) is {} bytes", e_bytes.len());

        tracing::info!("{}", "--- e(P, Q) ---".bright_green().bold());
        log_fp12(&e);
        tracing::info!("      time: {} milliseconds", elapsed.as_millis());

        Ok(())
    }
}
