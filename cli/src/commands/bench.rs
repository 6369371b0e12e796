use anyhow::{ensure, Result};
use bls12_377_common::init_tracing;
use bls12_377_pairing::{
    batch_pairing_eq_bls12_377, final_exp_bls12_377, miller_loop_bls12_377, neg_g1_bls12_377,
    prepare_g1_bls12_377, prepare_g2_bls12_377, PairingEquation, FP12_ONE, G1_GENERATOR,
    G2_GENERATOR,
};
use clap::Parser;
use colored::Colorize;
use std::time::{Duration, Instant};

/// Times the pairing stages and a batch of pairing equations
#[derive(Parser)]
#[command(author, about, long_about = None)]
pub struct BenchCmd {
    /// Number of pairings to time
    #[clap(short = 'n', long, env = "BLS12_377_BENCH_ITERATIONS", default_value_t = 10)]
    pub iterations: u32,

    /// Number of equations checked by the batch run
    #[clap(short = 'b', long, env = "BLS12_377_BENCH_BATCH", default_value_t = 16)]
    pub batch: usize,

    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level")]
    pub verbose: u8,
}

fn per_iteration(total: Duration, n: u32) -> f64 {
    total.as_secs_f64() * 1000.0 / n as f64
}

impl BenchCmd {
    pub fn run(&self) -> Result<()> {
        ensure!(self.iterations > 0, "Number of iterations must be positive");
        init_tracing(self.verbose)?;

        tracing::info!(
            "{}",
            format!("{} Bench", format!("{: >12}", "Command").bright_green().bold())
        );

        let mut prepare = Duration::ZERO;
        let mut miller = Duration::ZERO;
        let mut final_exp = Duration::ZERO;
        for i in 0..self.iterations {
            let start = Instant::now();
            let p = prepare_g1_bls12_377(&G1_GENERATOR);
            let q = prepare_g2_bls12_377(&G2_GENERATOR);
            prepare += start.elapsed();

            let start = Instant::now();
            let f = miller_loop_bls12_377(&p, &q);
            miller += start.elapsed();

            let start = Instant::now();
            final_exp_bls12_377(&f)?;
            final_exp += start.elapsed();

            tracing::debug!("iteration {i} done");
        }

        let minus_p = neg_g1_bls12_377(&G1_GENERATOR);
        let equation = PairingEquation {
            pairs: vec![(G1_GENERATOR, G2_GENERATOR), (minus_p, G2_GENERATOR)],
            target: FP12_ONE,
        };
        let equations = vec![equation; self.batch];

        let start = Instant::now();
        let results = batch_pairing_eq_bls12_377(&equations);
        let batch = start.elapsed();
        ensure!(results.iter().all(|&ok| ok), "Batch pairing equation failed");

        tracing::info!("{}", "--- BENCH SUMMARY ---".bright_green().bold());
        tracing::info!("   prepare: {:.3} ms", per_iteration(prepare, self.iterations));
        tracing::info!("    miller: {:.3} ms", per_iteration(miller, self.iterations));
        tracing::info!(" final exp: {:.3} ms", per_iteration(final_exp, self.iterations));
        tracing::info!(
            "     batch: {} equations in {} milliseconds",
            self.batch,
            batch.as_millis()
        );
        tracing::info!("{}", "---------------------".bright_green().bold());

        Ok(())
    }
}
