use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps the number of `-v` flags to a default log level
pub fn verbosity_to_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber, `RUST_LOG` directives take precedence over `verbose`
pub fn init_tracing(verbose: u8) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_to_level(verbose).into())
        .from_env_lossy();

    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_ansi(true).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Parses a hex string of little-endian limbs, as printed by `format_limbs`
pub fn parse_limbs<const N: usize>(hex: &str) -> Result<[u64; N]> {
    let hex = hex.trim().trim_start_matches("0x");
    if hex.len() != N * 16 {
        anyhow::bail!("Expected {} hex digits, got {}", N * 16, hex.len());
    }

    let mut limbs = [0u64; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let digits = &hex[i * 16..(i + 1) * 16];
        *limb = u64::from_str_radix(digits, 16)
            .with_context(|| format!("Invalid hex digits in limb {i}: {digits}"))?;
    }
    Ok(limbs)
}

/// Formats little-endian limbs as one hex string, limb by limb
pub fn format_limbs(limbs: &[u64]) -> String {
    let mut out = String::with_capacity(2 + limbs.len() * 16);
    out.push_str("0x");
    for limb in limbs {
        out.push_str(&format!("{limb:016x}"));
    }
    out
}
