//! Print the reconstruction energy of an impulse in every DWT subband
//!
//! Subbands whose impulses reconstruct with more energy contribute more
//! error per unit of quantisation, so this table is the input to
//! equal-MSE step-size weighting.

use anyhow::Result;
use clap::Parser;
use log::info;
use sf2_core::{consts, Subband};
use sf2_transform::impulse_energies_sized;

/// Impulse-energy table of an n-level LeGall DWT
#[derive(Parser, Debug)]
#[command(name = "subband-energy")]
#[command(version)]
#[command(about = "Impulse reconstruction energy per DWT subband", long_about = None)]
struct Args {
    /// Number of decomposition levels
    #[arg(short, long, default_value_t = consts::DEFAULT_DWT_LEVELS)]
    levels: usize,

    /// Side of the square working image
    #[arg(short, long, default_value_t = consts::DEFAULT_IMAGE_SIZE)]
    size: usize,

    /// Divide every entry by the final low-pass energy
    #[arg(short, long)]
    relative: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!(
        "probing {}-level DWT at {}x{} with impulse {}",
        args.levels,
        args.size,
        args.size,
        consts::IMPULSE_MAGNITUDE
    );
    let table = impulse_energies_sized((args.size, args.size), args.levels)?;
    let scale = if args.relative { table.final_low() } else { 1.0 };

    println!("{:>5} {:>14} {:>14} {:>14}", "layer", "LH", "HL", "HH");
    for layer in 0..args.levels {
        let [lh, hl, hh] = Subband::ALL.map(|band| table.detail(band, layer) / scale);
        println!("{:>5} {:>14.4} {:>14.4} {:>14.4}", layer, lh, hl, hh);
    }
    println!(
        "{:>5} {:>14.4}   (final low-pass)",
        args.levels,
        table.final_low() / scale
    );
    Ok(())
}
