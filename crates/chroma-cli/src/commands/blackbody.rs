//! Blackbody spectrum printout command

use crate::BlackbodyArgs;
use anyhow::{bail, Result};
use chroma_colorimetry::{sd_blackbody, SpectralShape};

pub fn run(args: BlackbodyArgs) -> Result<()> {
    if args.temperature <= 0.0 {
        bail!("temperature must be positive, got {}", args.temperature);
    }

    let shape = SpectralShape::new(args.start, args.end, args.interval);
    if shape.is_empty() {
        bail!(
            "empty spectral shape: start {}, end {}, interval {}",
            args.start,
            args.end,
            args.interval
        );
    }

    let sd = sd_blackbody(args.temperature, shape);
    println!("# {} (W/sr/m^2/nm)", sd.name);
    for (wavelength, value) in shape.wavelengths().zip(sd.values.iter()) {
        println!("{wavelength:.1} {value:.6e}");
    }

    Ok(())
}
