//! LUT rewrite command

use crate::ConvertArgs;
use anyhow::{Context, Result};
use chroma_lut::{iridas_cube, read_cube};
use tracing::debug;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let mut lut = read_cube(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    debug!(size = lut.size(), "parsed input LUT");

    if let Some(title) = args.title {
        lut.set_name(title);
    }

    iridas_cube::write_cube_with_decimals(&args.output, &lut, args.decimals)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if verbose {
        println!(
            "Wrote {} ({} rows, {} decimals)",
            args.output.display(),
            lut.size(),
            args.decimals
        );
    }

    Ok(())
}
