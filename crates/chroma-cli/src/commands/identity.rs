//! Identity LUT generation command

use crate::IdentityArgs;
use anyhow::{Context, Result};
use chroma_lut::{write_cube, Lut, Lut3D, Lut3x1D};

pub fn run(args: IdentityArgs, verbose: bool) -> Result<()> {
    let lut: Lut = if args.cube {
        Lut3D::identity(args.size)?.into()
    } else {
        Lut3x1D::identity(args.size)?.into()
    };

    write_cube(&args.output, &lut)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if verbose {
        println!(
            "Wrote {} identity LUT, size {}, to {}",
            super::kind_name(&lut),
            args.size,
            args.output.display()
        );
    }

    Ok(())
}
