//! Single-triple LUT application command

use crate::ApplyArgs;
use anyhow::Result;
use chroma_lut::read_cube;

pub fn run(args: ApplyArgs) -> Result<()> {
    let lut = read_cube(&args.lut)?;
    let input = [args.r, args.g, args.b];
    let output = lut.apply(input);

    println!(
        "{:.6} {:.6} {:.6} -> {:.6} {:.6} {:.6}",
        input[0], input[1], input[2], output[0], output[1], output[2]
    );

    Ok(())
}
