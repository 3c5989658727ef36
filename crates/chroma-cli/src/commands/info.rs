//! LUT inspection command

use crate::InfoArgs;
use anyhow::Result;
use chroma_lut::{read_cube, Lut};

pub fn run(args: InfoArgs) -> Result<()> {
    let lut = read_cube(&args.lut)?;

    println!("File    : {}", args.lut.display());
    println!("Kind    : {}", super::kind_name(&lut));
    println!("Title   : {}", lut.name());
    println!("Size    : {}", lut.size());

    match &lut {
        Lut::ThreeByOneD(lut) => println!("Domain  : {}", super::describe_domain(&lut.domain)),
        Lut::ThreeD(lut) => println!("Domain  : {}", super::describe_domain(&lut.domain)),
        Lut::OneD(_) => {}
    }

    for comment in lut.comments() {
        println!("Comment : {comment}");
    }

    Ok(())
}
