//! Subcommand implementations.

pub mod apply;
pub mod blackbody;
pub mod convert;
pub mod identity;
pub mod info;

use chroma_lut::{Domain3, Lut};

/// Human-readable LUT kind.
pub fn kind_name(lut: &Lut) -> &'static str {
    match lut {
        Lut::OneD(_) => "1D",
        Lut::ThreeByOneD(_) => "3x1D",
        Lut::ThreeD(_) => "3D",
    }
}

/// Human-readable domain description.
pub fn describe_domain(domain: &Domain3) -> String {
    match domain {
        Domain3::Range { min, max } => format!(
            "[{} {} {}] - [{} {} {}]",
            min[0], min[1], min[2], max[0], max[1], max[2]
        ),
        Domain3::Explicit(rows) => format!("explicit, {} breakpoint rows", rows.len()),
    }
}
