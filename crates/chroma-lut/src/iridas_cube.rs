//! Iridas/Adobe .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format widely supported by
//! DaVinci Resolve, Adobe applications, and many other tools. It stores a
//! single 1D or 3D table, an optional non-default domain, and free-text
//! comments.
//!
//! # Format
//!
//! ```text
//! TITLE "LUT Name"
//! # Comment
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data rows of a 3D table are serialized with the red index varying
//! fastest and the blue index slowest. 1D files produce a [`Lut3x1D`]
//! since every data row carries three channel values.
//!
//! # Example
//!
//! ```rust,ignore
//! use chroma_lut::iridas_cube;
//!
//! let lut = iridas_cube::read_cube("grade.cube")?;
//! let rgb = lut.apply([0.5, 0.3, 0.2]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::Domain3;
use crate::{Lut, Lut3D, Lut3x1D, LutError, LutResult, LutSequence};

/// Fractional digits written per value when no precision is given.
pub const DEFAULT_DECIMALS: usize = 7;

/// Derives a LUT title from a file path.
///
/// The extension is stripped and underscores become spaces, so
/// `luts/ACES_Proxy.cube` titles as `ACES Proxy`.
pub fn path_to_title<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}

/// Reads a .cube file.
///
/// Returns [`Lut::ThreeByOneD`] for `LUT_1D_SIZE` files and
/// [`Lut::ThreeD`] for `LUT_3D_SIZE` files. The title falls back to the
/// humanized file stem when the file has no TITLE line.
pub fn read_cube<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_cube(BufReader::new(file), path_to_title(path))
}

/// Parses a .cube file from a reader.
///
/// `title` is the fallback used when the file has no TITLE line;
/// [`read_cube`] passes the humanized file stem.
pub fn parse_cube<R: BufRead>(reader: R, title: impl Into<String>) -> LutResult<Lut> {
    let mut title = title.into();
    let mut domain_min = [0.0f32; 3];
    let mut domain_max = [1.0f32; 3];
    let mut dimensions = 3usize;
    let mut size = 2usize;
    let mut rows: Vec<[f32; 3]> = Vec::new();
    let mut comments: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // Comments may appear anywhere; collect them in file order.
        if let Some(comment) = line.strip_prefix('#') {
            comments.push(comment.trim().to_string());
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "TITLE" => title = unquote(&tokens[1..].join(" ")),
            "DOMAIN_MIN" => domain_min = parse_triple(&tokens[1..], line)?,
            "DOMAIN_MAX" => domain_max = parse_triple(&tokens[1..], line)?,
            "LUT_1D_SIZE" => {
                dimensions = 2;
                size = parse_size(&tokens, line)?;
            }
            "LUT_3D_SIZE" => {
                dimensions = 3;
                size = parse_size(&tokens, line)?;
            }
            _ => rows.push(parse_row(&tokens, line)?),
        }
    }

    if size < 2 {
        return Err(LutError::ParseError(format!(
            "LUT size must be at least 2, got {size}"
        )));
    }

    let domain = Domain3::Range {
        min: domain_min,
        max: domain_max,
    };

    debug!(dimensions, size, rows = rows.len(), "parsed .cube content");

    if dimensions == 2 {
        if rows.len() != size {
            return Err(LutError::ParseError(format!(
                "LUT_1D_SIZE is {} but found {} data rows",
                size,
                rows.len()
            )));
        }
        Ok(Lut::ThreeByOneD(
            Lut3x1D::from_table(rows, title)
                .with_domain(domain)
                .with_comments(comments),
        ))
    } else {
        let expected = size * size * size;
        if rows.len() != expected {
            return Err(LutError::ParseError(format!(
                "LUT_3D_SIZE is {} but found {} data rows, expected {}",
                size,
                rows.len(),
                expected
            )));
        }
        // File rows are red-fastest; from_rows performs the reshape.
        let lut = Lut3D::from_rows(rows, size, title)
            .map_err(|err| LutError::ParseError(err.to_string()))?
            .with_domain(domain)
            .with_comments(comments);
        Ok(Lut::ThreeD(lut))
    }
}

/// Writes a LUT to a .cube file with [`DEFAULT_DECIMALS`] precision.
pub fn write_cube<P: AsRef<Path>>(path: P, lut: &Lut) -> LutResult<()> {
    write_cube_with_decimals(path, lut, DEFAULT_DECIMALS)
}

/// Writes a LUT to a .cube file, `decimals` fractional digits per value.
///
/// A [`Lut::OneD`] is converted to 3x1D first. Contract violations
/// (explicit domain, out-of-range size) fail before the file is created.
pub fn write_cube_with_decimals<P: AsRef<Path>>(
    path: P,
    lut: &Lut,
    decimals: usize,
) -> LutResult<()> {
    // Validate up front so a rejected LUT never touches the file.
    validate(lut)?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_cube_to(&mut writer, lut, decimals)?;
    writer.flush()?;
    Ok(())
}

/// Writes a LUT in .cube syntax to an arbitrary writer.
pub fn write_cube_to<W: Write>(mut writer: W, lut: &Lut, decimals: usize) -> LutResult<()> {
    validate(lut)?;
    match lut {
        Lut::OneD(lut) => write_3x1d(&mut writer, &lut.to_3x1d(), decimals),
        Lut::ThreeByOneD(lut) => write_3x1d(&mut writer, lut, decimals),
        Lut::ThreeD(lut) => write_3d(&mut writer, lut, decimals),
    }
}

/// Writes the first LUT of a sequence to a .cube file.
///
/// The .cube format stores a single table, so any further sequence
/// elements are discarded with a warning. An empty sequence is an error.
pub fn write_cube_sequence<P: AsRef<Path>>(
    path: P,
    sequence: &LutSequence,
    decimals: usize,
) -> LutResult<()> {
    let first = sequence.first().ok_or_else(|| {
        LutError::InvalidSize("cannot write an empty LUT sequence".into())
    })?;
    if sequence.len() > 1 {
        warn!(
            discarded = sequence.len() - 1,
            "the .cube format stores a single table; writing only the first LUT"
        );
    }
    write_cube_with_decimals(path, first, decimals)
}

/// Checks that `lut` is encodable as a .cube file.
fn validate(lut: &Lut) -> LutResult<()> {
    if lut.is_domain_explicit() {
        return Err(LutError::Unrepresentable(
            "the .cube format only supports an implicit min/max domain".into(),
        ));
    }

    let size = lut.size();
    match lut {
        Lut::OneD(_) | Lut::ThreeByOneD(_) => {
            if !(2..=65536).contains(&size) {
                return Err(LutError::InvalidSize(format!(
                    "1D .cube size must be in [2, 65536], got {size}"
                )));
            }
        }
        Lut::ThreeD(lut) => {
            if !(2..=256).contains(&size) {
                return Err(LutError::InvalidSize(format!(
                    "3D .cube size must be in [2, 256], got {size}"
                )));
            }
            if lut.table.len() != lut.entry_count() {
                return Err(LutError::InvalidSize(format!(
                    "3D table holds {} entries, expected {}",
                    lut.table.len(),
                    lut.entry_count()
                )));
            }
        }
    }
    Ok(())
}

fn write_3x1d<W: Write>(writer: &mut W, lut: &Lut3x1D, decimals: usize) -> LutResult<()> {
    write_header(
        writer,
        &lut.name,
        &lut.comments,
        "LUT_1D_SIZE",
        lut.size(),
        &lut.domain,
        decimals,
    )?;
    for row in &lut.table {
        writeln!(writer, "{}", format_row(*row, decimals))?;
    }
    Ok(())
}

fn write_3d<W: Write>(writer: &mut W, lut: &Lut3D, decimals: usize) -> LutResult<()> {
    write_header(
        writer,
        &lut.name,
        &lut.comments,
        "LUT_3D_SIZE",
        lut.size(),
        &lut.domain,
        decimals,
    )?;
    // to_rows is the inverse of the reader's reshape: red index fastest.
    for row in lut.to_rows() {
        writeln!(writer, "{}", format_row(row, decimals))?;
    }
    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    name: &str,
    comments: &[String],
    size_keyword: &str,
    size: usize,
    domain: &Domain3,
    decimals: usize,
) -> LutResult<()> {
    writeln!(writer, "TITLE \"{name}\"")?;
    for comment in comments {
        writeln!(writer, "# {comment}")?;
    }
    writeln!(writer, "{size_keyword} {size}")?;

    // The default [0,0,0]-[1,1,1] domain is implied and never emitted.
    if !domain.is_default() {
        if let Some((min, max)) = domain.range() {
            writeln!(writer, "DOMAIN_MIN {}", format_row(min, decimals))?;
            writeln!(writer, "DOMAIN_MAX {}", format_row(max, decimals))?;
        }
    }
    Ok(())
}

fn format_row(rgb: [f32; 3], decimals: usize) -> String {
    format!(
        "{:.prec$} {:.prec$} {:.prec$}",
        rgb[0],
        rgb[1],
        rgb[2],
        prec = decimals
    )
}

/// Strips one pair of surrounding double quotes, if present.
fn unquote(text: &str) -> String {
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.to_string()
}

fn parse_size(tokens: &[&str], line: &str) -> LutResult<usize> {
    let token = tokens
        .get(1)
        .ok_or_else(|| LutError::ParseError(format!("missing size value: {line:?}")))?;
    token
        .parse()
        .map_err(|_| LutError::ParseError(format!("invalid size value: {line:?}")))
}

fn parse_triple(tokens: &[&str], line: &str) -> LutResult<[f32; 3]> {
    if tokens.len() != 3 {
        return Err(LutError::ParseError(format!(
            "expected 3 values, got {}: {line:?}",
            tokens.len()
        )));
    }
    Ok([
        parse_float(tokens[0], line)?,
        parse_float(tokens[1], line)?,
        parse_float(tokens[2], line)?,
    ])
}

/// Parses a data row; rows must be rectangular with exactly 3 columns.
fn parse_row(tokens: &[&str], line: &str) -> LutResult<[f32; 3]> {
    if tokens.len() != 3 {
        return Err(LutError::ParseError(format!(
            "expected 3 values per data row, got {}: {line:?}",
            tokens.len()
        )));
    }
    Ok([
        parse_float(tokens[0], line)?,
        parse_float(tokens[1], line)?,
        parse_float(tokens[2], line)?,
    ])
}

fn parse_float(token: &str, line: &str) -> LutResult<f32> {
    token
        .parse()
        .map_err(|_| LutError::ParseError(format!("invalid float {token:?} in line {line:?}")))
}
