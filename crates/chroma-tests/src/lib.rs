//! Integration tests for chroma-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the LUT data model, the Iridas .cube codec and the
//! colour-science crates.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    use chroma_lut::{
        iridas_cube, read_cube, write_cube, Domain3, Lut, Lut1D, Lut3D, Lut3x1D, LutSequence,
    };

    /// Write a 3x1D LUT to disk and read it back unchanged.
    #[test]
    fn test_cube_roundtrip_3x1d() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ramp.cube");

        let domain = Domain3::Range {
            min: [-0.1, -0.2, -0.4],
            max: [1.5, 3.0, 6.0],
        };
        let mut lut = Lut3x1D::linear_table(16, &domain).unwrap();
        lut.name = "My LUT".into();
        lut.comments = vec!["A first comment.".into(), "A second comment.".into()];

        write_cube(&path, &Lut::ThreeByOneD(lut.clone())).expect("Failed to write cube");
        let loaded = read_cube(&path).expect("Failed to read cube");

        let Lut::ThreeByOneD(loaded) = loaded else {
            panic!("expected a 3x1D LUT");
        };
        assert_eq!(loaded.name, "My LUT");
        assert_eq!(loaded.comments, lut.comments);
        assert_eq!(loaded.domain, lut.domain);
        assert_eq!(loaded.size(), 16);
        for (a, b) in loaded.table.iter().zip(lut.table.iter()) {
            for c in 0..3 {
                assert_abs_diff_eq!(a[c], b[c], epsilon = 1e-5);
            }
        }
    }

    /// Write a 3D LUT to disk and read it back; the file order reshape
    /// must reconstruct the exact grid.
    #[test]
    fn test_cube_roundtrip_3d() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grade.cube");

        let mut lut = Lut3D::identity(9).unwrap();
        lut.map(|v| (v * 0.9).powf(1.2));
        lut.name = "Graded".into();

        write_cube(&path, &Lut::ThreeD(lut.clone())).expect("Failed to write cube");
        let loaded = read_cube(&path).expect("Failed to read cube");

        let Lut::ThreeD(loaded) = loaded else {
            panic!("expected a 3D LUT");
        };
        assert_eq!(loaded.size, 9);
        for ((a, b), i) in loaded.table.iter().zip(lut.table.iter()).zip(0..) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-6, "entry {i}");
            }
        }

        // Evaluation agrees too
        let rgb = [0.3, 0.6, 0.9];
        let expected = lut.apply(rgb);
        let actual = loaded.apply(rgb);
        for c in 0..3 {
            assert_abs_diff_eq!(actual[c], expected[c], epsilon = 1e-5);
        }
    }

    /// A 1D LUT written through the codec comes back as 3x1D with the
    /// curve replicated across channels.
    #[test]
    fn test_1d_write_reads_back_as_3x1d() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gamma.cube");

        let mut curve = Lut1D::identity(64).unwrap();
        curve.map(|v| v.powf(1.0 / 2.2));
        curve.name = "Gamma 2.2".into();

        write_cube(&path, &Lut::OneD(curve.clone())).expect("Failed to write cube");
        let loaded = read_cube(&path).expect("Failed to read cube");

        let Lut::ThreeByOneD(loaded) = loaded else {
            panic!("expected a 3x1D LUT");
        };
        assert_eq!(loaded.name, "Gamma 2.2");
        for (row, &v) in loaded.table.iter().zip(curve.table.iter()) {
            for c in 0..3 {
                assert!((row[c] - v).abs() < 1e-6);
            }
        }
    }

    /// Sequences serialize their first element only.
    #[test]
    fn test_sequence_writes_first_element() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sequence.cube");

        let mut shaper = Lut3x1D::identity(4).unwrap();
        shaper.name = "Shaper".into();
        let mut sequence = LutSequence::new();
        sequence.push(shaper);
        sequence.push(Lut3D::identity(2).unwrap());

        iridas_cube::write_cube_sequence(&path, &sequence, 7).expect("Failed to write sequence");
        let loaded = read_cube(&path).expect("Failed to read cube");
        assert_eq!(loaded.name(), "Shaper");
        assert_eq!(loaded.size(), 4);
    }

    /// Contract violations fail before any file is created.
    #[test]
    fn test_writer_rejects_without_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("explicit.cube");

        let lut = Lut::ThreeByOneD(
            Lut3x1D::identity(4)
                .unwrap()
                .with_domain(Domain3::Explicit(vec![[0.0; 3], [0.5; 3], [0.75; 3], [1.0; 3]])),
        );
        assert!(write_cube(&path, &lut).is_err());
        assert!(!path.exists());
    }

    /// A title derived from the file name survives a retitled rewrite.
    #[test]
    fn test_untitled_file_takes_name_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Rec709_To_Linear.cube");

        std::fs::write(&path, "LUT_1D_SIZE 2\n0.0 0.0 0.0\n1.0 1.0 1.0\n").unwrap();
        let loaded = read_cube(&path).expect("Failed to read cube");
        assert_eq!(loaded.name(), "Rec709 To Linear");
    }

    /// Bake a lightness curve into a 1D LUT and round-trip it.
    #[test]
    fn test_lightness_curve_as_lut() {
        use chroma_colorimetry::lightness_cie1976;

        let dir = tempdir().unwrap();
        let path = dir.path().join("lightness.cube");

        let mut curve = Lut1D::identity(256).unwrap();
        curve.map(|v| (lightness_cie1976(f64::from(v) * 100.0, 100.0) / 100.0) as f32);
        curve.name = "CIE 1976 Lightness".into();

        write_cube(&path, &Lut::OneD(curve.clone())).expect("Failed to write cube");
        let loaded = read_cube(&path).expect("Failed to read cube");

        // Mid-grey reflectance sits near L* 49.5
        let out = loaded.apply([0.18, 0.18, 0.18]);
        assert!((out[0] - 0.4950).abs() < 1e-3, "out = {:?}", out);

        // The baked curve matches direct evaluation
        let direct = (lightness_cie1976(18.0, 100.0) / 100.0) as f32;
        assert!((out[0] - direct).abs() < 1e-2);
    }

    /// Munsell value and lightness agree on the rough placement of a
    /// mid reflectance sample.
    #[test]
    fn test_munsell_value_tracks_lightness() {
        use chroma_colorimetry::lightness_cie1976;
        use chroma_notation::{munsell_value, MunsellValueMethod};

        let y = 12.23634268;
        let value = munsell_value(y, MunsellValueMethod::AstmD1535);
        let lightness = lightness_cie1976(y, 100.0);

        // Munsell value is roughly lightness / 10
        assert!((value * 10.0 - lightness).abs() < 1.0);
    }
}
