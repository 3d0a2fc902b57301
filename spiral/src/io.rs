use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::generator::LabeledPoint;

/// Formats a sample as a `"%8.5f %8.5f %3.1f"` text line, without the newline.
pub fn format_line(point: &LabeledPoint) -> String {
    format!("{:8.5} {:8.5} {:3.1}", point.x, point.y, point.label)
}

/// Writes one text line per sample.
pub fn write_text<'a, W, I>(writer: &mut W, points: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a LabeledPoint>,
{
    for point in points {
        writeln!(writer, "{}", format_line(point))?;
    }

    writer.flush()
}

/// Flattens the samples' features into a sample-major `f32` buffer.
pub fn features(points: &[LabeledPoint]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| {
            let (x0, x1) = p.features();
            [x0, x1]
        })
        .collect()
}

/// Collects the samples' labels into an `f32` buffer.
pub fn labels(points: &[LabeledPoint]) -> Vec<f32> {
    points.iter().map(|p| p.label as f32).collect()
}

/// Writes the features as raw native-endian `f32`s, two per sample.
pub fn write_features<P: AsRef<Path>>(path: P, points: &[LabeledPoint]) -> io::Result<()> {
    fs::write(path, bytemuck::cast_slice(&features(points)))
}

/// Writes the labels as raw native-endian `f32`s, one per sample.
pub fn write_labels<P: AsRef<Path>>(path: P, points: &[LabeledPoint]) -> io::Result<()> {
    fs::write(path, bytemuck::cast_slice(&labels(points)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn lines_use_fixed_width_fields() {
        let [a, b] = generate(0).unwrap();

        assert_eq!(format_line(&a), " 0.00000  6.50000 1.0");
        assert_eq!(format_line(&b), "-0.00000 -6.50000 0.0");
    }

    #[test]
    fn text_has_one_line_per_sample() {
        let [a, b] = generate(1).unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &[a, b]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, " 1.25589  6.31381 1.0\n-1.25589 -6.31381 0.0\n");
    }

    #[test]
    fn features_are_sample_major() {
        let [a, b] = generate(1).unwrap();

        assert_eq!(
            features(&[a, b]),
            vec![a.x as f32, a.y as f32, b.x as f32, b.y as f32]
        );
        assert_eq!(labels(&[a, b]), vec![1.0, 0.0]);
    }
}
