use std::{
    fs::{self, File},
    io::Read,
    mem::size_of,
    path::Path,
};

use crate::error::{DriverErr, Result};

/// Reads a raw native-endian `f32` buffer that must hold exactly `expected` floats.
///
/// # Errors
/// `DriverErr::Io` if the file cannot be opened or read in full, `DriverErr::Shape` if
/// it holds a different amount of bytes.
pub fn read_f32s<P: AsRef<Path>>(path: P, expected: usize) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| DriverErr::io(path, e))?;
    let len = file.metadata().map_err(|e| DriverErr::io(path, e))?.len();

    let expected_bytes = expected * size_of::<f32>();
    if len != expected_bytes as u64 {
        return Err(DriverErr::Shape {
            what: "input bytes",
            got: len as usize,
            expected: expected_bytes,
        });
    }

    // never read past the expected size, even if the file grew after the check
    let mut bytes = Vec::with_capacity(expected_bytes);
    file
        .by_ref()
        .take(expected_bytes as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| DriverErr::io(path, e))?;

    if bytes.len() != expected_bytes {
        return Err(DriverErr::Shape {
            what: "input bytes",
            got: bytes.len(),
            expected: expected_bytes,
        });
    }

    // the byte buffer carries no alignment guarantee, copy rather than cast in place
    Ok(bytemuck::pod_collect_to_vec(&bytes))
}

/// Writes `data` as a raw native-endian `f32` buffer, replacing the file if it exists.
///
/// # Errors
/// `DriverErr::Io` if the file cannot be created or written in full.
pub fn write_f32s<P: AsRef<Path>>(path: P, data: &[f32]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytemuck::cast_slice(data)).map_err(|e| DriverErr::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_bit_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buf.bin");
        let data = [0.0, -0.0, 1.5, f32::MIN_POSITIVE, f32::INFINITY, f32::NAN, -7.25e-12];

        write_f32s(&path, &data).unwrap();
        let back = read_f32s(&path, data.len()).unwrap();

        let bits = |xs: &[f32]| xs.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(back.as_slice()), bits(&data[..]));
    }

    #[test]
    fn short_file_is_a_shape_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        write_f32s(&path, &[1.0; 19]).unwrap();

        match read_f32s(&path, 20) {
            Err(DriverErr::Shape { got, expected, .. }) => {
                assert_eq!((got, expected), (76, 80));
            }
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn oversized_file_is_rejected_by_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        write_f32s(&path, &vec![1.0; 1 << 16]).unwrap();

        match read_f32s(&path, 20) {
            Err(DriverErr::Shape { got, expected, .. }) => {
                assert_eq!((got, expected), (4 << 16, 80));
            }
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        assert!(matches!(read_f32s(&path, 20), Err(DriverErr::Io { .. })));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.bin");

        assert!(matches!(write_f32s(&path, &[1.0]), Err(DriverErr::Io { .. })));
    }
}
