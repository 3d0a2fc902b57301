use std::{fs, num::NonZeroUsize};

use driver::{DriverConfig, DriverErr, run_files};
use programs::{ProgramId, evaluate};
use spiral::{Spiral, io::write_features};

#[test]
fn run_files_writes_program_major_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");
    let output = dir.path().join("preds.bin");

    let points: Vec<_> = Spiral::default().iter().take(10).collect();
    write_features(&input, &points).unwrap();

    let preds = run_files(DriverConfig::default(), &input, Some(output.as_path())).unwrap();
    let written: Vec<f32> = bytemuck::pod_collect_to_vec(&fs::read(&output).unwrap());

    assert_eq!(written.len(), 50);
    for id in ProgramId::all() {
        for (i, point) in points.iter().enumerate() {
            let (x0, x1) = point.features();
            let expected = evaluate(id, x0, x1).to_bits();

            assert_eq!(written[id.index() * 10 + i].to_bits(), expected);
            assert_eq!(preds.get(id, i).to_bits(), expected);
        }
    }
}

#[test]
fn whole_spiral_in_one_batch() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");

    let points: Vec<_> = Spiral::default().iter().collect();
    write_features(&input, &points).unwrap();

    let config = DriverConfig::new(NonZeroUsize::new(194).unwrap(), true);
    let preds = run_files(config, &input, None).unwrap();

    assert_eq!(preds.samples(), 194);
}

#[test]
fn wrong_sized_input_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");
    let output = dir.path().join("preds.bin");

    let points: Vec<_> = Spiral::default().iter().take(9).collect();
    write_features(&input, &points).unwrap();

    let res = run_files(DriverConfig::default(), &input, Some(output.as_path()));

    assert!(matches!(res, Err(DriverErr::Shape { .. })));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = run_files(DriverConfig::default(), &dir.path().join("nope.bin"), None);

    assert!(matches!(res, Err(DriverErr::Io { .. })));
}
