use std::fs;

use spiral::{
    Spiral,
    io::{write_features, write_labels, write_text},
};

#[test]
fn binary_buffers_hold_every_sample() {
    let dir = tempfile::tempdir().unwrap();
    let features_path = dir.path().join("spiral.bin");
    let labels_path = dir.path().join("labels.bin");
    let points: Vec<_> = Spiral::default().iter().collect();

    write_features(&features_path, &points).unwrap();
    write_labels(&labels_path, &points).unwrap();

    let features: Vec<f32> = bytemuck::pod_collect_to_vec(&fs::read(&features_path).unwrap());
    let labels: Vec<f32> = bytemuck::pod_collect_to_vec(&fs::read(&labels_path).unwrap());

    assert_eq!(features.len(), 194 * 2);
    assert_eq!(labels.len(), 194);
    assert_eq!(&features[..4], &[0.0, 6.5, -0.0, -6.5]);
    assert_eq!(&labels[..4], &[1.0, 0.0, 1.0, 0.0]);
}

#[test]
fn text_dataset_has_194_lines() {
    let points: Vec<_> = Spiral::default().iter().collect();
    let mut out = Vec::new();
    write_text(&mut out, &points).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 194);
    assert_eq!(lines[0], " 0.00000  6.50000 1.0");
    assert!(lines.iter().all(|l| l.len() == 21));
}
