use std::{env, io, process};

use log::info;
use spiral::{
    Spiral,
    io::{write_features, write_labels, write_text},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [features_path] [labels_path]", args[0]);
        process::exit(2);
    }

    let points: Vec<_> = Spiral::default().iter().collect();

    if let Err(e) = write_text(&mut io::stdout().lock(), &points) {
        eprintln!("Error writing dataset: {e}");
        process::exit(1);
    }

    if let Some(path) = args.get(1) {
        if let Err(e) = write_features(path, &points) {
            eprintln!("Error writing features to {path}: {e}");
            process::exit(1);
        }
        info!("wrote {} samples to {path}", points.len());
    }

    if let Some(path) = args.get(2) {
        if let Err(e) = write_labels(path, &points) {
            eprintln!("Error writing labels to {path}: {e}");
            process::exit(1);
        }
        info!("wrote {} labels to {path}", points.len());
    }
}
