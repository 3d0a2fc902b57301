use std::{env, path::Path, process};

use driver::{DriverConfig, DriverErr, PredictionBatch, run_files};
use programs::ProgramId;

fn print_predictions(preds: &PredictionBatch) {
    for id in ProgramId::all() {
        let row: Vec<String> = preds.row(id).iter().map(|p| p.to_string()).collect();
        println!("{id}: {}", row.join(" "));
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let res = match args.len() {
        2 | 3 => DriverConfig::from_env().and_then(|config| {
            run_files(config, Path::new(&args[1]), args.get(2).map(Path::new))
        }),
        _ => Err(DriverErr::Usage(format!(
            "{} <input_path> [output_path]",
            args[0]
        ))),
    };

    match res {
        Ok(preds) if args.len() == 2 => print_predictions(&preds),
        Ok(_) => {}
        Err(e @ DriverErr::Usage(_)) => {
            eprintln!("{e}");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error running batch: {e}");
            process::exit(1);
        }
    }
}
