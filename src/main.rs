mod report;

use std::{env, fs, num::NonZeroUsize};

use anyhow::{Context, Result, bail};
use driver::{BatchDriver, DriverConfig, InputBatch};
use log::info;
use spiral::{
    Spiral,
    io::{features, labels},
};

use report::Report;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        bail!("Usage: {} [report_path]", args[0]);
    }

    let points: Vec<_> = Spiral::default().iter().collect();
    info!("generated {} spiral samples", points.len());

    let samples = NonZeroUsize::new(points.len()).context("the spiral has no samples")?;
    let parallel = DriverConfig::from_env()?.parallel();
    let config = DriverConfig::new(samples, parallel);

    let batch = InputBatch::from_flat(features(&points), config.samples())?;
    let preds = BatchDriver::new(config).run(&batch);

    let report = Report::new(&preds, &labels(&points))?;
    for program in &report.programs {
        info!("program {}: accuracy {:.4}", program.id, program.accuracy);
    }

    let json = serde_json::to_string_pretty(&report)?;
    match args.get(1) {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing report to {path}"))?;
            info!("wrote report to {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
