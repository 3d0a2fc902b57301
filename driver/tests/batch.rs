use std::num::NonZeroUsize;

use driver::{BatchDriver, DriverConfig, InputBatch};
use programs::{ProgramId, evaluate};
use rand::Rng;
use spiral::{Spiral, io::features};

fn config(samples: usize, parallel: bool) -> DriverConfig {
    DriverConfig::new(NonZeroUsize::new(samples).unwrap(), parallel)
}

#[test]
fn batch_matches_independent_evaluation() {
    let points: Vec<_> = Spiral::default().iter().take(10).collect();
    let batch = InputBatch::from_flat(features(&points), 10).unwrap();

    let flat = BatchDriver::new(config(10, true)).run(&batch).to_flat();

    for id in ProgramId::all() {
        for (i, point) in points.iter().enumerate() {
            let (x0, x1) = point.features();
            assert_eq!(
                flat[id.index() * 10 + i].to_bits(),
                evaluate(id, x0, x1).to_bits()
            );
        }
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let mut rng = rand::rng();
    let data: Vec<f32> = (0..2 * 64).map(|_| rng.random_range(-8.0..8.0)).collect();
    let batch = InputBatch::from_flat(data, 64).unwrap();

    let par = BatchDriver::new(config(64, true)).run(&batch);
    let seq = BatchDriver::new(config(64, false)).run(&batch);

    let bits = |v: Vec<f32>| v.into_iter().map(f32::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(par.to_flat()), bits(seq.to_flat()));
}

#[test]
fn samples_do_not_leak_into_each_other() {
    let mut data = vec![0.0; 20];
    data[0] = 1.5;
    data[1] = -2.0;
    let alone = InputBatch::from_flat(data.clone(), 10).unwrap();

    // same first sample, different neighbours
    for x in data.iter_mut().skip(2) {
        *x = 9.0;
    }
    let crowded = InputBatch::from_flat(data, 10).unwrap();

    let driver = BatchDriver::new(config(10, true));
    let a = driver.run(&alone);
    let b = driver.run(&crowded);

    for id in ProgramId::all() {
        assert_eq!(a.get(id, 0).to_bits(), b.get(id, 0).to_bits());
    }
}
