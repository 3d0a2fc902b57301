use std::{env, process};

use log::info;
use programs::ProgramId;

fn parse<T: std::str::FromStr>(arg: &str, what: &str) -> T {
    arg.parse().unwrap_or_else(|_| {
        eprintln!("invalid {what}: {arg}");
        process::exit(2);
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("Usage: {} <program> [x0 x1]", args[0]);
        process::exit(2);
    }

    let id = match ProgramId::try_from(parse::<usize>(&args[1], "program")) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    let program = programs::get(id);

    if args.len() == 2 {
        print!("{program}");
        return;
    }

    let x0: f32 = parse(&args[2], "x0");
    let x1: f32 = parse(&args[3], "x1");
    info!("tracing program {id} over ({x0}, {x1})");

    let mut fired = 0;
    for entry in program.trace(x0, x1) {
        let mark = if entry.fired { '*' } else { ' ' };
        fired += entry.fired as usize;
        println!(
            "{:>4} {mark} {:<32} r0 = {}",
            entry.index,
            entry.step.to_string(),
            entry.registers.r0()
        );
    }

    println!(
        "result {} ({fired} of {} steps fired)",
        program.evaluate(x0, x1),
        program.steps().len()
    );
}
