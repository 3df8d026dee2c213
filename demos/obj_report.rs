//! Example: OBJ polygon-area report
//!
//! Parses an OBJ file, computes per-polygon surface areas, and prints the
//! aggregate statistics. An optional area limit enables the over-limit
//! count; without one every polygon counts.
//!
//! Any parse or computation failure is reported as a single "broken file"
//! message, the way an end-user application would surface it. The detailed
//! error goes to stderr.

use objinfo::{area_ops, Model};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <obj_file> [area_limit]", args[0]);
        eprintln!();
        eprintln!("Example: {} model.obj 2.5", args[0]);
        process::exit(1);
    }

    let filename = &args[1];
    let limit = match args.get(2) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                eprintln!("Invalid area limit: {}", raw);
                process::exit(1);
            }
        },
        None => None,
    };

    println!("Analyzing OBJ file: {}", filename);
    match limit {
        Some(limit) => println!("Area limit: {:.6}", limit),
        None => println!("Area limit: unset (every polygon counts)"),
    }
    println!();

    let info = Model::from_path(filename)
        .and_then(|model| area_ops::compute_model_info(&model, limit));

    match info {
        Ok(info) => println!("{}", info),
        Err(e) => {
            eprintln!("{}", e);
            println!("broken file");
            process::exit(1);
        }
    }
}
