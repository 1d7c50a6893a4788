use std::env;
use std::fs;
use std::process;
use traceprof::{compress, score, TraceProfile};

/// Profiles a discretized trace file: whitespace-separated integer labels,
/// one trace per file.
///
/// Usage: cargo run --example profile_trace <tracefile> [min_frequency_thresh]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <tracefile> [min_frequency_thresh]", args[0]);
        process::exit(1);
    }

    let contents = fs::read_to_string(&args[1]).unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\": {}", args[1], err);
        process::exit(1);
    });

    let labels: Vec<u32> = contents
        .split_whitespace()
        .map(|token| {
            token.parse().unwrap_or_else(|_| {
                eprintln!("Not a label: \"{token}\"");
                process::exit(1);
            })
        })
        .collect();

    if labels.is_empty() {
        eprintln!("Trace \"{}\" holds no labels.", args[1]);
        process::exit(1);
    }

    let threshold: usize = match args.get(2) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Not a threshold: \"{raw}\"");
            process::exit(1);
        }),
        None => 2,
    };

    let outcome = score(&labels, threshold);
    let compressed = compress(&outcome.mining);
    let trace_len = labels.len();
    let profile = TraceProfile::assemble(labels, &outcome.mining, &compressed);

    println!("=== Trace profile ===");
    println!("Trace length: {trace_len}");
    println!("Raw patterns found: {}", outcome.mining.frequency.len());
    println!(
        "Total coverage: {} ({:.1}%)",
        profile.total_coverage,
        100.0 * profile.total_coverage as f64 / trace_len as f64
    );
    println!("Objective loss: {}", outcome.loss);
    println!();
    println!("Compressed motifs (widest coverage first):");
    for motif in &profile.motifs {
        println!(
            "  freq {:>5}  coverage {:>6}  {:?}",
            motif.frequency,
            motif.coverage,
            motif.pattern.runs()
        );
    }
}
