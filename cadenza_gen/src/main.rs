// Cadenza CLI entry point.
//
// Generates a randomized, harmonically-constrained chord progression and
// writes it as a LilyPond score (plus an optional JSON chord dump).
//
// Usage:
//   cargo run -p cadenza_gen --bin generate -- [output.ly] [--bars N]
//     [--scale "C Major"] [--qualities main|all] [--root-rep] [--chord-rep]
//     [--all-quality-roots] [--seed N] [--title TEXT] [--json PATH]
//
// Scales: "<root>" or "<root> <mode>", e.g. "Bb Dorian", "F# minor".

use cadenza_gen::lilypond::write_lilypond;
use cadenza_gen::progression::{ProgressionConfig, ProgressionGenerator};
use cadenza_theory::quality::QualityPool;
use cadenza_theory::scale::Scale;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::process::exit;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("progression.ly");
    let n_bars: usize = parse_flag(&args, "--bars").unwrap_or(8);
    let seed: Option<u64> = parse_flag(&args, "--seed");
    let scale_spec: String =
        parse_flag(&args, "--scale").unwrap_or_else(|| "C Chromatic".to_string());
    let pool_spec: String = parse_flag(&args, "--qualities").unwrap_or_else(|| "main".to_string());
    let title: Option<String> = parse_flag(&args, "--title");
    let json_path: Option<String> = parse_flag(&args, "--json");

    let scale = match Scale::parse(&scale_spec) {
        Ok(scale) => scale,
        Err(e) => {
            eprintln!("error: {e}");
            exit(1);
        }
    };
    let pool = match pool_spec.to_ascii_lowercase().as_str() {
        "main" => QualityPool::Main,
        "all" => QualityPool::All,
        other => {
            eprintln!("error: --qualities should be 'main' or 'all', got '{other}'");
            exit(1);
        }
    };

    let config = ProgressionConfig {
        n_bars,
        root_rep: has_flag(&args, "--root-rep"),
        chord_rep: has_flag(&args, "--chord-rep"),
        scale,
        qualities: pool.qualities().to_vec(),
        root_rep_all_qualities: has_flag(&args, "--all-quality-roots"),
    };

    println!("=== Cadenza Progression Generator ===");
    println!("Output: {}", output_path);
    println!("Scale: {}", scale);
    println!("Bars: {}", n_bars);
    if let Some(s) = seed {
        println!("Seed: {}", s);
    }
    println!();

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    println!("[1/2] Generating chords...");
    let mut generator = ProgressionGenerator::new(config);
    generator.generate(&mut rng);
    for (i, chord) in generator.chords().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, chord);
    }
    if let Some(shortfall) = generator.shortfall() {
        println!(
            "  (only {} of the {} requested bars were available)",
            shortfall.available, shortfall.requested
        );
    }

    if let Some(path) = &json_path {
        match serde_json::to_string_pretty(generator.chords()) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    eprintln!("  Error writing JSON to {}: {}", path, e);
                    exit(1);
                }
                println!("  Chord list written to {}", path);
            }
            Err(e) => {
                eprintln!("  Error encoding JSON: {}", e);
                exit(1);
            }
        }
    }

    println!("[2/2] Writing LilyPond score to {}...", output_path);
    match write_lilypond(&generator, title.as_deref(), Path::new(output_path)) {
        Ok(()) => println!("  Done. Engrave with: lilypond {}", output_path),
        Err(e) => {
            eprintln!("  Error writing score: {}", e);
            exit(1);
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
