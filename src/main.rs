use anyhow::Result;
use clap::Parser;
use fastagen::cli::{Cli, fmt, prompt};
use fastagen::errors::validate_sequence_length;
use fastagen::generator::{generate_sequence, insert_name};
use fastagen::io::{FastaRecord, save_record};
use fastagen::stats::SequenceStats;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    // All failures are reported once, here, and the process still exits
    // normally afterwards.
    if let Err(error) = run() {
        println!();
        println!("Error: {error:#}");
        println!("Please restart the program with valid inputs.");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("FASTA DNA Sequence Generator");
    println!("---------------------------");

    let length = match cli.length {
        Some(length) => length,
        None => validate_sequence_length(&prompt("Enter the sequence length")?)?,
    };
    let id = resolve(cli.id, "Enter the sequence ID")?;
    let description = resolve(cli.description, "Provide a description of the sequence")?;
    let name = resolve(cli.name, "Enter your name")?;

    if cli.verbose {
        eprintln!("{}", fmt::header("Fastagen Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Sequence length", 16), length);
        eprintln!("{}: {}", fmt::param_aligned("Identifier", 16), id);
        eprintln!("{}: {}", fmt::param_aligned("Description", 16), description);
        eprintln!("{}: {}", fmt::param_aligned("Name", 16), name);
        if let Some(seed) = cli.seed {
            eprintln!("{}: {}", fmt::param_aligned("Random seed", 16), seed);
        }
        eprintln!();
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.verbose {
        eprintln!("{}", fmt::progress(format!("Generating {length} random bases...")));
    }

    let sequence = generate_sequence(length, &mut rng);
    let stats = SequenceStats::from_sequence(&sequence);
    let payload = insert_name(&sequence, &name, &mut rng);

    let path = save_record(&FastaRecord {
        id,
        description,
        sequence: payload,
    })?;

    println!();
    println!("The sequence was saved to the file {}", path.display());
    println!("Sequence statistics (excluding your name):");
    println!("A: {:.1}%", stats.a);
    println!("C: {:.1}%", stats.c);
    println!("G: {:.1}%", stats.g);
    println!("T: {:.1}%", stats.t);
    println!("CG content: {:.1}%", stats.cg);

    if cli.verbose {
        eprintln!();
        eprintln!("{}", fmt::success(format!("Output written to {}", path.display())));
    }

    Ok(())
}

/// Returns the trimmed flag value when given, otherwise asks interactively.
fn resolve(flag: Option<String>, label: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value.trim().to_string()),
        None => prompt(label),
    }
}
