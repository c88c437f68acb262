use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "guano-dump", about = "Dump GUANO metadata from WAV files")]
struct Cli {
    /// WAV files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Emit fields as JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    for path in &cli.files {
        println!("{}", path.display());
        match guano::read_file(path) {
            Ok(metadata) => {
                if cli.json {
                    match serde_json::to_string_pretty(&metadata) {
                        Ok(json) => println!("{json}"),
                        Err(e) => eprintln!("failed serializing {}: {e}", path.display()),
                    }
                } else {
                    for (key, value) in metadata.sorted_fields() {
                        println!("{key}:\t{value}");
                    }
                }
                println!();
            }
            Err(e) => {
                // One file's failure never aborts the batch.
                eprintln!("failed reading {}: {e}", path.display());
                eprintln!();
            }
        }
    }
}
