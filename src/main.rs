use std::process::ExitCode;

use anyhow::Result;

use logo_header::{
    logo::{RunOutcome, run},
    paths::LogoPaths,
};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths = LogoPaths::default();
    println!("Logo path: {}", paths.logo.display());
    println!("Output path: {}", paths.output.display());

    match run(&paths)? {
        RunOutcome::InputMissing => {
            eprintln!("Error: {} not found!", paths.logo.display());
            eprintln!("   Please place logo.png in the same directory as this tool.");
            Ok(ExitCode::from(1))
        }
        RunOutcome::Written(summary) => {
            println!("✓ Created {}", summary.output.display());
            if summary.dimensions_fallback {
                println!("  - Image size: {} (default)", summary.dimensions);
            } else {
                println!("  - Image size: {}", summary.dimensions);
            }
            println!("  - Array size: {} bytes", summary.array_len);
            println!("\n✓ Done!");
            Ok(ExitCode::SUCCESS)
        }
    }
}
