use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use toroidal_life::{
    LifeEngine, Result, decode_to_matrix, presets, save_board_to_file,
    cli::{EngineArgs, init_logging},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(version)]
#[command(about = "Life-like cellular automata on a toroidal board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a board and save generations as images
    Run {
        #[command(flatten)]
        engine: EngineArgs,

        /// Number of generations to evolve
        #[arg(short, long, default_value = "100")]
        generations: u64,

        /// Also save every Nth generation (0 = only the last one)
        #[arg(short, long, default_value = "0")]
        every: u64,

        /// Directory the images are written to
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,

        /// Pixels per cell side
        #[arg(long, default_value = "4")]
        scale: u32,
    },

    /// List the built-in patterns
    Patterns,

    /// Decode an RLE pattern and print it
    Decode {
        /// RLE body, e.g. "bob$2bo$3o!"
        rle: String,
    },
}

fn run(engine_args: &EngineArgs, generations: u64, every: u64, output: &Path, scale: u32) -> Result<()> {
    let mut engine = engine_args.build_engine()?;
    let frame_path = |generation: u64| output.join(format!("{generation}.png"));

    if every > 0 {
        save_board_to_file(&engine, frame_path(0), scale)?;
    }
    for _ in 0..generations {
        engine.step();
        let generation = engine.generation();
        if every > 0 && generation % every == 0 && generation != generations {
            save_board_to_file(&engine, frame_path(generation), scale)?;
        }
    }

    let last = frame_path(engine.generation());
    save_board_to_file(&engine, &last, scale)?;
    log::info!(
        "generation {} has {} live cells, saved {}",
        engine.generation(),
        engine.population(),
        last.display()
    );
    Ok(())
}

fn list_patterns() {
    for pattern in presets::all_patterns() {
        println!("{:<20} {:<36} {}", pattern.name, pattern.description, pattern.rle);
    }
}

fn decode(rle: &str) -> Result<()> {
    let matrix = decode_to_matrix(rle)?;
    println!("{}x{}", matrix.height(), matrix.width());
    for row in matrix.rows() {
        let line: String = row.iter().map(|cell| if cell.is_alive() { 'O' } else { '.' }).collect();
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run {
            engine,
            generations,
            every,
            output,
            scale,
        } => run(engine, *generations, *every, output, *scale),
        Commands::Patterns => {
            list_patterns();
            Ok(())
        }
        Commands::Decode { rle } => decode(rle),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
