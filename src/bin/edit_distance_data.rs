//! Generates and checks data files for the edit distance game.
//!
//! ```bash
//! edit-distance-data generate --threshold 100 --dictionary-path words.txt \
//!     --output-size 200 --output-prefix edit_distance_200
//! edit-distance-data verify --output-prefix edit_distance_200
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use weighted_edit_distance::dynamic::{DEFAULT_DELETE_COST, DEFAULT_INSERT_COST};
use weighted_edit_distance::game::{
    generate, verify_game_files, write_game_files, Dictionary, GeneratorConfig,
};
use weighted_edit_distance::Result;

#[derive(Parser, Debug)]
#[command(
    name = "edit-distance-data",
    about = "Generate and verify data files for the edit distance game"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample games from a dictionary and write player inputs, results and parameters.
    Generate {
        /// Distance below which the full message is revealed.
        #[arg(long, allow_negative_numbers = true)]
        threshold: i64,

        /// Word list, one token per line.
        #[arg(long)]
        dictionary_path: PathBuf,

        /// Number of games to generate.
        #[arg(long)]
        output_size: usize,

        /// Prefix of the four CSV files written.
        #[arg(long)]
        output_prefix: String,

        #[arg(long, default_value_t = DEFAULT_DELETE_COST as i64, allow_negative_numbers = true)]
        delete_cost: i64,

        #[arg(long, default_value_t = DEFAULT_INSERT_COST as i64, allow_negative_numbers = true)]
        insert_cost: i64,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recompute the results for a generated data set and compare.
    Verify {
        #[arg(long)]
        output_prefix: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Generate {
            threshold,
            dictionary_path,
            output_size,
            output_prefix,
            delete_cost,
            insert_cost,
            seed,
        } => {
            let mut config =
                GeneratorConfig::new(dictionary_path, output_prefix, threshold, output_size)
                    .with_costs(delete_cost, insert_cost);
            config.seed = seed;
            run_generate(&config)
        }
        Command::Verify { output_prefix } => run_verify(&output_prefix),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_generate(config: &GeneratorConfig) -> Result<()> {
    let params = config.validate()?;
    let dictionary = Dictionary::load(&config.dictionary_path)?;
    let mut rng = config.rng();

    let rows = generate(&params, &dictionary, config.output_size, &mut rng)?;
    write_game_files(&config.output_prefix, &rows, &params)?;
    Ok(())
}

fn run_verify(output_prefix: &str) -> Result<()> {
    let rows = verify_game_files(output_prefix)?;
    println!("All {rows} rows match");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weighted_edit_distance::Error;

    fn generate_args(extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            "edit-distance-data",
            "generate",
            "--dictionary-path",
            "words.txt",
            "--output-size",
            "10",
            "--output-prefix",
            "out",
        ];
        args.extend_from_slice(extra);
        args.into_iter().map(String::from).collect()
    }

    fn config_from(cli: Cli) -> GeneratorConfig {
        match cli.command {
            Command::Generate {
                threshold,
                dictionary_path,
                output_size,
                output_prefix,
                delete_cost,
                insert_cost,
                seed,
            } => {
                let mut config =
                    GeneratorConfig::new(dictionary_path, output_prefix, threshold, output_size)
                        .with_costs(delete_cost, insert_cost);
                config.seed = seed;
                config
            }
            Command::Verify { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(generate_args(&["--threshold", "100"])).unwrap();
        let config = config_from(cli);
        assert_eq!(config.threshold, 100);
        assert_eq!(config.delete_cost, 35);
        assert_eq!(config.insert_cost, 30);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        for extra in [
            ["--threshold", "-1", "--delete-cost", "35"],
            ["--threshold", "100", "--delete-cost", "-1"],
            ["--threshold", "100", "--insert-cost", "-1"],
        ] {
            let cli = Cli::try_parse_from(generate_args(&extra)).unwrap();
            assert!(matches!(
                run_generate(&config_from(cli)),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_verify_args() {
        let cli = Cli::try_parse_from(["edit-distance-data", "verify", "--output-prefix", "out"])
            .unwrap();
        assert!(matches!(cli.command, Command::Verify { output_prefix } if output_prefix == "out"));
    }
}
