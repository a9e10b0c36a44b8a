use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::info;

use crate::error::Result;
use crate::game::config::GameParams;
use crate::game::generator::GameRow;

/// The four files belonging to one generated data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub player_1_input: PathBuf,
    pub player_2_input: PathBuf,
    pub results: PathBuf,
    pub params: PathBuf,
}

impl OutputPaths {
    /// `<prefix>_player_1_input.csv`, `<prefix>_player_2_input.csv`,
    /// `<prefix>_results.csv` and `<prefix>_params.csv`.
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            player_1_input: PathBuf::from(format!("{prefix}_player_1_input.csv")),
            player_2_input: PathBuf::from(format!("{prefix}_player_2_input.csv")),
            results: PathBuf::from(format!("{prefix}_results.csv")),
            params: PathBuf::from(format!("{prefix}_params.csv")),
        }
    }
}

/// Writes `word,sender_message` rows.
pub fn write_player_1_input<W: Write>(writer: W, rows: &[GameRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["word", "sender_message"])?;
    for row in rows {
        wtr.serialize((&row.word, &row.sender_message))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `guess` rows.
pub fn write_player_2_input<W: Write>(writer: W, rows: &[GameRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["guess"])?;
    for row in rows {
        wtr.serialize((&row.guess,))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `distance,receiver_message` rows.
pub fn write_results<W: Write>(writer: W, rows: &[GameRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["distance", "receiver_message"])?;
    for row in rows {
        wtr.serialize((row.distance, &row.receiver_message))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the single `threshold,delete_cost,insert_cost` row.
pub fn write_params<W: Write>(writer: W, params: &GameParams) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    wtr.serialize(params)?;
    wtr.flush()?;
    Ok(())
}

/// Writes all four files for `prefix` and returns where they went.
pub fn write_game_files(prefix: &str, rows: &[GameRow], params: &GameParams) -> Result<OutputPaths> {
    let paths = OutputPaths::from_prefix(prefix);

    write_player_1_input(create(&paths.player_1_input)?, rows)?;
    info!("Wrote player 1 input to {}", paths.player_1_input.display());

    write_player_2_input(create(&paths.player_2_input)?, rows)?;
    info!("Wrote player 2 input to {}", paths.player_2_input.display());

    write_results(create(&paths.results)?, rows)?;
    info!("Wrote results to {}", paths.results.display());

    write_params(create(&paths.params)?, params)?;
    info!("Wrote game parameters to {}", paths.params.display());

    Ok(paths)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
