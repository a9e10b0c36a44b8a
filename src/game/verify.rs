use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::config::GameParams;
use crate::game::generator::GameRow;
use crate::game::output::OutputPaths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player1Record {
    pub word: String,
    pub sender_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player2Record {
    pub guess: String,
}

/// One line of `<prefix>_results.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub distance: u64,
    pub receiver_message: String,
}

impl From<&GameRow> for ResultRecord {
    fn from(row: &GameRow) -> Self {
        Self {
            distance: row.distance,
            receiver_message: row.receiver_message.clone(),
        }
    }
}

fn read_records<R, T>(reader: R) -> Result<Vec<T>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

pub fn read_player_1_input<R: Read>(reader: R) -> Result<Vec<Player1Record>> {
    read_records(reader)
}

pub fn read_player_2_input<R: Read>(reader: R) -> Result<Vec<Player2Record>> {
    read_records(reader)
}

pub fn read_results<R: Read>(reader: R) -> Result<Vec<ResultRecord>> {
    read_records(reader)
}

/// Reads the single parameter row.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless exactly one row is present.
pub fn read_params<R: Read>(reader: R) -> Result<GameParams> {
    let mut params: Vec<GameParams> = read_records(reader)?;
    match params.len() {
        1 => Ok(params.remove(0)),
        n => Err(Error::invalid_argument(format!(
            "expected exactly one parameter row, found {n}"
        ))),
    }
}

/// Recomputes every result from the player inputs.
///
/// # Errors
/// Returns [`Error::Mismatch`] if the two player files differ in length.
pub fn expected_results(
    player_1: &[Player1Record],
    player_2: &[Player2Record],
    params: &GameParams,
) -> Result<Vec<ResultRecord>> {
    if player_1.len() != player_2.len() {
        return Err(Error::mismatch(format!(
            "player 1 has {} rows but player 2 has {}",
            player_1.len(),
            player_2.len()
        )));
    }

    player_1
        .iter()
        .zip(player_2)
        .map(|(p1, p2)| {
            GameRow::evaluate(&p1.word, &p2.guess, &p1.sender_message, params)
                .map(|row| ResultRecord::from(&row))
        })
        .collect()
}

/// Compares results row by row and reports the first difference.
///
/// # Errors
/// Returns [`Error::Mismatch`] on a size difference or the first differing row.
pub fn compare_results(expected: &[ResultRecord], actual: &[ResultRecord]) -> Result<()> {
    if expected.len() != actual.len() {
        error!(
            "Mismatched size in results. Expected {} elements but got {}",
            expected.len(),
            actual.len()
        );
        return Err(Error::mismatch(format!(
            "expected {} rows but got {}",
            expected.len(),
            actual.len()
        )));
    }

    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e.distance != a.distance {
            error!(
                "Mismatch in edit distance at index {}. Expected {} but got {}",
                i, e.distance, a.distance
            );
            return Err(Error::mismatch(format!(
                "edit distance at index {i}: expected {} but got {}",
                e.distance, a.distance
            )));
        }
        if e.receiver_message != a.receiver_message {
            error!(
                "Mismatch in receiver message at index {}. Expected {:?} but got {:?}",
                i, e.receiver_message, a.receiver_message
            );
            return Err(Error::mismatch(format!(
                "receiver message at index {i}: expected {:?} but got {:?}",
                e.receiver_message, a.receiver_message
            )));
        }
    }
    Ok(())
}

/// Reads the four files written for `prefix` and checks the results file
/// against recomputed values. Returns the number of rows checked.
pub fn verify_game_files(prefix: &str) -> Result<usize> {
    let paths = OutputPaths::from_prefix(prefix);

    let params = read_params(open(&paths.params)?)?;
    let player_1 = read_player_1_input(open(&paths.player_1_input)?)?;
    let player_2 = read_player_2_input(open(&paths.player_2_input)?)?;
    let actual = read_results(open(&paths.results)?)?;
    debug!("Read {} result rows for {}", actual.len(), prefix);

    let expected = expected_results(&player_1, &player_2, &params)?;
    compare_results(&expected, &actual)?;

    info!("Verified {} rows for {}", actual.len(), prefix);
    Ok(actual.len())
}

fn open(path: &Path) -> Result<File> {
    Ok(File::open(path)?)
}
