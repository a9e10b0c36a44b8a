use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::cs::dynamic::edit_distance_with;
use crate::error::Result;
use crate::game::config::GameParams;
use crate::game::dictionary::Dictionary;
use crate::game::message::receiver_message;

/// One sampled game together with its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub word: String,
    pub guess: String,
    pub sender_message: String,
    pub distance: u64,
    pub receiver_message: String,
}

impl GameRow {
    /// Computes the distance and receiver message for one game.
    pub fn evaluate(
        word: &str,
        guess: &str,
        sender_message: &str,
        params: &GameParams,
    ) -> Result<Self> {
        let word_chars: Vec<char> = word.chars().collect();
        let guess_chars: Vec<char> = guess.chars().collect();
        let distance = edit_distance_with(&word_chars, &guess_chars, &params.costs())?;
        Ok(Self {
            word: word.to_owned(),
            guess: guess.to_owned(),
            sender_message: sender_message.to_owned(),
            distance,
            receiver_message: receiver_message(distance, params.threshold, sender_message),
        })
    }
}

/// Samples `output_size` games from `dictionary` and evaluates them.
///
/// Word, guess and sender message are drawn in that order, uniformly and with
/// replacement. Sampling is sequential so a seeded `rng` always produces the
/// same rows; the distances are then computed in parallel.
pub fn generate<R: Rng + ?Sized>(
    params: &GameParams,
    dictionary: &Dictionary,
    output_size: usize,
    rng: &mut R,
) -> Result<Vec<GameRow>> {
    let mut samples = Vec::with_capacity(output_size);
    for _ in 0..output_size {
        let word = dictionary.sample(rng);
        let guess = dictionary.sample(rng);
        let sender_message = dictionary.sample(rng);
        samples.push((word, guess, sender_message));
    }

    let rows = samples
        .into_par_iter()
        .map(|(word, guess, sender_message)| GameRow::evaluate(word, guess, sender_message, params))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Generated {} rows (threshold {}, delete cost {}, insert cost {})",
        rows.len(),
        params.threshold,
        params.delete_cost,
        params.insert_cost
    );
    Ok(rows)
}
