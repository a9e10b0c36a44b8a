//! Test data for the edit distance game.
//!
//! Player 1 holds a `word` and a `sender_message`, player 2 holds a `guess`.
//! The game reveals to player 2 the whole message, half of it, or nothing,
//! depending on how the weighted edit distance between word and guess compares
//! with a public threshold. This module samples such games from a dictionary,
//! computes their expected results, writes them as CSV, and checks a results
//! file against recomputed values.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use weighted_edit_distance::game::{generate, Dictionary, GameParams};
//!
//! let dictionary = Dictionary::from_words(["thank", "think", "trail", "toil"]).unwrap();
//! let params = GameParams::new(100, 35, 30).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//!
//! let rows = generate(&params, &dictionary, 5, &mut rng).unwrap();
//! assert_eq!(rows.len(), 5);
//! ```

pub mod config;
pub mod dictionary;
pub mod generator;
pub mod message;
pub mod output;
pub mod verify;

pub use config::{GameParams, GeneratorConfig};
pub use dictionary::Dictionary;
pub use generator::{generate, GameRow};
pub use message::{receiver_message, MessageOutcome};
pub use output::{write_game_files, OutputPaths};
pub use verify::{verify_game_files, ResultRecord};
