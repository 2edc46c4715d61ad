//! The cryptanalysis pipeline.
//!
//! Raw text flows through [`normalize`], the [`coincidence`] profile ranks
//! candidate key lengths, [`buckets`] splits the ciphertext per key
//! position, [`recover`] derives the most English-looking shift for each
//! bucket, and [`decode`] reconstructs the plaintext. Every stage is a
//! pure function over in-memory sequences.

pub mod alphabet;
pub mod buckets;
pub mod coincidence;
pub mod decode;
pub mod normalize;
pub mod recover;
