//! Generator widget state and the reducer that drives it.
//!
//! `GeneratorState` is never mutated in place: every action produces a fresh
//! state from the previous one, and a generate action replaces the outcome
//! wholesale.

use rand::Rng;
use zeroize::Zeroize;

use crate::charset::ASSUMED_ALPHABET_SIZE;
use crate::crack_time::{CrackTime, entropy_bits, estimate_crack_time};
use crate::error::InvalidLength;
use crate::password::{MAX_LENGTH, MIN_LENGTH, generate_password_with};

/// Length the input starts at when nothing is configured.
pub const DEFAULT_LENGTH: usize = 12;

/// A password together with its strength figures.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPassword {
    pub password: String,
    pub crack_time: CrackTime,
    pub entropy_bits: f64,
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Error(InvalidLength),
    Success(GeneratedPassword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raw value from the length input; clamped before it is stored.
    SetLength(i64),
    Generate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorState {
    /// Pending length for the next generate action
    pub length: usize,
    /// Alphabet size fed to the crack-time estimate
    pub assumed_alphabet_size: usize,
    pub outcome: Outcome,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, ASSUMED_ALPHABET_SIZE)
    }
}

impl GeneratorState {
    pub fn new(length: usize, assumed_alphabet_size: usize) -> Self {
        Self {
            length,
            assumed_alphabet_size,
            outcome: Outcome::Idle,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Error(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn generated(&self) -> Option<&GeneratedPassword> {
        match &self.outcome {
            Outcome::Success(generated) => Some(generated),
            _ => None,
        }
    }
}

/// Clamps raw input into the accepted length range.
pub fn clamp_length(raw: i64) -> usize {
    raw.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// Applies `action` to `state`, drawing randomness from `rng`.
pub fn reduce<R: Rng + ?Sized>(state: &GeneratorState, action: Action, rng: &mut R) -> GeneratorState {
    match action {
        Action::SetLength(raw) => GeneratorState {
            length: clamp_length(raw),
            ..state.clone()
        },
        Action::Generate => GeneratorState {
            outcome: generate(state.length, state.assumed_alphabet_size, rng),
            ..state.clone()
        },
    }
}

fn generate<R: Rng + ?Sized>(length: usize, alphabet_size: usize, rng: &mut R) -> Outcome {
    match generate_password_with(length, rng) {
        Ok(password) => Outcome::Success(GeneratedPassword {
            password,
            crack_time: estimate_crack_time(length, alphabet_size),
            entropy_bits: entropy_bits(length, alphabet_size),
        }),
        Err(err) => {
            tracing::info!(requested = err.requested(), "rejected password length");
            Outcome::Error(err)
        }
    }
}
