use rand::Rng;
use rand::seq::SliceRandom;

use crate::charset::{CharClass, pool};
use crate::error::InvalidLength;

/// Shortest password that can hold one character of every class.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 100;

/// Checks `length` against [`MIN_LENGTH`, `MAX_LENGTH`] without clamping.
pub fn validate_length(length: usize) -> Result<(), InvalidLength> {
    if length < MIN_LENGTH {
        return Err(InvalidLength::TooShort { requested: length });
    }
    if length > MAX_LENGTH {
        return Err(InvalidLength::TooLong { requested: length });
    }
    Ok(())
}

/// Generates a password using the thread-local generator.
///
/// Fine for a strength demo. Use [`generate_password_with`] to supply a
/// cryptographically secure source instead.
pub fn generate_password(length: usize) -> Result<String, InvalidLength> {
    let mut rng = rand::rng();
    generate_password_with(length, &mut rng)
}

/// Generates a password of exactly `length` characters from `rng`.
///
/// One character from each class is placed first (lowercase, uppercase, digit,
/// symbol), the rest is drawn with replacement from the whole pool, and the
/// result is shuffled so the guaranteed characters have no fixed position.
pub fn generate_password_with<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<String, InvalidLength> {
    validate_length(length)?;

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for class in CharClass::ALL {
        let set = class.chars();
        chars.push(set[rng.random_range(0..set.len())] as char);
    }

    let all = pool();
    for _ in MIN_LENGTH..length {
        let idx = rng.random_range(0..all.len());
        chars.push(all[idx] as char);
    }

    // Fisher-Yates
    chars.shuffle(rng);

    tracing::debug!(length, "generated password");
    Ok(chars.into_iter().collect())
}
