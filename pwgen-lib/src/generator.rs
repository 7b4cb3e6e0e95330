use log::debug;
use rand::{rngs::OsRng, seq::SliceRandom, CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::charset::{CharacterClass, ClassSet};

#[derive(Debug, PartialEq, Eq)]
pub enum GenerationError {
    NoCharacterClassSelected,
    LengthTooLarge(usize),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::NoCharacterClassSelected => f.write_str("No character class selected"),
            Self::LengthTooLarge(length) => f.write_fmt(std::format_args!(
                "Cannot allocate a password of length {}",
                length
            )),
        };
    }
}

impl std::error::Error for GenerationError {}

/// Generates a password using the operating system's random number generator.
///
/// See [`generate_with_rng`].
pub fn generate(length: usize, classes: ClassSet) -> Result<Zeroizing<String>, GenerationError> {
    generate_with_rng(&mut OsRng, length, classes)
}

/// Generates a password of `max(length, classes.len())` characters.
///
/// One character from every enabled class is always present, the rest is drawn from the
/// union of the enabled classes, and the whole sequence is shuffled afterwards.
pub fn generate_with_rng<R>(
    rng: &mut R,
    length: usize,
    classes: ClassSet,
) -> Result<Zeroizing<String>, GenerationError>
where
    R: RngCore + CryptoRng,
{
    if classes.is_empty() {
        return Err(GenerationError::NoCharacterClassSelected);
    }

    debug!(
        "generating password, length {}, {} character classes",
        length,
        classes.len()
    );

    let pool = classes.pool();

    let target = length.max(classes.len());
    let mut password: Vec<char> = Vec::new();
    if password.try_reserve_exact(target).is_err() {
        return Err(GenerationError::LengthTooLarge(length));
    }

    for class in classes.iter() {
        password.push(pick(rng, class));
    }

    let remaining = length.saturating_sub(password.len());
    for _ in 0..remaining {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    password.shuffle(rng);

    let result = Zeroizing::new(password.iter().collect::<String>());
    password.zeroize();

    Ok(result)
}

fn pick<R: RngCore>(rng: &mut R, class: CharacterClass) -> char {
    // Every class is plain ascii
    let set = class.chars().as_bytes();
    set[rng.gen_range(0..set.len())] as char
}
