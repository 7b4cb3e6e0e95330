use log::{debug, warn};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::charset::{CharacterClass, ClassSet};
use crate::generator::{generate_with_rng, GenerationError};

pub static MIN_LENGTH: usize = 8;
pub static MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub use_lower: bool,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            use_lower: true,
            use_upper: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl GenerationRequest {
    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(
            self.use_lower,
            self.use_upper,
            self.use_digits,
            self.use_symbols,
        )
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.use_lower = classes.contains(CharacterClass::Lowercase);
        self.use_upper = classes.contains(CharacterClass::Uppercase);
        self.use_digits = classes.contains(CharacterClass::Digit);
        self.use_symbols = classes.contains(CharacterClass::Symbol);
    }

    /// Length is checked before the character classes
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.length < MIN_LENGTH {
            return Err(PolicyError::LengthTooShort {
                length: self.length,
            });
        }

        if self.length > MAX_LENGTH {
            return Err(PolicyError::LengthTooLong {
                length: self.length,
            });
        }

        if self.classes().is_empty() {
            return Err(PolicyError::NoCharacterClassSelected);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Password { password: Zeroizing<String> },
    Error { error_message: String },
}

impl GenerationResult {
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Password { password } => Some(password.as_str()),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Password { .. } => None,
            Self::Error { error_message } => Some(error_message.as_str()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PolicyError {
    LengthTooShort { length: usize },
    LengthTooLong { length: usize },
    NoCharacterClassSelected,
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::LengthTooShort { .. } => f.write_fmt(std::format_args!(
                "Length must be at least {} for a secure password.",
                MIN_LENGTH
            )),
            Self::LengthTooLong { .. } => f.write_fmt(std::format_args!(
                "Length must be at most {} characters.",
                MAX_LENGTH
            )),
            Self::NoCharacterClassSelected => {
                f.write_str("You must select at least one character type.")
            }
        };
    }
}

impl std::error::Error for PolicyError {}

impl From<GenerationError> for PolicyError {
    fn from(value: GenerationError) -> Self {
        match value {
            GenerationError::NoCharacterClassSelected => Self::NoCharacterClassSelected,
            GenerationError::LengthTooLarge(length) => Self::LengthTooLong { length },
        }
    }
}

/// Validates the request and generates a password with the operating system's rng.
pub fn handle_request(request: &GenerationRequest) -> GenerationResult {
    handle_request_with_rng(&mut OsRng, request)
}

pub fn handle_request_with_rng<R>(rng: &mut R, request: &GenerationRequest) -> GenerationResult
where
    R: RngCore + CryptoRng,
{
    match try_generate(rng, request) {
        Ok(password) => {
            debug!("request accepted, length {}", request.length);
            GenerationResult::Password { password }
        }
        Err(error) => {
            warn!("request rejected: {}", error);
            GenerationResult::Error {
                error_message: error.to_string(),
            }
        }
    }
}

pub fn try_generate<R>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<Zeroizing<String>, PolicyError>
where
    R: RngCore + CryptoRng,
{
    request.validate()?;
    Ok(generate_with_rng(rng, request.length, request.classes())?)
}
