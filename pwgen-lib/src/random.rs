use zeroize::Zeroizing;

use crate::charset::ClassSet;
use crate::generator::{generate, GenerationError};

pub fn random_password(length: usize) -> Result<Zeroizing<String>, GenerationError> {
    generate(length, ClassSet::all())
}

#[cfg(test)]
mod test {
    use super::random_password;

    #[test]
    fn random_password_length() {
        let password = random_password(20).unwrap();
        assert_eq!(password.len(), 20);
    }

    #[test]
    fn random_passwords_differ() {
        let a = random_password(32).unwrap();
        let b = random_password(32).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }
}
