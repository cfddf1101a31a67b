//! Key issuance and hex key validation.

use common::ServiceError;

use super::random::{RandomError, SecureRandom};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// A validated 32-byte key decoded from its hex form.
///
/// When this type is dropped, the memory is overwritten with zeroes.
pub struct RawKey(Box<[u8; KEY_LEN]>);

impl RawKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for RawKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(Box::new(bytes))
    }
}

impl Drop for RawKey {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for RawKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RawKey([REDACTED])")
    }
}

/// Generate a fresh key and return it as 64 lowercase hex characters.
///
/// # Errors
///
/// Returns [`RandomError`] if the random source fails. This is an internal
/// fault, not a caller error.
pub fn generate_key(rng: &dyn SecureRandom) -> Result<String, RandomError> {
    let mut buf = [0u8; KEY_LEN];
    rng.fill(&mut buf)?;
    let encoded = hex::encode(buf);
    buf.iter_mut().for_each(|b| *b = 0);
    Ok(encoded)
}

/// Decode and validate a caller-supplied hex key.
///
/// Checks run in a fixed order: a non-hex character anywhere yields
/// [`ServiceError::InvalidKey`]; otherwise any length other than 32 decoded
/// bytes (including the empty string) yields [`ServiceError::KeyLength`].
/// Upper-case digits are accepted.
pub fn validate_key(hex_key: &str) -> Result<RawKey, ServiceError> {
    if !hex_key.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ServiceError::InvalidKey);
    }
    if hex_key.len() != KEY_LEN * 2 {
        return Err(ServiceError::KeyLength);
    }
    let mut buf = Box::new([0u8; KEY_LEN]);
    hex::decode_to_slice(hex_key, &mut buf[..]).map_err(|_| ServiceError::InvalidKey)?;
    Ok(RawKey(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::{MockSecureRandom, OsRandom};

    const VALID_KEY: &str = "a7bfc49610fcd219021c86749f3ee09e1324d9c4de13f0d5f8cb569dd319e4e4";

    #[test]
    fn generated_key_is_64_lowercase_hex() {
        let key = generate_key(&OsRandom).unwrap();
        assert_eq!(key.len(), 64);
        assert!(key.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        assert_eq!(validate_key(&key).unwrap().as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn generated_keys_differ() {
        assert_ne!(generate_key(&OsRandom).unwrap(), generate_key(&OsRandom).unwrap());
    }

    #[test]
    fn generated_key_encodes_random_bytes() {
        let mut rng = MockSecureRandom::new();
        rng.expect_fill().times(1).returning(|dest| {
            dest.fill(0xAB);
            Ok(())
        });
        assert_eq!(generate_key(&rng).unwrap(), "ab".repeat(KEY_LEN));
    }

    #[test]
    fn generate_key_propagates_random_failure() {
        let mut rng = MockSecureRandom::new();
        rng.expect_fill()
            .returning(|_| Err(RandomError("no entropy".into())));
        assert!(generate_key(&rng).is_err());
    }

    #[test]
    fn accepts_valid_key() {
        let key = validate_key(VALID_KEY).unwrap();
        assert_eq!(key.as_bytes()[0], 0xa7);
        assert_eq!(key.as_bytes()[31], 0xe4);
    }

    #[test]
    fn accepts_upper_case_key() {
        let upper = VALID_KEY.to_ascii_uppercase();
        assert_eq!(
            validate_key(&upper).unwrap().as_bytes(),
            validate_key(VALID_KEY).unwrap().as_bytes()
        );
    }

    #[test]
    fn rejects_non_hex_key() {
        let err = validate_key("a514cdc3c198421de6a746961d34f20147b7614c85a39297ffb07570b28hello")
            .unwrap_err();
        assert_eq!(err, ServiceError::InvalidKey);
    }

    #[test]
    fn non_hex_checked_before_length() {
        assert_eq!(validate_key("xyz").unwrap_err(), ServiceError::InvalidKey);
    }

    #[test]
    fn rejects_empty_key_as_wrong_length() {
        assert_eq!(validate_key("").unwrap_err(), ServiceError::KeyLength);
    }

    #[test]
    fn rejects_short_and_long_keys() {
        assert_eq!(validate_key(&VALID_KEY[..62]).unwrap_err(), ServiceError::KeyLength);
        assert_eq!(validate_key(&VALID_KEY[..63]).unwrap_err(), ServiceError::KeyLength);
        let long = format!("{VALID_KEY}00");
        assert_eq!(validate_key(&long).unwrap_err(), ServiceError::KeyLength);
    }

    #[test]
    fn raw_key_redacted_in_debug() {
        let key = RawKey::from([0xFF; KEY_LEN]);
        assert!(format!("{key:?}").contains("REDACTED"));
    }
}
