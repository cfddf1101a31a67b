//! Request-level encrypt/decrypt: field presence checks, key validation,
//! and the cipher call, in the order callers observe them.

use common::{FileOp, ServiceError};

use super::cipher::{self, EncryptedEnvelope};
use super::key::validate_key;
use super::random::SecureRandom;

/// Result of a successful file operation.
#[derive(Debug)]
pub struct CodecOutput {
    /// Ciphertext envelope or recovered plaintext.
    pub body: Vec<u8>,
    /// The caller's hex key, echoed back unchanged.
    pub encryption_key: String,
}

/// Encrypt an uploaded file.
///
/// The file is checked before the key. An absent `key` field is treated as
/// an empty key and therefore fails with [`ServiceError::KeyLength`].
pub fn encrypt_file(
    key: Option<&str>,
    file: Option<&[u8]>,
    rng: &dyn SecureRandom,
) -> Result<CodecOutput, ServiceError> {
    let file = file.ok_or(ServiceError::FileMissing(FileOp::Encrypt))?;
    let hex_key = key.unwrap_or_default();
    let raw_key = validate_key(hex_key)?;
    let envelope = cipher::encrypt(file, &raw_key, rng)?;
    Ok(CodecOutput {
        body: envelope.to_bytes(),
        encryption_key: hex_key.to_owned(),
    })
}

/// Decrypt an uploaded envelope.
///
/// Unlike [`encrypt_file`], an absent `key` field is reported as
/// [`ServiceError::KeyMissing`]; an empty one still fails validation with
/// [`ServiceError::KeyLength`].
pub fn decrypt_file(key: Option<&str>, file: Option<&[u8]>) -> Result<CodecOutput, ServiceError> {
    let file = file.ok_or(ServiceError::FileMissing(FileOp::Decrypt))?;
    let hex_key = key.ok_or(ServiceError::KeyMissing)?;
    let raw_key = validate_key(hex_key)?;
    let envelope = EncryptedEnvelope::from_bytes(file)?;
    let body = cipher::decrypt(&envelope, &raw_key)?;
    Ok(CodecOutput {
        body,
        encryption_key: hex_key.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key::generate_key;
    use crate::crypto::random::OsRandom;

    const BAD_KEY: &str = "a514cdc3c198421de6a746961d34f20147b7614c85a39297ffb07570b28hello";
    const OTHER_KEY: &str = "a7bfc49610fcd219021c86749f3ee09e1324d9c4de13f0d5f8cb569dd319e4e4";
    const PLAINTEXT: &[u8] = b"Very important information";

    #[test]
    fn flow_round_trip_echoes_key() {
        let key = generate_key(&OsRandom).unwrap();
        let enc = encrypt_file(Some(&key), Some(PLAINTEXT), &OsRandom).unwrap();
        assert_eq!(enc.encryption_key, key);
        assert_ne!(enc.body, PLAINTEXT);

        let dec = decrypt_file(Some(&key), Some(&enc.body)).unwrap();
        assert_eq!(dec.encryption_key, key);
        assert_eq!(dec.body, PLAINTEXT);
    }

    #[test]
    fn encrypt_checks_file_before_key() {
        let err = encrypt_file(Some(BAD_KEY), None, &OsRandom).unwrap_err();
        assert_eq!(err, ServiceError::FileMissing(FileOp::Encrypt));
        assert_eq!(err.to_string(), "Missed file.");
    }

    #[test]
    fn encrypt_empty_or_absent_key_is_length_error() {
        for key in [Some(""), None] {
            let err = encrypt_file(key, Some(PLAINTEXT), &OsRandom).unwrap_err();
            assert_eq!(err, ServiceError::KeyLength);
        }
    }

    #[test]
    fn encrypt_non_hex_key() {
        let err = encrypt_file(Some(BAD_KEY), Some(PLAINTEXT), &OsRandom).unwrap_err();
        assert_eq!(err, ServiceError::InvalidKey);
    }

    #[test]
    fn decrypt_missing_file() {
        let err = decrypt_file(Some(OTHER_KEY), None).unwrap_err();
        assert_eq!(err.to_string(), "Missed encrypted file.");
    }

    #[test]
    fn decrypt_absent_key_vs_empty_key() {
        let key = generate_key(&OsRandom).unwrap();
        let enc = encrypt_file(Some(&key), Some(PLAINTEXT), &OsRandom).unwrap();
        assert_eq!(
            decrypt_file(None, Some(&enc.body)).unwrap_err(),
            ServiceError::KeyMissing
        );
        assert_eq!(
            decrypt_file(Some(""), Some(&enc.body)).unwrap_err(),
            ServiceError::KeyLength
        );
    }

    #[test]
    fn decrypt_non_hex_key() {
        let err = decrypt_file(Some(BAD_KEY), Some(b"anything")).unwrap_err();
        assert_eq!(err, ServiceError::InvalidKey);
    }

    #[test]
    fn decrypt_with_other_key_fails() {
        let key = generate_key(&OsRandom).unwrap();
        let enc = encrypt_file(Some(&key), Some(PLAINTEXT), &OsRandom).unwrap();
        let err = decrypt_file(Some(OTHER_KEY), Some(&enc.body)).unwrap_err();
        assert_eq!(err, ServiceError::DecryptionFailed);
    }

    #[test]
    fn decrypt_plaintext_input_fails() {
        let key = generate_key(&OsRandom).unwrap();
        let err = decrypt_file(Some(&key), Some(PLAINTEXT)).unwrap_err();
        assert_eq!(err, ServiceError::DecryptionFailed);
        let err = decrypt_file(Some(&key), Some(b"short")).unwrap_err();
        assert_eq!(err, ServiceError::DecryptionFailed);
    }
}
