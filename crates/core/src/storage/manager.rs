use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::encryption::{self, KdfParams};
use super::format;

/// High-level storage operations: save/load the ledger to/from encrypted
/// bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize and encrypt the ledger to portable bytes.
    ///
    /// Flow: Ledger → bincode → AES-256-GCM(Argon2id(password)) → BLGR bytes
    pub fn save_to_bytes(ledger: &Ledger, password: &str) -> Result<Vec<u8>, CoreError> {
        let plaintext = bincode::serialize(ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))?;

        let salt = encryption::random_salt()?;
        let nonce = encryption::random_nonce()?;
        let kdf_params = KdfParams::default();
        let key = encryption::derive_key(password, &salt, &kdf_params)?;
        let ciphertext = encryption::seal(&plaintext, &key, &nonce)?;

        let bytes = format::write_file(format::CURRENT_VERSION, &kdf_params, &salt, &nonce, &ciphertext);
        log::debug!(
            "storage: sealed {} bets into {} bytes",
            ledger.bets.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decrypt and deserialize a ledger from raw bytes.
    ///
    /// Flow: BLGR bytes → header → Argon2id(password, salt) → AES-256-GCM → bincode → Ledger
    pub fn load_from_bytes(data: &[u8], password: &str) -> Result<Ledger, CoreError> {
        let (header, ciphertext) = format::read_file(data)?;
        let key = encryption::derive_key(password, &header.salt, &header.kdf_params)?;
        let plaintext = encryption::open(ciphertext, &key, &header.nonce)?;

        let ledger: Ledger = bincode::deserialize(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize ledger: {e}")))?;
        log::debug!("storage: loaded {} bets", ledger.bets.len());
        Ok(ledger)
    }

    /// Save the ledger to an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(ledger: &Ledger, path: &str, password: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(ledger, password)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a ledger from an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Ledger, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes, password)
    }
}
