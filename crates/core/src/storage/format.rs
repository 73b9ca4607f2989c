use super::encryption::KdfParams;
use crate::errors::CoreError;

/// Magic bytes identifying a BLGR (Bet Ledger) file.
pub const MAGIC: &[u8; 4] = b"BLGR";

/// Current file format version.
pub const CURRENT_VERSION: u16 = 1;

/// Fixed header size in bytes:
/// magic(4) + version(2) + salt(16) + nonce(12) + kdf(3×4) = 46.
/// Everything after the header is ciphertext.
pub const HEADER_SIZE: usize = 46;

/// AES-GCM appends a 16-byte tag, so valid ciphertext is never shorter.
const MIN_CIPHERTEXT: usize = 16;

/// Header parsed from an encrypted .blgr file.
#[derive(Debug)]
pub struct FileHeader {
    pub version: u16,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
    pub kdf_params: KdfParams,
}

/// Assemble a complete file.
///
/// Layout:
/// ```text
/// [BLGR: 4B] [version: 2B LE] [salt: 16B] [nonce: 12B]
/// [memory_kib: 4B LE] [iterations: 4B LE] [lanes: 4B LE]
/// [ciphertext incl. GCM tag: rest of file]
/// ```
pub fn write_file(
    version: u16,
    kdf_params: &KdfParams,
    salt: &[u8; 16],
    nonce: &[u8; 12],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(&kdf_params.memory_kib.to_le_bytes());
    buf.extend_from_slice(&kdf_params.iterations.to_le_bytes());
    buf.extend_from_slice(&kdf_params.lanes.to_le_bytes());
    buf.extend_from_slice(ciphertext);
    buf
}

/// Parse the header from raw file bytes.
/// Returns the header and the ciphertext slice (the remainder of the file).
pub fn read_file(data: &[u8]) -> Result<(FileHeader, &[u8]), CoreError> {
    if data.len() < HEADER_SIZE + MIN_CIPHERTEXT {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a valid BLGR file".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Invalid magic bytes — not a BLGR file".into(),
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let mut salt = [0u8; 16];
    salt.copy_from_slice(&data[6..22]);
    let mut nonce = [0u8; 12];
    nonce.copy_from_slice(&data[22..34]);

    let memory_kib = read_u32(data, 34)?;
    let iterations = read_u32(data, 38)?;
    let lanes = read_u32(data, 42)?;

    // Bound the work factors so a crafted file can't exhaust memory or CPU
    // before decryption even starts.
    if !(8..=1_048_576).contains(&memory_kib) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF memory cost out of safe range: {memory_kib} KiB (expected 8..1048576)"
        )));
    }
    if !(1..=16).contains(&iterations) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF iteration count out of safe range: {iterations} (expected 1..16)"
        )));
    }
    if !(1..=8).contains(&lanes) {
        return Err(CoreError::InvalidFileFormat(format!(
            "KDF parallelism out of safe range: {lanes} (expected 1..8)"
        )));
    }

    let header = FileHeader {
        version,
        salt,
        nonce,
        kdf_params: KdfParams {
            memory_kib,
            iterations,
            lanes,
        },
    };
    Ok((header, &data[HEADER_SIZE..]))
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, CoreError> {
    data[offset..offset + 4]
        .try_into()
        .map(u32::from_le_bytes)
        .map_err(|_| CoreError::InvalidFileFormat("Truncated header field".into()))
}
