//! Progress codes: a short string handed out at game over that restores
//! the gun level in a later session.
//!
//! Format: `ULS-` followed by base64 of `version|level|nonce`, with `=`,
//! `+` and `/` swapped for `_`, `-` and `.`. The nonce is noise only.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use survival_core::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressCodeError {
    #[error("progress code must start with ULS-")]
    MissingPrefix,
    #[error("progress code is malformed")]
    Malformed,
    #[error("unsupported progress code version {0}")]
    UnsupportedVersion(u32),
    #[error("gun level {0} is out of range")]
    LevelOutOfRange(u32),
}

/// Issue a code for `gun_level`, clamped to the range a code can carry.
pub fn generate(gun_level: u32, rng: &mut ChaCha8Rng) -> String {
    let nonce = rng.gen_range(1000..10000);
    encode(gun_level, nonce)
}

pub fn encode(gun_level: u32, nonce: u32) -> String {
    let level = gun_level.clamp(1, PROGRESS_CODE_MAX_LEVEL);
    scramble(&format!("{PROGRESS_CODE_VERSION}|{level}|{nonce}"))
}

/// Recover the gun level from a code. Surrounding whitespace is ignored.
pub fn decode(code: &str) -> Result<u32, ProgressCodeError> {
    let encoded = code
        .trim()
        .strip_prefix(PROGRESS_CODE_PREFIX)
        .ok_or(ProgressCodeError::MissingPrefix)?;
    if encoded.is_empty() {
        return Err(ProgressCodeError::Malformed);
    }

    let base: String = encoded
        .chars()
        .map(|c| match c {
            '_' => '=',
            '-' => '+',
            '.' => '/',
            other => other,
        })
        .collect();
    let bytes = STANDARD
        .decode(base)
        .map_err(|_| ProgressCodeError::Malformed)?;
    let payload = String::from_utf8(bytes).map_err(|_| ProgressCodeError::Malformed)?;

    let parts: Vec<&str> = payload.split('|').collect();
    let [version, level, _nonce] = parts.as_slice() else {
        return Err(ProgressCodeError::Malformed);
    };
    let version: u32 = version.parse().map_err(|_| ProgressCodeError::Malformed)?;
    let level: u32 = level.parse().map_err(|_| ProgressCodeError::Malformed)?;

    if version != PROGRESS_CODE_VERSION {
        return Err(ProgressCodeError::UnsupportedVersion(version));
    }
    if !(1..=PROGRESS_CODE_MAX_LEVEL).contains(&level) {
        return Err(ProgressCodeError::LevelOutOfRange(level));
    }
    Ok(level)
}

fn scramble(payload: &str) -> String {
    let scrambled: String = STANDARD
        .encode(payload)
        .chars()
        .map(|c| match c {
            '=' => '_',
            '+' => '-',
            '/' => '.',
            other => other,
        })
        .collect();
    format!("{PROGRESS_CODE_PREFIX}{scrambled}")
}
