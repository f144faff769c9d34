//! Functionality related to the [Hashed] struct.
use pbkdf2::pbkdf2_hmac;
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha20Rng,
};
use sha2::Sha256;

/// Re-export traits
pub use super::traits::*;

/// Length in bytes of a stored password hash.
pub const HASH_LEN: usize = 32;

/// Length in bytes of a stored password salt.
pub const SALT_LEN: usize = 16;

/// A fixed-length, H-byte cryptographic hash.
pub type Hash<const H: usize> = [u8; H];

/// A fixed-length, S-byte cryptographic salt.
pub type Salt<const S: usize> = [u8; S];

/// The salted hash stored for every patient and caregiver account.
pub type PasswordHash = Hashed<HASH_LEN, SALT_LEN>;

/// H bytes hashed and salted using PBKDF2-HMAC-SHA256 & a S-byte salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed<const H: usize, const S: usize> {
    hash: Hash<H>,
    salt: Salt<S>,
}
impl<const H: usize, const S: usize> Hashed<H, S> {
    const NUM_ITERATIONS: u32 = 50_000;

    /// Hash and salt a byte slice using a given salt.
    pub fn hash_with_salt(byte_slice: &[u8], salt: Salt<S>) -> Self {
        Self {
            hash: derive(byte_slice, &salt, Self::NUM_ITERATIONS),
            salt,
        }
    }

    /// Create a [Hashed] from its fields.
    pub fn from_fields(hash: Hash<H>, salt: Salt<S>) -> Self {
        Self { hash, salt }
    }

    /// Check whether the given bytes match the bytes used to make this [Hashed].
    pub fn check_match(&self, byte_slice: &[u8]) -> bool {
        let hashed_input = Self::hash_with_salt(byte_slice, self.salt);
        self.hash() == hashed_input.hash()
    }

    /// Return the [Hash] of this [Hashed].
    pub fn hash(&self) -> &Hash<H> {
        &self.hash
    }

    /// Return the [Salt] of this [Hashed].
    pub fn salt(&self) -> &Salt<S> {
        &self.salt
    }
}

/// Generate a fresh random salt from OS entropy.
pub fn rand_salt<const S: usize>() -> Salt<S> {
    let mut salt: Salt<S> = [0u8; S];
    let mut rng = ChaCha20Rng::from_entropy();
    rng.fill_bytes(&mut salt);
    salt
}

// PBKDF2-HMAC-SHA256 into a fixed-size buffer.
fn derive<const H: usize>(password: &[u8], salt: &[u8], rounds: u32) -> Hash<H> {
    let mut hash: Hash<H> = [0u8; H];
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut hash);
    hash
}
