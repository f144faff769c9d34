//! Functionality related to hashing different types.
use super::hashed::*;

/// Implementors of this trait can be hashed and salted into a [Hashed].
///
/// Implementations only need [IntoHashed::into_hashed_with_salt] and [IntoHashed::check_match];
/// the easiest way to write both is to convert to a `u8` slice and defer to [Hashed].
pub trait IntoHashed<const H: usize, const S: usize> {
    /// Hash and salt using a randomly-generated salt.
    fn into_hashed_rand_salt(self) -> Hashed<H, S>
    where
        Self: Sized,
    {
        self.into_hashed_with_salt(rand_salt())
    }

    /// Hash and salt using a given salt.
    fn into_hashed_with_salt(self, salt: Salt<S>) -> Hashed<H, S>;

    /// Check whether the given entity, when hashed, matches the given [Hashed].
    fn check_match(self, hashed: &Hashed<H, S>) -> bool;
}

macro_rules! impl_into_hashed_bytes {
    ($($t:ty),+) => {
        $(impl<const H: usize, const S: usize> IntoHashed<H, S> for $t {
            fn into_hashed_with_salt(self, salt: Salt<S>) -> Hashed<H, S> {
                let bytes: &[u8] = self.as_ref();
                Hashed::hash_with_salt(bytes, salt)
            }

            fn check_match(self, hashed: &Hashed<H, S>) -> bool {
                let bytes: &[u8] = self.as_ref();
                hashed.check_match(bytes)
            }
        })*
    }
}
impl_into_hashed_bytes!(&[u8], &str, &String);
