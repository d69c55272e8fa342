//! The format-preserving Feistel permutation over the content domain.
//!
//! A value in `[0, 29^80)` splits into two base-29 halves of 40 digits
//! each. Eight rounds swap the halves while folding a keyed quadratic of
//! one half into the other, modulo `29^40`. Because each round only adds
//! a value derived from the untouched half, the network is a bijection on
//! the whole domain regardless of the round function, and [`decrypt`]
//! undoes [`encrypt`] by subtracting the same values in reverse order.
//!
//! The round function itself is never inverted, so it does not need to
//! be invertible. This is arithmetic scrambling for even distribution of
//! content across coordinates, not cryptography.

use crate::domain;
use crate::keys::{schedule, RoundKey};
use crate::u512::U512;

/// The keyed round function: `(a*v^2 + b*v + c) mod 29^40`.
///
/// The square is reduced before multiplying by `a`, keeping every
/// intermediate below 391 bits.
fn round_function(value: U512, key: &RoundKey, half: U512) -> U512 {
    let square = value * value % half;
    (key.a * square % half + key.b * value % half + key.c) % half
}

/// Apply the forward permutation to a value in `[0, 29^80)`.
///
/// The domain bound is a caller contract, checked in debug builds only;
/// both facade paths establish it before calling.
pub fn encrypt(value: U512) -> U512 {
    debug_assert!(value < *domain::full(), "value out of domain");
    let half = *domain::half();
    let (mut left, mut right) = value.div_mod(half);
    for key in schedule() {
        let next = (left + round_function(right, key, half)) % half;
        left = right;
        right = next;
    }
    left * half + right
}

/// Apply the inverse permutation to a value in `[0, 29^80)`.
///
/// Exact inverse of [`encrypt`]: runs the rounds in reverse, recovering
/// each earlier left half by modular subtraction.
pub fn decrypt(value: U512) -> U512 {
    debug_assert!(value < *domain::full(), "value out of domain");
    let half = *domain::half();
    let (mut left, mut right) = value.div_mod(half);
    for key in schedule().iter().rev() {
        let previous = (right + half - round_function(left, key, half)) % half;
        right = left;
        left = previous;
    }
    left * half + right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> U512 {
        *domain::full()
    }

    #[test]
    fn test_encrypt_stays_in_domain() {
        let samples = [
            U512::zero(),
            U512::from(1u64),
            U512::from(123_456_789u64),
            full() - U512::from(1u64),
        ];
        for value in samples {
            assert!(encrypt(value) < full());
            assert!(decrypt(value) < full());
        }
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let samples = [
            U512::zero(),
            U512::from(1u64),
            U512::from(29u64),
            U512::from(0xDEAD_BEEFu64),
            full() / U512::from(2u64),
            full() - U512::from(1u64),
        ];
        for value in samples {
            assert_eq!(decrypt(encrypt(value)), value);
            assert_eq!(encrypt(decrypt(value)), value);
        }
    }

    #[test]
    fn test_encrypt_zero_frozen() {
        assert_eq!(
            encrypt(U512::zero()).to_string(),
            "177869253878881092123388041220360103008068957328115699707459949542703418400738730216241081365599255148567937247358501"
        );
    }

    #[test]
    fn test_encrypt_one_frozen() {
        assert_eq!(
            encrypt(U512::from(1u64)).to_string(),
            "558578064265467733426385678685661350782404204378898477554889412807622549452188661446872488945610042249585483330307066"
        );
    }

    #[test]
    fn test_decrypt_zero_frozen() {
        assert_eq!(
            decrypt(U512::zero()).to_string(),
            "27719319676913481990221893272625767987153664905311492331977868095782096060049140701679640641084982191056576161465884"
        );
    }

    #[test]
    fn test_determinism() {
        let value = U512::from(424_242u64);
        assert_eq!(encrypt(value), encrypt(value));
        assert_eq!(decrypt(value), decrypt(value));
    }

    #[test]
    fn test_neighbors_scatter() {
        // Adjacent inputs should land far apart; a shared half would mean
        // a round did nothing.
        let a = encrypt(U512::from(7u64));
        let b = encrypt(U512::from(8u64));
        let half = *domain::half();
        assert_ne!(a / half, b / half);
        assert_ne!(a % half, b % half);
    }

    #[test]
    fn test_round_function_below_half() {
        let half = *domain::half();
        for key in schedule() {
            let image = round_function(half - U512::from(1u64), key, half);
            assert!(image < half);
        }
    }
}
