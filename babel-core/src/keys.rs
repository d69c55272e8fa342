//! The fixed key schedule for the Feistel permutation.
//!
//! Round keys are derived from eight published mathematical constants, so
//! the permutation is reproducible from this file alone with no stored key
//! material. Each seed is the first 60 decimal digits of its constant,
//! read as an integer; the three coefficients of a round are the seed
//! multiplied by three fixed 64-bit multipliers, reduced modulo the
//! Feistel half.
//!
//! Changing any seed digit, multiplier, or the round count changes every
//! line in the library. The frozen fixtures in `tests/acceptance.rs` exist
//! to make such a change impossible to miss.

use std::sync::OnceLock;

use crate::domain;
use crate::u512::U512;

/// Number of Feistel rounds.
pub const ROUNDS: usize = 8;

/// First 60 decimal digits of pi.
const SEED_PI: &str = "314159265358979323846264338327950288419716939937510582097494";
/// First 60 decimal digits of e.
const SEED_E: &str = "271828182845904523536028747135266249775724709369995957496696";
/// First 60 decimal digits of the square root of 2.
const SEED_SQRT2: &str = "141421356237309504880168872420969807856967187537694807317667";
/// First 60 decimal digits of the square root of 3.
const SEED_SQRT3: &str = "173205080756887729352744634150587236694280525381038062805580";
/// First 60 decimal digits of the square root of 5.
const SEED_SQRT5: &str = "223606797749978969640917366873127623544061835961152572427089";
/// First 60 decimal digits of the square root of 7.
const SEED_SQRT7: &str = "264575131106459059050161575363926042571025918308245018036833";
/// First 60 decimal digits of the natural log of 2.
const SEED_LN2: &str = "693147180559945309417232121458176568075500134360255254120680";
/// First 60 decimal digits of the golden ratio.
const SEED_PHI: &str = "161803398874989484820458683436563811772030917980576286213544";

/// One seed per round, in round order.
const SEEDS: [&str; ROUNDS] = [
    SEED_PI, SEED_E, SEED_SQRT2, SEED_SQRT3, SEED_SQRT5, SEED_SQRT7, SEED_LN2, SEED_PHI,
];

/// Multipliers for the a, b, and c coefficients (L'Ecuyer's 64-bit
/// linear-congruential tables; odd and pairwise distinct).
const MULTIPLIER_A: u64 = 2862933555777941757;
const MULTIPLIER_B: u64 = 3202034522624059733;
const MULTIPLIER_C: u64 = 3935559000370003845;

/// Coefficients of one round's quadratic, each in `[0, 29^40)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKey {
    /// Quadratic coefficient.
    pub a: U512,
    /// Linear coefficient.
    pub b: U512,
    /// Constant coefficient.
    pub c: U512,
}

static SCHEDULE: OnceLock<[RoundKey; ROUNDS]> = OnceLock::new();

/// The key schedule, computed once per process.
pub fn schedule() -> &'static [RoundKey; ROUNDS] {
    SCHEDULE.get_or_init(|| {
        let half = *domain::half();
        SEEDS.map(|digits| {
            let seed = U512::from_decimal_digits(digits);
            RoundKey {
                a: seed * U512::from(MULTIPLIER_A) % half,
                b: seed * U512::from(MULTIPLIER_B) % half,
                c: seed * U512::from(MULTIPLIER_C) % half,
            }
        })
    })
}
