use crate::error::{Error, Result};

pub const MOD: i64 = 1_000_000_007;

/// Euclid. Meant for non-negative inputs; with negatives the sign follows `%`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Overflow is not checked here. The crate builds with overflow checks on,
/// so a result outside `i64` panics rather than wrapping.
pub fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// `base^exp mod modulus` by repeated squaring, result in `[0, modulus)`.
pub fn power(base: i64, exp: i64, modulus: i64) -> Result<i64> {
    if exp < 0 {
        return Err(Error::InvalidArgument(format!(
            "negative exponent {} is not supported",
            exp
        )));
    }
    if modulus < 1 {
        return Err(Error::InvalidArgument(format!(
            "modulus must be positive, got {}",
            modulus
        )));
    }

    // i128 keeps base * base in range for any i64 modulus
    let m = modulus as i128;
    let mut base = (base as i128).rem_euclid(m);
    let mut exp = exp;
    let mut result = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    Ok(result as i64)
}

/// Inverse of `a` modulo a prime `p`, by Fermat.
pub fn mod_inv(a: i64, p: i64) -> Result<i64> {
    if p < 2 {
        return Err(Error::InvalidArgument(format!(
            "modulus {} is not a prime",
            p
        )));
    }
    if a.rem_euclid(p) == 0 {
        return Err(Error::InvalidArgument(format!(
            "{} has no inverse modulo {}",
            a, p
        )));
    }
    power(a, p - 2, p)
}
