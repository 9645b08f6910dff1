// src/performance.rs
//! Tournament performance from the FIDE rating-difference table.
//!
//! `performance = avg_opponents + dp(p)` with `p = points / rounds` rounded
//! to two decimals. The table is symmetric around `p = 0.50`.

/// `dp` for p = 0.50, 0.51, ..., 1.00. Values below 0.50 are the negation of
/// the mirrored entry.
const DP_UPPER: [i32; 51] = [
    0, 7, 14, 21, 29, 36, 43, 50, 57, 65,
    72, 80, 87, 95, 102, 110, 117, 125, 133, 141,
    149, 158, 166, 175, 184, 193, 202, 211, 220, 230,
    240, 251, 262, 273, 284, 296, 309, 322, 336, 351,
    366, 383, 401, 422, 444, 470, 501, 538, 589, 677,
    800,
];

/// Rating difference for a score fraction in `[0, 1]`; `None` outside it.
pub fn rating_difference(p: f64) -> Option<i32> {
    if !(0.0..=1.0).contains(&p) {
        return None;
    }
    let pct = hundredths(p);
    let dp = if pct >= 50 {
        DP_UPPER[(pct - 50) as usize]
    } else {
        -DP_UPPER[(50 - pct) as usize]
    };
    Some(dp)
}

/// `p` in whole hundredths, rounded on the exact binary value of `p` with
/// true ties going to the even neighbour. `p` must be in `[0, 1]`.
fn hundredths(p: f64) -> i64 {
    if p == 0.0 {
        return 0;
    }
    let bits = p.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as u32;
    let frac = bits & ((1u64 << 52) - 1);
    // p = mant * 2^-shift
    let (mant, shift) = if exp == 0 { (frac, 1074) } else { (frac | (1u64 << 52), 1075 - exp) };
    if shift >= 120 {
        return 0;
    }

    let scaled = mant as u128 * 100;
    let whole = scaled >> shift;
    let rest = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let up = rest > half || (rest == half && whole % 2 == 1);
    (whole + up as u128) as i64
}

/// `None` when there were no rounds or the points do not fit the rounds.
pub fn performance(avg_opponents: u32, points: f64, rounds: u32) -> Option<i32> {
    if rounds == 0 {
        return None;
    }
    let dp = rating_difference(points / rounds as f64)?;
    Some(avg_opponents as i32 + dp)
}
