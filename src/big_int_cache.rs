use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInt::from_raw(vec![n], false))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInt::from_raw(vec![n], n != 0))
        .collect();
}

/// Small magnitudes are cloned out of the cache instead of being decomposed.
pub fn small(val: u64, sign: bool) -> Option<BigInt> {
    if val > MAX_CONSTANT as u64 {
        return None;
    }
    let cache = if sign { &*NEG_CACHE } else { &*POS_CACHE };
    Some(cache[val as usize].clone())
}

#[test]
fn test_small() {
    assert_eq!(small(0, true).map(|n| n.to_string()), Some("0".to_string()));
    assert_eq!(small(7, true).map(|n| n.to_string()), Some("-7".to_string()));
    assert_eq!(small(16, false).map(|n| n.to_string()), Some("16".to_string()));
    assert!(small(17, false).is_none());
}
