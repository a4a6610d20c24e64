//! # BigInt
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is stored as base `10^9` limbs, least significant first, so
//! decimal parsing and printing never need a radix conversion.
//! # Example
//! ```
//! use dec_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b = BigInt::from(900000000000_i64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / 7 = {}", &a / 7);
//! println!("a % 7 = {}", &a % 7);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Write as _};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use crate::big_int_cache::small;
use crate::big_int_constants::*;
use crate::error::{Error, Result};
use crate::read::{Read, StrRead};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// true iff the value is strictly negative
    sign: bool,
    /// base `BASE` limbs, least significant first, never empty
    mag: Vec<u32>,
}

// 杂项辅助函数
impl BigInt {
    /// Trims zero limbs above the most significant one and clears negative zero.
    /// Every mutation ends here.
    fn normalize(&mut self) {
        while self.mag.len() > 1 && self.mag.last() == Some(&0) {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        if self.is_zero() {
            self.sign = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        if self.sign {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { sign: false, mag: self.mag.clone() }
    }

    /// Unary plus.
    pub fn pos(&self) -> BigInt {
        self.clone()
    }
}

// 实现构造
impl BigInt {
    /// Builds a value from raw limbs, least significant first.
    pub(crate) fn from_raw(mag: Vec<u32>, sign: bool) -> Self {
        debug_assert!(mag.iter().all(|&limb| limb < BASE));
        let mut n = BigInt { sign, mag };
        n.normalize();
        n
    }

    pub fn zero() -> Self {
        BigInt { sign: false, mag: vec![0] }
    }

    pub fn one() -> Self {
        BigInt { sign: false, mag: vec![1] }
    }

    fn from_i64(val: i64) -> BigInt {
        let sign = val < 0;
        if let Some(n) = small(val.unsigned_abs(), sign) {
            return n;
        }
        let base = BASE as i64;
        let mut mag = Vec::with_capacity(3);
        // i64::MIN can not be negated, so split off the low limb first
        mag.push((val % base).unsigned_abs() as u32);
        let mut rest = (val / base).abs();
        while rest != 0 {
            mag.push((rest % base) as u32);
            rest /= base;
        }
        BigInt { sign, mag }
    }

    fn from_u64(mut val: u64) -> BigInt {
        if let Some(n) = small(val, false) {
            return n;
        }
        let base = BASE as u64;
        let mut mag = Vec::with_capacity(3);
        while val != 0 {
            mag.push((val % base) as u32);
            val /= base;
        }
        BigInt { sign: false, mag }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i64(val as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u64(val as u64)
        }
    }
    )*
    };
}
impl_signed_to_big_int!(i8, i16, i32, isize, i64);
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);

impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(val: &BigInt) -> Result<i64> {
        // 3 limbs hold up to 10^27, anything longer is out of range
        if val.mag.len() > 3 {
            return Err(Error::OutOfRange("i64"));
        }
        let mut acc: i128 = 0;
        for &limb in val.mag.iter().rev() {
            acc = acc * BASE as i128 + limb as i128;
        }
        if val.sign {
            acc = -acc;
        }
        i64::try_from(acc).map_err(|_| Error::OutOfRange("i64"))
    }
}

impl From<&BigInt> for bool {
    fn from(val: &BigInt) -> bool {
        !val.is_zero()
    }
}

impl From<BigInt> for bool {
    fn from(val: BigInt) -> bool {
        !val.is_zero()
    }
}

// 实现打印
impl BigInt {
    fn write_mag<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut limbs = self.mag.iter().rev();
        if let Some(top) = limbs.next() {
            write!(w, "{}", top)?;
        }
        for limb in limbs {
            write!(w, "{:0width$}", limb, width = DIGITS_PER_LIMB)?;
        }
        Ok(())
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * DIGITS_PER_LIMB);
        self.write_mag(&mut digits)?;
        f.pad_integral(!self.sign, "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BigInt(")?;
        if self.sign {
            f.write_char('-')?;
        }
        self.write_mag(f)?;
        f.write_char(')')
    }
}

// 实现解析
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

impl BigInt {
    /// Reads one integer from `src`.
    ///
    /// On malformed input the source is marked failed and canonical zero is
    /// returned; the characters consumed up to that point stay consumed.
    /// A source that is already failed yields zero without being touched.
    pub fn parse_from<R: Read + ?Sized>(src: &mut R) -> BigInt {
        if src.failed() {
            return BigInt::zero();
        }
        match BigInt::parse_digits(src) {
            Ok(n) => n,
            Err(err) => {
                log::trace!("rejecting integer input: {}", err);
                src.fail();
                BigInt::zero()
            }
        }
    }

    /// Like [`BigInt::parse_from`], but reports the failure as an [`Error`].
    ///
    /// The fail flag left by an earlier read is cleared first, so the result
    /// only describes this call.
    pub fn read_from<R: Read + ?Sized>(src: &mut R) -> Result<BigInt> {
        src.clear();
        let n = BigInt::parse_from(src);
        if let Some(err) = src.take_io_error() {
            return Err(Error::Io { message: err.to_string(), at: src.position() });
        }
        if src.failed() {
            return Err(Error::Parse { found: src.peek(), at: src.position() });
        }
        Ok(n)
    }

    fn parse_digits<R: Read + ?Sized>(src: &mut R) -> Result<BigInt> {
        while src.peek().map_or(false, is_space) {
            src.consume();
        }

        let mut sign = false;
        if let Some(c @ ('+' | '-')) = src.peek() {
            sign = c == '-';
            src.consume();
        }

        match src.peek() {
            Some(c) if c.is_ascii_digit() => {}
            found => return Err(Error::Parse { found, at: src.position() }),
        }

        // skip leading zero
        while src.peek() == Some('0') {
            src.consume();
        }

        // Digits are grouped from the front, so every group is full except
        // possibly the last one read.
        let mut mag: Vec<u32> = Vec::new();
        let mut group: u32 = 0;
        let mut group_len: usize = 0;
        while let Some(d) = src.peek().and_then(|c| c.to_digit(10)) {
            src.consume();
            group = group * 10 + d;
            group_len += 1;
            if group_len == DIGITS_PER_LIMB {
                mag.push(group);
                group = 0;
                group_len = 0;
            }
        }

        if group_len != 0 {
            mag.push(group);
            BigInt::rebase_tail(&mut mag, group_len);
        }
        mag.reverse();

        Ok(BigInt::from_raw(mag, sign))
    }

    /// `groups` holds full limbs most significant first followed by a last
    /// group of only `tail_len` digits. Slides `tail_len` digits down through
    /// every group so that the last group becomes a full limb and the first
    /// one holds the surplus.
    fn rebase_tail(groups: &mut [u32], tail_len: usize) {
        let length = POW10[tail_len];
        let shift = BASE / length;
        for i in (1..groups.len()).rev() {
            groups[i] += groups[i - 1] % shift * length;
            groups[i - 1] /= shift;
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses the whole string. Surrounding whitespace is allowed, any other
    /// trailing character is an error.
    fn from_str(s: &str) -> Result<BigInt> {
        let mut src = StrRead::new(s);
        let n = BigInt::read_from(&mut src)?;
        while let Some(c) = src.peek() {
            if !is_space(c) {
                return Err(Error::Parse { found: Some(c), at: src.position() });
            }
            src.consume();
        }
        Ok(n)
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => BigInt::compare_mag(&self.mag, &other.mag),
            (true, true) => BigInt::compare_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现自增自减
impl BigInt {
    /// `++self`
    pub fn inc(&mut self) -> &mut Self {
        if self.sign {
            self.sign = false;
            self.dec();
            self.sign = !self.sign;
        } else {
            let mut i = 0;
            loop {
                self.mag[i] += 1;
                if self.mag[i] < BASE {
                    break;
                }
                self.mag[i] = 0;
                i += 1;
                if i == self.mag.len() {
                    self.mag.push(1);
                    break;
                }
            }
        }
        self.normalize();
        self
    }

    /// `--self`
    pub fn dec(&mut self) -> &mut Self {
        if self.sign {
            self.sign = false;
            self.inc();
            self.sign = !self.sign;
        } else if self.is_zero() {
            self.mag[0] = 1;
            self.sign = true;
        } else {
            let mut i = 0;
            while self.mag[i] == 0 {
                self.mag[i] = BASE - 1;
                i += 1;
            }
            self.mag[i] -= 1;
        }
        self.normalize();
        self
    }

    /// `self++`, returns the value before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let prev = self.clone();
        self.inc();
        prev
    }

    /// `self--`, returns the value before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let prev = self.clone();
        self.dec();
        prev
    }
}

// 实现加法
impl BigInt {
    fn add_in_place(&mut self, rhs: &BigInt) {
        if self.sign == rhs.sign {
            BigInt::add_mag(&mut self.mag, &rhs.mag);
        } else {
            // a + b == -((-a) - b)
            self.sign = !self.sign;
            self.sub_in_place(rhs);
            self.sign = !self.sign;
        }
        self.normalize();
    }

    fn add_mag(x: &mut Vec<u32>, y: &[u32]) {
        if x.len() < y.len() {
            x.resize(y.len(), 0);
        }
        // both limbs are below BASE, so the carry is 0 or 1
        let mut carry = 0;
        for (a, &b) in x.iter_mut().zip(y) {
            let sum = *a + b + carry;
            if sum < BASE {
                *a = sum;
                carry = 0;
            } else {
                *a = sum - BASE;
                carry = 1;
            }
        }
        for a in x.iter_mut().skip(y.len()) {
            if carry == 0 {
                break;
            }
            *a += 1;
            if *a == BASE {
                *a = 0;
            } else {
                carry = 0;
            }
        }
        if carry != 0 {
            x.push(1);
        }
    }
}

// 实现减法
impl BigInt {
    fn sub_in_place(&mut self, rhs: &BigInt) {
        if self.sign == rhs.sign {
            if BigInt::compare_mag(&self.mag, &rhs.mag) == Ordering::Less {
                // a - b == -(b - a)
                BigInt::sub_mag_from(&mut self.mag, &rhs.mag);
                self.sign = !self.sign;
            } else {
                BigInt::sub_mag(&mut self.mag, &rhs.mag);
            }
        } else {
            // a - b == -((-a) + b)
            self.sign = !self.sign;
            self.add_in_place(rhs);
            self.sign = !self.sign;
        }
        self.normalize();
    }

    /// `big -= little`, requires `|big| >= |little|`.
    fn sub_mag(big: &mut [u32], little: &[u32]) {
        let mut borrow = false;
        for (a, &b) in big.iter_mut().zip(little) {
            let diff = *a as i64 - b as i64 - borrow as i64;
            borrow = diff < 0;
            *a = if borrow { (diff + BASE as i64) as u32 } else { diff as u32 };
        }
        for a in big.iter_mut().skip(little.len()) {
            if !borrow {
                break;
            }
            if *a == 0 {
                *a = BASE - 1;
            } else {
                *a -= 1;
                borrow = false;
            }
        }
        debug_assert!(!borrow);
    }

    /// `little = big - little`, requires `|big| > |little|`.
    fn sub_mag_from(little: &mut Vec<u32>, big: &[u32]) {
        little.resize(big.len(), 0);
        let mut borrow = false;
        for (a, &b) in little.iter_mut().zip(big) {
            let diff = b as i64 - *a as i64 - borrow as i64;
            borrow = diff < 0;
            *a = if borrow { (diff + BASE as i64) as u32 } else { diff as u32 };
        }
        debug_assert!(!borrow);
    }
}

// 实现乘法
impl BigInt {
    fn mul_ref(&self, rhs: &BigInt) -> BigInt {
        let mag = BigInt::mul_mag(&self.mag, &rhs.mag);
        BigInt::from_raw(mag, self.sign ^ rhs.sign)
    }

    /// Schoolbook multiplication, `O(x.len() * y.len())`.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let base = BASE as u64;
        let mut z = vec![0u32; x.len() + y.len()];
        for (i, &a) in x.iter().enumerate() {
            // (BASE - 1)^2 + 2 * (BASE - 1) < 2^64
            let mut carry: u64 = 0;
            for (j, &b) in y.iter().enumerate() {
                carry += a as u64 * b as u64 + z[i + j] as u64;
                z[i + j] = (carry % base) as u32;
                carry /= base;
            }
            z[i + y.len()] = carry as u32;
        }
        z
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division by a native divisor.
    pub fn checked_div_i32(&self, divisor: i32) -> Result<BigInt> {
        let mut q = self.clone();
        q.div_in_place(divisor)?;
        Ok(q)
    }

    /// Truncating remainder by a native divisor, it takes the sign of `self`.
    pub fn checked_rem_i32(&self, divisor: i32) -> Result<i32> {
        if divisor == 0 {
            log::trace!("rejecting modulo of {} by zero", self);
            return Err(Error::DivisionByZero);
        }
        let den = (divisor as i64).unsigned_abs();
        let base = BASE as u64;
        let mut rem: u64 = 0;
        for &limb in self.mag.iter().rev() {
            rem = (rem * base + limb as u64) % den;
        }
        // |rem| < |divisor| <= 2^31
        let rem = if self.sign { -(rem as i64) } else { rem as i64 };
        Ok(rem as i32)
    }

    fn div_in_place(&mut self, divisor: i32) -> Result<()> {
        if divisor == 0 {
            log::trace!("rejecting division of {} by zero", self);
            return Err(Error::DivisionByZero);
        }
        let den = (divisor as i64).unsigned_abs();
        let base = BASE as u64;
        let mut rem: u64 = 0;
        for limb in self.mag.iter_mut().rev() {
            let cur = rem * base + *limb as u64;
            *limb = (cur / den) as u32;
            rem = cur % den;
        }
        self.sign ^= divisor < 0;
        self.normalize();
        Ok(())
    }
}

macro_rules! impl_bin_op {
    ($op: ident, $fn_: ident, $op_assign: ident, $fn_assign: ident, $in_place: ident) => {
    impl $op_assign<&BigInt> for BigInt {
        fn $fn_assign(&mut self, rhs: &BigInt) {
            self.$in_place(rhs);
        }
    }

    impl $op_assign for BigInt {
        fn $fn_assign(&mut self, rhs: BigInt) {
            self.$in_place(&rhs);
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $fn_(mut self, rhs: BigInt) -> Self::Output {
            self.$in_place(&rhs);
            self
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $fn_(mut self, rhs: &BigInt) -> Self::Output {
            self.$in_place(rhs);
            self
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $fn_(self, rhs: BigInt) -> Self::Output {
            let mut lhs = self.clone();
            lhs.$in_place(&rhs);
            lhs
        }
    }

    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $fn_(self, rhs: &BigInt) -> Self::Output {
            let mut lhs = self.clone();
            lhs.$in_place(rhs);
            lhs
        }
    }
    };
}
impl_bin_op!(Add, add, AddAssign, add_assign, add_in_place);
impl_bin_op!(Sub, sub, SubAssign, sub_assign, sub_in_place);

impl BigInt {
    fn mul_in_place(&mut self, rhs: &BigInt) {
        *self = self.mul_ref(rhs);
    }
}
impl_bin_op!(Mul, mul, MulAssign, mul_assign, mul_in_place);

// The operators follow native integers and panic on a zero divisor,
// `checked_div_i32` and `checked_rem_i32` report it instead.
impl DivAssign<i32> for BigInt {
    fn div_assign(&mut self, rhs: i32) {
        if let Err(err) = self.div_in_place(rhs) {
            panic!("{}", err);
        }
    }
}

impl Div<i32> for BigInt {
    type Output = BigInt;

    fn div(mut self, rhs: i32) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Div<i32> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: i32) -> Self::Output {
        self.clone() / rhs
    }
}

impl Rem<i32> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: i32) -> Self::Output {
        match self.checked_rem_i32(rhs) {
            Ok(r) => BigInt::from(r),
            Err(err) => panic!("{}", err),
        }
    }
}

impl Rem<i32> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: i32) -> Self::Output {
        &self % rhs
    }
}

impl RemAssign<i32> for BigInt {
    fn rem_assign(&mut self, rhs: i32) {
        *self = &*self % rhs;
    }
}

// 实现累加累乘
impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, n| acc + n)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let big_num = BigInt::from(0);
    assert_eq!(big_num.mag, vec![0]);
    assert!(!big_num.sign);

    let big_num = BigInt::from(-5_i8);
    assert_eq!(big_num.mag, vec![5]);
    assert!(big_num.sign);

    let big_num = BigInt::from(1_000_000_000_i32);
    assert_eq!(big_num.mag, vec![0, 1]);

    let big_num = BigInt::from(i64::MIN);
    assert_eq!(big_num.mag, vec![854775808, 223372036, 9]);
    assert!(big_num.sign);
    assert_eq!(big_num.to_string(), "-9223372036854775808");

    let big_num = BigInt::from(i64::MAX);
    assert_eq!(big_num.to_string(), "9223372036854775807");

    let big_num = BigInt::from(u64::MAX);
    assert_eq!(big_num.mag, vec![709551615, 446744073, 18]);
}

#[test]
fn test_try_into_i64() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)), Ok(i64::MAX));
    assert_eq!(i64::try_from(&BigInt::from(-42)), Ok(-42));
    let too_big = BigInt::from(i64::MAX) + BigInt::one();
    assert_eq!(i64::try_from(&too_big), Err(Error::OutOfRange("i64")));
    let too_small = BigInt::from(i64::MIN) - BigInt::one();
    assert_eq!(i64::try_from(&too_small), Err(Error::OutOfRange("i64")));
    let huge = big("1000000000000000000000000000000000000");
    assert_eq!(i64::try_from(&huge), Err(Error::OutOfRange("i64")));
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(BigInt::from(-5).to_string(), "-5");
    assert_eq!(BigInt::from_raw(vec![7, 0, 12], false).to_string(), "12000000000000000007");
    assert_eq!(BigInt::from_raw(vec![123456789, 1], true).to_string(), "-1123456789");
    assert_eq!(format!("{:+}", BigInt::from(3)), "+3");
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
    assert_eq!(format!("{:?}", BigInt::from(-1_000_000_000)), "BigInt(-1000000000)");
}

#[test]
fn test_parse() {
    let mut src = StrRead::new("  -000123");
    let n = BigInt::parse_from(&mut src);
    assert!(!src.failed());
    assert_eq!(n, BigInt::from(-123));
    assert_eq!(n.to_string(), "-123");

    let n = big("12345678909876523784950683472613487560983287654321");
    assert_eq!(n.to_string(), "12345678909876523784950683472613487560983287654321");
    assert_eq!(n.mag[0], 987654321);

    assert_eq!(big("+1000000000").mag, vec![0, 1]);
    assert_eq!(big("999999999").mag, vec![999999999]);
    assert_eq!(big("1234567890").mag, vec![234567890, 1]);
}

#[test]
fn test_parse_zero() {
    for text in ["0", "-0", "+000", "-000000000000000000000"] {
        let n = big(text);
        assert!(n.is_zero(), "{}", text);
        assert!(!n.sign, "{}", text);
        assert_eq!(n.mag, vec![0]);
    }
}

#[test]
fn test_parse_failure() {
    let mut src = StrRead::new("abc");
    let n = BigInt::parse_from(&mut src);
    assert!(src.failed());
    assert!(n.is_zero());
    assert_eq!(src.rest(), "abc");

    // the sign stays consumed
    let mut src = StrRead::new(" -x");
    assert_eq!(
        BigInt::read_from(&mut src),
        Err(Error::Parse { found: Some('x'), at: crate::Position { line: 1, column: 3 } })
    );
    assert_eq!(src.rest(), "x");

    let mut src = StrRead::new("+");
    assert!(matches!(BigInt::read_from(&mut src), Err(Error::Parse { found: None, .. })));

    assert!("12a".parse::<BigInt>().is_err());
    assert!("".parse::<BigInt>().is_err());
    assert_eq!("  12 \n".parse::<BigInt>(), Ok(BigInt::from(12)));
}

#[test]
fn test_parse_c_locale_space() {
    let mut src = StrRead::new("\t\x0b\x0c\r -42\x0b");
    assert_eq!(BigInt::read_from(&mut src), Ok(BigInt::from(-42)));
    assert_eq!(src.rest(), "\x0b");
    assert_eq!("\t\x0b\x0c\r7\r\x0c".parse::<BigInt>(), Ok(BigInt::from(7)));
}

#[test]
fn test_parse_after_failure() {
    // a failed source hands out zero and keeps its input
    let mut src = StrRead::new("99");
    src.fail();
    assert!(BigInt::parse_from(&mut src).is_zero());
    assert!(src.failed());
    assert_eq!(src.rest(), "99");

    let mut src = StrRead::new("x 12 34");
    assert!(BigInt::parse_from(&mut src).is_zero());
    src.consume();
    assert!(BigInt::parse_from(&mut src).is_zero());
    assert_eq!(src.rest(), " 12 34");
    src.clear();
    assert_eq!(BigInt::parse_from(&mut src), BigInt::from(12));
    assert!(!src.failed());

    // read_from only reports its own failure
    let mut src = StrRead::new("x 12 34");
    assert!(matches!(BigInt::read_from(&mut src), Err(Error::Parse { found: Some('x'), .. })));
    src.consume();
    assert_eq!(BigInt::read_from(&mut src), Ok(BigInt::from(12)));
    assert_eq!(src.rest(), " 34");
    assert_eq!(BigInt::read_from(&mut src), Ok(BigInt::from(34)));
}

#[test]
fn test_parse_stops_at_non_digit() {
    let mut src = StrRead::new("123456789012 rest");
    let n = BigInt::parse_from(&mut src);
    assert_eq!(n.to_string(), "123456789012");
    assert_eq!(src.rest(), " rest");

    let mut src = StrRead::new("1 -2 +3");
    let values: Vec<BigInt> = (0..3).map(|_| BigInt::parse_from(&mut src)).collect();
    assert_eq!(values, vec![BigInt::from(1), BigInt::from(-2), BigInt::from(3)]);
    assert!(!src.failed());
}

#[test]
fn test_neg() {
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-&BigInt::from(-5), BigInt::from(5));
    let zero = -BigInt::zero();
    assert!(!zero.sign);
    assert_eq!(BigInt::from(7).pos(), BigInt::from(7));
}

#[test]
fn test_inc() {
    let mut a = BigInt::from(999_999_999);
    a.inc();
    assert_eq!(a.mag, vec![0, 1]);

    let mut a = big("999999999999999999");
    a.inc();
    assert_eq!(a.to_string(), "1000000000000000000");

    let mut a = BigInt::from(-1);
    a.inc();
    assert!(a.is_zero());
    assert!(!a.sign);

    let mut a = big("-1000000000");
    a.inc();
    assert_eq!(a.to_string(), "-999999999");
    assert_eq!(a.mag.len(), 1);

    let mut a = BigInt::from(41);
    assert_eq!(a.post_inc(), BigInt::from(41));
    assert_eq!(a, BigInt::from(42));
}

#[test]
fn test_dec() {
    let mut a = big("1000000000");
    a.dec();
    assert_eq!(a.mag, vec![999_999_999]);

    let mut a = BigInt::zero();
    a.dec();
    assert_eq!(a, BigInt::from(-1));

    let mut a = big("-999999999999999999");
    a.dec();
    assert_eq!(a.to_string(), "-1000000000000000000");

    let mut a = BigInt::one();
    assert_eq!(a.post_dec(), BigInt::one());
    assert!(a.is_zero());
    a.dec().dec();
    assert_eq!(a, BigInt::from(-2));
}

#[test]
fn test_add() {
    let a = big("999999999999999999");
    let b = BigInt::one();
    assert_eq!((&a + &b).to_string(), "1000000000000000000");
    assert_eq!((&b + &a).to_string(), "1000000000000000000");

    let a = BigInt::from(-5);
    let b = BigInt::from(3);
    assert_eq!(&a + &b, BigInt::from(-2));
    assert_eq!(&b + &a, BigInt::from(-2));

    let c = &a + &BigInt::from(5);
    assert!(c.is_zero());
    assert!(!c.sign);

    let mut d = big("-123456789123456789");
    d += big("-876543210876543211");
    assert_eq!(d.to_string(), "-1000000000000000000");
}

#[test]
fn test_sub() {
    let a = big("1000000000000000000");
    let b = BigInt::one();
    assert_eq!((&a - &b).to_string(), "999999999999999999");
    assert_eq!((&a - &b).mag.len(), 2);
    assert_eq!((&b - &a).to_string(), "-999999999999999999");

    assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(-2));
    assert_eq!(BigInt::from(-3) - BigInt::from(-5), BigInt::from(2));
    assert_eq!(BigInt::from(-3) - BigInt::from(5), BigInt::from(-8));
    assert_eq!(BigInt::from(3) - BigInt::from(-5), BigInt::from(8));

    let same = big("-123456789123456789123");
    let zero = &same - &same;
    assert!(zero.is_zero());
    assert!(!zero.sign);
    assert_eq!(zero.mag, vec![0]);
}

#[test]
fn test_mul() {
    let a = BigInt::from(1_000_000_000);
    assert_eq!((&a * &a).to_string(), "1000000000000000000");

    let a = big("-999999999999999999");
    let b = big("999999999");
    assert_eq!((&a * &b).to_string(), "-999999998999999999000000001");

    let zero = BigInt::from(-7) * BigInt::zero();
    assert!(zero.is_zero());
    assert!(!zero.sign);

    let mut c = BigInt::from(-3);
    c *= BigInt::from(-4);
    assert_eq!(c, BigInt::from(12));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big(concat!(
        "709142502378332240799691322131507294233174034597158551898945387082971270854470",
        "727896090145422419283976533670515429619428202167311296369790939047975929138605",
        "325710383112598595421912",
    ));
    assert_eq!(&a * &b, c);
}

#[test]
fn test_div() {
    let a = big("120");
    assert_eq!(&a / 13, BigInt::from(9));
    assert_eq!(&a / -13, BigInt::from(-9));

    let a = big("10000000000000000000000000000000000");
    assert_eq!(&a / 1000, big("10000000000000000000000000000000"));

    let a = big("-5");
    assert_eq!(&a / 7, BigInt::zero());
    assert!(!(&a / 7).sign);

    let a = big("-9223372036854775808");
    assert_eq!(&a / i32::MIN, big("4294967296"));
    assert_eq!(a.checked_rem_i32(i32::MIN), Ok(0));

    let mut b = big("1000000000000000000");
    b /= 1_000_000_000;
    assert_eq!(b.mag, vec![0, 1]);
}

#[test]
fn test_mod() {
    assert_eq!(BigInt::from(5) % 3, BigInt::from(2));
    assert_eq!(BigInt::from(-5) % 3, BigInt::from(-2));
    assert_eq!(BigInt::from(5) % -3, BigInt::from(2));
    assert_eq!(BigInt::from(-5) % -3, BigInt::from(-2));

    let a = big("10000000000000000");
    assert_eq!(a.checked_rem_i32(10), Ok(0));

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    assert_eq!(a.checked_rem_i32(1_000_000_007), Ok(
        (a.to_string().bytes().fold(0_i64, |r, d| (r * 10 + (d - b'0') as i64) % 1_000_000_007)) as i32
    ));

    let mut b = BigInt::from(-17);
    b %= 5;
    assert_eq!(b, BigInt::from(-2));
}

#[test]
fn test_division_by_zero() {
    let a = BigInt::from(5);
    assert_eq!(a.checked_div_i32(0), Err(Error::DivisionByZero));
    assert_eq!(a.checked_rem_i32(0), Err(Error::DivisionByZero));
    assert!(std::panic::catch_unwind(|| BigInt::from(5) / 0).is_err());
    assert!(std::panic::catch_unwind(|| BigInt::from(5) % 0).is_err());
}

#[test]
fn test_cmp() {
    let values: Vec<BigInt> = [
        "-1000000000000000000", "-999999999999999999", "-1000000000", "-5", "0", "3",
        "999999999", "1000000000", "1000000001", "2000000000000000000",
    ].iter().map(|s| big(s)).collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(a == b, i == j);
            assert_eq!(a <= b, i <= j);
            assert_eq!(a > b, i > j);
        }
    }
}

#[test]
fn test_bool() {
    assert!(!bool::from(&BigInt::zero()));
    assert!(bool::from(&BigInt::from(-1)));
    assert!(bool::from(big("1000000000")));
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=25).map(BigInt::from).collect();
    assert_eq!(values.iter().sum::<BigInt>(), BigInt::from(325));
    assert_eq!(values.iter().product::<BigInt>().to_string(), "15511210043330985984000000");
    assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), BigInt::one());
}
