use dec_bigint::{BigInt, Error, Read, StrRead};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 300;

fn random_big(rng: &mut StdRng) -> BigInt {
    let len = rng.gen_range(1..=60);
    let mut text = String::with_capacity(len + 1);
    if rng.gen::<bool>() {
        text.push('-');
    }
    for _ in 0..len {
        text.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    text.parse().unwrap()
}

fn random_divisor(rng: &mut StdRng) -> i32 {
    loop {
        let d = match rng.gen_range(0..4) {
            0 => rng.gen_range(-10..=10),
            1 => rng.gen(),
            2 => i32::MIN,
            _ => 1_000_000_000,
        };
        if d != 0 {
            return d;
        }
    }
}

#[test]
fn round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let x = random_big(&mut rng);
        let y = &x * &random_big(&mut rng) - random_big(&mut rng);
        for v in [x, y] {
            let text = v.to_string();
            assert_eq!(text.parse::<BigInt>(), Ok(v.clone()));
            let mut src = StrRead::new(&text);
            assert_eq!(BigInt::parse_from(&mut src), v);
        }
    }
}

#[test]
fn canonical_text() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let text = random_big(&mut rng).to_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        assert!(digits == "0" || !digits.starts_with('0'), "{}", text);
        assert_ne!(text, "-0");
    }
}

#[test]
fn additive_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let sum = &a + &(-&a);
        assert_eq!(sum, BigInt::zero());
        assert!(!sum.is_negative());
    }
}

#[test]
fn add_then_sub_cancels() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let b = random_big(&mut rng);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a + &b, &b + &a);

        let mut c = a.clone();
        c -= &b;
        c += b;
        assert_eq!(c, a);
    }
}

#[test]
fn product_sign() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let b = random_big(&mut rng);
        let p = &a * &b;
        if a.is_zero() || b.is_zero() {
            assert!(p.is_zero());
            assert!(!p.is_negative());
        } else {
            assert_eq!(p.is_negative(), a.is_negative() ^ b.is_negative());
        }
        assert_eq!(&a * &BigInt::zero(), BigInt::zero());
        assert_eq!(p, &b * &a);
    }
}

#[test]
fn product_distributes() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let b = random_big(&mut rng);
        let c = random_big(&mut rng);
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

#[test]
fn division_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let d = random_divisor(&mut rng);
        let q = a.checked_div_i32(d).unwrap();
        let r = a.checked_rem_i32(d).unwrap();
        assert_eq!(&(&q * &BigInt::from(d)) + &BigInt::from(r), a, "{} / {}", a, d);
        assert!((r as i64).abs() < (d as i64).abs());
        if r != 0 {
            assert_eq!(r < 0, a.is_negative());
        }
        assert_eq!(&a / d, q);
        assert_eq!(&a % d, BigInt::from(r));
    }
}

#[test]
fn division_by_zero_is_reported() {
    let mut rng = StdRng::seed_from_u64(8);
    let a = random_big(&mut rng);
    assert_eq!(a.checked_div_i32(0), Err(Error::DivisionByZero));
    assert_eq!(a.checked_rem_i32(0), Err(Error::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics_on_zero() {
    let _ = BigInt::from(10) / 0;
}

#[test]
fn total_order() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..ROUNDS {
        let a = random_big(&mut rng);
        let b = if rng.gen::<bool>() { a.clone() } else { random_big(&mut rng) };
        let held = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        assert_eq!(held, 1);
        assert_eq!(a <= b, a < b || a == b);
        assert_eq!(a >= b, a > b || a == b);
        assert_eq!(a < b, (&b - &a).signum() == 1);
    }
}

#[test]
fn order_matches_native() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen();
        let y: i64 = rng.gen();
        assert_eq!(BigInt::from(x).cmp(&BigInt::from(y)), x.cmp(&y));
        assert_eq!(BigInt::from(x).to_string(), x.to_string());
        assert_eq!(i64::try_from(&BigInt::from(x)), Ok(x));
    }
}

#[test]
fn inc_dec_inverse() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut samples: Vec<BigInt> = (0..ROUNDS).map(|_| random_big(&mut rng)).collect();
    samples.extend(["-1", "0", "1", "999999999", "1000000000", "-1000000000"].iter().map(|s| s.parse().unwrap()));
    for a in samples {
        let mut b = a.clone();
        b.dec().inc();
        assert_eq!(b, a);
        b.inc().dec();
        assert_eq!(b, a);

        let mut c = a.clone();
        c.inc();
        assert_eq!(c, &a + &BigInt::one());
        c.dec();
        c.dec();
        assert_eq!(c, &a - &BigInt::one());
    }
}

#[test]
fn scenarios() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(BigInt::from(-5).to_string(), "-5");

    let mut src = StrRead::new("  -000123");
    let n = BigInt::parse_from(&mut src);
    assert_eq!(n, BigInt::from(-123));
    assert_eq!(n.to_string(), "-123");

    let a = BigInt::from(1000000000);
    assert_eq!((&a * &a).to_string(), "1000000000000000000");

    let mut src = StrRead::new("abc");
    let n = BigInt::parse_from(&mut src);
    assert!(src.failed());
    assert_eq!(n, BigInt::zero());

    assert_eq!(BigInt::from(5) % 3, BigInt::from(2));
    assert_eq!(BigInt::from(-5) % 3, BigInt::from(-2));
}
