//! Robustness and agreement tests with a deterministic generator.
//!
//! No external RNG: a fixed-seed LCG keeps every run reproducible.

use tally::*;

#[derive(Clone)]
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }

    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

const ALPHABET: &[u8] = b"0123456789.+-*/() ";

fn random_string(rng: &mut Rng, max_len: u32) -> String {
    let len = rng.pick(max_len + 1);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

#[test]
fn test_random_strings_always_well_formed_result() {
    let mut rng = Rng::new(0x5eed);
    let mut oks = 0;

    for _ in 0..20_000 {
        let src = random_string(&mut rng, 24);
        match compute(&src) {
            Ok(value) => {
                assert!(value.is_finite(), "{:?} gave {}", src, value);
                oks += 1;
            }
            Err(err) => {
                // Only the taxonomy for this alphabet can appear
                assert!(
                    !matches!(
                        err.kind(),
                        ErrorKind::InvalidCharacter | ErrorKind::InputTooLong
                    ),
                    "{:?} gave {:?}",
                    src,
                    err
                );
                assert!(!err.to_string().is_empty());
            }
        }
    }

    assert!(oks > 0, "generator never produced a valid expression");
}

#[test]
fn test_random_strings_are_deterministic() {
    let mut rng = Rng::new(42);
    for _ in 0..2_000 {
        let src = random_string(&mut rng, 16);
        assert_eq!(compute(&src), compute(&src));
    }
}

#[test]
fn test_random_bytes_never_panic() {
    let mut rng = Rng::new(7);
    for _ in 0..5_000 {
        let len = rng.pick(32);
        let src: String = (0..len)
            .filter_map(|_| char::from_u32(rng.pick(0x3000)))
            .collect();
        let _ = compute(&src);
    }
}

/// Random fully parenthesized expression plus its value folded directly.
/// `None` means some division had a zero divisor.
fn gen_expr(rng: &mut Rng, depth: u32) -> (String, Option<f64>) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(100);
        if rng.coin() {
            let frac = rng.pick(4);
            let value = n as f64 + frac as f64 * 0.25;
            return (format!("{}", value), Some(value));
        }
        return (n.to_string(), Some(n as f64));
    }

    if rng.pick(5) == 0 {
        let (src, value) = gen_expr(rng, depth - 1);
        return (format!("-({})", src), value.map(|v| -v));
    }

    let (ls, lv) = gen_expr(rng, depth - 1);
    let (rs, rv) = gen_expr(rng, depth - 1);
    let (sym, value) = match rng.pick(4) {
        0 => ('+', lv.zip(rv).map(|(l, r)| l + r)),
        1 => ('-', lv.zip(rv).map(|(l, r)| l - r)),
        2 => ('*', lv.zip(rv).map(|(l, r)| l * r)),
        _ => (
            '/',
            match (lv, rv) {
                (Some(_), Some(r)) if r == 0.0 => None,
                (Some(l), Some(r)) => Some(l / r),
                _ => None,
            },
        ),
    };
    (format!("({} {} {})", ls, sym, rs), value)
}

#[test]
fn test_structured_expressions_match_reference() {
    let mut rng = Rng::new(2024);
    for _ in 0..3_000 {
        let (src, expected) = gen_expr(&mut rng, 5);
        match expected {
            Some(value) => assert_eq!(compute(&src), Ok(value), "input {}", src),
            None => assert_eq!(
                compute(&src).unwrap_err().kind(),
                ErrorKind::DivisionByZero,
                "input {}",
                src
            ),
        }
    }
}

#[test]
fn test_flat_chains_fold_left() {
    let mut rng = Rng::new(99);
    for _ in 0..1_000 {
        let terms = 1 + rng.pick(12);
        let first = rng.pick(50) as f64;
        let mut src = format!("{}", first);
        let mut acc = first;
        for _ in 0..terms {
            let n = rng.pick(50) as f64;
            if rng.coin() {
                src.push_str(&format!(" - {}", n));
                acc -= n;
            } else {
                src.push_str(&format!(" + {}", n));
                acc += n;
            }
        }
        assert_eq!(compute(&src), Ok(acc), "input {}", src);
    }
}
