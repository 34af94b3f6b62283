//! Numeric katas.

use core::fmt;

/// The result of one `FizzBuzz` step: the word for a multiple of three
/// and/or five, or the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Multiple of three (but not five).
    Fizz,
    /// Multiple of five (but not three).
    Buzz,
    /// Multiple of both three and five.
    FizzBuzz,
    /// Not a multiple of three or five.
    Number(u32),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => write!(f, "Fizz"),
            Self::Buzz => write!(f, "Buzz"),
            Self::FizzBuzz => write!(f, "FizzBuzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Classify one number in the `FizzBuzz` game.
///
/// ```
/// use kata_loops::{FizzBuzz, fizz_buzz};
///
/// assert_eq!(fizz_buzz(2), FizzBuzz::Number(2));
/// assert_eq!(fizz_buzz(3), FizzBuzz::Fizz);
/// assert_eq!(fizz_buzz(15), FizzBuzz::FizzBuzz);
/// ```
#[must_use]
pub const fn fizz_buzz(num: u32) -> FizzBuzz {
    match (num % 3, num % 5) {
        (0, 0) => FizzBuzz::FizzBuzz,
        (0, _) => FizzBuzz::Fizz,
        (_, 0) => FizzBuzz::Buzz,
        _ => FizzBuzz::Number(num),
    }
}

/// The factorial of `n`, with `0! == 1`.
///
/// ```
/// assert_eq!(kata_loops::factorial(5), 120);
/// assert_eq!(kata_loops::factorial(10), 3_628_800);
/// ```
#[must_use]
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// The sum of the integers from `n1` to `n2` inclusive.
///
/// ```
/// assert_eq!(kata_loops::sum_between(5, 10), 45);
/// assert_eq!(kata_loops::sum_between(-1, 1), 0);
/// ```
#[must_use]
pub fn sum_between(n1: i64, n2: i64) -> i64 {
    (n1..=n2).sum()
}

/// Reverse the decimal digits of `num`.
///
/// Leading zeros of the reversed form are dropped, as they would be in any
/// integer: `reverse_integer(1111) == 1111`, `reverse_integer(87354) == 45378`.
#[must_use]
pub const fn reverse_integer(num: u64) -> u64 {
    let mut n = num;
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}

/// Validate a credit card number with the
/// [Luhn algorithm](https://en.wikipedia.org/wiki/Luhn_algorithm).
///
/// Every second digit counted from the right is doubled (subtracting nine
/// when the double exceeds nine); the number is valid when the digit sum is
/// divisible by ten.
///
/// ```
/// assert!(kata_loops::is_credit_card_number(4_012_888_888_881_881));
/// assert!(!kata_loops::is_credit_card_number(4_571_234_567_890_111));
/// ```
#[must_use]
pub const fn is_credit_card_number(ccn: u64) -> bool {
    let mut n = ccn;
    let mut sum = 0;
    let mut double = false;
    while n > 0 {
        let mut digit = n % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        n /= 10;
    }
    sum % 10 == 0
}

/// The [digital root](https://en.wikipedia.org/wiki/Digital_root) of `num`:
/// sum the digits, and repeat while the sum has more than one digit.
///
/// ```
/// assert_eq!(kata_loops::digital_root(12_345), 6);
/// assert_eq!(kata_loops::digital_root(10_000), 1);
/// ```
#[must_use]
pub const fn digital_root(num: u64) -> u64 {
    let mut n = num;
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Render `num` in the given radix (binary, ternary, ..., decimal).
///
/// ```
/// assert_eq!(kata_loops::to_nary_string(1024, 2), "10000000000");
/// assert_eq!(kata_loops::to_nary_string(365, 4), "11231");
/// ```
///
/// # Panics
///
/// Panics if `radix` is outside `2..=10`.
#[must_use]
pub fn to_nary_string(num: u64, radix: u32) -> String {
    assert!((2..=10).contains(&radix), "radix must be in 2..=10");
    let radix = u64::from(radix);

    let mut n = num;
    let mut out = String::new();
    loop {
        let digit = u8::try_from(n % radix).expect("digit below radix fits in one byte");
        out.insert(0, char::from(b'0' + digit));
        n /= radix;
        if n == 0 {
            break;
        }
    }
    out
}
