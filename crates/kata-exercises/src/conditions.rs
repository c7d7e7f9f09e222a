//! Conditions and loops: small numeric and string exercises.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, SystemTime};

use kata_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::ExerciseError;

/// Result of [`fizz_buzz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Not a multiple of 3 or 5.
    Number(u64),
    /// Multiple of 3 only.
    Fizz,
    /// Multiple of 5 only.
    Buzz,
    /// Multiple of both 3 and 5.
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// Classic FizzBuzz.
///
/// ```
/// use kata_exercises::conditions::{fizz_buzz, FizzBuzz};
///
/// assert_eq!(fizz_buzz(15), FizzBuzz::FizzBuzz);
/// assert_eq!(fizz_buzz(21).to_string(), "Fizz");
/// assert_eq!(fizz_buzz(4).to_string(), "4");
/// ```
#[must_use]
pub const fn fizz_buzz(n: u64) -> FizzBuzz {
    match (n % 3, n % 5) {
        (0, 0) => FizzBuzz::FizzBuzz,
        (0, _) => FizzBuzz::Fizz,
        (_, 0) => FizzBuzz::Buzz,
        _ => FizzBuzz::Number(n),
    }
}

/// `n!`, with `0! = 1`.
///
/// # Errors
///
/// [`ExerciseError::Overflow`] when the result exceeds `u64` (from `21!`).
pub fn factorial(n: u64) -> Result<u64, ExerciseError> {
    (1..=n)
        .try_fold(1_u64, u64::checked_mul)
        .ok_or(ExerciseError::Overflow)
}

/// Sum of the integers in `n1..=n2`; zero for an empty range.
#[must_use]
pub fn sum_between(n1: i64, n2: i64) -> i128 {
    if n1 > n2 {
        return 0;
    }
    let (lo, hi) = (i128::from(n1), i128::from(n2));
    (lo + hi) * (hi - lo + 1) / 2
}

/// Whether sides `a`, `b` and `c` form a non-degenerate triangle.
#[must_use]
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// An axis-aligned rectangle in canvas coordinates: `top` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the top edge of the canvas.
    pub top: f64,
    /// Distance from the left edge of the canvas.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Whether two rectangles share any area. Rectangles that only touch along
/// an edge do not overlap.
#[must_use]
pub fn do_rectangles_overlap(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && b.left < a.right() && a.top < b.bottom() && b.top < a.bottom()
}

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

/// Whether `point` lies strictly inside `circle`.
#[must_use]
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    (circle.center.x - point.x).hypot(circle.center.y - point.y) < circle.radius
}

/// First character that occurs exactly once in `s`.
///
/// ```
/// use kata_exercises::conditions::find_first_single_char;
///
/// assert_eq!(find_first_single_char("abracadabra"), Some('c'));
/// assert_eq!(find_first_single_char("entente"), None);
/// ```
#[must_use]
pub fn find_first_single_char(s: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
    }
    s.chars().find(|c| counts.get(c) == Some(&1))
}

/// [Interval notation](https://en.wikipedia.org/wiki/Interval_(mathematics)),
/// smaller bound first.
///
/// ```
/// use kata_exercises::conditions::interval_string;
///
/// assert_eq!(interval_string(0.0, 1.0, true, false), "[0, 1)");
/// assert_eq!(interval_string(5.0, 3.0, true, true), "[3, 5]");
/// ```
#[must_use]
pub fn interval_string(a: f64, b: f64, start_included: bool, end_included: bool) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{lo}, {hi}{close}")
}

/// Reverse `s` by characters.
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverse the decimal digits of `n`, keeping its sign.
///
/// # Errors
///
/// [`ExerciseError::Overflow`] when the reversed digits exceed `i64`.
pub fn reverse_integer(n: i64) -> Result<i64, ExerciseError> {
    let mut rest = n.unsigned_abs();
    let mut reversed: u64 = 0;
    while rest > 0 {
        reversed = reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(rest % 10))
            .ok_or(ExerciseError::Overflow)?;
        rest /= 10;
    }
    let magnitude = i64::try_from(reversed).map_err(|_| ExerciseError::Overflow)?;
    Ok(if n < 0 { -magnitude } else { magnitude })
}

/// [Luhn](https://en.wikipedia.org/wiki/Luhn_algorithm) checksum of a card
/// number.
///
/// ```
/// use kata_exercises::conditions::is_credit_card_number;
///
/// assert!(is_credit_card_number(79_927_398_713));
/// assert!(!is_credit_card_number(4_571_234_567_890_111));
/// ```
#[must_use]
pub const fn is_credit_card_number(ccn: u64) -> bool {
    let mut rest = ccn;
    let mut sum = 0;
    let mut double = false;
    while rest > 0 {
        let mut digit = rest % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        rest /= 10;
    }
    sum % 10 == 0
}

const fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum until a single digit remains.
#[must_use]
pub const fn digital_root(mut n: u64) -> u64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Whether every `[`, `(`, `{` and `<` is closed in order. Any other
/// character makes the string unbalanced.
#[must_use]
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut expected = Vec::new();
    for c in s.chars() {
        match c {
            '[' => expected.push(']'),
            '(' => expected.push(')'),
            '{' => expected.push('}'),
            '<' => expected.push('>'),
            _ => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
        }
    }
    expected.is_empty()
}

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const MONTH_MS: f64 = 30.4167 * DAY_MS;
const YEAR_MS: f64 = 12.0 * MONTH_MS;

/// Human-readable age of an event that started at `start`, seen at `end`.
///
/// If `end` is earlier than `start` the span is treated as zero.
#[must_use]
pub fn timespan_to_human_string(start: SystemTime, end: SystemTime) -> String {
    let elapsed = end.duration_since(start).unwrap_or_else(|_| {
        warn_once("Exercises", "time span ends before it starts; treating it as zero");
        Duration::ZERO
    });
    human_duration(elapsed)
}

/// Bucket a duration into "a few seconds ago" ... "N years ago".
///
/// | Elapsed                    | Result                          |
/// |----------------------------|---------------------------------|
/// | 0 to 45 seconds            | a few seconds ago               |
/// | 45 to 90 seconds           | a minute ago                    |
/// | 90 seconds to 45 minutes   | 2 minutes ago ... 45 minutes ago|
/// | 45 to 90 minutes           | an hour ago                     |
/// | 90 minutes to 22 hours     | 2 hours ago ... 22 hours ago    |
/// | 22 to 36 hours             | a day ago                       |
/// | 36 hours to 25 days        | 2 days ago ... 25 days ago      |
/// | 25 to 45 days              | a month ago                     |
/// | 45 to 345 days             | 2 months ago ... 11 months ago  |
/// | 345 to 545 days            | a year ago                      |
/// | 546 days+                  | 2 years ago ... 20 years ago    |
///
/// Lower bounds are exclusive.
#[must_use]
pub fn human_duration(elapsed: Duration) -> String {
    // Whole milliseconds keep the bucket boundaries exact
    #[allow(clippy::cast_precision_loss)]
    let ms = elapsed.as_millis() as f64;
    // Boundaries themselves fall into the lower bucket, hence the `- 1`
    let count = |unit: f64| ((ms - 1.0) / unit).round();

    if ms > 1.5 * YEAR_MS {
        format!("{:.0} years ago", count(YEAR_MS))
    } else if ms > 11.35 * MONTH_MS {
        "a year ago".to_string()
    } else if ms > 1.5 * MONTH_MS {
        format!("{:.0} months ago", count(MONTH_MS))
    } else if ms > 25.0 * DAY_MS {
        "a month ago".to_string()
    } else if ms > 1.5 * DAY_MS {
        format!("{:.0} days ago", count(DAY_MS))
    } else if ms > 22.0 * HOUR_MS {
        "a day ago".to_string()
    } else if ms > 1.5 * HOUR_MS {
        format!("{:.0} hours ago", count(HOUR_MS))
    } else if ms > 0.75 * HOUR_MS {
        "an hour ago".to_string()
    } else if ms > 1.5 * MINUTE_MS {
        format!("{:.0} minutes ago", count(MINUTE_MS))
    } else if ms > 0.75 * MINUTE_MS {
        "a minute ago".to_string()
    } else {
        "a few seconds ago".to_string()
    }
}

/// Digits of `n` in base `radix`.
///
/// ```
/// use kata_exercises::conditions::to_nary_string;
///
/// assert_eq!(to_nary_string(365, 3).unwrap(), "111112");
/// assert_eq!(to_nary_string(1024, 2).unwrap(), "10000000000");
/// ```
///
/// # Errors
///
/// [`ExerciseError::InvalidRadix`] unless `2 <= radix <= 10`.
pub fn to_nary_string(n: u64, radix: u32) -> Result<String, ExerciseError> {
    if !(2..=10).contains(&radix) {
        return Err(ExerciseError::InvalidRadix(radix));
    }
    let base = u64::from(radix);
    let mut digits = Vec::new();
    let mut rest = n;
    loop {
        let digit = u32::try_from(rest % base).map_err(|_| ExerciseError::Overflow)?;
        digits.push(char::from_digit(digit, radix).ok_or(ExerciseError::InvalidRadix(radix))?);
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    Ok(digits.iter().rev().collect())
}

/// Deepest directory shared by all `paths`, with its trailing `/`.
///
/// ```
/// use kata_exercises::conditions::common_directory_path;
///
/// assert_eq!(
///     common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"]),
///     "/web/images/"
/// );
/// assert_eq!(
///     common_directory_path(&["/web/favicon.ico", "/web-scripts/dump", "/webalizer/logs"]),
///     "/"
/// );
/// ```
#[must_use]
pub fn common_directory_path(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let prefix_len = rest.iter().fold(first.len(), |len, path| {
        first[..len]
            .char_indices()
            .zip(path.chars())
            .find(|((_, a), b)| a != b)
            .map_or(len.min(path.len()), |((i, _), _)| i)
    });

    let prefix = &first[..prefix_len];
    prefix
        .rfind('/')
        .map_or_else(String::new, |i| prefix[..=i].to_string())
}

/// Row count and column count, rejecting ragged rows.
fn shape(m: &[Vec<i64>]) -> Result<(usize, usize), ExerciseError> {
    let cols = m.first().map_or(0, Vec::len);
    if m.iter().any(|row| row.len() != cols) {
        return Err(ExerciseError::RaggedMatrix);
    }
    Ok((m.len(), cols))
}

/// [Matrix product](https://en.wikipedia.org/wiki/Matrix_multiplication) `m1 × m2`.
///
/// # Errors
///
/// - [`ExerciseError::RaggedMatrix`] if either matrix has rows of different lengths
/// - [`ExerciseError::DimensionMismatch`] if `m1`'s column count differs from
///   `m2`'s row count
/// - [`ExerciseError::Overflow`] if an entry exceeds `i64`
pub fn matrix_product(m1: &[Vec<i64>], m2: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, ExerciseError> {
    let (left_rows, left_cols) = shape(m1)?;
    let (right_rows, right_cols) = shape(m2)?;
    if left_cols != right_rows {
        return Err(ExerciseError::DimensionMismatch {
            left_rows,
            left_cols,
            right_rows,
            right_cols,
        });
    }

    m1.iter()
        .map(|row| {
            (0..right_cols)
                .map(|col| {
                    row.iter()
                        .zip(m2)
                        .try_fold(0_i64, |acc, (a, other)| {
                            a.checked_mul(other[col]).and_then(|p| acc.checked_add(p))
                        })
                        .ok_or(ExerciseError::Overflow)
                })
                .collect()
        })
        .collect()
}

/// A tic-tac-toe mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// The `X` player.
    #[strum(serialize = "X")]
    X,
    /// The `0` player.
    #[strum(serialize = "0")]
    O,
}

/// A 3×3 board, `None` for empty cells.
pub type Board = [[Option<Mark>; 3]; 3];

/// Every row, column and diagonal as `(row, col)` cells.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The player owning a complete line, if any.
#[must_use]
pub fn evaluate_tic_tac_toe(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|(row, col)| board[row][col]);
        a.filter(|mark| b == Some(*mark) && c == Some(*mark))
    })
}
