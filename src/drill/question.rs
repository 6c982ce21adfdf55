//! Question generation and answer checking
//!
//! Operands are drawn from a fixed beginner range. Division builds the
//! dividend from the divisor so the quotient is exact; non-integer answers
//! are only possible for hand-built questions and are compared with a small
//! absolute tolerance.

use super::error::AnswerError;
use super::operation::Operation;
use super::source::NumberSource;
use std::fmt;

/// Smallest operand drawn for any question
pub const OPERAND_MIN: i64 = 1;
/// Largest operand drawn for any question
pub const OPERAND_MAX: i64 = 9;
/// Largest quotient multiplier used to build a division question
pub const DIVIDE_MULTIPLIER_MAX: i64 = 4;
/// Maximum absolute deviation (exclusive) accepted for a non-integer answer
pub const ANSWER_TOLERANCE: f64 = 0.03;

/// Expected result of a question
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Integer(i64),
    /// Rounded to two decimal places
    Decimal(f64),
}

impl Answer {
    /// Build the answer for `dividend / divisor`, keeping exact quotients integral.
    fn quotient(dividend: i64, divisor: i64) -> Self {
        if dividend % divisor == 0 {
            Answer::Integer(dividend / divisor)
        } else {
            let q = dividend as f64 / divisor as f64;
            Answer::Decimal((q * 100.0).round() / 100.0)
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Answer::Integer(_))
    }

    /// Integer answers need exact equality; decimals accept anything strictly
    /// closer than [`ANSWER_TOLERANCE`].
    pub fn matches(&self, given: f64) -> bool {
        match *self {
            Answer::Integer(n) => given == n as f64,
            Answer::Decimal(x) => within_tolerance(given - x),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(n) => write!(f, "{}", n),
            Answer::Decimal(x) => write!(f, "{}", x),
        }
    }
}

/// Strict comparison: a deviation of exactly the tolerance is rejected.
pub fn within_tolerance(delta: f64) -> bool {
    delta.abs() < ANSWER_TOLERANCE
}

/// Read typed text as a number.
///
/// Returns `Ok(None)` for blank input, which callers treat as a no-op.
/// Infinity is only accepted spelled exactly `Infinity` (optionally signed);
/// `inf`, `INFINITY` and friends are not numbers here.
pub fn parse_answer(raw: &str) -> Result<Option<f64>, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => Err(AnswerError::NotANumber(trimmed.to_string())),
        Ok(value) if value.is_infinite() && unsigned != "Infinity" => {
            Err(AnswerError::NotANumber(trimmed.to_string()))
        }
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(AnswerError::NotANumber(trimmed.to_string())),
    }
}

/// A single live drill question
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    left: i64,
    right: i64,
    operation: Operation,
    answer: Answer,
}

impl Question {
    /// Build a question from explicit operands.
    ///
    /// Returns `None` for a division by zero.
    pub fn new(left: i64, right: i64, operation: Operation) -> Option<Self> {
        if operation == Operation::Divide && right == 0 {
            return None;
        }
        Some(Question::from_parts(left, right, operation))
    }

    /// Caller guarantees a non-zero divisor for division.
    fn from_parts(left: i64, right: i64, operation: Operation) -> Self {
        let answer = match operation {
            Operation::Add => Answer::Integer(left + right),
            Operation::Subtract => Answer::Integer(left - right),
            Operation::Multiply => Answer::Integer(left * right),
            Operation::Divide => Answer::quotient(left, right),
        };
        Question {
            left,
            right,
            operation,
            answer,
        }
    }

    /// Draw a fresh question for `operation`
    pub fn generate(operation: Operation, source: &mut dyn NumberSource) -> Self {
        let (left, right) = match operation {
            Operation::Add | Operation::Multiply => (
                source.next_in(OPERAND_MIN, OPERAND_MAX),
                source.next_in(OPERAND_MIN, OPERAND_MAX),
            ),
            Operation::Subtract => {
                let a = source.next_in(OPERAND_MIN, OPERAND_MAX);
                let b = source.next_in(OPERAND_MIN, OPERAND_MAX);
                // Keep the difference non-negative
                if b > a {
                    (b, a)
                } else {
                    (a, b)
                }
            }
            Operation::Divide => {
                // Never divide by zero, whatever the source returns
                let divisor = source.next_in(OPERAND_MIN, OPERAND_MAX).max(1);
                let multiplier = source.next_in(1, DIVIDE_MULTIPLIER_MAX);
                (divisor * multiplier, divisor)
            }
        };

        Question::from_parts(left, right, operation)
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    /// Display text, e.g. `4 + 5 = ?`
    pub fn text(&self) -> String {
        format!("{} {} {} = ?", self.left, self.operation.symbol(), self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws
    struct Scripted(Vec<i64>);

    impl NumberSource for Scripted {
        fn next_in(&mut self, _min: i64, _max: i64) -> i64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_addition() {
        let q = Question::generate(Operation::Add, &mut Scripted(vec![4, 5]));
        assert_eq!(q.text(), "4 + 5 = ?");
        assert_eq!(q.answer(), Answer::Integer(9));
    }

    #[test]
    fn test_subtraction_swaps_to_stay_non_negative() {
        let q = Question::generate(Operation::Subtract, &mut Scripted(vec![2, 7]));
        assert_eq!((q.left(), q.right()), (7, 2));
        assert_eq!(q.answer(), Answer::Integer(5));
        assert_eq!(q.text(), "7 − 2 = ?");
    }

    #[test]
    fn test_division_builds_exact_dividend() {
        // divisor 6, multiplier 3
        let q = Question::generate(Operation::Divide, &mut Scripted(vec![6, 3]));
        assert_eq!((q.left(), q.right()), (18, 6));
        assert_eq!(q.answer(), Answer::Integer(3));
        assert_eq!(q.text(), "18 ÷ 6 = ?");
    }

    #[test]
    fn test_division_by_zero_rejected() {
        assert!(Question::new(4, 0, Operation::Divide).is_none());
        assert!(Question::new(4, 0, Operation::Multiply).is_some());
    }

    #[test]
    fn test_non_integer_quotient_rounds_to_two_places() {
        let q = Question::new(10, 3, Operation::Divide).unwrap();
        assert_eq!(q.answer(), Answer::Decimal(3.33));
        assert_eq!(q.answer().to_string(), "3.33");

        let q = Question::new(5, 2, Operation::Divide).unwrap();
        assert_eq!(q.answer().to_string(), "2.5");
    }

    #[test]
    fn test_integer_answer_requires_exact_match() {
        let answer = Answer::Integer(9);
        assert!(answer.matches(9.0));
        assert!(!answer.matches(9.01));
        assert!(!answer.matches(8.99));
    }

    #[test]
    fn test_decimal_answer_tolerance() {
        let answer = Answer::Decimal(3.33);
        assert!(answer.matches(3.33));
        assert!(answer.matches(3.34));
        assert!(answer.matches(3.32));
        assert!(!answer.matches(3.30));
        assert!(!answer.matches(3.37));
    }

    #[test]
    fn test_tolerance_boundary_is_exclusive() {
        assert!(!within_tolerance(ANSWER_TOLERANCE));
        assert!(!within_tolerance(-ANSWER_TOLERANCE));
        assert!(within_tolerance(0.0299));
        assert!(within_tolerance(-0.0299));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("9"), Ok(Some(9.0)));
        assert_eq!(parse_answer("  3.34 "), Ok(Some(3.34)));
        assert_eq!(parse_answer("-2"), Ok(Some(-2.0)));
        assert_eq!(parse_answer(""), Ok(None));
        assert_eq!(parse_answer("   "), Ok(None));
        assert_eq!(
            parse_answer("abc"),
            Err(AnswerError::NotANumber("abc".to_string()))
        );
        assert!(parse_answer("NaN").is_err());
        for text in ["inf", "infinity", "+Inf", "-INFINITY", "INFINITY"] {
            assert!(parse_answer(text).is_err(), "{} should be rejected", text);
        }
        assert_eq!(parse_answer("Infinity"), Ok(Some(f64::INFINITY)));
        assert_eq!(parse_answer("+Infinity"), Ok(Some(f64::INFINITY)));
        assert_eq!(parse_answer("-Infinity"), Ok(Some(f64::NEG_INFINITY)));
        assert!(parse_answer("1.2.3").is_err());
    }
}
