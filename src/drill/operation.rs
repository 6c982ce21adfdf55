//! The four arithmetic drill modes

use std::fmt;

/// An arithmetic drill mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Operation {
    #[value(name = "add")]
    Add,
    #[value(name = "sub")]
    Subtract,
    #[value(name = "mul")]
    Multiply,
    #[value(name = "div")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol shown between the operands in a question
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '−',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Human-readable mode name
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    /// Map a mode-selection key to an operation.
    ///
    /// `-` is left free for typing negative answers.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'a' | 'A' | '+' => Some(Operation::Add),
            's' | 'S' => Some(Operation::Subtract),
            'm' | 'M' | '*' | 'x' | 'X' => Some(Operation::Multiply),
            'd' | 'D' | '/' => Some(Operation::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys() {
        assert_eq!(Operation::from_key('a'), Some(Operation::Add));
        assert_eq!(Operation::from_key('+'), Some(Operation::Add));
        assert_eq!(Operation::from_key('s'), Some(Operation::Subtract));
        assert_eq!(Operation::from_key('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_key('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_key('-'), None);
        assert_eq!(Operation::from_key('7'), None);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
