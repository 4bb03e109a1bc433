/// ## Operator table
///
/// Each operator is one character. The number of times the character
/// appears in its table key is the number of operands it takes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Write,
    Read,
    Dealloc,
    MaxAddress,
    Print,
    Input,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Clock,
    Random,
    Conditional,
    Loop,
}

/// Reserved for leaving the interactive prompt. Never an operator.
pub const TERMINATOR: char = '$';

static TABLE: [(&str, Operator); 15] = [
    ("}}", Operator::Write),
    ("{", Operator::Read),
    ("_", Operator::Dealloc),
    ("@", Operator::MaxAddress),
    ("]", Operator::Print),
    ("[", Operator::Input),
    ("++", Operator::Add),
    ("--", Operator::Subtract),
    ("**", Operator::Multiply),
    ("//", Operator::Divide),
    ("%%", Operator::Modulus),
    ("\"", Operator::Clock),
    ("``", Operator::Random),
    ("???", Operator::Conditional),
    ("~~", Operator::Loop),
];

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        TABLE
            .iter()
            .find(|(key, _)| key.starts_with(ch))
            .map(|(_, op)| *op)
    }

    pub fn all() -> impl Iterator<Item = Operator> {
        TABLE.iter().map(|(_, op)| *op)
    }

    fn key(self) -> &'static str {
        match TABLE.iter().find(|(_, op)| *op == self) {
            Some((key, _)) => *key,
            None => "",
        }
    }

    pub fn symbol(self) -> char {
        self.key().chars().next().unwrap_or(TERMINATOR)
    }

    pub fn arity(self) -> usize {
        self.key().chars().count()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
