use super::*;

#[test]
fn test_symbols_are_distinct() {
    let symbols: Vec<char> = Operator::all().map(|op| op.symbol()).collect();
    for (i, a) in symbols.iter().enumerate() {
        assert!(!symbols[i + 1..].contains(a), "{} repeated", a);
    }
    assert!(!symbols.contains(&TERMINATOR));
    assert!(!symbols.contains(&'('));
    assert!(!symbols.contains(&')'));
}

#[test]
fn test_arity() {
    assert_eq!(Operator::Write.arity(), 2);
    assert_eq!(Operator::Read.arity(), 1);
    assert_eq!(Operator::MaxAddress.arity(), 1);
    assert_eq!(Operator::Random.arity(), 2);
    assert_eq!(Operator::Conditional.arity(), 3);
    assert_eq!(Operator::Loop.arity(), 2);
}

#[test]
fn test_from_char() {
    assert_eq!(Operator::from_char('}'), Some(Operator::Write));
    assert_eq!(Operator::from_char('{'), Some(Operator::Read));
    assert_eq!(Operator::from_char('%'), Some(Operator::Modulus));
    assert_eq!(Operator::from_char('"'), Some(Operator::Clock));
    assert_eq!(Operator::from_char('~'), Some(Operator::Loop));
    assert_eq!(Operator::from_char('$'), None);
    assert_eq!(Operator::from_char('a'), None);
}

#[test]
fn test_round_trip_symbols() {
    for op in Operator::all() {
        assert_eq!(Operator::from_char(op.symbol()), Some(op));
    }
    assert_eq!(Operator::Conditional.to_string(), "?");
}
