use jsxlight::lexer::number_ident_scanner::{NumericResult, match_numeric_literal};

fn numeric(s: &str) -> NumericResult {
    match_numeric_literal(s.as_bytes())
}

#[test]
fn decimal_parts() {
    assert_eq!(
        numeric("12.5e-3n;"),
        NumericResult {
            length: 8,
            prefix: 0,
            integer: 2,
            fractional: 2,
            exponent: 3,
            suffix: 1,
            erroneous: true,
        }
    );
    let plain = numeric("1_000.25");
    assert_eq!(plain.length, 8);
    assert!(!plain.erroneous);
}

#[test]
fn radix_prefixes() {
    let hex = numeric("0x1F");
    assert_eq!((hex.length, hex.prefix, hex.integer), (4, 2, 2));
    assert!(!hex.erroneous);

    assert!(!numeric("0b1010").erroneous);
    assert!(!numeric("0O17n").erroneous);
    assert!(numeric("0x").erroneous);
    assert!(numeric("0x1.5").erroneous);
    assert_eq!(numeric("0b102").length, 4);

    let dotted = numeric("0x.foo");
    assert_eq!((dotted.length, dotted.prefix, dotted.fractional), (3, 2, 1));
    assert!(dotted.erroneous);
}

#[test]
fn separators() {
    assert!(numeric("1__0").erroneous);
    assert!(numeric("1_").erroneous);
    assert!(numeric("0x_FF").erroneous);
}

#[test]
fn bigint_suffix() {
    let big = numeric("1n");
    assert_eq!((big.length, big.suffix), (2, 1));
    assert!(!big.erroneous);
    assert!(numeric("1.5n").erroneous);
    assert!(numeric("1e3n").erroneous);
}

#[test]
fn leading_dot() {
    let fraction = numeric(".5");
    assert_eq!((fraction.length, fraction.integer, fraction.fractional), (2, 0, 2));
    assert!(!fraction.erroneous);

    assert!(!numeric(".x").is_match());
    assert!(!numeric("...").is_match());
    assert!(!numeric(".").is_match());
}

#[test]
fn trailing_dot_and_exponent() {
    let trailing = numeric("1.");
    assert_eq!(trailing.length, 2);
    assert!(!trailing.erroneous);

    let exponent = numeric("1e");
    assert_eq!(exponent.length, 2);
    assert!(exponent.erroneous);
}

#[test]
fn no_match() {
    assert!(!numeric("x1").is_match());
    assert!(!numeric("_1").is_match());
    assert!(!numeric("").is_match());
}
