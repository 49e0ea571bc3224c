use super::token_type::TokenType;

/// Longest operator or punctuation mark at the start of `s`.
pub fn match_operator_or_punctuation(s: &[u8]) -> Option<TokenType> {
    use TokenType::*;

    let first = *s.first()?;
    let op = |candidates: &[TokenType]| -> Option<TokenType> {
        candidates
            .iter()
            .copied()
            .find(|candidate| s.starts_with(candidate.code().as_bytes()))
    };

    match first {
        b'!' => op(&[StrictNotEquals, NotEquals, LogicalNot]),
        b'%' => op(&[ModuloEqual, Modulo]),
        b'&' => op(&[LogicalAndEqual, LogicalAnd, BitwiseAndEqual, BitwiseAnd]),
        b'(' => Some(LeftParen),
        b')' => Some(RightParen),
        b'*' => op(&[ExponentiationEqual, Exponentiation, MultiplyEqual, Multiply]),
        b'+' => op(&[Increment, PlusEqual, Plus]),
        b',' => Some(Comma),
        b'-' => op(&[Decrement, MinusEqual, Minus]),
        b'.' => op(&[Ellipsis, Dot]),
        b'/' => op(&[DivideEqual, Divide]),
        b':' => Some(Colon),
        b';' => Some(Semicolon),
        b'<' => op(&[LeftShiftEqual, LeftShift, LessEqual, LessThan]),
        b'=' => op(&[StrictEquals, Equals, Arrow, Assignment]),
        b'>' => op(&[
            UnsignedRightShiftEqual,
            UnsignedRightShift,
            RightShiftEqual,
            RightShift,
            GreaterEqual,
            GreaterThan,
        ]),
        b'?' => match s.get(1..3) {
            // `a?.5:b` is a conditional followed by a number.
            Some([b'.', digit]) if digit.is_ascii_digit() => Some(Conditional),
            _ => op(&[NullishCoalescingEqual, NullishCoalescing, OptionalChaining, Conditional]),
        },
        b'[' => Some(LeftBracket),
        b']' => Some(RightBracket),
        b'^' => op(&[BitwiseXorEqual, BitwiseXor]),
        b'{' => Some(LeftBrace),
        b'|' => op(&[LogicalOrEqual, LogicalOr, BitwiseOrEqual, BitwiseOr]),
        b'}' => Some(RightBrace),
        b'~' => Some(BitwiseNot),
        _ => None,
    }
}
