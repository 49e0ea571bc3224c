//! Registry of every keyword, operator and punctuation spelling.
//!
//! The table is kept sorted by spelling so lookups can binary search it;
//! the ordering is checked at compile time.

use super::token::Highlight;

/// Where a spelling comes from in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSource {
    /// Always reserved or always an operator.
    Core,
    /// Keyword only in certain positions (`async`, `of`, ...).
    Contextual,
    /// Reserved in strict mode code.
    StrictReserved,
    /// Reserved for future use.
    FutureReserved,
}

macro_rules! token_types {
    ($($id:ident => $code:literal, $highlight:ident, $source:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenType {
            $($id,)*
        }

        const TOKEN_TYPE_CODES: &[&str] = &[$($code,)*];

        const TOKEN_TYPE_LENGTHS: &[u8] = &[$($code.len() as u8,)*];

        const TOKEN_TYPE_HIGHLIGHTS: &[Highlight] = &[$(Highlight::$highlight,)*];

        const TOKEN_TYPE_SOURCES: &[FeatureSource] = &[$(FeatureSource::$source,)*];

        impl TokenType {
            /// Every token type, in spelling order.
            pub const ALL: &'static [TokenType] = &[$(TokenType::$id,)*];
        }
    };
}

token_types! {
    LogicalNot => "!", SymbolOperator, Core;
    NotEquals => "!=", SymbolOperator, Core;
    StrictNotEquals => "!==", SymbolOperator, Core;
    Modulo => "%", SymbolOperator, Core;
    ModuloEqual => "%=", SymbolOperator, Core;
    BitwiseAnd => "&", SymbolOperator, Core;
    LogicalAnd => "&&", SymbolOperator, Core;
    LogicalAndEqual => "&&=", SymbolOperator, Core;
    BitwiseAndEqual => "&=", SymbolOperator, Core;
    LeftParen => "(", SymbolParens, Core;
    RightParen => ")", SymbolParens, Core;
    Multiply => "*", SymbolOperator, Core;
    Exponentiation => "**", SymbolOperator, Core;
    ExponentiationEqual => "**=", SymbolOperator, Core;
    MultiplyEqual => "*=", SymbolOperator, Core;
    Plus => "+", SymbolOperator, Core;
    Increment => "++", SymbolOperator, Core;
    PlusEqual => "+=", SymbolOperator, Core;
    Comma => ",", SymbolPunctuation, Core;
    Minus => "-", SymbolOperator, Core;
    Decrement => "--", SymbolOperator, Core;
    MinusEqual => "-=", SymbolOperator, Core;
    Dot => ".", SymbolPunctuation, Core;
    Ellipsis => "...", SymbolOperator, Core;
    Divide => "/", SymbolOperator, Core;
    DivideEqual => "/=", SymbolOperator, Core;
    Colon => ":", SymbolPunctuation, Core;
    Semicolon => ";", SymbolPunctuation, Core;
    LessThan => "<", SymbolOperator, Core;
    LeftShift => "<<", SymbolOperator, Core;
    LeftShiftEqual => "<<=", SymbolOperator, Core;
    LessEqual => "<=", SymbolOperator, Core;
    Assignment => "=", SymbolOperator, Core;
    Equals => "==", SymbolOperator, Core;
    StrictEquals => "===", SymbolOperator, Core;
    Arrow => "=>", SymbolOperator, Core;
    GreaterThan => ">", SymbolOperator, Core;
    GreaterEqual => ">=", SymbolOperator, Core;
    RightShift => ">>", SymbolOperator, Core;
    RightShiftEqual => ">>=", SymbolOperator, Core;
    UnsignedRightShift => ">>>", SymbolOperator, Core;
    UnsignedRightShiftEqual => ">>>=", SymbolOperator, Core;
    Conditional => "?", SymbolOperator, Core;
    OptionalChaining => "?.", SymbolOperator, Core;
    NullishCoalescing => "??", SymbolOperator, Core;
    NullishCoalescingEqual => "??=", SymbolOperator, Core;
    LeftBracket => "[", SymbolBracket, Core;
    RightBracket => "]", SymbolBracket, Core;
    BitwiseXor => "^", SymbolOperator, Core;
    BitwiseXorEqual => "^=", SymbolOperator, Core;
    KwAs => "as", Keyword, Contextual;
    KwAsync => "async", Keyword, Contextual;
    KwAwait => "await", KeywordControl, Core;
    KwBreak => "break", KeywordControl, Core;
    KwCase => "case", KeywordControl, Core;
    KwCatch => "catch", KeywordControl, Core;
    KwClass => "class", Keyword, Core;
    KwConst => "const", Keyword, Core;
    KwContinue => "continue", KeywordControl, Core;
    KwDebugger => "debugger", Keyword, Core;
    KwDefault => "default", KeywordControl, Core;
    KwDelete => "delete", KeywordOperator, Core;
    KwDo => "do", KeywordControl, Core;
    KwElse => "else", KeywordControl, Core;
    KwEnum => "enum", Keyword, FutureReserved;
    KwExport => "export", Keyword, Core;
    KwExtends => "extends", Keyword, Core;
    KwFalse => "false", KeywordValue, Core;
    KwFinally => "finally", KeywordControl, Core;
    KwFor => "for", KeywordControl, Core;
    KwFrom => "from", Keyword, Contextual;
    KwFunction => "function", Keyword, Core;
    KwIf => "if", KeywordControl, Core;
    KwImplements => "implements", Keyword, StrictReserved;
    KwImport => "import", Keyword, Core;
    KwIn => "in", KeywordOperator, Core;
    KwInstanceof => "instanceof", KeywordOperator, Core;
    KwInterface => "interface", Keyword, StrictReserved;
    KwLet => "let", Keyword, StrictReserved;
    KwNew => "new", KeywordOperator, Core;
    KwNull => "null", KeywordValue, Core;
    KwOf => "of", Keyword, Contextual;
    KwPackage => "package", Keyword, StrictReserved;
    KwPrivate => "private", Keyword, StrictReserved;
    KwProtected => "protected", Keyword, StrictReserved;
    KwPublic => "public", Keyword, StrictReserved;
    KwReturn => "return", KeywordControl, Core;
    KwStatic => "static", Keyword, StrictReserved;
    KwSuper => "super", KeywordValue, Core;
    KwSwitch => "switch", KeywordControl, Core;
    KwThis => "this", KeywordValue, Core;
    KwThrow => "throw", KeywordControl, Core;
    KwTrue => "true", KeywordValue, Core;
    KwTry => "try", KeywordControl, Core;
    KwTypeof => "typeof", KeywordOperator, Core;
    KwVar => "var", Keyword, Core;
    KwVoid => "void", KeywordOperator, Core;
    KwWhile => "while", KeywordControl, Core;
    KwWith => "with", KeywordControl, Core;
    KwYield => "yield", KeywordControl, StrictReserved;
    LeftBrace => "{", SymbolBrace, Core;
    BitwiseOr => "|", SymbolOperator, Core;
    BitwiseOrEqual => "|=", SymbolOperator, Core;
    LogicalOr => "||", SymbolOperator, Core;
    LogicalOrEqual => "||=", SymbolOperator, Core;
    RightBrace => "}", SymbolBrace, Core;
    BitwiseNot => "~", SymbolOperator, Core;
}

const _: () = assert!(is_strictly_sorted(TOKEN_TYPE_CODES));

const fn bytes_less(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

const fn is_strictly_sorted(codes: &[&str]) -> bool {
    let mut i = 1;
    while i < codes.len() {
        if !bytes_less(codes[i - 1].as_bytes(), codes[i].as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

impl TokenType {
    /// Looks up the token type spelled exactly `code`.
    pub fn by_code(code: &[u8]) -> Option<TokenType> {
        TOKEN_TYPE_CODES
            .binary_search_by(|spelling| spelling.as_bytes().cmp(code))
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The in-source spelling, e.g. `">>>="` or `"typeof"`.
    pub fn code(self) -> &'static str {
        TOKEN_TYPE_CODES[self as usize]
    }

    /// Same as `self.code().len()`.
    pub fn len(self) -> usize {
        usize::from(TOKEN_TYPE_LENGTHS[self as usize])
    }

    pub fn highlight(self) -> Highlight {
        TOKEN_TYPE_HIGHLIGHTS[self as usize]
    }

    pub fn source(self) -> FeatureSource {
        TOKEN_TYPE_SOURCES[self as usize]
    }

    pub fn is_keyword(self) -> bool {
        self.code().as_bytes()[0].is_ascii_alphabetic()
    }

    /// Whether a `/` directly after this token starts a regex literal.
    pub fn allows_regex_after(self) -> bool {
        use TokenType::*;
        if self.is_keyword() {
            return matches!(
                self,
                KwReturn
                    | KwThrow
                    | KwCase
                    | KwDelete
                    | KwVoid
                    | KwTypeof
                    | KwYield
                    | KwAwait
                    | KwInstanceof
                    | KwIn
                    | KwNew
            );
        }
        !matches!(
            self,
            Increment | Decrement | RightParen | RightBracket | RightBrace | Plus | Minus
        )
    }
}
