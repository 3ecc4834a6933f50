use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Error = 0,
    Whitespace,
    Comment,

    // Identifiers & Literals
    Ident,
    Keyword,
    Numeric,
    String,
    Char,

    // Punctuation
    LParen,
    RParen,
    Semicolon,
    Colon,
    Comma,
    Dot,
    DotDot,
    Tick,
    Assign,
    Arrow,
    Box,
    LLabel,
    RLabel,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Amp,
    Pipe,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Nodes
    Reference,
    Root,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Raw lexer tokens. Keywords are lexed as identifiers and classified by
/// [`is_keyword`], since Ada reserved words are case-insensitive.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = ())]
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f\v]+")]
    Whitespace,
    #[regex(r"--.*", allow_greedy = true)]
    Comment,

    #[regex(r"\p{L}[\p{L}\p{N}_]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*(#[0-9A-Fa-f_]+(\.[0-9A-Fa-f_]+)?#)?(\.[0-9][0-9_]*)?([eE][+-]?[0-9][0-9_]*)?")]
    Numeric,
    #[regex(r#""([^"\n]|"")*""#)]
    String,
    #[regex(r"'[^\n]'")]
    Char,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("'")]
    Tick,
    #[token(":=")]
    Assign,
    #[token("=>")]
    Arrow,
    #[token("<>")]
    Box,
    #[token("<<")]
    LLabel,
    #[token(">>")]
    RLabel,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("=")]
    Equal,
    #[token("/=")]
    NotEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::Comment => SyntaxKind::Comment,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::Numeric => SyntaxKind::Numeric,
            TokenKind::String => SyntaxKind::String,
            TokenKind::Char => SyntaxKind::Char,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Colon => SyntaxKind::Colon,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::DotDot => SyntaxKind::DotDot,
            TokenKind::Tick => SyntaxKind::Tick,
            TokenKind::Assign => SyntaxKind::Assign,
            TokenKind::Arrow => SyntaxKind::Arrow,
            TokenKind::Box => SyntaxKind::Box,
            TokenKind::LLabel => SyntaxKind::LLabel,
            TokenKind::RLabel => SyntaxKind::RLabel,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::StarStar => SyntaxKind::StarStar,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Amp => SyntaxKind::Amp,
            TokenKind::Pipe => SyntaxKind::Pipe,
            TokenKind::Equal => SyntaxKind::Equal,
            TokenKind::NotEqual => SyntaxKind::NotEqual,
            TokenKind::Less => SyntaxKind::Less,
            TokenKind::LessEqual => SyntaxKind::LessEqual,
            TokenKind::Greater => SyntaxKind::Greater,
            TokenKind::GreaterEqual => SyntaxKind::GreaterEqual,
        }
    }
}

/// Ada 2012 reserved words, sorted for binary search.
const KEYWORDS: &[&str] = &[
    "abort",
    "abs",
    "abstract",
    "accept",
    "access",
    "aliased",
    "all",
    "and",
    "array",
    "at",
    "begin",
    "body",
    "case",
    "constant",
    "declare",
    "delay",
    "delta",
    "digits",
    "do",
    "else",
    "elsif",
    "end",
    "entry",
    "exception",
    "exit",
    "for",
    "function",
    "generic",
    "goto",
    "if",
    "in",
    "interface",
    "is",
    "limited",
    "loop",
    "mod",
    "new",
    "not",
    "null",
    "of",
    "or",
    "others",
    "out",
    "overriding",
    "package",
    "pragma",
    "private",
    "procedure",
    "protected",
    "raise",
    "range",
    "record",
    "rem",
    "renames",
    "requeue",
    "return",
    "reverse",
    "select",
    "separate",
    "some",
    "subtype",
    "synchronized",
    "tagged",
    "task",
    "terminate",
    "then",
    "type",
    "until",
    "use",
    "when",
    "while",
    "with",
    "xor",
];

pub fn is_keyword(word: &str) -> bool {
    if !word.is_ascii() {
        return false;
    }
    KEYWORDS.binary_search(&word.to_ascii_lowercase().as_str()).is_ok()
}
