use logos::Logos;

#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token<'src> {
    #[token(",")]
    Comma,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("->")]
    Arrow,

    #[regex(r"%[a-zA-Z0-9_]*")]
    Register(&'src str),

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Name(&'src str),

    #[regex(r"[0-9][0-9_]*")]
    Number(&'src str),

    #[regex(r"\r?\n")]
    Newline,

    #[error]
    #[regex(r"[ \t\f]+", logos::skip)]
    #[regex(r"#[^\r\n]*", logos::skip)]
    Error,
}

impl Token<'_> {
    /// A short description for "expected ..., found ..." style messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Comma => "`,`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Arrow => "`->`",
            Self::Register(_) => "a register",
            Self::Name(_) => "a name",
            Self::Number(_) => "a number",
            Self::Newline => "the end of the line",
            Self::Error => "an invalid character",
        }
    }
}
