//! Token type shared by the lexer, the tree builder and the token scans.

use smol_str::SmolStr;

use crate::base::{Position, Range};

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    // Literals
    Ident,
    Integer,
    Float,
    String,

    // Keywords
    ClassKw,
    EndClassKw,
    FunctionKw,
    EndFunctionKw,
    ProgramKw,
    EndProgramKw,
    ConstKw,
    VarKw,
    UseKw,
    IncludeKw,
    EnumKw,
    EndEnumKw,
    IfKw,
    ThenKw,
    ElseIfKw,
    ElseKw,
    EndIfKw,
    ForKw,
    EndForKw,
    ForeachKw,
    EndForeachKw,
    WhileKw,
    EndWhileKw,
    DoKw,
    DoWhileKw,
    RepeatKw,
    UntilKw,
    SwitchKw,
    EndSwitchKw,
    CaseKw,
    DefaultKw,
    ReturnKw,
    BreakKw,
    ContinueKw,
    ExportedKw,
    ByrefKw,
    UnusedKw,
    InKw,
    ToKw,
    SuperKw,
    ThisKw,
    UninitKw,
    AndKw,
    OrKw,
    NotKw,

    // Punctuation
    ColonColon,
    ColonEq,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Ellipsis,
    Dot,
    At,
    Question,
    Arrow,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    PlusPlus,
    MinusMinus,
    Eq,
    EqEq,
    BangEq,
    LtGt,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LtLt,
    GtGt,
    AmpAmp,
    PipePipe,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,

    Error,
}

impl TokenKind {
    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// A token with its kind, text, and 1-based range.
///
/// Both ends of the range carry the token's index in its file's stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub range: Range,
}

impl Token {
    pub fn index(&self) -> u32 {
        self.range.start.token_index
    }

    pub fn start(&self) -> Position {
        self.range.start
    }

    /// Length in characters.
    pub fn len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the token claims the column at `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.range.contains(position)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
