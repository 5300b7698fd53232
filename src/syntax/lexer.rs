//! Logos-based lexer for eScript
//!
//! Produces the full token stream, trivia included, with 1-based ranges and
//! token indices. Keywords are matched ignoring ASCII case.

use logos::Logos;
use smol_str::SmolStr;

use super::token::{Token, TokenKind};
use crate::base::{Position, Range};

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    line: u32,
    column: u32,
    index: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            line: 1,
            column: 1,
            index: 0,
        }
    }

    fn advance(&mut self, text: &str) -> Position {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        Position::new(self.line, self.column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let index = self.index;
        self.index += 1;

        let start = Position::new(self.line, self.column).with_token_index(index);
        let end = self.advance(text).with_token_index(index);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token {
            kind,
            text: SmolStr::new(text),
            range: Range::new(start, end),
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("class", ignore(ascii_case))]
    ClassKw,
    #[token("endclass", ignore(ascii_case))]
    EndClassKw,
    #[token("function", ignore(ascii_case))]
    FunctionKw,
    #[token("endfunction", ignore(ascii_case))]
    EndFunctionKw,
    #[token("program", ignore(ascii_case))]
    ProgramKw,
    #[token("endprogram", ignore(ascii_case))]
    EndProgramKw,
    #[token("const", ignore(ascii_case))]
    ConstKw,
    #[token("var", ignore(ascii_case))]
    VarKw,
    #[token("use", ignore(ascii_case))]
    UseKw,
    #[token("include", ignore(ascii_case))]
    IncludeKw,
    #[token("enum", ignore(ascii_case))]
    EnumKw,
    #[token("endenum", ignore(ascii_case))]
    EndEnumKw,
    #[token("if", ignore(ascii_case))]
    IfKw,
    #[token("then", ignore(ascii_case))]
    ThenKw,
    #[token("elseif", ignore(ascii_case))]
    ElseIfKw,
    #[token("else", ignore(ascii_case))]
    ElseKw,
    #[token("endif", ignore(ascii_case))]
    EndIfKw,
    #[token("for", ignore(ascii_case))]
    ForKw,
    #[token("endfor", ignore(ascii_case))]
    EndForKw,
    #[token("foreach", ignore(ascii_case))]
    ForeachKw,
    #[token("endforeach", ignore(ascii_case))]
    EndForeachKw,
    #[token("while", ignore(ascii_case))]
    WhileKw,
    #[token("endwhile", ignore(ascii_case))]
    EndWhileKw,
    #[token("do", ignore(ascii_case))]
    DoKw,
    #[token("dowhile", ignore(ascii_case))]
    DoWhileKw,
    #[token("repeat", ignore(ascii_case))]
    RepeatKw,
    #[token("until", ignore(ascii_case))]
    UntilKw,
    #[token("switch", ignore(ascii_case))]
    SwitchKw,
    #[token("endswitch", ignore(ascii_case))]
    EndSwitchKw,
    #[token("case", ignore(ascii_case))]
    CaseKw,
    #[token("default", ignore(ascii_case))]
    DefaultKw,
    #[token("return", ignore(ascii_case))]
    ReturnKw,
    #[token("break", ignore(ascii_case))]
    BreakKw,
    #[token("continue", ignore(ascii_case))]
    ContinueKw,
    #[token("exported", ignore(ascii_case))]
    ExportedKw,
    #[token("byref", ignore(ascii_case))]
    ByrefKw,
    #[token("unused", ignore(ascii_case))]
    UnusedKw,
    #[token("in", ignore(ascii_case))]
    InKw,
    #[token("to", ignore(ascii_case))]
    ToKw,
    #[token("super", ignore(ascii_case))]
    SuperKw,
    #[token("this", ignore(ascii_case))]
    ThisKw,
    #[token("uninit", ignore(ascii_case))]
    UninitKw,
    #[token("and", ignore(ascii_case))]
    AndKw,
    #[token("or", ignore(ascii_case))]
    OrKw,
    #[token("not", ignore(ascii_case))]
    NotKw,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token(":=")]
    ColonEq,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token("->")]
    Arrow,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<>")]
    LtGt,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::LineComment => TokenKind::LineComment,
            LogosToken::BlockComment => TokenKind::BlockComment,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Integer => TokenKind::Integer,
            LogosToken::Float => TokenKind::Float,
            LogosToken::String => TokenKind::String,
            LogosToken::ClassKw => TokenKind::ClassKw,
            LogosToken::EndClassKw => TokenKind::EndClassKw,
            LogosToken::FunctionKw => TokenKind::FunctionKw,
            LogosToken::EndFunctionKw => TokenKind::EndFunctionKw,
            LogosToken::ProgramKw => TokenKind::ProgramKw,
            LogosToken::EndProgramKw => TokenKind::EndProgramKw,
            LogosToken::ConstKw => TokenKind::ConstKw,
            LogosToken::VarKw => TokenKind::VarKw,
            LogosToken::UseKw => TokenKind::UseKw,
            LogosToken::IncludeKw => TokenKind::IncludeKw,
            LogosToken::EnumKw => TokenKind::EnumKw,
            LogosToken::EndEnumKw => TokenKind::EndEnumKw,
            LogosToken::IfKw => TokenKind::IfKw,
            LogosToken::ThenKw => TokenKind::ThenKw,
            LogosToken::ElseIfKw => TokenKind::ElseIfKw,
            LogosToken::ElseKw => TokenKind::ElseKw,
            LogosToken::EndIfKw => TokenKind::EndIfKw,
            LogosToken::ForKw => TokenKind::ForKw,
            LogosToken::EndForKw => TokenKind::EndForKw,
            LogosToken::ForeachKw => TokenKind::ForeachKw,
            LogosToken::EndForeachKw => TokenKind::EndForeachKw,
            LogosToken::WhileKw => TokenKind::WhileKw,
            LogosToken::EndWhileKw => TokenKind::EndWhileKw,
            LogosToken::DoKw => TokenKind::DoKw,
            LogosToken::DoWhileKw => TokenKind::DoWhileKw,
            LogosToken::RepeatKw => TokenKind::RepeatKw,
            LogosToken::UntilKw => TokenKind::UntilKw,
            LogosToken::SwitchKw => TokenKind::SwitchKw,
            LogosToken::EndSwitchKw => TokenKind::EndSwitchKw,
            LogosToken::CaseKw => TokenKind::CaseKw,
            LogosToken::DefaultKw => TokenKind::DefaultKw,
            LogosToken::ReturnKw => TokenKind::ReturnKw,
            LogosToken::BreakKw => TokenKind::BreakKw,
            LogosToken::ContinueKw => TokenKind::ContinueKw,
            LogosToken::ExportedKw => TokenKind::ExportedKw,
            LogosToken::ByrefKw => TokenKind::ByrefKw,
            LogosToken::UnusedKw => TokenKind::UnusedKw,
            LogosToken::InKw => TokenKind::InKw,
            LogosToken::ToKw => TokenKind::ToKw,
            LogosToken::SuperKw => TokenKind::SuperKw,
            LogosToken::ThisKw => TokenKind::ThisKw,
            LogosToken::UninitKw => TokenKind::UninitKw,
            LogosToken::AndKw => TokenKind::AndKw,
            LogosToken::OrKw => TokenKind::OrKw,
            LogosToken::NotKw => TokenKind::NotKw,
            LogosToken::ColonColon => TokenKind::ColonColon,
            LogosToken::ColonEq => TokenKind::ColonEq,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::LBracket => TokenKind::LBracket,
            LogosToken::RBracket => TokenKind::RBracket,
            LogosToken::LBrace => TokenKind::LBrace,
            LogosToken::RBrace => TokenKind::RBrace,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Ellipsis => TokenKind::Ellipsis,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::At => TokenKind::At,
            LogosToken::Question => TokenKind::Question,
            LogosToken::Arrow => TokenKind::Arrow,
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::Star => TokenKind::Star,
            LogosToken::Slash => TokenKind::Slash,
            LogosToken::Percent => TokenKind::Percent,
            LogosToken::PlusEq => TokenKind::PlusEq,
            LogosToken::MinusEq => TokenKind::MinusEq,
            LogosToken::StarEq => TokenKind::StarEq,
            LogosToken::SlashEq => TokenKind::SlashEq,
            LogosToken::PercentEq => TokenKind::PercentEq,
            LogosToken::PlusPlus => TokenKind::PlusPlus,
            LogosToken::MinusMinus => TokenKind::MinusMinus,
            LogosToken::Eq => TokenKind::Eq,
            LogosToken::EqEq => TokenKind::EqEq,
            LogosToken::BangEq => TokenKind::BangEq,
            LogosToken::LtGt => TokenKind::LtGt,
            LogosToken::Lt => TokenKind::Lt,
            LogosToken::Gt => TokenKind::Gt,
            LogosToken::LtEq => TokenKind::LtEq,
            LogosToken::GtEq => TokenKind::GtEq,
            LogosToken::LtLt => TokenKind::LtLt,
            LogosToken::GtGt => TokenKind::GtGt,
            LogosToken::AmpAmp => TokenKind::AmpAmp,
            LogosToken::PipePipe => TokenKind::PipePipe,
            LogosToken::Amp => TokenKind::Amp,
            LogosToken::Pipe => TokenKind::Pipe,
            LogosToken::Caret => TokenKind::Caret,
            LogosToken::Tilde => TokenKind::Tilde,
            LogosToken::Bang => TokenKind::Bang,
        }
    }
}
