//! Lexer for classification using Logos
//!
//! Tokenizes a line of C-family source into classification runs. Unknown
//! characters become plain text rather than failing.

use logos::Logos;

use crate::base::{TextRange, TextSize};

use super::ClassificationKind;

/// Logos-based token types
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // === Trivia ===
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", priority = 2, allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // === Keywords ===
    #[token("abstract")]
    #[token("as")]
    #[token("base")]
    #[token("bool")]
    #[token("break")]
    #[token("case")]
    #[token("catch")]
    #[token("class")]
    #[token("const")]
    #[token("continue")]
    #[token("default")]
    #[token("delegate")]
    #[token("do")]
    #[token("double")]
    #[token("else")]
    #[token("enum")]
    #[token("event")]
    #[token("false")]
    #[token("for")]
    #[token("foreach")]
    #[token("if")]
    #[token("in")]
    #[token("int")]
    #[token("interface")]
    #[token("internal")]
    #[token("is")]
    #[token("namespace")]
    #[token("new")]
    #[token("null")]
    #[token("object")]
    #[token("operator")]
    #[token("out")]
    #[token("override")]
    #[token("partial")]
    #[token("private")]
    #[token("protected")]
    #[token("public")]
    #[token("readonly")]
    #[token("ref")]
    #[token("return")]
    #[token("sealed")]
    #[token("static")]
    #[token("string")]
    #[token("struct")]
    #[token("switch")]
    #[token("this")]
    #[token("throw")]
    #[token("true")]
    #[token("try")]
    #[token("using")]
    #[token("var")]
    #[token("virtual")]
    #[token("void")]
    #[token("while")]
    Keyword,

    // === Punctuation ===
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token("(")]
    #[token(")")]
    #[token(";")]
    #[token(",")]
    #[token(".")]
    #[token(":")]
    Punctuation,

    // === Operators ===
    #[regex(r"[=!<>]=?")]
    #[regex(r"[+\-*/%&|^~?]")]
    #[token("=>")]
    #[token("&&")]
    #[token("||")]
    #[token("??")]
    #[token("++")]
    #[token("--")]
    Operator,

    // === Literals ===
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[fFdDmMlLuU]?")]
    Number,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r#"'([^'\\]|\\.)*'"#)]
    String,

    // === Identifiers (must come after keywords) ===
    #[regex(r"@?[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

fn to_classification(token: LogosToken) -> ClassificationKind {
    match token {
        LogosToken::Whitespace => ClassificationKind::Whitespace,
        LogosToken::LineComment | LogosToken::BlockComment => ClassificationKind::Comment,
        LogosToken::Keyword => ClassificationKind::Keyword,
        LogosToken::Punctuation => ClassificationKind::Punctuation,
        LogosToken::Operator => ClassificationKind::Operator,
        LogosToken::Number => ClassificationKind::NumericLiteral,
        LogosToken::String => ClassificationKind::StringLiteral,
        LogosToken::Identifier => ClassificationKind::Identifier,
    }
}

/// Tokenize `text` into classification runs, offsetting ranges by `base`.
///
/// Adjacent runs of unrecognized characters are merged into one
/// [`ClassificationKind::Text`] run.
pub(super) fn classify_text(text: &str, base: TextSize) -> Vec<(TextRange, ClassificationKind)> {
    let mut runs: Vec<(TextRange, ClassificationKind)> = Vec::new();
    let mut lexer = LogosToken::lexer(text);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let range = TextRange::new(
            base + TextSize::from(span.start as u32),
            base + TextSize::from(span.end as u32),
        );
        let kind = match result {
            Ok(token) => to_classification(token),
            Err(()) => ClassificationKind::Text,
        };

        match runs.last_mut() {
            Some((last, ClassificationKind::Text))
                if kind == ClassificationKind::Text && last.end() == range.start() =>
            {
                *last = last.cover(range);
            }
            _ => runs.push((range, kind)),
        }
    }

    runs
}
