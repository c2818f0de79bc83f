//! Placeholder tokens for symbolic angles.
//!
//! A placeholder stands in for an angle whose numeric value is bound later by
//! an external resolver. The IR never evaluates placeholders; it only needs to
//! recognise them and to list the variables and functions they reference.
//!
//! ```text
//! token      := ['-'] (plain | functional)
//! plain      := '#' digits ['*' ['-'] number]      e.g. #2, -#1*3, #2*.5
//! functional := ident ('#' digits)+                e.g. my_fun#2, -my_fun2#2#1
//! ```

use logos::Logos;

/// Lexical tokens inside a single placeholder field.
#[derive(Logos, Debug, Clone, PartialEq)]
enum Token<'a> {
    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[regex("#[0-9]+", |lex| lex.slice()[1..].parse::<u32>().ok())]
    VarRef(u32),

    #[regex("[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'a str),

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

/// A parsed placeholder token.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Leading minus sign present.
    pub negated: bool,
    /// Referenced variable numbers, in order of appearance.
    pub var_nums: Vec<u32>,
    /// Function applied to the variables, for functional placeholders.
    pub fun_name: Option<String>,
    /// Scale factor after `*`, for plain placeholders.
    pub factor: Option<f64>,
}

impl Placeholder {
    /// Parse a token, returning `None` if it is not a legal placeholder.
    pub fn parse(text: &str) -> Option<Self> {
        let tokens: Vec<Token<'_>> = Token::lexer(text).collect::<Result<_, _>>().ok()?;
        let (negated, rest) = match tokens.split_first() {
            Some((Token::Minus, rest)) => (true, rest),
            Some(_) => (false, tokens.as_slice()),
            None => return None,
        };

        match rest {
            [Token::VarRef(n)] => Some(Self {
                negated,
                var_nums: vec![*n],
                fun_name: None,
                factor: None,
            }),
            [Token::VarRef(n), Token::Star, Token::Number(f)] => Some(Self {
                negated,
                var_nums: vec![*n],
                fun_name: None,
                factor: Some(*f),
            }),
            [Token::VarRef(n), Token::Star, Token::Minus, Token::Number(f)] => Some(Self {
                negated,
                var_nums: vec![*n],
                fun_name: None,
                factor: Some(-*f),
            }),
            [Token::Ident(name), vars @ ..] if !vars.is_empty() => {
                let var_nums = vars
                    .iter()
                    .map(|t| match t {
                        Token::VarRef(n) => Some(*n),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()?;
                Some(Self {
                    negated,
                    var_nums,
                    fun_name: Some((*name).to_string()),
                    factor: None,
                })
            }
            _ => None,
        }
    }

    /// Whether this placeholder is passed through a named function.
    pub fn is_functional(&self) -> bool {
        self.fun_name.is_some()
    }
}

/// Classification and extraction rules for placeholder tokens.
///
/// The default implementation is [`HashPlaceholders`]; callers binding
/// parameters through a different token grammar can supply their own.
pub trait PlaceholderResolver {
    /// Is `token` a legal placeholder reference?
    fn is_legal(&self, token: &str) -> bool;

    /// Variable numbers referenced by `token` (empty if not legal).
    fn var_nums(&self, token: &str) -> Vec<u32>;

    /// Function name embedded in `token`, if any.
    fn fun_name(&self, token: &str) -> Option<String>;
}

/// The `#n` placeholder grammar described at the top of this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashPlaceholders;

impl PlaceholderResolver for HashPlaceholders {
    fn is_legal(&self, token: &str) -> bool {
        Placeholder::parse(token).is_some()
    }

    fn var_nums(&self, token: &str) -> Vec<u32> {
        Placeholder::parse(token)
            .map(|p| p.var_nums)
            .unwrap_or_default()
    }

    fn fun_name(&self, token: &str) -> Option<String> {
        Placeholder::parse(token).and_then(|p| p.fun_name)
    }
}
