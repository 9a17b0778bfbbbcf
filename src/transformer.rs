use std::borrow::Cow;

use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_PREFIX: &str = "flag";

lazy_static! {
    static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+"
    )
    .expect("invalid WHITESPACE_RUN_REGEX");
    static ref UNDERSCORE_RUN_REGEX: Regex =
        Regex::new("_+").expect("invalid UNDERSCORE_RUN_REGEX");
    static ref NOT_UPPER_ALNUM_REGEX: Regex =
        Regex::new("[^A-Z0-9]").expect("invalid NOT_UPPER_ALNUM_REGEX");
}

/// Transform policy applied to the flag body.
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Leetspeak substitution, whitespace runs become `_`, prefix is configurable.
    #[default]
    Substitution,
    /// Uppercase, anything outside `[A-Z0-9]` becomes `_`, prefix is always `flag`.
    Strict,
}

/// Turns free-form text into a `prefix{body}` token.
///
/// The transform is pure and total: it never fails, even on blank input,
/// so callers guard with [`is_blank`] before invoking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTransformer {
    mode: Mode,
    prefix: String,
}

impl FlagTransformer {
    pub fn new(mode: Mode, prefix: &str) -> Self {
        let mut transformer = FlagTransformer {
            mode,
            prefix: DEFAULT_PREFIX.to_string(),
        };
        transformer.set_prefix(prefix);

        transformer
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns false when the prefix was ignored because of strict mode.
    pub fn set_prefix(&mut self, prefix: &str) -> bool {
        match self.mode {
            Mode::Substitution => {
                self.prefix = prefix.to_string();

                true
            }
            Mode::Strict => {
                if prefix != DEFAULT_PREFIX {
                    warn!("strict mode uses a fixed `{DEFAULT_PREFIX}` prefix, ignoring {prefix:?}");

                    return false;
                }

                true
            }
        }
    }

    pub fn transform(&self, raw_input: &str) -> String {
        let body = match self.mode {
            Mode::Substitution => {
                let substituted: String = raw_input.chars().map(substitute).collect();

                cleanup(&WHITESPACE_RUN_REGEX.replace_all(&substituted, "_"))
            }
            Mode::Strict => {
                let upper = raw_input.to_uppercase();

                cleanup(&NOT_UPPER_ALNUM_REGEX.replace_all(&upper, "_"))
            }
        };

        format!("{}{{{}}}", self.prefix, body)
    }
}

impl Default for FlagTransformer {
    fn default() -> Self {
        FlagTransformer::new(Mode::default(), DEFAULT_PREFIX)
    }
}

fn substitute(c: char) -> char {
    match c {
        'a' | 'A' => '4',
        'e' | 'E' => '3',
        'i' | 'I' | 'l' | 'L' => '1',
        'o' | 'O' => '0',
        's' | 'S' => '5',
        't' | 'T' => '7',
        _ => c,
    }
}

/// Collapses `_` runs and strips a single leading and trailing `_`.
pub fn cleanup(body: &str) -> String {
    let collapsed: Cow<str> = UNDERSCORE_RUN_REGEX.replace_all(body, "_");

    let trimmed = collapsed.strip_prefix('_').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);

    trimmed.to_string()
}

/// Web-style whitespace: includes U+FEFF, excludes U+0085, unlike `char::is_whitespace`.
/// Must stay in sync with `WHITESPACE_RUN_REGEX`.
pub fn is_flag_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

pub fn is_blank(raw_input: &str) -> bool {
    raw_input.chars().all(is_flag_whitespace)
}
