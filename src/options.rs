/// Grammar variant selector.
///
/// [`Strict`] is the JSON grammar: double-quoted strings only, no trailing
/// commas, explicit `null`. [`Permissive`] additionally accepts single-quoted
/// strings, trailing commas in objects and arrays, and implicit-null array
/// holes (`[1,,2]`).
///
/// [`Strict`]: Mode::Strict
/// [`Permissive`]: Mode::Permissive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Strict,
    Permissive,
}

/// Parser configuration, passed explicitly to the `_with` entry points.
///
/// There is deliberately no global mode switch: two parses with different
/// options never interfere.
///
/// ```
/// # use jsonish::{ParseOptions, Value};
/// #
/// let options = ParseOptions::permissive();
/// let value = Value::from_str_with("{'a': 1,}", &options).unwrap();
/// assert_eq!(value["a"], Value::Number(1.0));
///
/// assert!(Value::from_str_with("{'a': 1,}", &ParseOptions::strict()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: Mode,
    /// Maximum container nesting depth. Exceeding it is a parse error rather
    /// than a stack overflow.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Strict,
            max_depth: 128,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        Self {
            mode: Mode::Permissive,
            ..Self::default()
        }
    }

    pub(crate) fn is_permissive(&self) -> bool {
        self.mode == Mode::Permissive
    }
}
