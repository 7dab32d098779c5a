/// Default upper bound on the number of live bindings.
pub const DEFAULT_MAX_BINDINGS: usize = 65_536;

/// Options that control a single interpreter run.
///
/// ## Usage
///
/// The command-line binary builds a `Config` from its arguments; library
/// callers usually start from [`Config::default`] and adjust fields.
///
/// ```
/// use spl::config::Config;
///
/// let config = Config { strict: true,
///                       ..Config::default() };
/// assert!(config.strict);
/// assert_eq!(config.max_bindings, spl::config::DEFAULT_MAX_BINDINGS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Abort on the first malformed line instead of skipping it.
    pub strict:       bool,
    /// Largest number of bindings the symbol stack may hold at once.
    pub max_bindings: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { strict:       false,
               max_bindings: DEFAULT_MAX_BINDINGS, }
    }
}
