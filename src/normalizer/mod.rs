// Comment-block normalization: options modeling and the run interface.
// The transformation passes themselves live in the pipeline submodule.

use anyhow::Result;

pub mod pipeline;

// Re-export the individual passes for callers that compose their own runs
pub use pipeline::{join_sentences, strip_indentation, strip_marker};

/// Hash marker used by shell, Ruby and Python style comments
pub const SYMBOL_HASH: &str = "#";
/// Double-slash marker used by C-family comments
pub const SYMBOL_SLASH: &str = "//";
/// Marker assumed when none is configured
pub const SYMBOL_DEFAULT: &str = SYMBOL_SLASH;

/// Paragraph-break repetitions assumed when none are configured
const DEFAULT_JOIN: usize = 1;

/// Line-separator convention used both to split the input into lines and to
/// render paragraph breaks in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineStyle {
    /// Classic Mac OS endings (`"\r"`)
    Cr,
    /// Unix endings (`"\n"`); the explicit fallback for unset configurations
    #[default]
    Lf,
    /// DOS/Windows endings (`"\r\n"`)
    CrLf,
}

impl NewlineStyle {
    /// Literal separator string for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            NewlineStyle::Cr => "\r",
            NewlineStyle::Lf => "\n",
            NewlineStyle::CrLf => "\r\n",
        }
    }
}

/// Configuration for one normalization run
///
/// The default value is the unset shape: an empty `symbol` and a zero `join`
/// mean "use the built-in default" and are filled in by [`Options::resolve`]
/// before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Comment marker to strip; empty selects [`SYMBOL_DEFAULT`]
    pub symbol: String,
    /// Separator convention the input is assumed to use throughout
    pub newline: NewlineStyle,
    /// Extra separator repetitions per paragraph break; zero selects 1
    pub join: usize,
}

impl Options {
    /// Return a fully-resolved copy with defaults applied
    ///
    /// The receiver is left untouched, so one `Options` value can be reused
    /// across runs without picking up filled-in defaults.
    pub fn resolve(&self) -> Options {
        let mut resolved = self.clone();
        if resolved.symbol.is_empty() {
            resolved.symbol = SYMBOL_DEFAULT.to_string();
        }
        if resolved.join == 0 {
            resolved.join = DEFAULT_JOIN;
        }
        resolved
    }
}

/// Comment-block normalizer applying the full transformation pipeline
///
/// Holds a resolved options copy and can be applied to any number of inputs.
pub struct Normalizer {
    options: Options,
}

impl Normalizer {
    /// Create a normalizer, resolving unset options to their defaults
    pub fn new(options: Options) -> Self {
        Self {
            options: options.resolve(),
        }
    }

    /// Create a normalizer with default options (`//` marker, LF, join 1)
    pub fn with_default_options() -> Self {
        Self::new(Options::default())
    }

    /// Normalize a comment block into flowing prose
    ///
    /// Strips per-line indentation and every occurrence of the configured
    /// marker, then rejoins the surviving lines into space-joined sentences
    /// with blank-line paragraph breaks rendered as `join + 1` separators.
    ///
    /// Currently always succeeds; the fallible signature leaves room for
    /// input validation.
    pub fn normalize(&self, input: &str) -> Result<String> {
        Ok(pipeline::run(input, &self.options))
    }
}

/// Normalize one input with the given options, without keeping a
/// [`Normalizer`] around
pub fn normalize(input: &str, options: &Options) -> Result<String> {
    Normalizer::new(options.clone()).normalize(input)
}
