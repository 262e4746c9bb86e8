//! Configuration types deserialized from `recast.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `recast.toml`.
///
/// Every section is optional; an empty file yields [`RecastConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecastConfig {
    /// Output layout settings.
    #[serde(default)]
    pub format: FormatConfig,
    /// How degraded input is reported.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Output layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Spaces per nesting level.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    /// Widest padding ever emitted, in characters.
    #[serde(default = "default_max_indent")]
    pub max_indent: usize,
    /// Emit the `// synopsys full_case parallel_case` line for flagged cases.
    #[serde(default = "default_true")]
    pub case_pragmas: bool,
    /// Emit `; // NOOP` for function and task bodies without statements.
    #[serde(default = "default_true")]
    pub noop_bodies: bool,
}

fn default_tab_width() -> usize {
    4
}

fn default_max_indent() -> usize {
    80
}

fn default_true() -> bool {
    true
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            max_indent: default_max_indent(),
            case_pragmas: true,
            noop_bodies: true,
        }
    }
}

/// How the printer reports input it cannot render faithfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Node kinds without a rendering rule.
    #[serde(default)]
    pub unhandled_nodes: UnhandledPolicy,
    /// Nesting deeper than `format.max_indent` can represent.
    #[serde(default)]
    pub indent_overflow: WarnPolicy,
    /// Sized constants whose declared width disagrees with their bit planes.
    #[serde(default)]
    pub malformed_constants: WarnPolicy,
}

/// Policy for node kinds the printer has no rendering rule for.
///
/// Output is identical under every policy: the node renders as nothing.
/// Only the reporting differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledPolicy {
    /// Render nothing and stay silent.
    Ignore,
    /// Render nothing and emit a warning (default).
    #[default]
    Warn,
    /// Render nothing, emit an error and fail the render.
    Deny,
}

/// Policy for recoverable irregularities that have a fallback rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarnPolicy {
    /// Apply the fallback silently.
    Ignore,
    /// Apply the fallback and emit a warning (default).
    #[default]
    Warn,
}

impl WarnPolicy {
    /// Returns `true` if the irregularity should be reported.
    pub fn warns(self) -> bool {
        self == WarnPolicy::Warn
    }
}
