use crate::constants::{
    default_builtins, DEFAULT_FORMATTER_COMMAND, DEFAULT_MAX_FUNCTION_STATEMENTS,
    DEFAULT_STYLE_COMMAND,
};
use crate::scope::ScopeMode;
use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Configuration for a [`crate::engine::ReviewEngine`].
///
/// There is no configuration file format; every tunable is caller-supplied
/// and defaults match the reference behavior.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Threshold for the long-function detector (immediate body statements).
    pub max_function_statements: usize,
    /// Definedness policy of the scope analyzer.
    pub scope_mode: ScopeMode,
    /// The builtin identifier set. Read-only input, never mutated.
    pub builtins: FxHashSet<CompactString>,
    /// Command invoked for the external style check.
    pub style_command: String,
    /// Command invoked for the external formatting pass.
    pub formatter_command: String,
    /// Upper bound on external tool runtime. `None` leaves it unbounded.
    pub tool_timeout: Option<Duration>,
    /// Whether the style detector runs at all.
    pub enable_style: bool,
    /// Whether the formatting stage runs at all.
    pub enable_format: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_function_statements: DEFAULT_MAX_FUNCTION_STATEMENTS,
            scope_mode: ScopeMode::SinglePass,
            builtins: default_builtins()
                .iter()
                .map(|name| CompactString::from(*name))
                .collect(),
            style_command: DEFAULT_STYLE_COMMAND.to_owned(),
            formatter_command: DEFAULT_FORMATTER_COMMAND.to_owned(),
            tool_timeout: Some(Duration::from_secs(30)),
            enable_style: true,
            enable_format: true,
        }
    }
}

impl EngineConfig {
    /// Builder-style method to set the long-function threshold.
    #[must_use]
    pub fn with_max_function_statements(mut self, threshold: usize) -> Self {
        self.max_function_statements = threshold;
        self
    }

    /// Builder-style method to set the scope analysis mode.
    #[must_use]
    pub fn with_scope_mode(mut self, mode: ScopeMode) -> Self {
        self.scope_mode = mode;
        self
    }

    /// Builder-style method to inject a builtin identifier set.
    #[must_use]
    pub fn with_builtins(mut self, builtins: FxHashSet<CompactString>) -> Self {
        self.builtins = builtins;
        self
    }

    /// Builder-style method to set the style tool command.
    #[must_use]
    pub fn with_style_command(mut self, command: impl Into<String>) -> Self {
        self.style_command = command.into();
        self
    }

    /// Builder-style method to set the formatter command.
    #[must_use]
    pub fn with_formatter_command(mut self, command: impl Into<String>) -> Self {
        self.formatter_command = command.into();
        self
    }

    /// Builder-style method to bound external tool runtime.
    #[must_use]
    pub fn with_tool_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Builder-style method to enable or disable the style detector.
    #[must_use]
    pub fn with_style(mut self, enabled: bool) -> Self {
        self.enable_style = enabled;
        self
    }

    /// Builder-style method to enable or disable the formatting stage.
    #[must_use]
    pub fn with_format(mut self, enabled: bool) -> Self {
        self.enable_format = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_function_statements, 20);
        assert_eq!(config.scope_mode, ScopeMode::SinglePass);
        assert!(config.builtins.contains("print"));
        assert!(config.enable_style);
    }

    #[test]
    fn test_builder_chain() {
        let config = EngineConfig::default()
            .with_max_function_statements(5)
            .with_scope_mode(ScopeMode::TwoPhase)
            .with_style(false);
        assert_eq!(config.max_function_statements, 5);
        assert_eq!(config.scope_mode, ScopeMode::TwoPhase);
        assert!(!config.enable_style);
    }
}
