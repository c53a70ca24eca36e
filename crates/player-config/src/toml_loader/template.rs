//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Player window configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[poll]
# interval_ms = 500      # 50-60000, period of the backend health poll

[failures]
# max_consecutive_poll_failures = 0   # close the window after N failed polls (0 = never)
# strict_registration = false         # fail window attach if a listener cannot be registered

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
