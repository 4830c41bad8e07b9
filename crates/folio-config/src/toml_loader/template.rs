//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Folio Configuration
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-2.5-flash"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 500    # 1-8192
# timeout_secs = 30          # 1-300
# api_key_env = "GEMINI_API_KEY"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"

[content]
# Portfolio content file (profile, projects, experience, skills).
# Leave unset to use the built-in content.
# path = "/path/to/portfolio.toml"

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
