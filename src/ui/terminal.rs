//! What the attached terminal can display

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

/// Variables set by common CI providers
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TEAMCITY_VERSION",
];

/// Either of these disables color, whatever the value
const NO_COLOR_VARS: &[&str] = &["NO_COLOR", "SWEEP_NO_COLOR"];

pub fn detect_capabilities() -> TerminalCapabilities {
    let env = |key: &str| std::env::var(key).ok();
    detect_with(env, std::io::stdout().is_terminal())
}

fn detect_with(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let color_disabled = NO_COLOR_VARS.iter().any(|key| env(key).is_some());

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !color_disabled,
        supports_unicode: !dumb && locale_is_unicode(&env),
        is_ci: CI_VARS.iter().any(|key| env(key).is_some()),
    }
}

/// The first non-empty locale variable decides; no locale at all means UTF-8
fn locale_is_unicode(env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| env(key))
        .find(|value| !value.is_empty());

    match locale {
        None => true,
        Some(value) => {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8")
                || value.contains("utf8")
                || !(value == "c" || value == "posix" || value.starts_with("c."))
        }
    }
}
