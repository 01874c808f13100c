//! Static catalog of dashboard server commands and tab completion.
//!
//! These lists are a UI convenience only: the channel transmits whatever
//! the operator typed, recognized verb or not, and never consults them.

/// Curated subset surfaced in the quick-pick overlay.
pub const QUICK_COMMANDS: &[&str] = &[
    "load ",
    "play",
    "pause",
    "stop",
    "robotmode",
    "safetystatus",
    "power on",
    "brake release",
    "power off",
];

/// Full e-Series dashboard verb list used for tab completion.
pub const DASHBOARD_COMMANDS: &[&str] = &[
    "load ",
    "play",
    "stop",
    "pause",
    "quit",
    "shutdown",
    "running",
    "robotmode",
    "get loaded program",
    "popup ",
    "close popup",
    "addtolog ",
    "isprogramsaved",
    "programstate",
    "polyscopeversion",
    "set operational mode",
    "clear operational mode",
    "power on",
    "power off",
    "brake release",
    "unlock protective stop",
    "close safety popup",
    "load installation ",
    "restart safety",
    "safetystatus",
    "get operational mode",
    "is in remote control",
    "get serial number",
    "get robot model",
];

/// Quick-pick entries: the curated subset followed by any user-configured
/// templates.
pub fn picker_items(extra: &[String]) -> Vec<&str> {
    QUICK_COMMANDS
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .collect()
}

/// Complete `input` against the dashboard catalog plus `extra` templates.
///
/// The typed prefix is matched case-insensitively. A single match is
/// returned whole; several matches collapse to their longest common
/// prefix. Returns `None` for empty input or when nothing matches, in
/// which case the caller leaves the input untouched.
pub fn complete<'a>(input: &str, extra: impl IntoIterator<Item = &'a str>) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();
    let mut matches: Vec<&str> = DASHBOARD_COMMANDS
        .iter()
        .copied()
        .chain(extra)
        .filter(|cmd| cmd.to_lowercase().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => None,
        1 => Some(matches.remove(0).to_string()),
        _ => Some(common_prefix(&matches)),
    }
}

/// Longest common prefix of a non-empty slice, on char boundaries.
fn common_prefix(items: &[&str]) -> String {
    let first = items[0];
    let mut end = first.len();
    for item in &items[1..] {
        let mut shared = 0;
        for ((i, a), b) in first.char_indices().zip(item.chars()) {
            if a != b {
                break;
            }
            shared = i + a.len_utf8();
        }
        end = end.min(shared);
    }
    first[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match_completes_whole_command() {
        assert_eq!(complete("rob", []), Some("robotmode".to_string()));
        assert_eq!(complete("brake", []), Some("brake release".to_string()));
    }

    #[test]
    fn multiple_matches_complete_to_common_prefix() {
        // "power on" and "power off" share "power o"
        assert_eq!(complete("pow", []), Some("power o".to_string()));
    }

    #[test]
    fn ambiguous_matches_keep_only_the_shared_prefix() {
        // "po" matches popup, power on/off, polyscopeversion; their common
        // prefix is the input itself
        assert_eq!(complete("po", []), Some("po".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(complete("ROB", []), Some("robotmode".to_string()));
        assert_eq!(complete("Get Serial", []), Some("get serial number".to_string()));
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(complete("frobnicate", []), None);
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(complete("", []), None);
    }

    #[test]
    fn extra_templates_participate_in_completion() {
        let extra = ["setUserRole admin"];
        assert_eq!(
            complete("setuser", extra),
            Some("setUserRole admin".to_string())
        );
    }

    #[test]
    fn picker_items_appends_configured_templates() {
        let extra = vec!["popup maintenance due".to_string()];
        let items = picker_items(&extra);
        assert_eq!(items.len(), QUICK_COMMANDS.len() + 1);
        assert_eq!(items[0], "load ");
        assert_eq!(*items.last().unwrap(), "popup maintenance due");
    }

    #[test]
    fn common_prefix_handles_identical_entries() {
        assert_eq!(common_prefix(&["stop", "stop"]), "stop");
    }
}
