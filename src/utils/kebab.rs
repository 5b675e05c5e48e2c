//! kebab-case conversion for npm flag names
//!
//! npm flags are hyphen-separated lowercase (`--save-dev`, `--legacy-peer-deps`),
//! while option names arrive in camelCase or snake_case. Dependency-free by
//! the same reasoning as the other small utils: the rule is tiny and fixed.

/// Convert an option name to hyphen-separated lowercase.
///
/// # Example
///
/// ```
/// use autonpm_cli::utils::kebab::kebab_case;
///
/// assert_eq!(kebab_case("saveDev"), "save-dev");
/// assert_eq!(kebab_case("legacy_peer_deps"), "legacy-peer-deps");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' || c == ' ' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }

    // A trailing separator from input like "save_" serves nothing
    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(kebab_case("saveDev"), "save-dev");
        assert_eq!(kebab_case("saveExact"), "save-exact");
        assert_eq!(kebab_case("legacyPeerDeps"), "legacy-peer-deps");
    }

    #[test]
    fn test_already_lower() {
        assert_eq!(kebab_case("save"), "save");
        assert_eq!(kebab_case("registry"), "registry");
    }

    #[test]
    fn test_snake_and_space() {
        assert_eq!(kebab_case("save_dev"), "save-dev");
        assert_eq!(kebab_case("save dev"), "save-dev");
    }

    #[test]
    fn test_already_kebab() {
        assert_eq!(kebab_case("save-dev"), "save-dev");
    }

    #[test]
    fn test_edges() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("Save"), "save");
        assert_eq!(kebab_case("save_"), "save");
    }
}
