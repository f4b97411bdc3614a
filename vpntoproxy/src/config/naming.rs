//! Key derivation for configuration leaves.
//!
//! A leaf is addressed by the name of the group that owns it and its own
//! field name, both word-capitalized (`Docker` + `ImageName`). The pair is
//! joined and converted to snake case to produce the command-line flag key
//! (`docker_image_name`); the environment key is the upper-case form of the
//! same string (`DOCKER_IMAGE_NAME`).

/// Separator inserted between words.
const SEPARATOR: char = '_';

/// Converts a word-capitalized identifier to lower snake case.
///
/// A separator is inserted before an upper-case letter unless it is the first
/// character or follows another upper-case letter, so runs of capitals such
/// as acronyms stay a single word.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("DockerImageName"), "docker_image_name");
/// assert_eq!(to_snake_case("DockerDNS"), "docker_dns");
/// assert_eq!(to_snake_case("ProxyTestURL"), "proxy_test_url");
/// ```
#[must_use]
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    let mut prev_upper = false;

    for (i, c) in identifier.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 && !prev_upper {
                out.push(SEPARATOR);
            }
            out.extend(c.to_lowercase());
            prev_upper = true;
        } else {
            out.push(c);
            prev_upper = false;
        }
    }

    out
}

/// The two keys under which a leaf can be overridden.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::naming::FieldKeys;
///
/// let keys = FieldKeys::new("Proxy", "StartingPort");
/// assert_eq!(keys.flag, "proxy_starting_port");
/// assert_eq!(keys.env, "PROXY_STARTING_PORT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeys {
    /// Command-line flag name, without leading dashes.
    pub flag: String,
    /// Environment variable name.
    pub env: String,
}

impl FieldKeys {
    /// Derives both keys for `field` inside `group`.
    #[must_use]
    pub fn new(group: &str, field: &str) -> Self {
        let flag = flag_key(group, field);
        let env = flag.to_uppercase();
        Self { flag, env }
    }
}

/// Command-line flag key for `field` inside `group`.
#[must_use]
pub fn flag_key(group: &str, field: &str) -> String {
    to_snake_case(&format!("{group}{field}"))
}

/// Environment variable key for `field` inside `group`.
#[must_use]
pub fn env_key(group: &str, field: &str) -> String {
    flag_key(group, field).to_uppercase()
}
