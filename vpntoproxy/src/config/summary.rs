//! Human-readable listing of a resolved tree.

use crate::config::group::{Leaf, Schema, Visitor};
use crate::error::Result;

/// Lines of the form `Group.Field: value`, one per leaf, in walk order.
///
/// # Errors
///
/// Returns an error if a collection leaf cannot be encoded.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::{summarize, Config};
///
/// let mut config = Config::default();
/// let lines = summarize(&mut config).unwrap();
/// assert_eq!(lines[0], "Basic.Debug: false");
/// ```
pub fn summarize<S: Schema>(tree: &mut S) -> Result<Vec<String>> {
    let mut summary = Summary::default();
    tree.walk(&mut summary)?;
    Ok(summary.lines)
}

/// Log [`summarize`] at debug level.
///
/// # Errors
///
/// See [`summarize`].
pub fn log_summary<S: Schema>(tree: &mut S) -> Result<()> {
    for line in summarize(tree)? {
        log::debug!("{line}");
    }
    Ok(())
}

#[derive(Default)]
struct Summary {
    lines: Vec<String>,
}

impl Visitor for Summary {
    fn leaf(&mut self, group: &'static str, leaf: Leaf<'_>) -> Result<()> {
        let value = leaf.value.render()?;
        self.lines.push(format!("{group}.{}: {value}", leaf.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;

    #[test]
    fn test_summary_lists_every_leaf_in_order() {
        let mut config = Config::default();
        config.docker.dns = vec!["8.8.8.8".to_string()];
        config.proxy.test_url = "http://example.com".to_string();

        let lines = summarize(&mut config).unwrap();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "Basic.Debug: false");
        assert_eq!(lines[1], "Server.Port: 0");
        assert!(lines.contains(&r#"Docker.DNS: ["8.8.8.8"]"#.to_string()));
        assert!(lines.contains(&"Proxy.TestURL: http://example.com".to_string()));
        assert_eq!(lines[15], "Log.Compress: false");
    }
}
