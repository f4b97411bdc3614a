//! Configuration schema of the vpntoproxy service.
//!
//! Each group below is persisted in its own file under the configs
//! directory and can be overridden per field through environment variables
//! and command-line flags.

use serde::{Deserialize, Serialize};

use crate::config::group::{Group, Leaf, Schema, Visitor};
use crate::error::Result;

/// The resolved configuration tree.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.server.port, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Basic parameters.
    pub basic: Basic,
    /// HTTP server parameters.
    pub server: Server,
    /// Parameters for working with containers.
    pub docker: Docker,
    /// Parameters for proxying traffic through a container.
    pub proxy: Proxy,
    /// Log rotation parameters.
    pub log: Log,
}

impl Schema for Config {
    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.group(&mut self.basic)?;
        v.group(&mut self.server)?;
        v.group(&mut self.docker)?;
        v.group(&mut self.proxy)?;
        v.group(&mut self.log)
    }
}

/// Basic parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Basic {
    /// Debug mode.
    pub debug: bool,
}

impl Group for Basic {
    const NAME: &'static str = "Basic";

    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.leaf(
            Self::NAME,
            Leaf::boolean("Debug", "false", &mut self.debug).describe("Debug mode"),
        )
    }
}

/// HTTP server parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Server {
    /// Listening port.
    pub port: i64,
}

impl Group for Server {
    const NAME: &'static str = "Server";

    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.leaf(Self::NAME, Leaf::integer("Port", "8080", &mut self.port))
    }
}

/// Parameters for working with containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Docker {
    /// Image the VPN containers are created from.
    pub image_name: String,
    /// How many ports are tried when looking for a free one.
    pub max_attempts: i64,
    /// Prefix of container names.
    pub service_prefix: String,
    /// DNS servers handed to containers.
    pub dns: Vec<String>,
    /// Proxy port inside the container.
    pub proxy_port: i64,
    /// Proxy user.
    pub proxy_user: String,
    /// Proxy password.
    pub proxy_password: String,
}

impl Group for Docker {
    const NAME: &'static str = "Docker";

    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.leaf(
            Self::NAME,
            Leaf::string("ImageName", "vpnwithproxy", &mut self.image_name)
                .describe("Image the VPN containers are created from"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::integer("MaxAttempts", "10", &mut self.max_attempts)
                .describe("Attempts when searching for a free port"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::string("ServicePrefix", "vpn_", &mut self.service_prefix)
                .describe("Prefix of container names"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::collection("DNS", r#"["8.8.8.8", "8.8.4.4"]"#, &mut self.dns)
                .describe("DNS servers handed to containers"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::integer("ProxyPort", "1080", &mut self.proxy_port)
                .describe("Proxy port inside the container"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::string("ProxyUser", "user", &mut self.proxy_user).describe("Proxy user"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::string("ProxyPassword", "password", &mut self.proxy_password)
                .describe("Proxy password"),
        )
    }
}

/// Parameters for proxying traffic through a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Proxy {
    /// First host port tried when publishing a proxy.
    pub starting_port: i64,
    /// URL fetched through a proxy to check it works.
    pub test_url: String,
}

impl Group for Proxy {
    const NAME: &'static str = "Proxy";

    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.leaf(
            Self::NAME,
            Leaf::integer("StartingPort", "9001", &mut self.starting_port)
                .describe("First host port tried when publishing a proxy"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::string("TestURL", "http://httpbin.org/ip", &mut self.test_url)
                .describe("URL fetched through a proxy to check it"),
        )
    }
}

/// Log rotation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Log {
    /// Output mode: `file`, `multi` or anything else for stdout.
    pub mode: String,
    /// Megabytes per log file.
    pub max_size: i64,
    /// Rotated files kept.
    pub max_backups: i64,
    /// Days rotated files are kept.
    pub max_age: i64,
    /// Compress rotated files.
    pub compress: bool,
}

impl Group for Log {
    const NAME: &'static str = "Log";

    fn walk<V: Visitor>(&mut self, v: &mut V) -> Result<()> {
        v.leaf(
            Self::NAME,
            Leaf::string("Mode", "file", &mut self.mode).describe("Log output mode"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::integer("MaxSize", "10", &mut self.max_size).describe("Megabytes per log file"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::integer("MaxBackups", "10", &mut self.max_backups)
                .describe("Rotated log files kept"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::integer("MaxAge", "28", &mut self.max_age)
                .describe("Days rotated log files are kept"),
        )?;
        v.leaf(
            Self::NAME,
            Leaf::boolean("Compress", "true", &mut self.compress)
                .describe("Compress rotated log files"),
        )
    }
}
