//! Top-level command of the vpntoproxy binary.
//!
//! The command itself only carries identity and help text. Every flag is
//! declared by the configuration schema while it is resolved.
//!
//! This file is also compiled into the build script, so it may only depend
//! on clap.

use clap::Command;

/// Name of the binary, also used for generated man pages and completions.
pub const BIN_NAME: &str = "vpntoproxy";

/// Build the command the schema flags are declared on.
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Route traffic through VPN containers via per-container proxies")
        .long_about(
            "Resolve the vpntoproxy configuration from the group files in ./configs, \
             environment variables and the flags below, then print it as JSON.\n\n\
             Every flag defaults to the value taken from its group file or \
             environment variable.",
        )
}
