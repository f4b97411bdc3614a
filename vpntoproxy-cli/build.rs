//! Build script for vpntoproxy-cli.
//!
//! Generates the man page and shell completions at build time. The flags
//! come from the configuration schema, with built-in defaults shown.

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use vpntoproxy::config::{Config, FlagBinder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    let completions_dir = out_dir.join("completions");
    fs::create_dir_all(&man_dir)?;
    fs::create_dir_all(&completions_dir)?;

    let mut app = FlagBinder::describe::<Config>(cli::command())?;

    let man = Man::new(app.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join(format!("{}.1", cli::BIN_NAME)), buffer)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut app, cli::BIN_NAME, &completions_dir)?;
    }

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=../vpntoproxy/src/config/schema.rs");
    Ok(())
}
