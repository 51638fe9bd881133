//! Build tasks: man pages and shell completions for `prompt-score`.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use clap_mangen::Man;

const BIN_NAME: &str = "prompt-score";

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for prompt-score")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
    },
    /// Generate both man pages and completions under `target/dist`.
    Dist,
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => gen_man(&out_dir),
        Task::Completions { out_dir } => gen_completions(&out_dir),
        Task::Dist => {
            let dist = Path::new("target/dist");
            gen_man(&dist.join("man"))?;
            gen_completions(&dist.join("completions"))
        }
    }
}

fn gen_man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = prompt_score::command();

    write_man(out_dir, BIN_NAME, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("{BIN_NAME}-{}", sub.get_name());
        write_man(out_dir, &name, sub.clone())?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man(out_dir: &Path, name: &str, cmd: clap::Command) -> io::Result<()> {
    let mut buf = Vec::new();
    Man::new(cmd).render(&mut buf)?;
    fs::write(out_dir.join(format!("{name}.1")), buf)
}

fn gen_completions(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let mut cmd = prompt_score::command();
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, out_dir)?;
        println!("{}", path.display());
    }
    Ok(())
}
