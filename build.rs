use clap::CommandFactory;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[allow(dead_code)]
#[path = "src/cli/args.rs"]
mod args;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let git_hash = run("git", &["rev-parse", "--short", "HEAD"]);
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = run(&rustc, &["--version"]);
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=RUSTC_VERSION={}", rustc_version);

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_else(|| "target".into()));
    write_man_pages(&args::Cli::command(), &out_dir.join("man"))
}

/// Trimmed stdout of a command, or `unknown` if it cannot be run.
fn run(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// One page for the binary and one per subcommand, e.g. `sourcemap-remap-flatten.1`.
fn write_man_pages(cmd: &clap::Command, dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let name = cmd.get_name().to_string();
    render(cmd.clone(), &dir.join(format!("{}.1", name)))?;

    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        let page = sub.clone().name(format!("{}-{}", name, sub.get_name()));
        render(page, &dir.join(format!("{}-{}.1", name, sub.get_name())))?;
    }
    Ok(())
}

fn render(cmd: clap::Command, path: &Path) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer)
}
