use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type ToolResult<T> = Result<T, Box<dyn std::error::Error>>;

const MANIFEST: &str = "Cargo.toml";

/// How the version should move.
enum Bump {
    Major,
    Minor,
    Patch,
    Exact(String),
}

fn parse_version(version: &str) -> ToolResult<[u64; 3]> {
    let parts = version
        .split('.')
        .map(|part| part.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Unsupported version format: {}", version))?;
    match parts[..] {
        [major, minor, patch] => Ok([major, minor, patch]),
        _ => Err(format!("Expected MAJOR.MINOR.PATCH, found {}", version).into()),
    }
}

impl Bump {
    fn parse(arg: &str) -> ToolResult<Self> {
        match arg {
            "major" => Ok(Bump::Major),
            "minor" => Ok(Bump::Minor),
            "patch" => Ok(Bump::Patch),
            other => {
                let version = other.strip_prefix('v').unwrap_or(other);
                parse_version(version)
                    .map_err(|_| format!("Unknown argument or version: {}", other))?;
                Ok(Bump::Exact(version.to_string()))
            }
        }
    }

    fn apply(&self, current: &str) -> ToolResult<String> {
        let [major, minor, patch] = parse_version(current)?;

        Ok(match self {
            Bump::Major => format!("{}.0.0", major + 1),
            Bump::Minor => format!("{}.{}.0", major, minor + 1),
            Bump::Patch => format!("{}.{}.{}", major, minor, patch + 1),
            Bump::Exact(version) => version.clone(),
        })
    }
}

fn confirm(message: &str) -> io::Result<bool> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn git(args: &[&str]) -> ToolResult<String> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(format!("git {} failed", args.join(" ")).into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn release_notes() -> ToolResult<String> {
    match git(&["describe", "--tags", "--abbrev=0"]) {
        Ok(tag) => git(&["log", "--pretty=format:- %s", &format!("{}..HEAD", tag)]),
        // No tags yet, so every commit goes in
        Err(_) => git(&["log", "--pretty=format:- %s"]),
    }
}

fn run(program: &str, args: &[&str]) -> ToolResult<()> {
    println!("Executing: {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return Err(format!("{} {} failed", program, args.join(" ")).into());
    }
    Ok(())
}

fn main() -> ToolResult<()> {
    let mut dry_run = false;
    let mut bump = Bump::Patch;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            other => bump = Bump::parse(other)?,
        }
    }

    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find package.version in Cargo.toml")?
        .to_string();
    let next = bump.apply(&current)?;

    let notes = release_notes()?;
    println!("Releasing {} -> {}", current, next);
    if notes.is_empty() {
        println!("Warning: no commits since the previous release.");
    } else {
        println!("Release notes:\n{}", notes);
    }

    if dry_run {
        println!("Dry run, nothing changed.");
        return Ok(());
    }
    if !confirm(&format!("Ready to release version {}?", next))? {
        println!("Release aborted.");
        return Ok(());
    }

    doc["package"]["version"] = Item::from(next.as_str());
    fs::write(MANIFEST, doc.to_string())?;
    println!("Updated {} to version {}", MANIFEST, next);

    // Refresh Cargo.lock before committing it
    run("cargo", &["check", "--quiet"])?;

    let tag = format!("v{}", next);
    run("git", &["add", "Cargo.toml", "Cargo.lock"])?;
    run("git", &["commit", "-m", &format!("Bump version to {}", next)])?;
    run("git", &["tag", "-a", &tag, "-m", &format!("Version {}", next)])?;
    run("git", &["push"])?;
    run("git", &["push", "--tags"])?;

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"])?;
    }

    if confirm("Create GitHub release?")? {
        run("gh", &["release", "create", &tag, "--title", &tag, "--notes", &notes])?;
    }

    println!("Released version {}", next);
    Ok(())
}
