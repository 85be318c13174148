//! CLI entry point for filestruct

use std::io::{IsTerminal, Write};
use std::path::{Component, Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use filestruct::{Error, OutputConfig, SiblingOrder, TreeConfig, default_output_path, generate_with};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Sibling order as accepted on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OrderArg {
    /// Sort entries by name (reproducible)
    #[default]
    Name,
    /// Keep the order the filesystem lists entries in
    Native,
}

impl From<OrderArg> for SiblingOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Name => SiblingOrder::Name,
            OrderArg::Native => SiblingOrder::Native,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filestruct")]
#[command(about = "Write the folder and file layout of a directory to a text file")]
#[command(version)]
struct Args {
    /// Directory to describe (default: the directory containing this program)
    path: Option<PathBuf>,

    /// File to write (default: file_structure.txt inside the directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Order of entries within a directory
    #[arg(long = "order", value_name = "ORDER", default_value = "name")]
    order: OrderArg,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Directory holding the running executable; the default root.
fn executable_dir() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe().map_err(|source| Error::ExecutableDir { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::ExecutableDir {
            source: std::io::Error::other("executable path has no parent"),
        })
}

/// Make `path` absolute against the current directory.
fn absolutize(path: PathBuf) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|source| Error::CurrentDir { source })?;
    Ok(cwd.join(path))
}

/// Drop `.` and resolve `..` components without touching the filesystem,
/// so the root's last component is the name of the directory it denotes.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the filesystem root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

fn print_confirmation(output: &Path, use_color: bool) -> std::io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write!(stdout, "File structure written to ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{}", output.display())?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

fn run(args: &Args) -> Result<PathBuf, Error> {
    // The program's own location is only a default, decided here
    let root = match &args.path {
        Some(p) => normalize(&absolutize(p.clone())?),
        None => executable_dir()?,
    };

    let output_config = OutputConfig::default();
    let output = match &args.output {
        Some(p) => absolutize(p.clone())?,
        None => default_output_path(&root, &output_config),
    };

    let tree_config = TreeConfig::new(root).with_order(args.order.into());
    generate_with(tree_config, &output_config, &output)?;
    Ok(output)
}

fn main() {
    let args = Args::parse();
    filestruct::logging::init(args.verbose);

    let output = run(&args).unwrap_or_else(|e| {
        eprintln!("filestruct: {}", e);
        process::exit(1);
    });

    if let Err(e) = print_confirmation(&output, should_use_color(args.color)) {
        eprintln!("filestruct: error writing output: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_parent_and_current() {
        assert_eq!(
            normalize(Path::new("/tmp/proj/inner/..")),
            PathBuf::from("/tmp/proj")
        );
        assert_eq!(
            normalize(Path::new("/tmp/./proj/./inner/../../proj")),
            PathBuf::from("/tmp/proj")
        );
        assert_eq!(normalize(Path::new("/tmp/proj/.")), PathBuf::from("/tmp/proj"));
    }

    #[test]
    fn test_normalize_stops_at_filesystem_root() {
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/a/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_absolutize_keeps_absolute_paths() {
        let abs = PathBuf::from("/var/data");
        assert_eq!(absolutize(abs.clone()).unwrap(), abs);
        assert!(absolutize(PathBuf::from("rel")).unwrap().is_absolute());
    }
}
