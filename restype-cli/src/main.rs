use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use restype_build::ResourceGenerator;

#[derive(Parser)]
#[command(name = "restype")]
#[command(version)]
#[command(
    about = "Generate strongly-typed resource accessors",
    long_about = "Generates one Rust source file per resource document, exposing each \
entry as a typed getter backed by the restype runtime.\n\n\
With a file argument, only that document is processed and its module is the \
grandparent directory. With no arguments, every sibling of the current \
directory is scanned for a `resources` subdirectory and all of its `.resx` \
documents are processed into the module's `gen` directory."
)]
struct Cli {
    /// Path to a single resource document (`<module>/resources/<name>.resx`)
    resource_file: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let generator = match &cli.resource_file {
        Some(path) => ResourceGenerator::for_file(path)?,
        None => ResourceGenerator::for_siblings(Path::new(".."))?,
    };

    let outputs = generator.run()?;
    log::debug!("{} file(s) processed", outputs.len());
    for path in &outputs {
        println!("restype for {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_zero_or_one_path() {
        let cli = Cli::try_parse_from(["restype"]).unwrap();
        assert!(cli.resource_file.is_none());

        let cli = Cli::try_parse_from(["restype", "Greeter/resources/public.Messages.resx"]).unwrap();
        assert_eq!(
            cli.resource_file.as_deref(),
            Some(Path::new("Greeter/resources/public.Messages.resx"))
        );

        assert!(Cli::try_parse_from(["restype", "a.resx", "b.resx"]).is_err());
    }
}
