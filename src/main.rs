use anyhow::Result;
use clap::Parser;
use dpkgweb::commands::{Config, OutputFormat, generate};
use dpkgweb::runtime::RealRuntime;
use std::path::PathBuf;

/// dpkgweb - browse installed Debian packages as static HTML
///
/// Reads the dpkg status database and writes an index page plus one page per
/// installed package, linking each package to its dependencies and reverse
/// dependencies.
///
/// Examples:
///   dpkgweb                       # Write pages for /var/lib/dpkg/status into .
///   dpkgweb --output /tmp/site    # Write pages into /tmp/site
#[derive(Parser, Debug)]
#[command(author, version = env!("DPKGWEB_VERSION"), about)]
struct Cli {
    /// dpkg status database to read (defaults to /var/lib/dpkg/status)
    #[arg(long = "status", short = 's', env = "DPKGWEB_STATUS", value_name = "PATH")]
    pub status_path: Option<PathBuf>,

    /// Directory to write the output into (defaults to the current directory)
    #[arg(long = "output", short = 'o', env = "DPKGWEB_OUTPUT", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", short = 'f', value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.status_path, cli.output_dir, cli.format);

    let report = generate(&RealRuntime, &config)?;
    println!(
        "{} package(s) from {} written to {}",
        report.links.records,
        config.status_path.display(),
        config.output_dir.display()
    );
    println!("Program finished!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::try_parse_from(["dpkgweb"]).unwrap();
        assert_eq!(cli.format, None);
        let config = Config::new(cli.status_path, cli.output_dir, cli.format);
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_cli_paths_parsing() {
        let cli = Cli::try_parse_from([
            "dpkgweb",
            "--status",
            "/tmp/status",
            "-o",
            "/tmp/site",
        ])
        .unwrap();
        assert_eq!(cli.status_path, Some(PathBuf::from("/tmp/status")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_cli_format_parsing() {
        let cli = Cli::try_parse_from(["dpkgweb", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));

        let result = Cli::try_parse_from(["dpkgweb", "--format", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["dpkgweb", "extra"]);
        assert!(result.is_err());
    }
}
