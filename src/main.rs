use clap::Parser;
use pomsort::{PomSortError, PomSorter, SortConfig};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Shows the canonical element order of a Maven pom.xml, or checks that the file
/// already follows it.
#[derive(Parser, Debug)]
#[command(name = "pomsort", version)]
struct Cli {
    /// The project descriptor to inspect.
    pom: PathBuf,

    /// JSON configuration file; command line switches override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Order <dependency> entries by groupId and artifactId.
    #[arg(long)]
    sort_dependencies: bool,

    /// Order <plugin> entries by groupId and artifactId.
    #[arg(long)]
    sort_plugins: bool,

    /// Predefined sort order (recommended_2008_06, default_1_0_0).
    #[arg(long, value_name = "NAME")]
    order: Option<String>,

    /// Custom sort order template, replacing the predefined order.
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Character encoding of the pom and the template.
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Only check the order; exits with status 1 if the pom is not sorted.
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pomsort: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, PomSortError> {
    let mut config = match &cli.config {
        Some(path) => SortConfig::from_json(&fs::read_to_string(path)?)?,
        None => SortConfig::default(),
    };
    config.sort_dependencies |= cli.sort_dependencies;
    config.sort_plugins |= cli.sort_plugins;
    if let Some(order) = &cli.order {
        config.predefined_sort_order = order.parse()?;
    }
    if let Some(template) = cli.template {
        config.custom_sort_order_file = Some(template);
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }

    let sorter = PomSorter::new(&config)?;
    if cli.verify {
        if sorter.verify_file(&cli.pom)? {
            println!("{} is sorted", cli.pom.display());
            Ok(ExitCode::SUCCESS)
        } else {
            println!("{} is not sorted", cli.pom.display());
            Ok(ExitCode::from(1))
        }
    } else {
        print!("{}", sorter.outline_file(&cli.pom)?);
        Ok(ExitCode::SUCCESS)
    }
}
