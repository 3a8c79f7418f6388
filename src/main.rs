use std::path::PathBuf;

use clap::Parser;

use mdhtml::{Config, SiteError, Template};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML pages")]
struct Cli {
    /// Input Markdown file, or a directory to convert recursively
    input: PathBuf,

    /// Output HTML file or directory (defaults to the input with an .html
    /// extension for files, `public` for directories)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Page template, overriding `template.path` from the config
    #[arg(short, long)]
    template: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SiteError> {
    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.template {
        config.template.path = Some(path);
    }
    let template = Template::from_config(&config.template)?;

    if cli.input.is_dir() {
        let output = cli.output.unwrap_or_else(|| PathBuf::from("public"));
        let written = mdhtml::generate_site(&cli.input, &output, &template, &config)?;
        println!("Created {} pages in {}", written.len(), output.display());
    } else {
        let output = cli
            .output
            .unwrap_or_else(|| cli.input.with_extension("html"));
        mdhtml::generate_page(&cli.input, &output, &template, &config)?;
        println!("Created {}", output.display());
    }
    Ok(())
}
