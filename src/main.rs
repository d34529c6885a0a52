use clap::{Parser, Subcommand};
use sitewright::{config, output, pipeline};
use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "sitewright")]
#[command(about = "Static site generator for markdown pages with photo galleries")]
#[command(long_about = "\
Static site generator for markdown pages with photo galleries

Markdown files become pages, templates are picked per page by metadata,
and gallery directories named in metadata are copied into the output.

Content structure:

  pages/
  ├── about.md                     # key: value metadata block, then markdown
  ├── home.md
  └── trips.md                     # gallerypath: photos/trips → gallery page
  templates/
  ├── base.html                    # Tera templates; pages reference by stem
  ├── default.html                 #   (template: default)
  └── gallery.html
  static/                          # Mirrored into the output root
  └── css/site.css

Recognized metadata keys:
  template:        template name (required for a page to render)
  title:           navigation title (defaults to the page id)
  order:           navigation position, ascending integer (default 100)
  show_in_navbar:  true/True/1 lists the page, anything else hides it
  gallerypath:     image directory to copy and expose as `images`

Run 'sitewright gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Also print per-file debug events (skipped files, asset copies)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: pages, galleries, and static assets
    Build,
    /// Validate content without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        eprintln!();
        eprintln!("Build FAILED. Website NOT generated.");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            let verbose = cli.verbose;

            let (tx, rx) = mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    if !verbose && output::is_debug_event(&event) {
                        continue;
                    }
                    for line in output::format_build_event(&event) {
                        println!("{line}");
                    }
                }
            });

            let summary = pipeline::build(&config, Some(tx))?;
            printer.join().unwrap();

            for line in output::format_summary(&summary) {
                println!("{line}");
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let report = pipeline::check(&config)?;
            for line in output::format_check_report(&report) {
                println!("{line}");
            }
            println!("Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
