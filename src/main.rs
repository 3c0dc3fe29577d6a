//! Vitae CLI
//!
//! Usage:
//!   vitae [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --template <ID>   Template to render with (1-8)
//!   --variant <NAME>      Override the template's layout variant
//!   --theme <FILE>        Theme file for colors and fonts (TOML format)
//!   -l, --list-templates  List the template catalog
//!   --sample              Print the template's sample document as JSON
//!   -h, --help            Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use vitae::{template, Document, RenderConfig, Theme, Variant};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(about = "Render resume documents to printable HTML")]
struct Cli {
    /// Input document JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Template to render with (1-8)
    #[arg(short, long, default_value_t = 1)]
    template: u8,

    /// Override the template's layout variant by name (e.g. "timeline");
    /// unknown names fall back to classic-two
    #[arg(long)]
    variant: Option<String>,

    /// Theme file for colors and fonts (TOML format)
    #[arg(long)]
    theme: Option<PathBuf>,

    /// List the template catalog
    #[arg(short, long)]
    list_templates: bool,

    /// Print the template's sample document as JSON instead of rendering
    #[arg(long)]
    sample: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_templates {
        print_templates();
        return;
    }

    let Some(tpl) = template::get(cli.template) else {
        eprintln!(
            "Error: unknown template id {} (expected 1-8)",
            cli.template
        );
        std::process::exit(1);
    };

    if cli.sample {
        println!("{}", template::default_document(cli.template).to_json());
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let document = match &cli.input {
        Some(path) => match Document::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error reading document '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match Document::from_json(&buffer) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error parsing document: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let html = match &cli.variant {
        Some(name) => {
            let config = RenderConfig::new()
                .with_theme(theme)
                .with_photo(tpl.with_photo);
            vitae::render_with_config(&document, Variant::from_name(name), &config)
        }
        None => tpl.render(&document, &theme),
    };
    println!("{}", html);
}

fn print_templates() {
    println!("Available templates:");
    for tpl in &template::TEMPLATES {
        let photo = if tpl.with_photo { " (with photo)" } else { "" };
        println!(
            "  {}  {:<22} variant: {}{}",
            tpl.id,
            tpl.name,
            tpl.variant.name(),
            photo
        );
    }
}

fn print_intro() {
    println!(
        r#"Vitae - render resume documents to printable HTML

USAGE:
    vitae [OPTIONS] [FILE]
    cat resume.json | vitae

OPTIONS:
    -t, --template <ID>   Template to render with (1-8, default 1)
    --variant <NAME>      Override the layout variant by name
    --theme <FILE>        Custom color/font theme (TOML file)
    -l, --list-templates  List the template catalog
    --sample              Print the template's sample document as JSON
    -h, --help            Print help

QUICK START:
    vitae --sample -t 1 | vitae -t 1 > resume.html

This renders the bundled sample resume with the classic two-column
template. Run --list-templates to see all layouts."#
    );
}
