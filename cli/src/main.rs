mod store;

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use specdoc::{DocType, Section, SpecDocument, parser, template};

#[derive(Parser)]
#[command(name = "specdoc", version, about = "Specification document builder")]
struct Cli {
    /// Path of the document store
    #[arg(long, global = true, default_value = "specdoc.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new document from a built-in template
    New {
        #[arg(value_enum)]
        template: TemplateKind,

        /// Document title
        #[arg(short, long, default_value = "Specification Document")]
        title: String,
    },

    /// Import a plain-markdown document
    Import {
        /// Markdown file to import
        file: PathBuf,
    },

    /// Apply a free-text instruction to the current document
    Apply {
        /// The instruction, e.g. "add a security section"
        instruction: String,

        /// Skip the simulated processing delay
        #[arg(long)]
        no_latency: bool,
    },

    /// Print the document as markdown
    Show,

    /// List section ids and titles
    Sections,

    /// Print one section by id
    Section {
        /// Section id, e.g. "3" or "3.1"
        id: String,
    },

    /// Write the markdown rendering to a file
    Export {
        /// Output file
        file: PathBuf,
    },

    /// Delete the document store
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TemplateKind {
    Functional,
    Technical,
    SapMmStock,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::New { template, title } => do_new(&cli.state, template, title),
        Command::Import { file } => do_import(&cli.state, &file),
        // The store is read once and rewritten only on success, so the
        // process is the serialization point: one instruction in flight.
        Command::Apply {
            instruction,
            no_latency,
        } => do_apply(&cli.state, &instruction, no_latency).await,
        Command::Show => {
            let state = load_or_exit(&cli.state);
            print!("{}", state.document);
        }
        Command::Sections => {
            let state = load_or_exit(&cli.state);
            print_sections(&state.document.content);
        }
        Command::Section { id } => {
            let state = load_or_exit(&cli.state);
            match specdoc::find_section(&state.document.content, &id) {
                Some(section) => print!("{}", section),
                None => {
                    eprintln!("error: no section with id '{}'", id);
                    process::exit(1);
                }
            }
        }
        Command::Export { file } => do_export(&cli.state, &file),
        Command::Reset => do_reset(&cli.state),
    }
}

fn do_new(state_path: &Path, template: TemplateKind, title: String) {
    let (doc_type, sections) = match template {
        TemplateKind::Functional => (DocType::Functional, template::functional_template()),
        TemplateKind::Technical => (DocType::Technical, template::technical_template()),
        TemplateKind::SapMmStock => (DocType::Functional, template::sap_mm_stock_template()),
    };
    let document = SpecDocument::new(title, doc_type, sections);
    save_or_exit(state_path, &document);
    println!(
        "Created {} document '{}' with {} sections",
        document.doc_type,
        document.title,
        document.content.len()
    );
}

fn do_import(state_path: &Path, file: &Path) {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", file.display(), e);
            process::exit(1);
        }
    };
    let imported = match parser::parse_markdown(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: cannot import '{}': {}", file.display(), e);
            process::exit(1);
        }
    };
    // Markdown carries no document kind; fall back to the title heuristic.
    let doc_type = DocType::infer(&imported.sections);
    let document = SpecDocument::new(imported.title, doc_type, imported.sections);
    save_or_exit(state_path, &document);
    println!(
        "Imported {} document '{}' with {} sections",
        document.doc_type,
        document.title,
        document.content.len()
    );
}

async fn do_apply(state_path: &Path, instruction: &str, no_latency: bool) {
    let state = load_or_exit(state_path);
    let latency = if no_latency {
        Duration::ZERO
    } else {
        engine::DEFAULT_LATENCY
    };

    let result =
        engine::apply_instruction_with_latency(instruction, &state.document, latency).await;
    let content = match result {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let document = SpecDocument {
        content,
        ..state.document
    };
    let saved = save_or_exit(state_path, &document);
    println!(
        "Applied instruction; document has {} sections (saved {})",
        document.content.len(),
        saved.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

fn do_export(state_path: &Path, file: &Path) {
    let state = load_or_exit(state_path);
    if let Err(e) = std::fs::write(file, state.document.to_string()) {
        eprintln!("error: cannot write '{}': {}", file.display(), e);
        process::exit(1);
    }
    println!("Exported '{}' to {}", state.document.title, file.display());
}

fn do_reset(state_path: &Path) {
    if !state_path.exists() {
        println!("Nothing to reset");
        return;
    }
    if let Err(e) = std::fs::remove_file(state_path) {
        eprintln!("error: cannot remove '{}': {}", state_path.display(), e);
        process::exit(1);
    }
    println!("Removed {}", state_path.display());
}

fn print_sections(sections: &[Section]) {
    for section in sections {
        println!("{} {}", section.id, section.title);
        for sub in &section.subsections {
            println!("  {} {}", sub.id, sub.title);
        }
    }
}

fn load_or_exit(state_path: &Path) -> store::SavedState {
    match store::load(state_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn save_or_exit(state_path: &Path, document: &SpecDocument) -> chrono::DateTime<chrono::Utc> {
    match store::save(state_path, document) {
        Ok(saved) => saved,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
