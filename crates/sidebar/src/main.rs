use clap::Parser;
use libsidebar::{
    DEFAULT_MAX_CHARS, ModuleIndex, Sidebar, SummaryPolicy, find_manifest, from_script, to_json,
    to_script,
};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target to index - a crate directory, a rustdoc JSON file, or a sidebar-items.js script
    #[arg(default_value = "./")]
    target: String,

    /// Module to index, as a path starting with the crate name (defaults to the crate root)
    #[arg(long)]
    module: Option<String>,

    /// Write a sidebar-items.js for every module under this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format for a single module
    #[arg(long, default_value = "script", value_parser = ["script", "json"])]
    format: String,

    /// Print the entries with this name instead of the whole index
    #[arg(long)]
    find: Option<String>,

    /// Include private items
    #[arg(long, default_value_t = false)]
    private: bool,

    /// Keep rustdoc's source order instead of sorting items by name
    #[arg(long, default_value_t = false)]
    unsorted: bool,

    /// Maximum summary length in characters
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS, env = "SIDEBAR_SUMMARY_WIDTH")]
    summary_width: usize,

    /// Keep the whole first paragraph of each doc comment instead of its first sentence
    #[arg(long, default_value_t = false)]
    full_paragraph: bool,

    /// Enable quiet mode, disabling output while rendering docs
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let policy = SummaryPolicy::default()
        .with_max_chars(cli.summary_width)
        .with_first_sentence(!cli.full_paragraph);
    let sidebar = Sidebar::new()
        .with_private(cli.private)
        .with_sorted(!cli.unsorted)
        .with_summary_policy(policy)
        .with_silent(cli.quiet);

    let target = Path::new(&cli.target);
    if has_extension(target, "js") {
        if cli.module.is_some() || cli.out.is_some() {
            return Err("--module and --out need a crate or rustdoc JSON target".into());
        }
        let index = from_script(&fs::read_to_string(target)?)?;
        return print_index(cli, &index);
    }

    let crate_data = if has_extension(target, "json") {
        sidebar.load_json(target)?
    } else {
        sidebar.generate_json(find_manifest(target)?)?
    };
    let extractor = sidebar.extractor(&crate_data);

    if let Some(out) = &cli.out {
        let indexes = sidebar.index_crate(&extractor)?;
        let written = sidebar.write_tree(&indexes, out)?;
        if !cli.quiet {
            eprintln!(
                "Wrote {} sidebar scripts to {}",
                written.len(),
                out.display()
            );
        }
        return Ok(());
    }

    let index = sidebar.index_module(&extractor, cli.module.as_deref())?;
    print_index(cli, &index)
}

fn print_index(cli: &Cli, index: &ModuleIndex) -> Result<(), Box<dyn Error>> {
    let output = match &cli.find {
        Some(name) => {
            let lines: Vec<String> = index
                .find_all(name)
                .map(|(kind, entry)| {
                    if entry.summary.is_empty() {
                        format!("{kind} {}", entry.name)
                    } else {
                        format!("{kind} {}: {}", entry.name, entry.summary)
                    }
                })
                .collect();
            if lines.is_empty() {
                return Err(format!("No item named {name}").into());
            }
            lines.join("\n")
        }
        None if cli.format == "json" => to_json(index)?,
        None => to_script(index)?,
    };
    println!("{output}");
    Ok(())
}

fn main() {
    // Only initialize tracing if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
