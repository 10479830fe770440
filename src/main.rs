use clap::Parser;
use figma_codegen::config::Config;
use figma_codegen::error::CodegenError;
use figma_codegen::source::DesignInput;
use figma_codegen::url::{build_design_url, parse_design_url};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "figma-codegen",
    about = "Figma Codegen: generate React components, CSS modules and Storybook stories from Figma node JSON"
)]
struct Cli {
    /// Input JSON file(s) or directory: Figma `/nodes` responses or bare node documents
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Figma URL the input was fetched from (single input only)
    #[arg(long)]
    url: Option<String>,

    /// Figma file key; the URL is built from it and each input's node id
    #[arg(long)]
    file_key: Option<String>,

    /// Output root directory (default: from config or src/components)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the generated files to stdout instead of writing them
    #[arg(long)]
    stdout: bool,

    /// Print the parsed IR as JSON and exit
    #[arg(long)]
    dump_ir: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn source_url(cli: &Cli, input: &DesignInput, path: &Path) -> Result<String, CodegenError> {
    if let Some(ref url) = cli.url {
        if parse_design_url(url).is_none() {
            return Err(CodegenError::InvalidUrl(url.clone()));
        }
        return Ok(url.clone());
    }
    match (cli.file_key.as_deref(), input.node_id()) {
        (Some(key), Some(node_id)) => Ok(build_design_url(key, node_id)),
        _ => Err(CodegenError::MissingUrl(path.display().to_string())),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["figma-codegen.config.json", "config/figma-codegen.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(ref dir) = cli.output {
        config.output_dir = dir.display().to_string();
    }

    // Collect input files
    let files = figma_codegen::list_files(&cli.inputs).unwrap_or_else(|e| die(&format!("{}", e)));
    if files.is_empty() {
        die("no input files found");
    }
    if cli.url.is_some() && files.len() > 1 {
        die("--url applies to a single input; use --file-key for several");
    }

    // Generate everything before writing anything
    let mut generated = Vec::new();
    for fp in &files {
        let text = fs::read_to_string(fp)
            .unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
        let input = DesignInput::from_json(&text)
            .unwrap_or_else(|e| die(&format!("{}: {}", fp.display(), e)));
        let document = input
            .document()
            .unwrap_or_else(|e| die(&format!("{}: {}", fp.display(), e)));

        if cli.dump_ir {
            let ir = figma_codegen::parse::parse(document);
            let json = serde_json::to_string_pretty(&ir)
                .unwrap_or_else(|e| die(&format!("cannot serialize IR: {}", e)));
            println!("{}", json);
            continue;
        }

        let url = source_url(&cli, &input, fp).unwrap_or_else(|e| die(&e.to_string()));
        generated.push(figma_codegen::generate(document, &url, &config));
    }

    for result in &generated {
        if cli.stdout {
            for file in result.files() {
                println!("// ── {} ──", file.filename);
                print!("{}", file.content);
            }
            continue;
        }

        let out_dir = Path::new(&config.output_dir).join(&result.component_name);
        fs::create_dir_all(&out_dir)
            .unwrap_or_else(|e| die(&format!("cannot create {}: {}", out_dir.display(), e)));
        for file in result.files() {
            let path = out_dir.join(&file.filename);
            fs::write(&path, &file.content)
                .unwrap_or_else(|e| die(&format!("cannot write {}: {}", path.display(), e)));
            eprintln!("✓ {} generated", path.display());
        }
    }
}
