use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use specmodel::{CachedPropNames, SpecDocument, SpecModel};

#[derive(Parser, Debug)]
#[command(name = "specmodel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the spec model and print it as JSON.
    Derive(DeriveArgs),
    /// Print the prop names to persist for the next build.
    Names(InputArgs),
    /// Print a stable fingerprint of the derived model.
    Fingerprint(InputArgs),
}

#[derive(Parser, Debug)]
struct DeriveArgs {
    /// Input spec document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON array of names from a previous build; overrides the document's own list.
    #[arg(long)]
    cached_names: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input spec document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Derive(args) => cmd_derive(args),
        Command::Names(args) => cmd_names(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn read_cached_names(path: &Path) -> anyhow::Result<CachedPropNames> {
    let f = File::open(path).with_context(|| format!("open cached names '{}'", path.display()))?;
    let names: CachedPropNames =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse cached names JSON")?;
    Ok(names)
}

fn build_model(in_path: &Path, cached: Option<CachedPropNames>) -> anyhow::Result<SpecModel> {
    let mut doc = SpecDocument::from_path(in_path)?;
    if let Some(names) = cached {
        doc.cached_prop_names = names;
    }
    let model = doc
        .build()
        .with_context(|| format!("derive spec model from '{}'", in_path.display()))?;
    Ok(model)
}

fn cmd_derive(args: DeriveArgs) -> anyhow::Result<()> {
    let cached = args
        .cached_names
        .as_deref()
        .map(read_cached_names)
        .transpose()?;
    let model = build_model(&args.in_path, cached)?;

    match &args.out {
        Some(out) => {
            let f = File::create(out)
                .with_context(|| format!("create output '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &model).with_context(|| "write model JSON")?;
            w.flush()?;
        }
        None => {
            let json = serde_json::to_string_pretty(&model).with_context(|| "encode model JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_names(args: InputArgs) -> anyhow::Result<()> {
    let model = build_model(&args.in_path, None)?;
    let names = CachedPropNames::from_model(&model);
    println!("{}", serde_json::to_string(&names)?);
    Ok(())
}

fn cmd_fingerprint(args: InputArgs) -> anyhow::Result<()> {
    let model = build_model(&args.in_path, None)?;
    println!("{}", specmodel::fingerprint_model(&model));
    Ok(())
}
