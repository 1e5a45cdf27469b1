use clap::{Parser, Subcommand};
use scel::batch::{collect_inputs, decode_files};
use scel::export::{write_records, RimeDict, RimeDictOptions};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scel2txt", about = "Convert Sogou .scel cell dictionaries to text and Rime dictionaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert .scel files (or directories of them) to text plus a merged Rime dictionary
    Convert {
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,
        #[arg(short, long, default_value = "out")]
        output_dir: PathBuf,
        /// JSON file with Rime dictionary options
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Rime dictionary name (overrides the config file)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print the records of one dictionary
    Dump {
        input: PathBuf,
        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Show dictionary metadata
    Info {
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scel=info,scel2txt=info")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {

        // ── Convert ──────────────────────────────────────────────────────────
        Commands::Convert { input, output_dir, config, name } => {
            let mut options = match config {
                Some(path) => RimeDictOptions::from_json(&fs::read(path)?)?,
                None       => RimeDictOptions::default(),
            };
            if let Some(name) = name {
                options.name = name;
            }

            let paths = collect_inputs(&input)?;
            fs::create_dir_all(&output_dir)?;

            let mut merged = RimeDict::new(options);
            let mut failed = 0usize;
            for outcome in decode_files(&paths) {
                let stem = outcome.stem();
                let dict = match outcome.result {
                    Ok(dict) => dict,
                    Err(e) => {
                        warn!(path = %outcome.path.display(), error = %e, "skipping file");
                        failed += 1;
                        continue;
                    }
                };
                let out_path = output_dir.join(format!("{stem}.txt"));
                let mut out = BufWriter::new(File::create(&out_path)?);
                write_records(&mut out, &dict.records)?;
                out.flush()?;
                println!("{}: {} words", outcome.path.display(), dict.len());
                merged.add_source(stem, dict.into_records());
            }

            let dict_path = output_dir.join(merged.options.file_name());
            let mut out = BufWriter::new(File::create(&dict_path)?);
            merged.write(&mut out)?;
            out.flush()?;
            info!(files = merged.sources().len(), failed, "conversion finished");
            println!("Merged {}: {} words", dict_path.display(), merged.records().len());
        }

        // ── Dump ─────────────────────────────────────────────────────────────
        Commands::Dump { input, json } => {
            let dict = scel::decode_file(&input)?;
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if json {
                serde_json::to_writer_pretty(&mut out, &dict)?;
            } else {
                write_records(&mut out, &dict.records)?;
            }
            writeln!(out)?;
            out.flush()?;
        }

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input } => {
            let dict = scel::decode_file(&input)?;
            println!("── Cell dictionary ─────────────────────────────────────");
            println!("  Path           {}", input.display());
            println!("  Variant        {:#04x} (lexicon at {:#x})",
                dict.variant.as_byte(), dict.variant.lexicon_offset());
            println!("  Title          {}", dict.info.title);
            println!("  Category       {}", dict.info.category);
            println!("  Description    {}", dict.info.description);
            println!("  Samples        {}", dict.info.samples);
            println!("  Pinyin entries {}", dict.pinyin_entries);
            println!("  Groups         {}", dict.groups);
            println!("  Records        {}", dict.len());
            println!("  Scan stop      {:?}", dict.stop);
        }
    }

    Ok(())
}
