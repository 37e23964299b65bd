use clap::Parser;
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;

use sqlexplainer::{RewriteSettings, ScriptRewriter, explain_script_with};

/// Rewrite SQL scripts so every DML statement runs under an
/// execution-analysis directive.
#[derive(Parser, Debug)]
#[clap(about, version)]
struct Args {
    /// Script files to rewrite; reads stdin when none are given.
    scripts: Vec<PathBuf>,

    /// JSON settings file overriding the directive literal.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print each original script before its rewritten form.
    #[arg(short, long)]
    echo: bool,

    /// Emit one JSON report object per input instead of raw text.
    #[arg(short, long)]
    json: bool,
}

/// Per-input result emitted in `--json` mode.
#[derive(Serialize)]
struct ExplainReport {
    path: String,
    original: String,
    explained: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let rewriter = match &args.settings {
        Some(path) => {
            let settings = RewriteSettings::from_file(path.to_string_lossy().as_ref())?;
            ScriptRewriter::new(settings)
        }
        None => ScriptRewriter::default(),
    };

    for (path, script) in read_inputs(&args)? {
        let explained = explain_script_with(&script, &rewriter)?;
        if args.json {
            let report = ExplainReport {
                path,
                original: script,
                explained,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            if args.echo {
                println!("{script}");
            }
            println!("{explained}");
        }
    }
    Ok(())
}

fn read_inputs(args: &Args) -> anyhow::Result<Vec<(String, String)>> {
    if args.scripts.is_empty() {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        return Ok(vec![("-".to_string(), buffer)]);
    }
    let mut inputs = Vec::new();
    for path in &args.scripts {
        let script = std::fs::read_to_string(path)?;
        inputs.push((path.display().to_string(), script));
    }
    Ok(inputs)
}
