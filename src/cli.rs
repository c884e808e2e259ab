//! Minimal CLI: description files → (rust | inspect)
use std::path::{Path, PathBuf};
use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, Args};
use colored::Colorize;
use rayon::prelude::*;
use tracing::debug;

use crate::model::Description;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// derive variant structs, structural operations and lazy wrappers from ADT description files
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// derive and emit one Rust module per description
    Rust(RustOut),
    /// print a JSON report of what would be derived
    Inspect(InspectOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more description files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct RustOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// directory receiving `<target_name>.rs` per description (stdout if omitted)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct InspectOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Loads and processes every input on the rayon pool. A file that fails to
    /// load, or whose processing fails or panics, is reported and skipped.
    fn load_process<T: Send>(
        &self,
        apply: impl Fn(&Description) -> anyhow::Result<T> + Sync,
    ) -> anyhow::Result<(Vec<T>, usize)> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let results: Vec<(PathBuf, anyhow::Result<T>)> = source_paths
            .into_par_iter()
            .map(|source_path| {
                let result = process_isolated(&source_path, &apply);
                (source_path, result)
            })
            .collect();

        let mut outputs = Vec::with_capacity(results.len());
        let mut failures = 0;
        for (source_path, result) in results {
            let source_path_str = source_path.to_string_lossy();
            match result {
                Ok(output) => {
                    eprintln!("{} {source_path_str}", "✓".green());
                    outputs.push(output);
                }
                Err(error) => {
                    eprintln!("{} {source_path_str}: {error:#}", "✗".red());
                    failures += 1;
                }
            }
        }
        Ok((outputs, failures))
    }
}

fn process_isolated<T>(
    source_path: &Path,
    apply: &(impl Fn(&Description) -> anyhow::Result<T> + Sync),
) -> anyhow::Result<T> {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let description = Description::load(source_path)
            .with_context(|| format!("failed to load {}", source_path.display()))?;
        debug!(path = %source_path.display(), adt = %description.adt.name(), "loaded description");
        apply(&description)
    }));
    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(anyhow!("derivation panicked: {message}"))
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Rust(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let (modules, failures) = target.input_settings.load_process(|description| {
                    let spec = crate::derive::derive_all(&description.adt, &description.context);
                    let mut cg = crate::codegen::Codegen::new();
                    cg.emit(&spec, &description.adt, &description.context);
                    Ok((description.context.target_name.to_string(), cg.into_string()))
                })?;

                for (target_name, rust_src) in &modules {
                    match target.out_dir.as_ref() {
                        Some(out_dir) => {
                            std::fs::create_dir_all(out_dir)
                                .with_context(|| format!("failed to create {}", out_dir.display()))?;
                            let out = out_dir.join(format!("{target_name}.rs"));
                            std::fs::write(&out, rust_src)
                                .with_context(|| format!("failed to write {}", out.display()))?;
                        }
                        None => println!("{rust_src}"),
                    }
                }
                check_failures(failures, modules.len())
            }
            Command::Inspect(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let (reports, failures) = target.input_settings.load_process(|description| {
                    Ok(crate::inspect::inspect(&description.adt, &description.context))
                })?;
                let report_src = serde_json::to_string_pretty(&reports)?;
                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(out, &report_src)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    println!("{report_src}");
                }
                check_failures(failures, reports.len())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn check_failures(failures: usize, succeeded: usize) -> anyhow::Result<()> {
    if failures > 0 {
        bail!("{failures} of {} description files failed", failures + succeeded);
    }
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
