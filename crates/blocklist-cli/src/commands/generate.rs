//! Generate command implementation
//!
//! Drives every enabled output target over the four input folders and
//! compiles the per-engine files into merged artifacts. Skips and
//! per-target write failures are reported and the run continues; only
//! an unusable output root aborts.

use std::path::{Path, PathBuf};

use colored::Colorize;

use blocklist_content::FormatSpec;
use blocklist_export::{
    Error as ExportError, WriteOutcome, WritePolicy, append_elements, compile_files,
    discover_files_sorted, prepare_output_root, write_format,
};

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::formats;

/// Run the generate command
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let common = discover_files_sorted(&args.common_path);
    let subpages = discover_files_sorted(&args.subpage_path);
    let nuclear = discover_files_sorted(&args.nuclear_path);
    let elements = discover_files_sorted(&args.element_path);

    prepare_output_root(&args.output_folder)?;
    let policy = WritePolicy {
        overwrite: !args.no_overwrite,
    };

    let mut main_inputs = common.clone();
    main_inputs.extend(subpages);

    if !args.no_ublockorigin {
        generate_ublockorigin(args, policy, &main_inputs, &nuclear, &elements);
    }

    if !args.no_ublacklist {
        generate_ublacklist(args, policy, &main_inputs, &nuclear);
    }

    if !args.no_hosts {
        generate_hosts(args, policy, &common);
    }

    Ok(())
}

fn generate_ublockorigin(
    args: &GenerateArgs,
    policy: WritePolicy,
    main_inputs: &[PathBuf],
    nuclear: &[PathBuf],
    elements: &[PathBuf],
) {
    let out = &args.output_folder;
    let mut written = Vec::new();
    let mut written_nuclear = Vec::new();

    for spec in formats::ublock_engines() {
        let target = out.join(format!("{}-list_uBlockOrigin.txt", spec.engine));
        if !write_target(&target, main_inputs, &spec, policy) {
            continue;
        }
        // Hand-written element rules ride along with each engine list.
        match append_elements(&target, elements, &formats::element_passthrough()) {
            Ok(()) => written.push(target),
            Err(e) => report_failure(&target, &e),
        }
    }

    if !args.no_nuclear {
        for spec in formats::ublock_engines() {
            let engine = spec.engine.clone();
            let spec = spec.with_engine(format!("{engine} (Nuclear)"));
            let target = out.join(format!("Nuclear_{engine}-list_uBlockOrigin.txt"));
            if write_target(&target, nuclear, &spec, policy) {
                written_nuclear.push(target);
            }
        }
    }

    if !args.no_compile_ublockorigin {
        compile_target(
            &out.join("list_uBlockOrigin.txt"),
            &written,
            formats::COMPILED_TITLE,
            policy,
        );

        if !args.no_nuclear {
            compile_target(
                &out.join("Nuclear_list_uBlockOrigin.txt"),
                &written_nuclear,
                formats::COMPILED_TITLE_NUCLEAR,
                policy,
            );
        }
    }
}

fn generate_ublacklist(
    args: &GenerateArgs,
    policy: WritePolicy,
    main_inputs: &[PathBuf],
    nuclear: &[PathBuf],
) {
    let spec = formats::ublacklist();

    let target = args.output_folder.join("list_uBlacklist.txt");
    write_target(&target, main_inputs, &spec, policy);

    if !args.no_nuclear {
        let target = args.output_folder.join("Nuclear_list_uBlacklist.txt");
        write_target(&target, nuclear, &spec, policy);
    }
}

fn generate_hosts(args: &GenerateArgs, policy: WritePolicy, common: &[PathBuf]) {
    let out = &args.output_folder;
    let mut written = Vec::new();

    for spec in formats::hosts_formats() {
        let target = out.join(format!("{}.txt", spec.engine));
        if write_target(&target, common, &spec, policy) {
            written.push(target);
        }
    }

    if !args.no_compile_hosts {
        compile_target(
            &out.join("list_hosts.txt"),
            &written,
            formats::COMPILED_TITLE_HOSTS,
            policy,
        );
    }
}

/// Write one target, reporting the outcome or failure.
///
/// A failed write is fatal to that one target only; the destination is
/// left in an unknown state and everything else proceeds. Returns true
/// when the target was actually written.
fn write_target(
    target: &Path,
    inputs: &[PathBuf],
    spec: &FormatSpec,
    policy: WritePolicy,
) -> bool {
    match write_format(target, inputs, spec, policy) {
        Ok(outcome) => {
            report(outcome, target);
            outcome.was_written()
        }
        Err(e) => {
            report_failure(target, &e);
            false
        }
    }
}

fn compile_target(target: &Path, inputs: &[PathBuf], title: &str, policy: WritePolicy) {
    match compile_files(target, inputs, title, policy) {
        Ok(outcome) => report(outcome, target),
        Err(e) => report_failure(target, &e),
    }
}

fn report(outcome: WriteOutcome, path: &Path) {
    match outcome {
        WriteOutcome::Written => {
            println!("{} wrote {}", "OK".green().bold(), path.display());
        }
        WriteOutcome::SkippedExists => {
            println!(
                "{} {} exists and overwriting is disabled, skipped",
                "SKIP".yellow().bold(),
                path.display()
            );
        }
        WriteOutcome::SkippedIsDirectory => {
            println!(
                "{} {} is a directory, skipped",
                "SKIP".yellow().bold(),
                path.display()
            );
        }
    }
}

fn report_failure(path: &Path, error: &ExportError) {
    eprintln!("{} {}: {}", "FAIL".red().bold(), path.display(), error);
}
