use std::path::Path;

use colored::Colorize;
use pbxpatch_core::{
    check_references, patch, substitute, BlockSpec, Document, FieldEdit, ObjectId, PatchReport,
    ReferenceCheck,
};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::RemoveField(args) => cmd_remove_field(args, &cli.format),
        Command::ReplaceValue(args) => cmd_replace_value(args, &cli.format),
        Command::Check(args) => cmd_check(args, &cli.format),
        Command::NewId(args) => cmd_new_id(args),
    }
}

fn cmd_remove_field(args: RemoveFieldArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let document = Document::load(&args.file)?;
    let block = BlockSpec::new(args.block, args.terminator);
    let edits = vec![FieldEdit::remove_field(args.field)];

    let (patched, report) = patch(&document, &block, &edits);
    finish_patch(&args.file, &patched, &report, args.dry_run, format)
}

fn cmd_replace_value(args: ReplaceValueArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let document = Document::load(&args.file)?;
    let edits = vec![FieldEdit::replace_value(args.id, args.old, args.new)];

    let (patched, report) = substitute(&document, &edits);
    finish_patch(&args.file, &patched, &report, args.dry_run, format)
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let document = Document::load(&args.file)?;

    let mut checks: Vec<ReferenceCheck> =
        args.names.into_iter().map(ReferenceCheck::present).collect();
    for path in args.paths {
        // The last path component is the file name the reference carries.
        let name = path.rsplit('/').next().unwrap_or(path.as_str()).to_string();
        checks.push(ReferenceCheck::with_path(name, path));
    }

    let statuses = check_references(&document, &checks);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
        OutputFormat::Text => {
            for status in &statuses {
                if status.present {
                    println!("{} {} referenced", "✓".green(), status.name.bold());
                } else {
                    println!("{} {} not referenced", "⚠".yellow(), status.name.bold());
                }
                match status.path_ok {
                    Some(true) => println!("  path: {}", "correct".green()),
                    Some(false) => println!("  path: {}", "possibly incorrect".yellow()),
                    None => {}
                }
            }
        }
    }
    Ok(())
}

fn cmd_new_id(args: NewIdArgs) -> anyhow::Result<()> {
    for _ in 0..args.count {
        println!("{}", ObjectId::generate());
    }
    Ok(())
}

/// Persist the patched document (unless dry-running) and report the outcome.
fn finish_patch(
    path: &Path,
    patched: &Document,
    report: &PatchReport,
    dry_run: bool,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    if report.changed() && !dry_run {
        debug!(path = %path.display(), "writing patched document");
        patched.save(path)?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if report.changed() {
                let action = if dry_run { "Would update" } else { "Updated" };
                println!(
                    "{} {} {}: {} line(s) removed, {} line(s) rewritten",
                    "✓".green().bold(),
                    action,
                    path.display().to_string().bold(),
                    report.lines_removed,
                    report.lines_replaced,
                );
            } else if report.block_entered {
                println!("{} Block found, nothing left to change.", "✓".green());
            } else {
                println!("{} Nothing matched; file left untouched.", "·".dimmed());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PROJECT: &str = "\
6AA1C2172EAF73F80008F5DE /* Settings */ = {\n\
\tisa = PBXGroup;\n\
\tpath = Settings;\n\
};\n\
6AA1C2152EAF73CA0008F5DE /* ShortcutSettings.swift */ = {isa = PBXFileReference; path = ShortcutSettings.swift;};\n";

    fn write_project(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("project.pbxproj");
        std::fs::write(&path, PROJECT).unwrap();
        path
    }

    #[test]
    fn remove_field_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);

        cmd_remove_field(
            RemoveFieldArgs {
                file: path.clone(),
                block: "/* Settings */".into(),
                field: "path = Settings;".into(),
                terminator: "};".into(),
                dry_run: false,
            },
            &OutputFormat::Text,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("path = Settings;"));
        assert!(content.contains("isa = PBXGroup;"));
    }

    #[test]
    fn dry_run_leaves_the_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);

        cmd_remove_field(
            RemoveFieldArgs {
                file: path.clone(),
                block: "/* Settings */".into(),
                field: "path = Settings;".into(),
                terminator: "};".into(),
                dry_run: true,
            },
            &OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), PROJECT);
    }

    #[test]
    fn replace_value_rewrites_the_reference_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);

        cmd_replace_value(
            ReplaceValueArgs {
                file: path.clone(),
                id: "6AA1C2152EAF73CA0008F5DE".into(),
                old: "path = ShortcutSettings.swift;".into(),
                new: "path = Domain/Models/ShortcutSettings.swift;".into(),
                dry_run: false,
            },
            &OutputFormat::Text,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("path = Domain/Models/ShortcutSettings.swift;"));
    }

    #[test]
    fn check_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);

        cmd_check(
            CheckArgs {
                file: path.clone(),
                names: vec!["ShortcutSettings.swift".into(), "Missing.swift".into()],
                paths: vec!["Domain/Models/ShortcutSettings.swift".into()],
            },
            &OutputFormat::Text,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), PROJECT);
    }

    #[test]
    fn new_id_mints_without_error() {
        cmd_new_id(NewIdArgs { count: 3 }).unwrap();
    }
}
