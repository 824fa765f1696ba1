use crate::revert::RevertResult;
use crate::walker::{RenameStatus, WalkSummary};
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(summary: &WalkSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Root:        {}", summary.root.display())?;
    writeln!(writer, "Directories: {}", summary.directories_visited)?;
    writeln!(writer)?;

    if summary.records.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;
    writeln!(writer)?;

    for (i, record) in summary.records.iter().enumerate() {
        writeln!(writer, "  {}. [{} #{}]", i + 1, record.tag, record.sequence)?;
        writeln!(writer, "     From: {}", record.source_path().display())?;
        writeln!(writer, "     To:   {}", record.destination_name)?;

        if let RenameStatus::Failed(reason) = &record.status {
            writeln!(writer, "     [!] Would fail: {}", reason)?;
        }

        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files would be renamed",
        summary.succeeded_count()
    )?;

    let failed = summary.failed_count();
    if failed > 0 {
        writeln!(writer, "  {} renames would fail", failed)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(summary: &WalkSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully renamed {} files in {} directories.",
        summary.succeeded_count(),
        summary.directories_visited
    )?;

    let failed: Vec<_> = summary.failed().collect();
    if !failed.is_empty() {
        writeln!(writer, "  {} renames failed:", failed.len())?;
        for record in failed {
            writeln!(writer, "    {} failed", record.source_path().display())?;
        }
    }

    if !summary.skipped.is_empty() {
        writeln!(writer, "  {} directories skipped:", summary.skipped.len())?;
        for skipped in &summary.skipped {
            writeln!(writer, "    {} ({})", skipped.path.display(), skipped.reason)?;
        }
    }

    Ok(())
}

/// Display revert results
pub fn display_revert_result(result: &RevertResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    if result.dry_run {
        writeln!(
            writer,
            "Dry run complete. {} files would be restored from {}.",
            result.restored_count(),
            result.original_history.display()
        )?;
    } else {
        writeln!(
            writer,
            "Revert complete. {} files restored.",
            result.restored_count()
        )?;
    }

    for op in result.operations.iter().filter(|op| !op.succeeded()) {
        writeln!(
            writer,
            "  {} failed: {}",
            op.current_path.display(),
            op.error.as_deref().unwrap_or("unknown error")
        )?;
    }

    Ok(())
}
