use clap::Parser;
use seqrename::cli::Args;
use seqrename::history::write_history;
use seqrename::output::{display_dry_run, display_execution_result, display_revert_result};
use seqrename::progress::Progress;
use seqrename::revert::{revert_from_history, RevertOptions};
use seqrename::{logging, AppError, LocalFilesystem, Namer, WalkOptions, Walker};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    debug!(?args, "Arguments parsed");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new();
    let fs = LocalFilesystem;

    if let Some(history_file) = &args.revert {
        info!("Revert mode: {:?}", history_file);

        let options = RevertOptions { dry_run: args.dry };
        let result = revert_from_history(&fs, history_file, &options, &mut progress)
            .map_err(|e| match e {
                seqrename::revert::RevertError::History(h) => {
                    AppError::history(Some(history_file.clone()), h)
                }
            })?;

        display_revert_result(&result, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

        return Ok(());
    }

    let target_dir = args
        .dir
        .as_ref()
        .ok_or_else(|| AppError::Other("No target directory given (use --dir)".to_string()))?;

    let options = WalkOptions {
        recursive: args.recursive,
        dry_run: args.dry,
    };
    let walker = Walker::new(&fs, Namer::new(args.template), options);

    info!(
        path = ?target_dir,
        recursive = args.recursive,
        template = args.template.description(),
        "Starting walk"
    );

    let summary = walker.walk(target_dir, &mut progress)?;

    if args.dry {
        display_dry_run(&summary, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        return Ok(());
    }

    // Renames are on disk already; record them before anything else can fail
    if let Some(history_path) = &args.history {
        let path = write_history(&summary, args.recursive, args.template, history_path)
            .map_err(|e| AppError::history(Some(history_path.clone()), e))?;
        progress.history_written(&path);
    }

    display_execution_result(&summary, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
