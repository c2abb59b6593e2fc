use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use text_helper::cli::CliArgs;
use text_helper::commands::Cmd;
use text_helper::config::HelperConfig;
use text_helper::model::Session;
use text_helper::timestamp::SystemClock;
use text_helper::update::update;
use text_helper::util::{filename_for_display, validate_upload_path};

fn main() -> Result<()> {
    text_helper::tracing::init();

    let plan = CliArgs::parse().into_plan();
    let config = HelperConfig::load();

    if let Err(e) = validate_upload_path(&plan.input) {
        tracing::warn!("Rejected {}: {}", plan.input.display(), e);
        eprintln!("{}", e.user_message(&filename_for_display(&plan.input)));
        std::process::exit(1);
    }

    let bytes = fs::read(&plan.input)
        .with_context(|| format!("Failed to read {}", plan.input.display()))?;
    let mut session = Session::from_upload(&plan.input, &bytes, &config);

    let clock = SystemClock;
    for msg in plan.messages {
        if let Some(cmd) = update(&mut session, msg, &clock) {
            perform(cmd, &plan.out_dir)?;
        }
    }

    Ok(())
}

/// Carry out a command produced by `update()`
fn perform(cmd: Cmd, out_dir: &Path) -> Result<()> {
    match cmd {
        Cmd::Download(file) => {
            fs::create_dir_all(out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            let path = out_dir.join(&file.filename);
            fs::write(&path, &file.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
            println!("Saved {}", path.display());
        }
        other => println!("{}", other.describe()),
    }
    Ok(())
}
