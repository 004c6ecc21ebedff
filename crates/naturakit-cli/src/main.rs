//! Natura CLI - terminal host for the simulated survival console
//!
//! Usage:
//!   natura                      # Intro, then interactive prompt
//!   natura --skip-intro         # Straight to the prompt
//!   natura -c 'dir'             # Execute one console line and exit
//!   natura session.ntr          # Run a file of console lines

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use naturakit::intro::{banner, BOOT_LINES, CUTSCENES};
use naturakit::{Console, ExecResult};

/// Natura - simulated survival console
#[derive(Parser, Debug)]
#[command(name = "natura")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execute the given console line
    #[arg(short = 'c')]
    command: Option<String>,

    /// File of console lines to execute
    #[arg()]
    script: Option<PathBuf>,

    /// Skip the cutscenes and boot sequence
    #[arg(long)]
    skip_intro: bool,

    /// Print results as JSON instead of terminal text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut console = Console::new();

    // Execute a single line if provided
    if let Some(line) = args.command {
        let result = console
            .exec(&line)
            .await
            .context("failed to execute command")?;
        render(&result, args.json)?;
        std::process::exit(result.exit_code);
    }

    // Execute a script of console lines if provided
    if let Some(path) = args.script {
        let script = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script: {}", path.display()))?;

        let mut exit_code = 0;
        for line in script.lines() {
            let result = console
                .exec(line)
                .await
                .context("failed to execute script line")?;
            render(&result, args.json)?;
            exit_code = result.exit_code;
            if console.is_finished() {
                break;
            }
        }
        std::process::exit(exit_code);
    }

    if !args.skip_intro {
        play_intro().await?;
    }
    print!("{}", banner());
    println!();

    interactive(console, args.json).await
}

fn render(result: &ExecResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    if result.clear_screen {
        clear_screen();
    }
    print!("{}", result.stdout);
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
    Ok(())
}

fn clear_screen() {
    // ANSI clear + cursor home
    print!("\x1b[2J\x1b[H");
    let _ = std::io::stdout().flush();
}

/// Cutscenes, then the boot sequence. Each slide holds for a few
/// seconds before the player may continue.
async fn play_intro() -> Result<()> {
    for scene in CUTSCENES {
        clear_screen();
        println!("{}", scene.art);
        println!("{}", scene.text);
        tokio::time::sleep(Duration::from_secs(5)).await;
        wait_for_enter()?;
    }

    clear_screen();
    for line in BOOT_LINES {
        println!("{}", line);
        tokio::time::sleep(Duration::from_millis(800)).await;
    }
    println!();
    Ok(())
}

fn wait_for_enter() -> Result<()> {
    print!("[ Press Enter to continue ]");
    std::io::stdout().flush()?;
    let mut buf = String::new();
    std::io::stdin().read_line(&mut buf)?;
    Ok(())
}

#[cfg(feature = "interactive")]
async fn interactive(mut console: Console, json: bool) -> Result<()> {
    use rustyline::error::ReadlineError;

    let mut editor = rustyline::DefaultEditor::new()?;
    while !console.is_finished() {
        match editor.readline(&console.prompt()) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                let result = console.exec(&line).await?;
                render(&result, json)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

#[cfg(not(feature = "interactive"))]
async fn interactive(_console: Console, _json: bool) -> Result<()> {
    eprintln!("natura: built without the interactive feature");
    eprintln!("Usage: natura -c 'command' or natura session.ntr");
    std::process::exit(1)
}
