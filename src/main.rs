//! jlines - JSONL TRANSFORM TOOL
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use jlines::{
    cli::{Cli, Command},
    commands,
    jsonl::{InputSource, OutputTarget},
};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "오류:".red().bold(), e);
        std::process::exit(1);
    }
}

/// 인자를 파싱하고 해당 서브커맨드로 분기
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Combine { output, files } => {
            commands::combine(&OutputTarget::from_arg(&output), &files)?;
        }
        Command::Head { file } => {
            commands::head(&InputSource::from_arg(&file))?;
        }
        Command::Clean { file, output } => {
            commands::clean(&InputSource::from_arg(&file), &output)?;
        }
    }

    Ok(())
}
