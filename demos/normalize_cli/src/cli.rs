// demos/normalize_cli/src/cli.rs

use crate::config::LogFormat;
use clap::Parser;
use std::path::{Path, PathBuf};
use user_record::PresencePolicy;

#[derive(Parser, Debug)]
#[command(name = "user-normalize")]
#[command(about = "Normalize partial User JSON into complete records")]
pub struct Cli {
  /// JSON input file. Reads stdin when omitted or `-`.
  pub input: Option<PathBuf>,

  /// When a missing/empty `id` or `createdAt` gets default-filled: loose or strict
  #[arg(long)]
  pub policy: Option<PresencePolicy>,

  /// Log output format on stderr: pretty or json
  #[arg(long)]
  pub log_format: Option<LogFormat>,

  /// Treat the input as newline-delimited JSON objects
  #[arg(long)]
  pub ndjson: bool,

  /// Emit the persistence document view (`_id` keys) instead of the record
  #[arg(long)]
  pub document: bool,

  /// Indent the JSON output
  #[arg(long)]
  pub pretty: bool,
}

impl Cli {
  /// The input file, or `None` when reading stdin.
  pub fn input_path(&self) -> Option<&Path> {
    self.input.as_deref().filter(|path| path.as_os_str() != "-")
  }
}
