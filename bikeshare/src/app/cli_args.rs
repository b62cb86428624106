use std::path::{Path, PathBuf};

use clap::Parser;

/// interactive console for exploring US bikeshare trip data
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// directory containing the city CSV files. defaults to the directory
    /// holding this executable.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
