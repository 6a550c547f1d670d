use crate::error::CfResult;
use crate::palette::Palette;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Comma-separated colors taking part in the challenge
    #[arg(long, default_value = "Red,Blue,Green,Yellow,Pink,Violet")]
    pub palette: String,

    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "results.csv")]
    pub results_file: String,

    /// Fixed seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            palette: "Red,Blue,Green,Yellow,Pink,Violet".to_string(),
            output_dir: PathBuf::from("output"),
            results_file: "results.csv".to_string(),
            seed: None,
        }
    }
}

impl ChallengeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn palette(&self) -> CfResult<Palette> {
        Palette::parse(&self.palette)
    }

    pub fn results_path(&self) -> PathBuf {
        self.output_dir.join(&self.results_file)
    }

    pub fn last_result_path(&self) -> PathBuf {
        self.output_dir.join("last_result.json")
    }

    /// Copies every flag the user typed on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli: &ChallengeConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(palette, "palette");
        update_if_present!(output_dir, "output_dir");
        update_if_present!(results_file, "results_file");
        update_if_present!(seed, "seed");
    }
}
