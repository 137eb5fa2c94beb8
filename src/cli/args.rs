use clap::Parser;
use std::path::PathBuf;

use romanwords::Mode;

#[derive(Parser)]
#[command(
    name = "romanwords",
    version,
    about = "Evaluate `NUMERAL OP NUMERAL` lines and spell the results in English"
)]
pub struct CliArgs {
    /// Input file, one `NUMERAL OP NUMERAL` expression per line
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Output file, one spelled result per line
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Evaluation mode (lenient or strict). Overrides the config file
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Abort on the first line that cannot be converted
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// JSON file with conversion parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
