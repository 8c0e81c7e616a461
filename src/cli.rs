use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to run, program and arguments separated by spaces
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: String,
}
