use clap::Parser;

/// Hotel administration console.
///
/// With a command, runs it once and exits. Without one, reads commands from stdin.
#[derive(Parser, Debug)]
#[command(name = "hotel-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, env = "HOTEL_JSON")]
    pub json: bool,

    /// Console command and its arguments, e.g. `reservations Leroy`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        !self.command.is_empty()
    }
}
