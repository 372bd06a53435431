//! Shell completions generation command.

use std::io::Write as _;

use clap::CommandFactory as _;
use clap_complete::{Generator, Shell};

use crate::cli::Cli;

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    write_completions(shell, &mut cmd, bin_name);
}

fn write_completions<G: Generator>(generator: G, cmd: &mut clap::Command, bin_name: String) {
    clap_complete::generate(generator, cmd, bin_name, &mut std::io::stdout());
    std::io::stdout().flush().ok();
}
