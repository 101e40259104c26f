// bmark/src/util/helper.rs
use std::io::{self, IsTerminal};

pub fn is_stdout_piped() -> bool {
    !io::stdout().is_terminal()
}

pub fn is_stderr_piped() -> bool {
    !io::stderr().is_terminal()
}
