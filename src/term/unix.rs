// Generated files are frequently produced from build scripts and CI jobs where
// stdout is a pipe; escape sequences only make sense on an actual terminal.
fn stdout_is_tty() -> bool { unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 } }

pub fn init() { super::set_color(stdout_is_tty()) }
