use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use self::windows::*;

static COLOR: AtomicBool = AtomicBool::new(false);

/// True once init() has decided that stdout can render ANSI color.
pub fn color_enabled() -> bool { COLOR.load(Ordering::Relaxed) }

fn set_color(on: bool) { COLOR.store(on && std::env::var_os("NO_COLOR").is_none(), Ordering::Relaxed) }
