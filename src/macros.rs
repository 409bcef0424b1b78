#![allow(unused_macros, dead_code)]
macro_rules! verbose_println {
    ($($p:expr),+) => {
        if (config::ARGS.verbose) {
            println!($($p),+);
        }
    }
}
macro_rules! info {
    ($($p:expr),+) => {
        println!("{}: {}", blue!("INFO"), format_args!($($p),+))
    }
}

macro_rules! warn {
    ($($p:expr),+) => {
        eprintln!("{}: {}", yellow!("WARNING"), format_args!($($p),+))
    }
}
macro_rules! general_err {
    ($msg:expr) => {
        Error::new(crate::ErrorKind::General, format!("{}", $msg).as_str())
    };
}
macro_rules! malformed_err {
    ($($msg:expr),+) => {
        Error::new(crate::ErrorKind::MalformedInput, format!($($msg),+).as_str())
    };
}
macro_rules! record_err {
    ($space:expr, $code:expr, $($msg:expr),+) => {
        Error::new(
            crate::ErrorKind::MalformedInput,
            format!("{} opcode 0x{:02X}: {}", $space.label(), $code, format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! write_err {
    ($path:expr, $e:expr) => {
        Error::new(
            crate::ErrorKind::OutputWrite,
            format!("cannot write {}: {}", $path.display(), $e).as_str(),
        )
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
// the plain text is used whenever the terminal can't (or shouldn't) show color
macro_rules! paint {
    ($color: literal, $msg: expr) => {
        if crate::term::color_enabled() {
            color!($color, $msg)
        } else {
            $msg
        }
    };
}
macro_rules! red {
    ($msg:expr) => {
        paint!(91, $msg)
    };
}
macro_rules! green {
    ($msg:expr) => {
        paint!(92, $msg)
    };
}
macro_rules! yellow {
    ($msg:expr) => {
        paint!(93, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        paint!(94, $msg)
    };
}
