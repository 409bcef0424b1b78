use windows::Win32::System::Console::*;

const ENABLE_VIRTUAL_TERMINAL_PROCESSING: u32 = 0x4;

// Color is only used if the console accepts VT escape sequences. Redirected output
// has no console mode at all, so it stays plain.
fn enable_vt() -> bool {
    unsafe {
        let mut cm: CONSOLE_MODE = CONSOLE_MODE::default();
        let Ok(h) = GetStdHandle(STD_OUTPUT_HANDLE) else {
            return false;
        };
        if !GetConsoleMode(h, &mut cm as *mut CONSOLE_MODE).as_bool() {
            return false;
        }
        if (cm.0 & ENABLE_VIRTUAL_TERMINAL_PROCESSING) != 0 {
            return true;
        }
        cm.0 |= ENABLE_VIRTUAL_TERMINAL_PROCESSING;
        SetConsoleMode(h, cm).as_bool()
    }
}

pub fn init() { super::set_color(enable_vt()) }
