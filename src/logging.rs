//! Console logging. Browser console on wasm32, stderr everywhere else so the
//! core stays usable from native tests.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn emit(level: Level, msg: &str) {
    use wasm_bindgen::JsValue;
    let line = JsValue::from_str(&format!("[birthday-wishes] {}: {msg}", level.label()));
    match level {
        Level::Info => web_sys::console::log_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn emit(level: Level, msg: &str) {
    eprintln!("[birthday-wishes] {}: {msg}", level.label());
}

macro_rules! log_info {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Info, &format!($($t)*))
    }
}

macro_rules! log_warn {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, &format!($($t)*))
    }
}

macro_rules! log_error {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Error, &format!($($t)*))
    }
}

pub(crate) use {log_error, log_info, log_warn};
