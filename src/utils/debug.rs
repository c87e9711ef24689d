use once_cell::sync::Lazy;

/// Global debug mode flag, initialized once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("RATECARD_DEBUG").is_ok());

/// Conditional debug output macro
///
/// Prints to stderr only when `RATECARD_DEBUG` is set in the environment.
/// The flag is read once, so call sites avoid per-call env lookups.
///
/// # Examples
///
/// ```
/// use ratecard::debug_println;
/// debug_println!("resolved locale: {}", "en");
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!($($arg)*);
        }
    };
}

/// Re-export for internal use
pub use debug_println;
