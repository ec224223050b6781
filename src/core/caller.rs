//! Caller resolution
//!
//! Walks the current stack and returns the first frame that belongs to a
//! crate other than this one.
//!
//! Known limitation: a wrapper crate that logs on behalf of an application
//! is itself reported as the caller, because its frames are the first ones
//! outside this crate.

use std::sync::OnceLock;

/// Upper bound on frames inspected past the first frame of this crate
pub const MAX_CALLER_DEPTH: usize = 25;

/// Frames from the unwinder and the `backtrace` crate that precede ours
pub const KNOWN_FRAMES: usize = 4;

static PACKAGE_NAME: OnceLock<String> = OnceLock::new();

/// Function, file and line of the code that issued a log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

/// Reduce a fully qualified function name to its crate name.
///
/// Trailing `::` segments are dropped for as long as the last `::` sits
/// after the last `/`, so path-like segments are not split.
pub fn package_name(function: &str) -> &str {
    let mut name = function;
    while let Some(sep) = name.rfind("::") {
        if name.rfind('/').is_some_and(|slash| slash > sep) {
            break;
        }
        name = &name[..sep];
    }
    name.trim_start_matches('<')
}

fn own_package() -> &'static str {
    PACKAGE_NAME.get_or_init(|| package_name(std::any::type_name_of_val(&resolve)).to_string())
}

/// Find the first stack frame outside this crate, or `None` when the bounded
/// walk ends without one or symbols are unavailable.
pub fn resolve() -> Option<Frame> {
    let own = own_package();
    let mut seen_own = false;
    let mut depth = 0usize;
    let mut caller: Option<Frame> = None;

    backtrace::trace(|frame| {
        depth += 1;
        backtrace::resolve_frame(frame, |symbol| {
            if caller.is_some() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            let function = format!("{:#}", name);
            if package_name(&function) == own {
                seen_own = true;
                return;
            }
            // unwinder and backtrace frames sit above our own
            if !seen_own {
                return;
            }
            caller = Some(Frame {
                function,
                file: symbol
                    .filename()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default(),
                line: symbol.lineno().unwrap_or(0),
            });
        });
        caller.is_none() && depth < KNOWN_FRAMES + MAX_CALLER_DEPTH
    });

    caller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_strips_path() {
        assert_eq!(package_name("rogger::core::caller::resolve"), "rogger");
        assert_eq!(package_name("app::main::{{closure}}"), "app");
        assert_eq!(package_name("main"), "main");
    }

    #[test]
    fn test_package_name_trait_impl() {
        assert_eq!(
            package_name("<rogger::core::Entry as core::clone::Clone>::clone"),
            "rogger"
        );
    }

    #[test]
    fn test_package_name_keeps_path_segments() {
        assert_eq!(package_name("vendor/lib::run"), "vendor/lib");
        assert_eq!(package_name("x::{impl at src/a.rs}"), "x::{impl at src/a.rs}");
    }

    #[test]
    fn test_own_package_is_cached() {
        let first = own_package();
        let second = own_package();
        assert_eq!(first, "rogger");
        assert!(std::ptr::eq(first, second));
    }
}
