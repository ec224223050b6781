//! Reserved-key collision handling
//!
//! The formatter injects its own `time`, `message`, `level` and `error`
//! values (plus `func` and `file` when caller reporting is on). User fields
//! that reuse one of those keys are moved under a prefixed key so that the
//! rendered line holds each reserved key exactly once.

use super::fields::Params;

pub const TIME_KEY: &str = "time";
pub const MESSAGE_KEY: &str = "message";
pub const LEVEL_KEY: &str = "level";
pub const ERROR_KEY: &str = "error";
pub const FUNC_KEY: &str = "func";
pub const FILE_KEY: &str = "file";

/// Prefix for renamed user fields. It is joined to the original key with no
/// separator, so `time` becomes `paramstime`.
pub const PARAMS_PREFIX: &str = "params";

const ALWAYS_RESERVED: [&str; 4] = [TIME_KEY, MESSAGE_KEY, LEVEL_KEY, ERROR_KEY];
const CALLER_RESERVED: [&str; 2] = [FUNC_KEY, FILE_KEY];

/// A user field moved off a reserved key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub reserved: &'static str,
    pub renamed: String,
}

impl Renamed {
    pub fn diagnostic(&self) -> String {
        format!(
            "field {:?} collides with a reserved key, renamed to {:?}",
            self.reserved, self.renamed
        )
    }
}

/// Key a colliding field is moved to
pub fn renamed_key(key: &str) -> String {
    format!("{}{}", PARAMS_PREFIX, key)
}

/// Move user fields off reserved keys, in place. Returns what was moved, in
/// reserved-key order.
pub fn resolve_collisions(data: &mut Params, report_caller: bool) -> Vec<Renamed> {
    let caller_keys: &[&'static str] = if report_caller { &CALLER_RESERVED } else { &[] };

    let mut renamed = Vec::new();
    for &key in ALWAYS_RESERVED.iter().chain(caller_keys) {
        if let Some(value) = data.shift_remove(key) {
            let new_key = renamed_key(key);
            data.insert(new_key.clone(), value);
            renamed.push(Renamed {
                reserved: key,
                renamed: new_key,
            });
        }
    }
    renamed
}
