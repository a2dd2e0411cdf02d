//! Parameter set editor operations.
//!
//! Same contract as the record editor: the current mapping goes in, a
//! complete replacement mapping (or `None`) comes out.

use tcb_core::{next_param_name, Params};

use super::{rekey, RenameOutcome};

/// Replace the value stored under `key`
pub fn edit_value(params: &Params, key: &str, value: &str) -> Option<Params> {
    let current = params.get(key)?;
    if current == value {
        return None;
    }
    let mut next = params.clone();
    next.insert(key.to_string(), value.to_string());
    Some(next)
}

/// Commit a rename of `key`; the entry moves to the end
pub fn rename_key(params: &Params, key: &str, candidate: &str) -> RenameOutcome<Params> {
    rekey(params, key, candidate)
}

/// Append a parameter with a generated name and an empty value
pub fn add_param(params: &Params) -> (Params, String) {
    let name = next_param_name(params);
    let mut next = params.clone();
    next.insert(name.clone(), String::new());
    (next, name)
}

pub fn remove_param(params: &Params, key: &str) -> Option<Params> {
    if !params.contains_key(key) {
        return None;
    }
    let mut next = params.clone();
    next.shift_remove(key);
    Some(next)
}
