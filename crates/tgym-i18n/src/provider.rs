//! The text lookup seam and positional interpolation.

use std::fmt::{self, Write as _};

/// Resolves symbolic keys to display strings.
///
/// Implementations never fail: a missing key resolves to the key itself, so
/// a misconfigured catalog shows `rep_counter` instead of crashing.
pub trait TextProvider {
    /// Look up `key`, falling back to `key` when absent.
    fn lookup<'a>(&'a self, key: &'a str) -> &'a str;

    /// Look up `key` and substitute `args` into its placeholders.
    ///
    /// See [`interpolate`] for the placeholder rules.
    fn lookup_formatted(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        interpolate(self.lookup(key), args)
    }
}

/// A provider with no entries: every lookup is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl TextProvider for KeyEcho {
    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        key
    }
}

/// Substitute positional arguments into `template`.
///
/// - `{}` takes the next argument in order.
/// - `{N}` takes argument `N` (zero-based) without advancing the order.
/// - `{{` and `}}` produce literal braces.
/// - A placeholder with no matching argument is left in place verbatim.
/// - Surplus arguments are ignored.
/// - Substituted text is never re-scanned.
#[must_use]
pub fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 4);
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        // tail starts with a single '{'
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let inner = &tail[1..close];
        let token = &tail[..=close];
        let index = if inner.is_empty() {
            let i = next;
            next += 1;
            Some(i)
        } else {
            inner.parse::<usize>().ok()
        };
        match index.and_then(|i| args.get(i)) {
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(token),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}
