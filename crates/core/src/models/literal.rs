//! Rewrites a printed server-side dictionary into JSON.
//!
//! The plant data endpoint stringifies the stored document instead of
//! serializing it, so the text uses single quotes, `True`/`False`/`None`,
//! `ObjectId('...')` and `datetime.datetime(...)`. Only those forms are
//! understood; anything else yields `None`.

use std::fmt::Write as _;
use std::iter::Peekable;
use std::str::Chars;

/// Convert a printed dictionary to JSON text, or `None` when the input uses a
/// construct this rewriter does not know.
#[must_use]
pub fn to_json(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '\'' | '"' => {
                chars.next();
                let s = quoted(&mut chars, c)?;
                push_string(&mut out, &s);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let name = identifier(&mut chars);
                if chars.peek() == Some(&'(') {
                    chars.next();
                    let args = call_args(&mut chars)?;
                    push_string(&mut out, &call(&name, &args)?);
                } else {
                    out.push_str(match name.as_str() {
                        "True" => "true",
                        "False" => "false",
                        "None" => "null",
                        _ => return None,
                    });
                }
            }
            _ => {
                out.push(c);
                chars.next();
            }
        }
    }
    Some(out)
}

fn quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut s = String::new();
    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                'n' => s.push('\n'),
                't' => s.push('\t'),
                'r' => s.push('\r'),
                other => s.push(other),
            },
            c if c == quote => return Some(s),
            c => s.push(c),
        }
    }
}

fn identifier(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

/// Arguments up to the closing parenthesis, split on commas. Quotes are kept.
fn call_args(chars: &mut Peekable<Chars<'_>>) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote = None;
    loop {
        let c = chars.next()?;
        match (quote, c) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                current.push(c);
            }
            (None, ',') => args.push(std::mem::take(&mut current).trim().to_string()),
            (None, ')') => {
                let last = current.trim();
                if !last.is_empty() {
                    args.push(last.to_string());
                }
                return Some(args);
            }
            (None, '(') => return None,
            (None, c) => current.push(c),
        }
    }
}

fn call(name: &str, args: &[String]) -> Option<String> {
    match name {
        "ObjectId" => {
            let arg = args.first()?;
            let mut chars = arg.chars().peekable();
            let quote = chars.next().filter(|q| *q == '\'' || *q == '"')?;
            quoted(&mut chars, quote)
        }
        "datetime" | "datetime.datetime" => timestamp(args),
        _ => None,
    }
}

/// `datetime(y, m, d[, h, mi, s, us])` as an ISO 8601 local timestamp.
/// Keyword arguments such as `tzinfo=` are ignored.
fn timestamp(args: &[String]) -> Option<String> {
    let parts: Vec<u32> = args
        .iter()
        .take_while(|a| !a.contains('='))
        .map(|a| a.parse().ok())
        .collect::<Option<_>>()?;
    let part = |i: usize| parts.get(i).copied().unwrap_or(0);
    if parts.len() < 3 {
        return None;
    }

    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        part(0),
        part(1),
        part(2),
        part(3),
        part(4),
        part(5)
    );
    if parts.len() > 6 {
        let _ = write!(out, ".{:06}", part(6));
    }
    Some(out)
}

fn push_string(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::String(s.to_string()).to_string());
}
