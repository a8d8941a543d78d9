//! Output formatting for extracted commands.
//!
//! The default [`OutputFormat::Go`] form writes one Go composite literal per
//! command, ready to paste into a completion table:
//!
//! ```text
//!
//!   { "SET", []string{"key", "value", "[{NX|XX}]"}, false },
//!   { "PING", nil, false },
//!
//! ```

use std::io::Write;

use colored::Colorize;

use crate::config::DEFAULT_INDENT;
use crate::error::Result;
use crate::extract::CommandEntry;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Go composite literals (`{ "NAME", []string{...}, false },`).
    #[default]
    Go,
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
    /// One usage line per command.
    Usage,
}

/// Emitter settings. Color is an explicit input; the emitter never inspects
/// the terminal itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Indentation before each Go literal.
    pub indent: String,
    /// Highlight names and keywords with ANSI colors (Go format only).
    pub color: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Go,
            indent: DEFAULT_INDENT.to_string(),
            color: false,
        }
    }
}

/// Writes `entries` to `out` in the requested format.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::{CommandEntry, EmitOptions, emit};
///
/// let entries = vec![
///     CommandEntry::new("GET", vec!["key".to_string()]),
///     CommandEntry::new("PING", Vec::new()),
/// ];
///
/// let mut out = Vec::new();
/// emit(&mut out, &entries, &EmitOptions::default()).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\n  { \"GET\", []string{\"key\"}, false },\n  { \"PING\", nil, false },\n\n"
/// );
/// ```
pub fn emit<W: Write>(out: &mut W, entries: &[CommandEntry], options: &EmitOptions) -> Result<()> {
    match options.format {
        OutputFormat::Go => {
            writeln!(out)?;
            for entry in entries {
                writeln!(
                    out,
                    "{}{}",
                    options.indent,
                    go_literal(entry, options.color)
                )?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, entries)?;
        }
        OutputFormat::Usage => {
            for entry in entries {
                writeln!(out, "{entry}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Formats one entry as a Go literal, without indentation.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::{CommandEntry, go_literal};
///
/// let entry = CommandEntry::new("PING", Vec::new());
/// assert_eq!(go_literal(&entry, false), r#"{ "PING", nil, false },"#);
/// ```
pub fn go_literal(entry: &CommandEntry, color: bool) -> String {
    let name = yellow(&go_quote(&entry.name), color);

    if entry.arguments.is_empty() {
        return format!(
            "{{ {name}, {}, {} }},",
            bold("nil", color),
            bold("false", color)
        );
    }

    let arguments = entry
        .arguments
        .iter()
        .map(|arg| yellow(&go_quote(arg), color))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{{ {name}, {}{{{arguments}}}, {} }},",
        bold("[]string", color),
        bold("false", color)
    )
}

/// Quotes `s` as a Go interpreted string literal.
///
/// Quotes, backslashes and control characters are escaped, as are format
/// characters, private-use code points and noncharacters (`\u`/`\U`
/// escapes). Other non-ASCII characters (such as `…`) are kept as-is,
/// including code points Unicode has not assigned yet.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::go_quote;
///
/// assert_eq!(go_quote("key…"), "\"key…\"");
/// assert_eq!(go_quote("a\"b\\c\n"), r#""a\"b\\c\n""#);
/// assert_eq!(go_quote("\u{1}"), r#""\x01""#);
/// ```
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');

    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if !is_printable(c) => {
                if (c as u32) < 0x10000 {
                    quoted.push_str(&format!("\\u{:04x}", c as u32));
                } else {
                    quoted.push_str(&format!("\\U{:08x}", c as u32));
                }
            }
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{ad}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{feff}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{f0000}'..='\u{ffffd}'
            | '\u{100000}'..='\u{10fffd}'
            | '\u{fdd0}'..='\u{fdef}'
    ) && (c as u32) & 0xfffe != 0xfffe
}

fn yellow(s: &str, color: bool) -> String {
    if color {
        s.yellow().to_string()
    } else {
        s.to_string()
    }
}

fn bold(s: &str, color: bool) -> String {
    if color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}
