//! Positional template formatting (`{0}`, `{1,-8}`).

use std::fmt;

use super::FormatError;

/// Widest field an alignment may ask for.
const MAX_ALIGNMENT: u64 = 999_999;

/// Substitutes `{index}` and `{index,alignment}` placeholders with `args`.
///
/// A positive alignment right-aligns the argument in a field of that width,
/// a negative one left-aligns it. `{{` and `}}` produce literal braces.
/// Alignments beyond ±999999 are rejected. Format specifiers after `:` are
/// not supported and are rejected.
///
/// # Examples
///
/// - `format_with("{0} of {1}", &[&3, &"ten"])` → `"3 of ten"`
/// - `format_with("[{0,4}]", &[&7])` → `"[   7]"`
pub fn format_with(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut end = None;
                for (i, next) in chars.by_ref() {
                    match next {
                        '}' => {
                            end = Some(i);
                            break;
                        }
                        '{' => return Err(FormatError::UnbalancedBrace { position: i }),
                        _ => {}
                    }
                }
                let end = end.ok_or(FormatError::UnbalancedBrace { position: pos })?;
                render_placeholder(&mut out, &template[pos + 1..end], args)?;
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnbalancedBrace { position: pos });
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn render_placeholder(
    out: &mut String,
    placeholder: &str,
    args: &[&dyn fmt::Display],
) -> Result<(), FormatError> {
    let bad = || FormatError::BadPlaceholder {
        placeholder: placeholder.to_string(),
    };

    let (index, alignment) = match placeholder.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (placeholder, None),
    };
    let index: usize = index.trim().parse().map_err(|_| bad())?;
    let alignment: i64 = match alignment {
        Some(a) => a.trim().parse().map_err(|_| bad())?,
        None => 0,
    };

    let arg = args.get(index).ok_or(FormatError::MissingArgument {
        index,
        count: args.len(),
    })?;
    let rendered = arg.to_string();
    if alignment.unsigned_abs() > MAX_ALIGNMENT {
        return Err(bad());
    }
    let width = usize::try_from(alignment.unsigned_abs()).map_err(|_| bad())?;
    let padding = " ".repeat(width.saturating_sub(rendered.chars().count()));

    if alignment < 0 {
        out.push_str(&rendered);
        out.push_str(&padding);
    } else {
        out.push_str(&padding);
        out.push_str(&rendered);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        assert_eq!(format_with("{0}-{1}", &[&"a", &"b"]).unwrap(), "a-b");
        assert_eq!(format_with("{1}{0}{1}", &[&1, &2]).unwrap(), "212");
        assert_eq!(format_with("no placeholders", &[]).unwrap(), "no placeholders");
    }

    #[test]
    fn alignment() {
        assert_eq!(format_with("[{0,4}]", &[&7]).unwrap(), "[   7]");
        assert_eq!(format_with("[{0,-4}]", &[&"ab"]).unwrap(), "[ab  ]");
        assert_eq!(format_with("[{0,2}]", &[&"long"]).unwrap(), "[long]");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(format_with("{{{0}}}", &[&"x"]).unwrap(), "{x}");
        assert_eq!(format_with("}}{{", &[]).unwrap(), "}{");
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            format_with("{0} {2}", &[&"a", &"b"]),
            Err(FormatError::MissingArgument { index: 2, count: 2 })
        );
    }

    #[test]
    fn unbalanced_braces() {
        assert_eq!(
            format_with("abc {0", &[&1]),
            Err(FormatError::UnbalancedBrace { position: 4 })
        );
        assert_eq!(
            format_with("a } b", &[]),
            Err(FormatError::UnbalancedBrace { position: 2 })
        );
        assert_eq!(
            format_with("{0{1}", &[&1, &2]),
            Err(FormatError::UnbalancedBrace { position: 2 })
        );
    }

    #[test]
    fn alignment_width_is_capped() {
        assert_eq!(
            format_with("[{0,999999}]", &[&1]).map(|s| s.len()),
            Ok(1_000_001)
        );
        for template in ["{0,1000000}", "{0,-1000000}", "{0,9223372036854775807}"] {
            assert!(
                matches!(
                    format_with(template, &[&1]),
                    Err(FormatError::BadPlaceholder { .. })
                ),
                "{template}"
            );
        }
    }

    #[test]
    fn bad_placeholder() {
        assert!(matches!(
            format_with("{x}", &[&1]),
            Err(FormatError::BadPlaceholder { .. })
        ));
        assert!(matches!(
            format_with("{0:N2}", &[&1]),
            Err(FormatError::BadPlaceholder { .. })
        ));
    }
}
