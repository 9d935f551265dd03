use serde_json::{Number, Value as JsonValue};

/// Text form of a value as `/echo` measures it: a bare string is its own
/// text, everything else is rendered with [`literal`].
pub fn display_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => literal(other),
    }
}

/// Literal notation: `{'k': v}` objects, `[a, b]` lists, quoted strings,
/// `True`/`False`/`None`, and integer or shortest-float numbers.
pub fn literal(value: &JsonValue) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

fn write_literal(out: &mut String, value: &JsonValue) {
    match value {
        JsonValue::Null => out.push_str("None"),
        JsonValue::Bool(true) => out.push_str("True"),
        JsonValue::Bool(false) => out.push_str("False"),
        JsonValue::Number(n) => out.push_str(&number_literal(n)),
        JsonValue::String(s) => out.push_str(&string_literal(s)),
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        JsonValue::Object(fields) => {
            out.push('{');
            for (i, (key, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&string_literal(key));
                out.push_str(": ");
                write_literal(out, item);
            }
            out.push('}');
        }
    }
}

fn number_literal(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => float_literal(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits, positional for exponents in `-4..16` and
/// `1.5e-07` style otherwise. Whole numbers keep a trailing `.0`.
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest digits, e.g. "-1.2345e3" or "1e-7".
    let sci = format!("{:e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = if exp < 0 {
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };
    format!("{}{}", sign, body)
}

/// Single quotes unless the text has a `'` and no `"`.
fn string_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_and_lists_use_spaced_separators() {
        assert_eq!(literal(&json!({"a": 1})), "{'a': 1}");
        assert_eq!(
            literal(&json!({"z": [true, null], "a": "x"})),
            "{'z': [True, None], 'a': 'x'}"
        );
        assert_eq!(literal(&json!([])), "[]");
    }

    #[test]
    fn bare_strings_are_not_quoted() {
        assert_eq!(display_text(&json!("x")), "x");
        assert_eq!(display_text(&json!(["x"])), "['x']");
    }

    #[test]
    fn quotes_switch_when_text_has_an_apostrophe() {
        assert_eq!(literal(&json!("it's")), r#""it's""#);
        assert_eq!(literal(&json!(r#"it's "x""#)), r#"'it\'s "x"'"#);
        assert_eq!(literal(&json!("a\nb\\")), r"'a\nb\\'");
        assert_eq!(literal(&json!("\u{1}")), r"'\x01'");
        assert_eq!(literal(&json!("ünï")), "'ünï'");
    }

    #[test]
    fn floats_follow_shortest_repr_rules() {
        assert_eq!(literal(&json!(1.0)), "1.0");
        assert_eq!(literal(&json!(-2.5)), "-2.5");
        assert_eq!(literal(&json!(0.1)), "0.1");
        assert_eq!(literal(&json!(1234.5)), "1234.5");
        assert_eq!(literal(&json!(0.0001)), "0.0001");
        assert_eq!(literal(&json!(0.00001)), "1e-05");
        assert_eq!(literal(&json!(1.5e-7)), "1.5e-07");
        assert_eq!(literal(&json!(1e16)), "1e+16");
        assert_eq!(literal(&json!(123456789012345.0)), "123456789012345.0");
    }

    #[test]
    fn integers_render_plainly() {
        assert_eq!(literal(&json!(-7)), "-7");
        assert_eq!(literal(&json!(u64::MAX)), u64::MAX.to_string());
    }
}
