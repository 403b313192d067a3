// ctxlog/src/engine/format.rs
//
// Message interpolation and argument-shape resolution shared by the engine
// implementations. Interpolation follows pino's quick-format rules: %s, %d,
// %j and %% placeholders, surplus params appended space-separated.

use super::{Bindings, ErrorInfo, LogArgs, Value};

/// A [`LogArgs`] value reduced to its entry parts.
pub(crate) struct ResolvedArgs {
    pub fields: Bindings,
    pub message: Option<String>,
    pub error: Option<ErrorInfo>,
}

pub(crate) fn resolve(args: LogArgs) -> ResolvedArgs {
    match args {
        LogArgs::Message { template, params } => ResolvedArgs {
            fields: Bindings::new(),
            message: Some(interpolate(&template, &params)),
            error: None,
        },
        LogArgs::Payload {
            fields,
            message,
            params,
        } => ResolvedArgs {
            fields,
            message: message.map(|m| interpolate(&m, &params)),
            error: None,
        },
        LogArgs::Failure {
            error,
            message,
            params,
        } => {
            // Without an override the error's own message becomes the
            // entry message, matching the collaborator convention.
            let message = message
                .map(|m| interpolate(&m, &params))
                .unwrap_or_else(|| error.message.clone());
            ResolvedArgs {
                fields: Bindings::new(),
                message: Some(message),
                error: Some(error),
            }
        }
    }
}

/// Substitute `%s`/`%d`/`%j` placeholders in order; `%%` is a literal
/// percent. Placeholders beyond the params are left verbatim; params beyond
/// the placeholders are appended space-separated.
pub(crate) fn interpolate(template: &str, params: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut params = params.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'j')) => match params.next() {
                Some(value) => {
                    chars.next();
                    out.push_str(&render(spec, value));
                }
                // No param left for this placeholder.
                None => out.push('%'),
            },
            _ => out.push('%'),
        }
    }

    for value in params {
        out.push(' ');
        out.push_str(&render_value(value));
    }

    out
}

/// Render a value the way a `%s` placeholder would: strings raw, anything
/// else as compact JSON.
pub(crate) fn render_value(value: &Value) -> String {
    render('s', value)
}

fn render(spec: char, value: &Value) -> String {
    match (spec, value) {
        ('s', Value::String(s)) => s.clone(),
        ('d', Value::Number(n)) => n.to_string(),
        // %j, mismatched specs and structured values all fall through to
        // compact JSON.
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn substitutes_placeholders_in_order() {
        let result = interpolate(
            "param1 = %s, param2 = %d",
            &[json!("first"), json!(100)],
        );
        assert_eq!(result, "param1 = first, param2 = 100");
    }

    #[test]
    fn appends_surplus_params() {
        let result = interpolate("no params", &[json!("one"), json!({ "value": 100 })]);
        assert_eq!(result, "no params one {\"value\":100}");
    }

    #[test]
    fn keeps_unmatched_placeholders() {
        assert_eq!(interpolate("left %s alone", &[]), "left %s alone");
    }

    #[test]
    fn escapes_double_percent() {
        assert_eq!(interpolate("100%% sure %s", &[json!("yes")]), "100% sure yes");
    }
}
