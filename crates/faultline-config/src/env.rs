use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand environment placeholders in raw TOML text
///
/// Comment lines are copied verbatim so commented-out settings never
/// require their variables to be set.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
            let default = captures.get(2).map(|m| m.as_str());
            resolve(&captures[1], default).unwrap_or_else(|e| {
                if failure.is_none() {
                    failure = Some(e);
                }
                String::new()
            })
        });

        if let Some(e) = failure {
            return Err(e);
        }

        output.push_str(&expanded);
    }

    Ok(output)
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, String> {
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[reporting]\npanic_code = \"PANIC\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_variable() {
        temp_env::with_var("FAULTLINE_PANIC_CODE", Some("BOOM"), || {
            let result = expand_env("panic_code = \"{{ env.FAULTLINE_PANIC_CODE }}\"").unwrap();
            assert_eq!(result, "panic_code = \"BOOM\"");
        });
    }

    #[test]
    fn missing_variable_is_an_error() {
        temp_env::with_var_unset("FAULTLINE_MISSING", || {
            let err = expand_env("x = \"{{ env.FAULTLINE_MISSING }}\"").unwrap_err();
            assert!(err.contains("FAULTLINE_MISSING"));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("FAULTLINE_OPTIONAL", || {
            let result = expand_env("x = \"{{ env.FAULTLINE_OPTIONAL | default(\"12\") }}\"").unwrap();
            assert_eq!(result, "x = \"12\"");
        });

        temp_env::with_var("FAULTLINE_OPTIONAL", Some("16"), || {
            let result = expand_env("x = \"{{ env.FAULTLINE_OPTIONAL | default(\"12\") }}\"").unwrap();
            assert_eq!(result, "x = \"16\"");
        });
    }

    #[test]
    fn unscoped_key_is_rejected() {
        let err = expand_env("x = \"{{ vars.FOO }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comments_skip_expansion() {
        temp_env::with_var_unset("FAULTLINE_MISSING", || {
            let input = "  # x = \"{{ env.FAULTLINE_MISSING }}\"\ny = 1";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
