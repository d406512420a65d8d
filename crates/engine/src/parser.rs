//! Parsing of marker invocation syntax.
//!
//! A marker occurrence is `{{` + name + optional(`:` + comma-separated
//! params) + `}}`. The content splits on the FIRST `:` into name and
//! parameter string, so colons inside parameters (time strings, URLs) are
//! preserved. There is no escaping mechanism: a parameter cannot contain a
//! literal comma, and content cannot contain a literal `}`.

/// A parsed marker invocation: the registry lookup name plus its ordered,
/// trimmed string parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCall<'a> {
    pub name: &'a str,
    pub params: Vec<String>,
}

/// Parses the content found between `{{` and `}}`.
pub fn parse_marker(content: &str) -> MarkerCall<'_> {
    match content.split_once(':') {
        None => MarkerCall {
            name: content.trim(),
            params: Vec::new(),
        },
        Some((name, param_string)) => MarkerCall {
            name: name.trim(),
            params: param_string.split(',').map(|p| p.trim().to_string()).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        let call = parse_marker("current_year");
        assert_eq!(call.name, "current_year");
        assert!(call.params.is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let call = parse_marker("  current_year  ");
        assert_eq!(call.name, "current_year");
    }

    #[test]
    fn test_params_split_and_trimmed() {
        let call = parse_marker("add: 5 , 3 ,2");
        assert_eq!(call.name, "add");
        assert_eq!(call.params, ["5", "3", "2"]);
    }

    #[test]
    fn test_colons_inside_params_preserved() {
        let call = parse_marker("relative_time:2030-01-01T10:30:00");
        assert_eq!(call.name, "relative_time");
        assert_eq!(call.params, ["2030-01-01T10:30:00"]);
    }

    #[test]
    fn test_trailing_colon_yields_one_empty_param() {
        let call = parse_marker("upper:");
        assert_eq!(call.name, "upper");
        assert_eq!(call.params, [""]);
    }

    #[test]
    fn test_empty_content() {
        let call = parse_marker("");
        assert_eq!(call.name, "");
        assert!(call.params.is_empty());
    }
}
