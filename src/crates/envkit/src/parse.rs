//! Parsing rules shared by the getters.

use std::str::FromStr;

/// Parse a boolean.
///
/// Recognizes: "1", "t", "T", "TRUE", "true", "True" as true
/// Recognizes: "0", "f", "F", "FALSE", "false", "False" as false
///
/// Other spellings and mixed case ("yes", "tRuE") are rejected.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Split `raw` on `separator`.
///
/// An empty separator splits into individual characters.
pub fn split_list(raw: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return raw.chars().map(String::from).collect();
    }
    raw.split(separator).map(String::from).collect()
}

/// Split and parse each element, mapping unparsable elements to zero.
///
/// `"1,x,3"` yields `[1, 0, 3]`: a bad element keeps its slot.
pub fn parse_list_lenient<T>(raw: &str, separator: &str) -> Vec<T>
where
    T: FromStr + Default,
{
    split_list(raw, separator)
        .iter()
        .map(|item| item.parse::<T>().unwrap_or_default())
        .collect()
}

/// Split and parse each element, failing on the first bad one.
///
/// The error carries the offending element and the parser's message.
pub fn parse_list_strict<T>(raw: &str, separator: &str) -> Result<Vec<T>, (String, String)>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    split_list(raw, separator)
        .into_iter()
        .map(|item| item.parse::<T>().map_err(|e| (item.clone(), e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        let test_cases = vec![
            ("1", Some(true)),
            ("t", Some(true)),
            ("T", Some(true)),
            ("TRUE", Some(true)),
            ("true", Some(true)),
            ("True", Some(true)),
            ("0", Some(false)),
            ("f", Some(false)),
            ("F", Some(false)),
            ("FALSE", Some(false)),
            ("false", Some(false)),
            ("False", Some(false)),
            ("yes", None),
            ("on", None),
            ("no", None),
            ("off", None),
            ("tRuE", None),
            ("maybe", None),
            ("", None),
            (" true", None),
        ];

        for (value, expected) in test_cases {
            assert_eq!(parse_bool(value), expected, "Failed for value: {:?}", value);
        }
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split_list("a", ","), vec!["a"]);
        assert_eq!(split_list("a,,b", ","), vec!["a", "", "b"]);
        assert_eq!(split_list("a::b", "::"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_list_empty_separator() {
        assert_eq!(split_list("abc", ""), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_list_lenient_zeroes_bad_elements() {
        let parsed: Vec<isize> = parse_list_lenient("1,x,3", ",");
        assert_eq!(parsed, vec![1, 0, 3]);

        let parsed: Vec<isize> = parse_list_lenient("1,,3", ",");
        assert_eq!(parsed, vec![1, 0, 3]);

        let parsed: Vec<isize> = parse_list_lenient(" 1,2", ",");
        assert_eq!(parsed, vec![0, 2]);
    }

    #[test]
    fn test_parse_list_strict() {
        let parsed: Vec<isize> = parse_list_strict("-1,2,+3", ",").unwrap();
        assert_eq!(parsed, vec![-1, 2, 3]);

        let (item, _) = parse_list_strict::<isize>("1,x,3", ",").unwrap_err();
        assert_eq!(item, "x");
    }
}
