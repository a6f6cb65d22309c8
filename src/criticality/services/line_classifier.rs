/// Classification of one physical line inside an index record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `Key: Value` or `Key:`; both parts are trimmed
    FieldStart { key: &'a str, value: &'a str },
    /// Leading whitespace and no colon; carries the trimmed content
    Continuation(&'a str),
    /// Empty or whitespace-only; terminates a record
    Blank,
    /// Anything else; ignored
    Unrecognized,
}

/// LineClassifier turns physical lines into [`LineClass`]es
///
/// The rules are applied in order:
/// 1. whitespace-only lines are [`LineClass::Blank`]
/// 2. an unindented line with a non-empty key before its first `:` is a
///    [`LineClass::FieldStart`]
/// 3. an indented line without a colon is a [`LineClass::Continuation`]
/// 4. everything else is [`LineClass::Unrecognized`], including indented
///    lines that contain a colon
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(line: &str) -> LineClass<'_> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        let indented = line.starts_with(char::is_whitespace);

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if indented || key.is_empty() {
                return LineClass::Unrecognized;
            }
            return LineClass::FieldStart {
                key,
                value: value.trim(),
            };
        }

        if indented {
            return LineClass::Continuation(line.trim());
        }

        LineClass::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_with_value() {
        assert_eq!(
            LineClassifier::classify("Package: libc6"),
            LineClass::FieldStart {
                key: "Package",
                value: "libc6"
            }
        );
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(
            LineClassifier::classify("Homepage: https://www.gnu.org/software/libc/"),
            LineClass::FieldStart {
                key: "Homepage",
                value: "https://www.gnu.org/software/libc/"
            }
        );
    }

    #[test]
    fn test_field_without_value() {
        assert_eq!(
            LineClassifier::classify("Description:"),
            LineClass::FieldStart {
                key: "Description",
                value: ""
            }
        );
        assert_eq!(
            LineClassifier::classify("Conffiles:   "),
            LineClass::FieldStart {
                key: "Conffiles",
                value: ""
            }
        );
    }

    #[test]
    fn test_continuation() {
        assert_eq!(
            LineClassifier::classify("  shared libraries for the GNU C library"),
            LineClass::Continuation("shared libraries for the GNU C library")
        );
        assert_eq!(
            LineClassifier::classify("\t."),
            LineClass::Continuation(".")
        );
    }

    #[test]
    fn test_indented_line_with_colon_is_unrecognized() {
        assert_eq!(
            LineClassifier::classify(" Note: see the manual"),
            LineClass::Unrecognized
        );
        assert_eq!(
            LineClassifier::classify("\tPackage: hijacked"),
            LineClass::Unrecognized
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(LineClassifier::classify(""), LineClass::Blank);
        assert_eq!(LineClassifier::classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn test_unrecognized_lines() {
        assert_eq!(
            LineClassifier::classify("garbage without colon"),
            LineClass::Unrecognized
        );
        assert_eq!(
            LineClassifier::classify(": value without key"),
            LineClass::Unrecognized
        );
    }
}
