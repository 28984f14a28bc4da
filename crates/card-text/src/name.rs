//! Two-line name splitting

/// A display name split into render lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLines {
    /// The surname line (first whitespace-separated token).
    pub primary: String,
    /// The given-names line, drawn smaller beneath the surname.
    pub secondary: Option<String>,
}

/// Split a display name into a surname line and a given-names line.
///
/// With two or more whitespace-separated tokens the first token becomes
/// the primary line and the rest, joined with single spaces, the
/// secondary line. A single token stays on one line. This is a fixed
/// heuristic, not locale-configurable.
pub fn split_name(name: &str) -> NameLines {
    let mut tokens = name.split_whitespace();
    let primary = tokens.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = tokens.collect();

    NameLines {
        primary,
        secondary: if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_tokens_split_into_two_lines() {
        let lines = split_name("Asanov Berik Nurlanovich");
        assert_eq!(lines.primary, "Asanov");
        assert_eq!(lines.secondary.as_deref(), Some("Berik Nurlanovich"));
    }

    #[test]
    fn single_token_stays_on_one_line() {
        let lines = split_name("Madonna");
        assert_eq!(lines.primary, "Madonna");
        assert_eq!(lines.secondary, None);
    }

    #[test]
    fn extra_whitespace_is_collapsed() {
        let lines = split_name("  Асанов   Берик ");
        assert_eq!(lines.primary, "Асанов");
        assert_eq!(lines.secondary.as_deref(), Some("Берик"));
    }

    #[test]
    fn empty_name() {
        let lines = split_name("");
        assert_eq!(lines.primary, "");
        assert_eq!(lines.secondary, None);
    }
}
