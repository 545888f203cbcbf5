#![forbid(unsafe_code)]

//! Per-grid configuration assembled from the collection table and the page.

use std::num::NonZeroUsize;

use crate::kind::CollectionKind;

/// Everything one grid needs besides its host handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    pub kind: CollectionKind,
    pub url: String,
    pub empty_message: String,
    pub loading_message: String,
    pub error_message: String,
    /// Maximum number of cards rendered; `None` renders all.
    pub limit: Option<NonZeroUsize>,
}

/// Page attributes read from a grid container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerAttrs {
    /// `data-empty-message`
    pub empty_message: Option<String>,
    /// `data-limit`, unparsed
    pub limit: Option<String>,
}

impl CollectionConfig {
    /// Defaults for `kind` with no page overrides.
    pub fn for_kind(kind: CollectionKind) -> Self {
        Self::from_page(kind, &ContainerAttrs::default())
    }

    /// Defaults for `kind` merged with the container's attributes.
    pub fn from_page(kind: CollectionKind, attrs: &ContainerAttrs) -> Self {
        let spec = kind.spec();
        let empty_message = attrs
            .empty_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(spec.empty_message);
        Self {
            kind,
            url: spec.url.to_owned(),
            empty_message: empty_message.to_owned(),
            loading_message: spec.loading_message.to_owned(),
            error_message: spec.error_message.to_owned(),
            limit: attrs.limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Parse a `data-limit` value.
///
/// Follows the page's integer-prefix rules: leading whitespace is skipped, an
/// optional sign is accepted and parsing stops at the first non-digit. Only
/// positive results yield a limit.
pub fn parse_limit(raw: &str) -> Option<NonZeroUsize> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        });
    NonZeroUsize::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_prefix_rules() {
        assert_eq!(parse_limit("6"), NonZeroUsize::new(6));
        assert_eq!(parse_limit("  12px"), NonZeroUsize::new(12));
        assert_eq!(parse_limit("3.5"), NonZeroUsize::new(3));
        assert_eq!(parse_limit("+4"), NonZeroUsize::new(4));
        assert_eq!(parse_limit("007"), NonZeroUsize::new(7));
    }

    #[test]
    fn non_positive_limits_mean_unlimited() {
        for raw in ["", "0", "-3", "abc", " ", "-", "px12"] {
            assert_eq!(parse_limit(raw), None, "raw {raw:?}");
        }
    }

    #[test]
    fn huge_limit_saturates() {
        assert_eq!(
            parse_limit("99999999999999999999999999"),
            NonZeroUsize::new(usize::MAX)
        );
    }

    #[test]
    fn page_overrides_empty_message_and_limit() {
        let attrs = ContainerAttrs {
            empty_message: Some("nothing yet".into()),
            limit: Some("3".into()),
        };
        let config = CollectionConfig::from_page(CollectionKind::Samples, &attrs);
        assert_eq!(config.empty_message, "nothing yet");
        assert_eq!(config.limit, NonZeroUsize::new(3));
        assert_eq!(config.url, "samples.json");
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let attrs = ContainerAttrs {
            empty_message: Some(String::new()),
            limit: None,
        };
        let config = CollectionConfig::from_page(CollectionKind::Images, &attrs);
        assert_eq!(config.empty_message, CollectionKind::Images.spec().empty_message);
        assert_eq!(config.limit, None);
    }
}
