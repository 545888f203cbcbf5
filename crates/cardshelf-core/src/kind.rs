#![forbid(unsafe_code)]

//! The three collection kinds and their static definitions.
//!
//! A kind is the strategy tag that selects the data source, the search extras
//! and the card builder for one grid. Records themselves are never inspected to
//! decide how they render.

use crate::record::Record;

/// Which content a grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Apps,
    Samples,
    Images,
}

/// Static per-kind definition: where the grid lives, where its data comes
/// from, and what it says while loading, failing, or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    pub container_selector: &'static str,
    pub search_selector: &'static str,
    pub url: &'static str,
    pub empty_message: &'static str,
    pub loading_message: &'static str,
    pub error_message: &'static str,
}

const APPS: CollectionSpec = CollectionSpec {
    container_selector: "#apps .cards",
    search_selector: "#app-search",
    url: "apps.json",
    empty_message: "找不到符合的 App，小王子仍在尋找中。",
    loading_message: "載入 App 清單中...",
    error_message: "無法載入 App 清單，請稍後再試。",
};

const SAMPLES: CollectionSpec = CollectionSpec {
    container_selector: "#samples .sample-cards",
    search_selector: "#sample-search",
    url: "samples.json",
    empty_message: "找不到程式範例，小王子正在編排程式星塵。",
    loading_message: "載入程式範例中...",
    error_message: "無法載入程式範例，請稍後再試。",
};

const IMAGES: CollectionSpec = CollectionSpec {
    container_selector: "#gallery .image-cards",
    search_selector: "#image-search",
    url: "images.json",
    empty_message: "找不到圖片，小王子正在整理相冊。",
    loading_message: "載入圖片中...",
    error_message: "無法載入圖片，請稍後再試。",
};

impl CollectionKind {
    /// Page order in which grids are discovered and loaded.
    pub const ALL: [Self; 3] = [Self::Apps, Self::Samples, Self::Images];

    pub const fn spec(self) -> &'static CollectionSpec {
        match self {
            Self::Apps => &APPS,
            Self::Samples => &SAMPLES,
            Self::Images => &IMAGES,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Samples => "samples",
            Self::Images => "images",
        }
    }

    /// Extra search tokens contributed by a record of this kind.
    pub fn extras(self, record: &Record) -> Vec<String> {
        match self {
            Self::Apps => record
                .github_link()
                .map(|_| vec!["github".to_owned()])
                .unwrap_or_default(),
            Self::Samples => ["code", "sample", "程式範例"].map(str::to_owned).to_vec(),
            Self::Images => ["image", "picture"]
                .into_iter()
                .map(str::to_owned)
                .chain(record.tags.iter().cloned())
                .collect(),
        }
    }
}

impl core::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_extras_only_with_github() {
        let plain = Record::titled("A");
        let linked = Record::titled("A").with_github("https://github.com/a");
        assert!(CollectionKind::Apps.extras(&plain).is_empty());
        assert_eq!(CollectionKind::Apps.extras(&linked), vec!["github"]);
    }

    #[test]
    fn sample_extras_are_fixed() {
        let extras = CollectionKind::Samples.extras(&Record::titled("S").with_tags(["x"]));
        assert_eq!(extras, vec!["code", "sample", "程式範例"]);
    }

    #[test]
    fn image_extras_repeat_tags() {
        let extras = CollectionKind::Images.extras(&Record::titled("M").with_tags(["moon", "night"]));
        assert_eq!(extras, vec!["image", "picture", "moon", "night"]);
    }

    #[test]
    fn specs_point_at_distinct_sources() {
        let urls: Vec<_> = CollectionKind::ALL.iter().map(|k| k.spec().url).collect();
        assert_eq!(urls, vec!["apps.json", "samples.json", "images.json"]);
    }
}
