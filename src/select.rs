use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::types::ThumbnailType;

pub const DEFAULT_THUMBNAIL_ORDER: [ThumbnailType; 3] = [
    ThumbnailType::Snapshot,
    ThumbnailType::Boxart,
    ThumbnailType::TitleScreen,
];

pub const DEFAULT_REGION_ORDER: [&str; 3] = ["usa", "europe", "world"];

// Contents of each `(...)` group; nested groups are not special here.
static PAREN_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// `(raw_title, url)` pairs for one thumbnail type, in catalog order.
pub type Candidates = Vec<(String, String)>;

/// Pick one URL for a clean key.
///
/// Thumbnail types are tried in `type_priority` order and region preference
/// decides between each type's candidates. A type whose chosen URL is empty
/// does not count and the next type is tried. `None` means no requested type
/// has a usable image for the key.
pub fn select_image_url<'a>(
    groups: &'a HashMap<ThumbnailType, Candidates>,
    type_priority: &[ThumbnailType],
    region_priority: &[String],
) -> Option<&'a str> {
    type_priority
        .iter()
        .filter_map(|t| groups.get(t))
        .filter_map(|candidates| apply_region_preference(candidates, region_priority))
        .find(|url| !url.is_empty())
}

/// Choose between candidates of one thumbnail type.
///
/// A single candidate is returned as is. Otherwise each region is tried in
/// order and the first candidate carrying it inside a parenthesised group
/// wins; with no hit at all the first candidate is used.
pub fn apply_region_preference<'a>(
    candidates: &'a [(String, String)],
    region_priority: &[String],
) -> Option<&'a str> {
    match candidates {
        [] => None,
        [(_, url)] => Some(url.as_str()),
        [(_, first), ..] => region_priority
            .iter()
            .find_map(|region| {
                let region = region.to_lowercase();
                candidates
                    .iter()
                    .find(|(title, _)| title_has_region(title, &region))
                    .map(|(_, url)| url.as_str())
            })
            .or(Some(first.as_str())),
    }
}

fn title_has_region(title: &str, region: &str) -> bool {
    PAREN_GROUP
        .captures_iter(title)
        .any(|caps| caps[1].to_lowercase().contains(region))
}
