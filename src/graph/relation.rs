//! Relation vocabulary: admissibility for indexing and display formatting.

use std::sync::LazyLock;

use regex::Regex;

/// Synthetic relation emitted when both query phrases share a stem.
/// Namespaced like graph relations (`/r/SameAs`, not bare `SameAs`).
pub const SAME_AS: &str = "/r/SameAs";

/// Sentinel relation returned when nothing connects the query phrases.
/// Namespaced like graph relations (`/r/NONE`, not bare `NONE`).
pub const NONE: &str = "/r/NONE";

pub const ANTONYM: &str = "/r/Antonym";
pub const DBPEDIA_PREFIX: &str = "/r/dbpedia/";
pub const ETYMOLOGICALLY_PREFIX: &str = "/r/Etymologically";
pub const RELATED_TO_PREFIX: &str = "/r/RelatedTo";
pub const IN_IMAGE: &str = "vg:InImage";

const RELATION_NAMESPACE: &str = "/r/";

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel-case pattern is valid"));

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]+").expect("separator pattern is valid"));

/// Decides which relation types are admitted into the index.
///
/// Antonyms, DBpedia cross-references, etymology links and image
/// co-occurrence links never are; generic related-to links only when
/// `ignore_related` is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationFilter {
    ignore_related: bool,
}

impl RelationFilter {
    pub fn new(ignore_related: bool) -> Self {
        RelationFilter { ignore_related }
    }

    pub fn ignore_related(&self) -> bool {
        self.ignore_related
    }

    pub fn accept(&self, relation: &str) -> bool {
        if relation == ANTONYM {
            return false;
        }
        if relation.starts_with(DBPEDIA_PREFIX) {
            return false;
        }
        if relation.starts_with(ETYMOLOGICALLY_PREFIX) {
            return false;
        }
        if self.ignore_related && relation.starts_with(RELATED_TO_PREFIX) {
            return false;
        }
        relation != IN_IMAGE
    }
}

/// Split a relation identifier into lowercase words.
///
/// The `/r/` namespace is stripped; other namespaces keep only what follows
/// the last `:`. Camel-case boundaries and runs of non-word characters
/// separate words.
pub fn split_relation(relation: &str) -> Vec<String> {
    let name = match relation.strip_prefix(RELATION_NAMESPACE) {
        Some(rest) => rest,
        None => relation.rsplit(':').next().unwrap_or(relation),
    };
    let spaced = CAMEL_BOUNDARY.replace_all(name, "$1 $2");

    WORD_SEPARATOR
        .split(&spaced)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Human-readable form of a relation, e.g. `/r/AtLocation` → "at location".
pub fn display_relation(relation: &str) -> String {
    let lowered = relation.to_lowercase();
    if lowered == "/r/isa" {
        return "a type of".to_string();
    }
    if lowered == "/r/none" {
        return "not related to".to_string();
    }
    split_relation(relation).join(" ")
}
