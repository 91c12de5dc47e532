//! Triple records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::relation::display_relation;

/// A (subject, relation, object) fact with resolved, human-readable endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Triple {
    pub fn new<S, R, O>(subject: S, relation: R, object: O) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        O: Into<String>,
    {
        Triple {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }

    /// Render as a sentence-like phrase, e.g. "dog a type of animal".
    pub fn display(&self) -> String {
        format!(
            "{} {} {}",
            self.subject,
            display_relation(&self.relation),
            self.object
        )
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.relation, self.object)
    }
}

/// A triple as it appears in the triple store, before label resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTriple {
    pub subject_id: String,
    pub relation: String,
    pub object_id: String,
}

impl RawTriple {
    pub fn new<S, R, O>(subject_id: S, relation: R, object_id: O) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        O: Into<String>,
    {
        RawTriple {
            subject_id: subject_id.into(),
            relation: relation.into(),
            object_id: object_id.into(),
        }
    }
}

/// A retrieval result: a triple and its relevance score in `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTriple {
    pub triple: Triple,
    pub score: f32,
    /// Position of the triple in the index; `None` for synthetic results.
    pub position: Option<usize>,
}

impl ScoredTriple {
    pub fn new(triple: Triple, score: f32, position: Option<usize>) -> Self {
        ScoredTriple {
            triple,
            score,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_display() {
        let triple = Triple::new("dog", "/r/IsA", "animal");
        assert_eq!(triple.display(), "dog a type of animal");
        assert_eq!(triple.to_string(), "(dog, /r/IsA, animal)");

        let triple = Triple::new("oven", "/r/AtLocation", "kitchen");
        assert_eq!(triple.display(), "oven at location kitchen");
    }
}
