use serde::{Serialize, Serializer};

/// One `Accept-Language` entry: the tag as the client declared it and its
/// weight in `[0.0, 1.0]`.
///
/// Serializes as a `[tag, weight]` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedLocale {
    pub tag: String,
    pub weight: f64,
}

impl AcceptedLocale {
    pub fn new(tag: impl Into<String>, weight: f64) -> Self {
        Self {
            tag: tag.into(),
            weight,
        }
    }
}

impl Serialize for AcceptedLocale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.tag, self.weight).serialize(serializer)
    }
}
