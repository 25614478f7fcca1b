//! Serialization implementations for PackageContent
//!
//! A content entry has two textual shapes: a bare source string and an
//! expanded object. Reading accepts both and fills in the defaults,
//! writing picks the most compact shape that reads back to the same
//! value. Member names follow a configurable naming policy so the codec
//! stays symmetric under either case convention.

use std::fmt;

use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PackfoldError, Result};
use crate::manifest::content::{ContentData, PackageContent};

/// Case convention for content member names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    /// `source` / `target` / `filter`
    #[default]
    Camel,
    /// `Source` / `Target` / `Filter`
    Pascal,
}

/// Member names for one case convention
struct FieldNames {
    source: &'static str,
    target: &'static str,
    filter: &'static str,
}

const CAMEL_NAMES: FieldNames = FieldNames {
    source: "source",
    target: "target",
    filter: "filter",
};

const PASCAL_NAMES: FieldNames = FieldNames {
    source: "Source",
    target: "Target",
    filter: "Filter",
};

impl NameStyle {
    fn names(self) -> &'static FieldNames {
        match self {
            NameStyle::Camel => &CAMEL_NAMES,
            NameStyle::Pascal => &PASCAL_NAMES,
        }
    }
}

/// Options shared by the decoder and the encoder
///
/// Reading and writing with the same options round-trips: the encoder
/// emits names in the configured style and the decoder matches against
/// them, optionally ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecOptions {
    /// Case convention applied to member names on both read and write
    pub name_style: NameStyle,

    /// Match member names case-insensitively on read
    pub case_insensitive: bool,
}

impl CodecOptions {
    fn matches(self, key: &str, canonical: &str) -> bool {
        if self.case_insensitive {
            key.eq_ignore_ascii_case(canonical)
        } else {
            key == canonical
        }
    }
}

/// Decodes single content values under a fixed set of options
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentDecoder {
    options: CodecOptions,
}

impl ContentDecoder {
    /// Create a decoder with the given options
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Decode one content value from a JSON string
    ///
    /// Returns `None` for JSON null, which marks an absent entry rather
    /// than an error.
    pub fn from_json(&self, json: &str) -> Result<Option<PackageContent>> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let content = self.deserialize(&mut deserializer).map_err(|e| {
            PackfoldError::ContentDecodeFailed {
                reason: e.to_string(),
            }
        })?;
        deserializer
            .end()
            .map_err(|e| PackfoldError::ContentDecodeFailed {
                reason: e.to_string(),
            })?;
        Ok(content)
    }
}

impl<'de> DeserializeSeed<'de> for ContentDecoder {
    type Value = Option<PackageContent>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ContentVisitor {
            options: self.options,
        })
    }
}

struct ContentVisitor {
    options: CodecOptions,
}

impl<'de> Visitor<'de> for ContentVisitor {
    type Value = Option<PackageContent>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a package content string or object")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        let data = ContentData {
            source: Some(value.to_string()),
            ..ContentData::default()
        };
        data.into_content().map(Some).map_err(de::Error::custom)
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let names = self.options.name_style.names();
        let mut data = ContentData::default();

        // Scan all members once. Source and target overwrite on repeat
        // (a null value resets them), filter patterns accumulate.
        while let Some(key) = map.next_key::<String>()? {
            if self.options.matches(&key, names.source) {
                data.source = map.next_value()?;
            } else if self.options.matches(&key, names.target) {
                data.target = map.next_value()?;
            } else if self.options.matches(&key, names.filter) {
                let FilterPatterns(patterns) = map.next_value()?;
                data.filters.extend(patterns);
            } else {
                // Unknown member - skip it
                let _: IgnoredAny = map.next_value()?;
            }
        }

        data.into_content().map(Some).map_err(de::Error::custom)
    }
}

/// Payload of a filter member: one pattern, an array of patterns, or null
///
/// Null entries inside an array are dropped without error, any other
/// non-string entry is fatal.
struct FilterPatterns(Vec<String>);

impl<'de> Deserialize<'de> for FilterPatterns {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FilterPatternsVisitor;

        impl<'de> Visitor<'de> for FilterPatternsVisitor {
            type Value = FilterPatterns;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a filter pattern, an array of filter patterns, or null")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterPatterns(vec![value.to_string()]))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterPatterns(Vec::new()))
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterPatterns(Vec::new()))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut patterns = Vec::new();
                while let Some(FilterEntry(entry)) = seq.next_element()? {
                    if let Some(pattern) = entry {
                        patterns.push(pattern);
                    }
                }
                Ok(FilterPatterns(patterns))
            }
        }

        deserializer.deserialize_any(FilterPatternsVisitor)
    }
}

/// One entry inside a filter array: a pattern, or a null to drop
struct FilterEntry(Option<String>);

impl<'de> Deserialize<'de> for FilterEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FilterEntryVisitor;

        impl<'de> Visitor<'de> for FilterEntryVisitor {
            type Value = FilterEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a filter pattern or null")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterEntry(Some(value.to_string())))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterEntry(None))
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FilterEntry(None))
            }
        }

        deserializer.deserialize_any(FilterEntryVisitor)
    }
}

/// Encodes single content values under a fixed set of options
#[derive(Debug, Clone, Copy)]
pub struct ContentEncoder<'a> {
    content: &'a PackageContent,
    options: CodecOptions,
}

impl<'a> ContentEncoder<'a> {
    /// Wrap a content entry for encoding with the given options
    pub fn new(content: &'a PackageContent, options: CodecOptions) -> Self {
        Self { content, options }
    }

    /// Encode the content entry to its most compact JSON form
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PackfoldError::ContentEncodeFailed {
            reason: e.to_string(),
        })
    }
}

impl Serialize for ContentEncoder<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let content = self.content;

        // Both at their defaults collapses to the bare source string.
        if let Some(shorthand) = content.shorthand() {
            return serializer.serialize_str(shorthand);
        }

        let names = self.options.name_style.names();
        let default_target = content.has_default_target();
        let default_filter = content.has_default_filter();
        let field_count = 1 + usize::from(!default_target) + usize::from(!default_filter);

        let mut state = serializer.serialize_struct("PackageContent", field_count)?;
        state.serialize_field(names.source, &content.source)?;
        if !default_target {
            state.serialize_field(names.target, &content.target)?;
        }
        if !default_filter {
            // A single pattern collapses to a scalar member.
            if let [only] = content.filter.as_slice() {
                state.serialize_field(names.filter, only)?;
            } else {
                state.serialize_field(names.filter, &content.filter)?;
            }
        }
        state.end()
    }
}

impl Serialize for PackageContent {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ContentEncoder::new(self, CodecOptions::default()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PackageContent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ContentDecoder::default().deserialize(deserializer)? {
            Some(content) => Ok(content),
            None => Err(de::Error::custom("package content cannot be null")),
        }
    }
}
