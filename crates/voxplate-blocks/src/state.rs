use std::collections::HashMap;

/// Name of the canonical empty block. Never stored in a plate.
pub const AIR: &str = "air";

const DEFAULT_NAMESPACE: &str = "minecraft:";

/// Strips the default namespace prefix from a block identifier.
/// Idempotent; names from other namespaces pass through untouched.
#[inline]
pub fn shorten_key(key: &str) -> &str {
    key.strip_prefix(DEFAULT_NAMESPACE).unwrap_or(key)
}

/// A named block plus its property bag.
///
/// Property values are always strings, booleans included (`"true"`/`"false"`).
/// Whether a key is present at all is meaningful: generators and the texture
/// resolver treat a missing key differently from any concrete value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockState {
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_props<K, V>(name: impl Into<String>, props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            properties: props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[inline]
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// True iff the property is present with exactly this value.
    #[inline]
    pub fn prop_is(&self, key: &str, expect: &str) -> bool {
        self.prop(key) == Some(expect)
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.name == AIR
    }
}
