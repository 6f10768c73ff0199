use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Describes one kind of row: the element it opens, the leaf fields it may
/// carry, and the tags allowed to open directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name:     String,
    #[serde(default)]
    pub fields:   Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

impl Rule {
    pub fn new<N, F, C>(name: N, fields: F, children: C) -> Rule
    where
        N: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Rule {
            name:     name.into(),
            fields:   fields.into_iter().map(Into::into).collect(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if a row tagged `tag` may open directly inside this element.
    pub fn can_attach(&self, tag: &str) -> bool {
        self.children.iter().any(|child| child == tag)
    }

    /// The leaf element name for the field at `index`, if the rule has one.
    pub fn field_name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn max_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn is_leaf_only(&self) -> bool {
        self.children.is_empty()
    }
}

/// A flat lookup table from row tag to [Rule](struct.Rule.html), plus the
/// synthetic root element that wraps every document.
///
/// Schemas are passive data: they are built once (in code or from JSON) and
/// then only read by the validator and the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub root:  Rule,
    #[serde(default)]
    pub rules: BTreeMap<String, Rule>,
}

impl Schema {
    pub fn new(root: Rule) -> Schema {
        Schema {
            root,
            rules: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the rule for `tag`, returning the schema for chaining.
    pub fn with_rule<T: Into<String>>(mut self, tag: T, rule: Rule) -> Schema {
        self.rules.insert(tag.into(), rule);
        self
    }

    pub fn root(&self) -> &Rule {
        &self.root
    }

    pub fn rule(&self, tag: &str) -> Option<&Rule> {
        self.rules.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn from_json(text: &str) -> Result<Schema, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
