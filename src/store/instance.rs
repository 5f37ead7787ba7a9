//! Instances and tokens: the declaration layers a snapshot is built from.

use std::collections::BTreeMap;

use slotmap::new_key_type;

use crate::style::{StyleInfo, StyleProperty, StyleSource, StyleValue};
use crate::update::StyleUpdate;

new_key_type! {
    /// Identifies an element instance in a [`StyleStore`](super::StyleStore).
    pub struct InstanceId;

    /// Identifies a shared token in a [`StyleStore`](super::StyleStore).
    pub struct TokenId;
}

/// Explicit property declarations of one layer.
pub type Declarations = BTreeMap<StyleProperty, StyleValue>;

/// A reusable, named set of declarations ("remote" source).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub name: String,
    pub declarations: Declarations,
}

/// Per-instance layers, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Instance {
    /// Component defaults.
    pub preset: Declarations,
    /// Applied tokens; later tokens override earlier ones.
    pub tokens: Vec<TokenId>,
    /// Overrides on this instance. The only layer batches write to.
    pub local: Declarations,
}

impl Instance {
    /// Flatten the layers into a snapshot. `token` looks up token declarations;
    /// tokens that no longer exist are skipped.
    pub fn resolve<'t>(&self, token: impl Fn(TokenId) -> Option<&'t Token>) -> StyleInfo {
        let mut info = StyleInfo::new();
        for (property, value) in &self.preset {
            info.insert(*property, value.clone(), StyleSource::Preset);
        }
        for token in self.tokens.iter().filter_map(|id| token(*id)) {
            for (property, value) in &token.declarations {
                info.insert(*property, value.clone(), StyleSource::Remote);
            }
        }
        for (property, value) in &self.local {
            info.insert(*property, value.clone(), StyleSource::Local);
        }
        info
    }
}

/// Apply `updates` to `layer` in order and return the operations that undo them.
pub(crate) fn apply_to(layer: &mut Declarations, updates: &[StyleUpdate]) -> Vec<StyleUpdate> {
    let mut previous: Vec<(StyleProperty, Option<StyleValue>)> = Vec::new();
    for update in updates {
        let property = update.property();
        if !previous.iter().any(|(p, _)| *p == property) {
            previous.push((property, layer.get(&property).cloned()));
        }
        match update {
            StyleUpdate::Set { property, value } => {
                layer.insert(*property, value.clone());
            }
            StyleUpdate::Delete { property } => {
                layer.remove(property);
            }
        }
    }
    previous
        .into_iter()
        .rev()
        .map(|(property, value)| match value {
            Some(value) => StyleUpdate::Set { property, value },
            None => StyleUpdate::Delete { property },
        })
        .collect()
}
