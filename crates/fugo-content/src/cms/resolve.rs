//! Link resolution for CMS collection responses
//!
//! The delivery API returns entries with references flattened out:
//!
//! ```text
//! { "items":    [ { "sys": {...}, "fields": { "picture": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } } } } ],
//!   "includes": { "Asset": [ { "sys": { "type": "Asset", "id": "a1" }, "fields": { "file": { "url": "//..." } } } ] } }
//! ```
//!
//! [`resolve_response`] swaps every link inside an item's `fields` for the
//! entity it points at, recursively. Links to missing entities stay as they
//! are, and so do links back to an entity already being expanded on the
//! current path.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{ContentError, Result};

type EntityKey = (String, String);

/// Resolve every element of `items`, in order.
pub fn resolve_response(body: &Value) -> Result<Vec<Value>> {
    let items = body
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| ContentError::Shape("response has no items array".into()))?;

    let included = ["Entry", "Asset"].into_iter().flat_map(|kind| {
        body.pointer(&format!("/includes/{kind}"))
            .and_then(Value::as_array)
            .map(|list| list.iter())
            .into_iter()
            .flatten()
    });

    let mut index = HashMap::new();
    for entity in items.iter().chain(included) {
        if let Some(key) = entity_key(entity) {
            index.entry(key).or_insert(entity);
        }
    }

    let mut resolver = Resolver { index, memo: HashMap::new() };
    Ok(items
        .iter()
        .map(|item| resolver.resolve_entity(item, &mut Vec::new()).value)
        .collect())
}

struct Resolver<'a> {
    index: HashMap<EntityKey, &'a Value>,
    /// Expansions that never hit the cycle guard. These do not depend on the
    /// path they were reached by, so a shared include is expanded once.
    memo: HashMap<EntityKey, Value>,
}

struct Resolved {
    value: Value,
    /// `false` when a link somewhere below was left in place by the cycle guard
    complete: bool,
}

impl Resolver<'_> {
    fn resolve_entity(&mut self, entity: &Value, path: &mut Vec<EntityKey>) -> Resolved {
        let Some(object) = entity.as_object() else {
            return Resolved { value: entity.clone(), complete: true };
        };

        let key = entity_key(entity);
        if let Some(key) = &key {
            path.push(key.clone());
        }

        let mut resolved: Map<String, Value> = object.clone();
        let mut complete = true;
        if let Some(fields) = object.get("fields") {
            let fields = self.resolve_value(fields, path);
            complete = fields.complete;
            resolved.insert("fields".into(), fields.value);
        }

        if key.is_some() {
            path.pop();
        }
        Resolved { value: Value::Object(resolved), complete }
    }

    fn resolve_value(&mut self, value: &Value, path: &mut Vec<EntityKey>) -> Resolved {
        if let Some(target) = link_target(value) {
            return self.resolve_link(value, target, path);
        }

        match value {
            Value::Array(values) => {
                let mut complete = true;
                let values = values
                    .iter()
                    .map(|v| {
                        let resolved = self.resolve_value(v, path);
                        complete &= resolved.complete;
                        resolved.value
                    })
                    .collect();
                Resolved { value: Value::Array(values), complete }
            }
            Value::Object(object) => {
                let mut complete = true;
                let object = object
                    .iter()
                    .map(|(k, v)| {
                        let resolved = self.resolve_value(v, path);
                        complete &= resolved.complete;
                        (k.clone(), resolved.value)
                    })
                    .collect();
                Resolved { value: Value::Object(object), complete }
            }
            other => Resolved { value: other.clone(), complete: true },
        }
    }

    fn resolve_link(&mut self, link: &Value, target: EntityKey, path: &mut Vec<EntityKey>) -> Resolved {
        if path.contains(&target) {
            return Resolved { value: link.clone(), complete: false };
        }
        if let Some(cached) = self.memo.get(&target) {
            return Resolved { value: cached.clone(), complete: true };
        }

        let Some(&entity) = self.index.get(&target) else {
            tracing::debug!("unresolved {} link {}", target.0, target.1);
            return Resolved { value: link.clone(), complete: true };
        };

        let resolved = self.resolve_entity(entity, path);
        if resolved.complete {
            self.memo.insert(target, resolved.value.clone());
        }
        resolved
    }
}

/// `(sys.type, sys.id)` of an entry or asset
fn entity_key(entity: &Value) -> Option<EntityKey> {
    let sys = entity.get("sys")?;
    let kind = sys.get("type")?.as_str()?;
    let id = sys.get("id")?.as_str()?;
    Some((kind.to_string(), id.to_string()))
}

/// `(sys.linkType, sys.id)` when `value` is a link object
fn link_target(value: &Value) -> Option<EntityKey> {
    let sys = value.get("sys")?;
    if sys.get("type")?.as_str()? != "Link" {
        return None;
    }
    let link_type = sys.get("linkType")?.as_str()?;
    let id = sys.get("id")?.as_str()?;
    Some((link_type.to_string(), id.to_string()))
}
