use crate::params::ApiParameter;
use crate::value::Value;
use indexmap::IndexMap;

/// Collects the filled-in subtree beneath a composite parameter into a keyed
/// object. `None` means the whole subtree is unset; emptiness is contagious,
/// so an empty composite contributes nothing to its own parent either.
pub fn extract(node: &ApiParameter) -> Option<Value> {
    let children = node.children.as_deref().unwrap_or_default();
    let mut acc: IndexMap<String, Value> = IndexMap::new();

    for child in children {
        if child.children.is_some() {
            let Some(inner) = extract(child) else { continue };
            insert_entry(&mut acc, child, inner);
            continue;
        }
        if child.is_unset() {
            continue;
        }
        insert_entry(&mut acc, child, Value::Scalar(child.value.clone()));
    }

    if acc.is_empty() {
        None
    } else {
        Some(Value::Object(acc))
    }
}

/// Array-marked entries aggregate into an ordered list under the stripped
/// name, created on first use; plain names assign directly, last writer wins.
pub(crate) fn insert_entry(acc: &mut IndexMap<String, Value>, child: &ApiParameter, value: Value) {
    match child.array_base.as_deref() {
        Some(base) => {
            let slot = acc
                .entry(base.to_owned())
                .or_insert_with(|| Value::List(Vec::new()));
            if let Value::List(items) = slot {
                items.push(value);
            }
        }
        None => {
            acc.insert(child.name.clone(), value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use indexmap::indexmap;

    #[test]
    fn all_unset_subtree_extracts_to_nothing() {
        let node = ApiParameter::new("options").children(vec![
            ApiParameter::new("a"),
            ApiParameter::new("nested").children(vec![ApiParameter::new("b")]),
        ]);
        assert_eq!(extract(&node), None);
    }

    #[test]
    fn empty_composite_is_absent_from_parent_output() {
        let node = ApiParameter::new("options").children(vec![
            ApiParameter::new("a").value("1"),
            ApiParameter::new("nested").children(vec![ApiParameter::new("b")]),
        ]);
        assert_eq!(
            extract(&node),
            Some(Value::Object(indexmap! {
                "a".to_string() => Value::scalar("1"),
            }))
        );
    }

    #[test]
    fn array_siblings_aggregate_in_declaration_order() {
        let node = ApiParameter::new("wrap").children(vec![
            ApiParameter::new("tags[]").value("a"),
            ApiParameter::new("tags[1]").value("b"),
            ApiParameter::new("tags[2]").value("c"),
        ]);
        assert_eq!(
            extract(&node),
            Some(Value::Object(indexmap! {
                "tags".to_string() => Value::List(vec![
                    Value::scalar("a"),
                    Value::scalar("b"),
                    Value::scalar("c"),
                ]),
            }))
        );
    }

    #[test]
    fn manually_toggled_bool_emits_empty_scalar() {
        let mut flag = ApiParameter::new("enabled").kind("bool");
        flag.manually_toggled = true;
        let node = ApiParameter::new("wrap").children(vec![flag.clone()]);
        assert_eq!(
            extract(&node),
            Some(Value::Object(indexmap! {
                "enabled".to_string() => Value::scalar(""),
            }))
        );

        flag.manually_toggled = false;
        let node = ApiParameter::new("wrap").children(vec![flag]);
        assert_eq!(extract(&node), None);
    }

    #[test]
    fn array_of_objects_nests_one_object_per_element() {
        let node = ApiParameter::new("wrap").children(vec![
            ApiParameter::new("filters[]").children(vec![ApiParameter::new("key").value("x")]),
            ApiParameter::new("filters[1]").children(vec![ApiParameter::new("key").value("y")]),
        ]);
        assert_eq!(
            extract(&node),
            Some(Value::Object(indexmap! {
                "filters".to_string() => Value::List(vec![
                    Value::Object(indexmap! { "key".to_string() => Value::scalar("x") }),
                    Value::Object(indexmap! { "key".to_string() => Value::scalar("y") }),
                ]),
            }))
        );
    }

    #[test]
    fn degenerate_marker_keeps_empty_key() {
        let node =
            ApiParameter::new("wrap").children(vec![ApiParameter::new("[]").value("v")]);
        assert_eq!(
            extract(&node),
            Some(Value::Object(indexmap! {
                "".to_string() => Value::List(vec![Value::scalar("v")]),
            }))
        );
    }
}
