use serde_json::Value;

/// Collects child link paths from one level of the result hierarchy.
///
/// The API serves two shapes for the same listing: an object wrapping the
/// children under `"underliggende"`, or a bare array of link objects. Both
/// are accepted; anything else yields no links. Only entries with a
/// non-empty `"href"` string count.
pub fn child_links(data: &Value) -> Vec<String> {
    let items = match data {
        Value::Object(map) => map.get("underliggende").and_then(Value::as_array),
        Value::Array(items) => Some(items),
        _ => None,
    };

    items
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("href").and_then(Value::as_str))
                .filter(|href| !href.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
