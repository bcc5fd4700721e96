use serde_json::Value;

/// Flatten a node of Jira's Atlassian Document Format (ADF) into plain text.
///
/// Headings start on a new line with a leading space, list items start on a
/// new line with a `* ` bullet and inline cards contribute their attribute
/// values. Anything that is not an object flattens to an empty string.
pub fn flatten_adf(node: &Value) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Value, out: &mut String) {
    let Value::Object(obj) = node else {
        return;
    };

    match obj.get("type").and_then(Value::as_str) {
        Some("text") => {
            if let Some(text) = obj.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        Some("heading") => out.push_str("\n "),
        Some("listItem") => out.push_str("\n* "),
        Some("inlineCard") => {
            if let Some(Value::Object(attrs)) = obj.get("attrs") {
                let values: Vec<String> = attrs.values().map(attr_to_string).collect();
                out.push_str(&values.join(" "));
            }
        }
        _ => {}
    }

    if let Some(Value::Array(children)) = obj.get("content") {
        for child in children {
            write_node(child, out);
        }
    }
}

fn attr_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
