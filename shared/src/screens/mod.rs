//! State machines behind the three admin screens.
//!
//! Each screen is a plain value updated through `apply`. The frontend
//! stores it in a reducer and reads from it which request to send next.

pub mod capital_flow;
pub mod flow_type;
pub mod list;
pub mod reminder;

use serde::Serialize;
use serde_json::Value;

pub trait ScreenState: Clone + PartialEq {
    type Action;

    fn apply(&mut self, action: Self::Action);
}

/// Flatten a query struct into `(name, value)` pairs for the URL.
/// Absent fields must already be skipped by the serializer.
pub fn query_pairs<Q: Serialize>(query: &Q) -> Vec<(String, String)> {
    let Ok(Value::Object(fields)) = serde_json::to_value(query) else {
        return Vec::new();
    };
    fields
        .into_iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                _ => return None,
            };
            Some((name, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        page_no: u32,
        keyword: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sort: Option<String>,
        nested: Vec<u8>,
    }

    #[test]
    fn test_query_pairs_flatten_scalars() {
        let mut pairs = query_pairs(&Sample { page_no: 2, keyword: "a b".to_string(), sort: None, nested: vec![1] });
        pairs.sort();
        assert_eq!(pairs, vec![("keyword".to_string(), "a b".to_string()), ("pageNo".to_string(), "2".to_string())]);
    }
}
