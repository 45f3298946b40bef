//! Wire encoder
//!
//! Every node becomes a JSON object with its `op` plus the variant's
//! fields. `args` keep operand order.

use serde_json::{Map, Value};

use crate::observability::{Event, Logger, Severity};
use crate::sigma::SigmaBoolean;

/// Encodes a tree into its wire JSON value.
pub fn encode(node: &SigmaBoolean) -> Value {
    let value = encode_node(node);

    if Logger::enabled(Severity::Trace) {
        let nodes = node.node_count().to_string();
        let op = node.op().to_string();
        Logger::trace(
            Event::EncodeComplete.as_str(),
            &[("nodes", nodes.as_str()), ("op", op.as_str())],
        );
    }

    value
}

/// Encodes a tree into compact JSON text.
pub fn to_json_string(node: &SigmaBoolean) -> String {
    encode(node).to_string()
}

pub(crate) fn encode_node(node: &SigmaBoolean) -> Value {
    let mut obj = Map::new();
    obj.insert("op".into(), Value::from(node.op().code()));

    match node {
        SigmaBoolean::And(p) => {
            obj.insert("args".into(), encode_args(p.args()));
        }
        SigmaBoolean::Or(p) => {
            obj.insert("args".into(), encode_args(p.args()));
        }
        SigmaBoolean::Threshold(p) => {
            obj.insert("k".into(), Value::from(p.k()));
            obj.insert("args".into(), encode_args(p.args()));
        }
        SigmaBoolean::Not(p) => {
            obj.insert("arg".into(), encode_node(p.arg()));
        }
        SigmaBoolean::ProveDlog(p) => {
            obj.insert("h".into(), Value::from(p.h()));
        }
        SigmaBoolean::ProveDhTuple(p) => {
            obj.insert("g".into(), Value::from(p.g()));
            obj.insert("h".into(), Value::from(p.h()));
            obj.insert("u".into(), Value::from(p.u()));
            obj.insert("v".into(), Value::from(p.v()));
        }
        SigmaBoolean::Trivial(p) => {
            obj.insert("condition".into(), Value::from(p.condition()));
        }
    }

    Value::Object(obj)
}

fn encode_args(args: &[SigmaBoolean]) -> Value {
    Value::Array(args.iter().map(encode_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_and_predicate() {
        let node = SigmaBoolean::and(vec![
            SigmaBoolean::prove_dlog("02ab"),
            SigmaBoolean::trivial(false),
        ]);

        assert_eq!(
            encode(&node),
            json!({
                "op": -106,
                "args": [
                    { "op": -51, "h": "02ab" },
                    { "op": 0, "condition": false }
                ]
            })
        );
    }

    #[test]
    fn test_encode_empty_and_keeps_args() {
        let value = encode(&SigmaBoolean::and(Vec::new()));
        assert_eq!(value, json!({ "op": -106, "args": [] }));
    }

    #[test]
    fn test_encode_threshold_and_not() {
        let node = SigmaBoolean::threshold(
            1,
            vec![SigmaBoolean::not(SigmaBoolean::trivial(true))],
        );
        assert_eq!(
            encode(&node),
            json!({
                "op": -104,
                "k": 1,
                "args": [{ "op": -17, "arg": { "op": 0, "condition": true } }]
            })
        );
    }

    #[test]
    fn test_encode_dh_tuple() {
        let node = SigmaBoolean::prove_dh_tuple("01", "02", "03", "04");
        assert_eq!(
            encode(&node),
            json!({ "op": -50, "g": "01", "h": "02", "u": "03", "v": "04" })
        );
    }

    #[test]
    fn test_args_order_preserved() {
        let node = SigmaBoolean::or(vec![
            SigmaBoolean::prove_dlog("0b"),
            SigmaBoolean::prove_dlog("0a"),
        ]);
        let value = encode(&node);
        assert_eq!(value["args"][0]["h"], "0b");
        assert_eq!(value["args"][1]["h"], "0a");
    }

    #[test]
    fn test_json_string_is_compact() {
        let text = to_json_string(&SigmaBoolean::trivial(true));
        assert!(!text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({ "op": 0, "condition": true }));
    }
}
