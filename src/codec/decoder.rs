//! Wire decoder with variant dispatch
//!
//! Decode semantics:
//! - Every node is a JSON object carrying an integer `op`
//! - `op` selects the variant; children decode through the same rule
//! - Nulls are never accepted
//! - No implicit coercion (`"-106"` is not `-106`)
//! - First failure aborts the decode, nothing partial is returned

use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{CodecError, CodecResult};
use super::options::{DecodeOptions, EmptyArgsPolicy, UnknownFieldPolicy};
use crate::observability::{Event, Logger, Severity};
use crate::sigma::{
    AndPredicate, NotPredicate, OrPredicate, ProveDhTuple, ProveDlog, SigmaBoolean, SigmaOp,
    ThresholdPredicate, TrivialProp,
};

/// Decodes wire JSON into [`SigmaBoolean`] trees.
///
/// Decoding does not mutate its input and is deterministic for a given
/// set of options.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder enforcing `options`.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if:
    /// - A node has no `op` (SIGMA_MISSING_DISCRIMINATOR)
    /// - An `op` is not a known variant (SIGMA_UNKNOWN_VARIANT)
    /// - A field is missing, null, mistyped or rejected by the options
    ///   (SIGMA_SCHEMA_VIOLATION)
    /// - Nesting exceeds `max_depth` (SIGMA_DEPTH_EXCEEDED)
    pub fn decode(&self, value: &Value) -> CodecResult<SigmaBoolean> {
        Logger::trace(Event::DecodeStart.as_str(), &[]);

        match self.decode_node(value, "$", 1) {
            Ok(node) => {
                if Logger::enabled(Severity::Trace) {
                    let nodes = node.node_count().to_string();
                    let op = node.op().to_string();
                    Logger::trace(
                        Event::DecodeComplete.as_str(),
                        &[("nodes", nodes.as_str()), ("op", op.as_str())],
                    );
                }
                Ok(node)
            }
            Err(err) => Err(rejected(err)),
        }
    }

    /// Parses and decodes JSON text.
    ///
    /// The parser's own recursion limit is lifted so that `max_depth` alone
    /// bounds nesting. Text nested more than two brackets per allowed level
    /// is refused before parsing with `DepthExceeded` at `$`.
    pub fn decode_str(&self, input: &str) -> CodecResult<SigmaBoolean> {
        let max = self.options.max_depth;
        if nesting_exceeds(input, max.saturating_mul(2).saturating_add(2)) {
            return Err(rejected(CodecError::DepthExceeded {
                path: "$".to_string(),
                max,
            }));
        }

        let mut de = serde_json::Deserializer::from_str(input);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)
            .and_then(|value| de.end().map(|()| value))
            .map_err(|e| rejected(CodecError::from(e)))?;

        self.decode(&value)
    }

    fn decode_node(&self, value: &Value, path: &str, depth: usize) -> CodecResult<SigmaBoolean> {
        if depth > self.options.max_depth {
            return Err(CodecError::DepthExceeded {
                path: path.to_string(),
                max: self.options.max_depth,
            });
        }

        if value.is_null() {
            return Err(CodecError::null_value(path));
        }

        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::type_mismatch(path, "object", json_type_name(value)))?;

        let op = self.decode_op(obj, path)?;
        self.check_undeclared(obj, op, path)?;

        let node: SigmaBoolean = match op {
            SigmaOp::And => AndPredicate::new(self.decode_args(obj, path, depth)?).into(),
            SigmaOp::Or => OrPredicate::new(self.decode_args(obj, path, depth)?).into(),
            SigmaOp::Threshold => {
                let k = decode_k(obj, path)?;
                let args = self.decode_args(obj, path, depth)?;
                let threshold = ThresholdPredicate::new(k, args);

                if self.options.validate_threshold && !threshold.is_satisfiable() {
                    return Err(CodecError::type_mismatch(
                        make_path(path, "k"),
                        format!("at most {} (number of args)", threshold.args().len()),
                        k.to_string(),
                    ));
                }
                threshold.into()
            }
            SigmaOp::Not => {
                let arg = required(obj, "arg", path)?;
                let child = self.decode_node(arg, &make_path(path, "arg"), depth + 1)?;
                NotPredicate::new(child).into()
            }
            SigmaOp::ProveDlog => ProveDlog::new(decode_hex(obj, "h", path)?).into(),
            SigmaOp::ProveDhTuple => ProveDhTuple::new(
                decode_hex(obj, "g", path)?,
                decode_hex(obj, "h", path)?,
                decode_hex(obj, "u", path)?,
                decode_hex(obj, "v", path)?,
            )
            .into(),
            SigmaOp::Trivial => {
                let raw = required(obj, "condition", path)?;
                let condition = raw.as_bool().ok_or_else(|| {
                    CodecError::type_mismatch(
                        make_path(path, "condition"),
                        "bool",
                        json_type_name(raw),
                    )
                })?;
                TrivialProp::new(condition).into()
            }
        };

        Ok(node)
    }

    /// Reads and resolves the `op` discriminator.
    fn decode_op(&self, obj: &Map<String, Value>, path: &str) -> CodecResult<SigmaOp> {
        let op_path = make_path(path, "op");
        let raw = obj.get("op").ok_or_else(|| CodecError::MissingDiscriminator {
            path: path.to_string(),
        })?;

        if raw.is_null() {
            return Err(CodecError::null_value(op_path));
        }

        let code = raw
            .as_i64()
            .ok_or_else(|| CodecError::type_mismatch(&op_path, "int", json_type_name(raw)))?;

        SigmaOp::from_code(code).ok_or_else(|| CodecError::UnknownVariant {
            path: path.to_string(),
            op: code,
        })
    }

    fn check_undeclared(
        &self,
        obj: &Map<String, Value>,
        op: SigmaOp,
        path: &str,
    ) -> CodecResult<()> {
        if self.options.unknown_fields == UnknownFieldPolicy::Ignore {
            return Ok(());
        }

        let declared = declared_fields(op);
        match obj.keys().find(|key| !declared.contains(&key.as_str())) {
            Some(extra) => Err(CodecError::extra_field(make_path(path, extra))),
            None => Ok(()),
        }
    }

    /// Decodes the ordered `args` array of a composite node.
    fn decode_args(
        &self,
        obj: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> CodecResult<Vec<SigmaBoolean>> {
        let args_path = make_path(path, "args");

        let raw = match obj.get("args") {
            Some(raw) => raw,
            None => {
                return match self.options.empty_args {
                    EmptyArgsPolicy::Allow => Ok(Vec::new()),
                    EmptyArgsPolicy::Reject => Err(CodecError::missing_field(args_path)),
                };
            }
        };

        if raw.is_null() {
            return Err(CodecError::null_value(args_path));
        }

        let items = raw
            .as_array()
            .ok_or_else(|| CodecError::type_mismatch(&args_path, "array", json_type_name(raw)))?;

        if items.is_empty() && self.options.empty_args == EmptyArgsPolicy::Reject {
            return Err(CodecError::type_mismatch(
                args_path,
                "non-empty array",
                "empty array",
            ));
        }

        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.decode_node(item, &format!("{}[{}]", args_path, i), depth + 1))
            .collect()
    }
}

fn rejected(err: CodecError) -> CodecError {
    Logger::warn(
        Event::DecodeRejected.as_str(),
        &[("code", err.code()), ("path", err.path().unwrap_or("$"))],
    );
    err
}

/// Whether `{`/`[` nesting in JSON text goes deeper than `limit`.
///
/// Brackets inside string literals are skipped. Unbalanced text is left
/// for the parser to report.
fn nesting_exceeds(input: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in input.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}

/// Fields each variant may carry on the wire.
fn declared_fields(op: SigmaOp) -> &'static [&'static str] {
    match op {
        SigmaOp::And | SigmaOp::Or => &["op", "args"],
        SigmaOp::Threshold => &["op", "k", "args"],
        SigmaOp::Not => &["op", "arg"],
        SigmaOp::ProveDlog => &["op", "h"],
        SigmaOp::ProveDhTuple => &["op", "g", "h", "u", "v"],
        SigmaOp::Trivial => &["op", "condition"],
    }
}

/// Returns a present, non-null field.
fn required<'v>(obj: &'v Map<String, Value>, field: &str, path: &str) -> CodecResult<&'v Value> {
    match obj.get(field) {
        None => Err(CodecError::missing_field(make_path(path, field))),
        Some(v) if v.is_null() => Err(CodecError::null_value(make_path(path, field))),
        Some(v) => Ok(v),
    }
}

fn decode_k(obj: &Map<String, Value>, path: &str) -> CodecResult<u8> {
    let k_path = make_path(path, "k");
    let raw = required(obj, "k", path)?;

    let k = raw
        .as_i64()
        .ok_or_else(|| CodecError::type_mismatch(&k_path, "int", json_type_name(raw)))?;

    u8::try_from(k).map_err(|_| CodecError::type_mismatch(k_path, "int in 0..=255", k.to_string()))
}

/// Reads a hex-encoded group element.
fn decode_hex(obj: &Map<String, Value>, field: &str, path: &str) -> CodecResult<String> {
    let field_path = make_path(path, field);
    let raw = required(obj, field, path)?;

    let s = raw
        .as_str()
        .ok_or_else(|| CodecError::type_mismatch(&field_path, "hex string", json_type_name(raw)))?;

    if !is_hex(s) {
        return Err(CodecError::type_mismatch(field_path, "hex string", "non-hex string"));
    }

    Ok(s.to_string())
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    format!("{}.{}", prefix, field)
}
