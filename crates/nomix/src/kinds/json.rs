//! `KindJSON` tags.

use super::invalid_type;
use crate::tag::boxed;
use crate::{Flavor, Kind, Options, RawJson, Result, Single, Spec, Value};

/// Raw JSON tag.
pub type Json = Single<RawJson>;

struct JsonFlavor;

impl Flavor<RawJson> for JsonFlavor {
    fn render(&self, value: &RawJson) -> String {
        value.to_string()
    }
}

static FLAVOR: JsonFlavor = JsonFlavor;

static SPEC: Spec = Spec::new(
    Kind::JSON,
    |name, value, opts| boxed(create_json(name, value, opts)),
    |name, s, opts| boxed(parse_json(name, s, opts)),
);

pub fn json_spec() -> Spec {
    SPEC
}

pub fn new_json(name: impl Into<String>, value: RawJson) -> Json {
    Single::new(name, value, Kind::JSON, &FLAVOR)
}

/// Create from JSON, bytes or a string. Bytes and strings must hold a
/// valid document.
pub fn create_json(name: &str, value: Value, _: &Options) -> Result<Json> {
    let doc = match value {
        Value::Json(doc) => doc,
        Value::Bytes(bytes) => RawJson::parse(bytes).map_err(|e| e.in_field(name))?,
        Value::String(s) => RawJson::parse(s).map_err(|e| e.in_field(name))?,
        _ => return Err(invalid_type(name)),
    };
    Ok(new_json(name, doc))
}

pub fn parse_json(name: &str, s: &str, _: &Options) -> Result<Json> {
    RawJson::parse(s)
        .map(|doc| new_json(name, doc))
        .map_err(|e| e.in_field(name))
}

#[cfg(test)]
mod tests;
