// Permissive decoding of the create-event request body.
//
// The body is never rejected. Keys are visited in document order and match a
// field ignoring ASCII case, so a later matching key overwrites an earlier
// one. Only JSON strings are assigned; any other value leaves the field as it
// was. A body that is not a valid JSON object yields empty fields. Any client
// supplied `id` is ignored.

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEventBody {
    pub title: String,
    pub description: String,
}

impl CreateEventBody {
    pub fn decode(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_else(|error| {
            tracing::debug!(%error, "create event body could not be decoded");
            Self::default()
        })
    }
}

impl<'de> Deserialize<'de> for CreateEventBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateEventBodyVisitor)
    }
}

struct CreateEventBodyVisitor;

impl<'de> Visitor<'de> for CreateEventBodyVisitor {
    type Value = CreateEventBody;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a json object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut body = CreateEventBody::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("title") {
                &mut body.title
            } else if key.eq_ignore_ascii_case("description") {
                &mut body.description
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Value::String(value) = map.next_value::<Value>()? {
                *field = value;
            }
        }
        Ok(body)
    }
}
