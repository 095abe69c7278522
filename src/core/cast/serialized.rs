// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy single-object serialization codec.
//!
//! ```text
//! O:<len>:"<Class>":<count>:{<key><value>...}
//!
//! value  N;            null
//!        b:0; b:1;     bool
//!        i:<n>;        int
//!        d:<f>;        float (INF, -INF, NAN)
//!        s:<len>:"..";  string, len in bytes
//!        a:<n>:{..}    array -> List when keys are 0..n, else Map
//!        O:..          nested object
//! key    i:<n>; | s:<len>:"..";
//! ```
//!
//! References (`r:`, `R:`), custom (`C:`) and enum (`E:`) payloads are not
//! supported; text using them stays a plain string.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::value::EnvValue;

/// Nesting limit for arrays and objects.
const MAX_DEPTH: usize = 64;

static OBJECT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?s)^O:\d+:"[\w\\]+":\d+:\{.*\}$"#).ok());

/// An object read from the legacy serialization format.
///
/// Properties keep their serialized order so that encoding reproduces the
/// original text.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedObject {
    class: String,
    properties: Vec<(String, EnvValue)>,
}

impl SerializedObject {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property, replacing an existing one with the same name.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn properties(&self) -> &[(String, EnvValue)] {
        &self.properties
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&EnvValue> {
        self.properties
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    /// Returns true if `text` has the shape of a serialized object.
    #[must_use]
    pub fn matches(text: &str) -> bool {
        OBJECT_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    /// Decodes a complete serialized object.
    ///
    /// Returns `None` if the text is malformed, uses an unsupported payload,
    /// or has trailing data.
    #[must_use]
    pub fn decode(text: &str) -> Option<Self> {
        let mut decoder = Decoder::new(text);
        decoder.expect(b'O')?;
        let object = decoder.object(0)?;
        decoder.at_end().then_some(object)
    }

    /// Encodes into the legacy serialization format.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        encode_object(&mut out, self);
        out
    }
}

// --- Decoding ---

enum ArrayKey {
    Index(i64),
    Name(String),
}

impl ArrayKey {
    fn into_name(self) -> String {
        match self {
            Self::Index(n) => n.to_string(),
            Self::Name(s) => s,
        }
    }
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            input: text.as_bytes(),
            pos: 0,
        }
    }

    const fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = *self.input.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        (self.next()? == byte).then_some(())
    }

    /// Consumes bytes up to `end` and returns them, consuming `end` too.
    fn until(&mut self, end: u8) -> Option<&'a str> {
        let rest = self.input.get(self.pos..)?;
        let len = rest.iter().position(|&b| b == end)?;
        let token = std::str::from_utf8(&rest[..len]).ok()?;
        self.pos += len + 1;
        Some(token)
    }

    fn length(&mut self, end: u8) -> Option<usize> {
        let token = self.until(end)?;
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse().ok()
    }

    /// Reads `"<len bytes>"`.
    fn quoted(&mut self, len: usize) -> Option<String> {
        self.expect(b'"')?;
        let end = self.pos.checked_add(len)?;
        let bytes = self.input.get(self.pos..end)?;
        let text = String::from_utf8(bytes.to_vec()).ok()?;
        self.pos = end;
        self.expect(b'"')?;
        Some(text)
    }

    fn value(&mut self, depth: usize) -> Option<EnvValue> {
        match self.next()? {
            b'N' => {
                self.expect(b';')?;
                Some(EnvValue::Null)
            }
            b'b' => {
                self.expect(b':')?;
                match self.until(b';')? {
                    "0" => Some(EnvValue::Bool(false)),
                    "1" => Some(EnvValue::Bool(true)),
                    _ => None,
                }
            }
            b'i' => {
                self.expect(b':')?;
                self.until(b';')?.parse().ok().map(EnvValue::Int)
            }
            b'd' => {
                self.expect(b':')?;
                parse_float(self.until(b';')?).map(EnvValue::Float)
            }
            b's' => {
                self.expect(b':')?;
                let len = self.length(b':')?;
                let text = self.quoted(len)?;
                self.expect(b';')?;
                Some(EnvValue::String(text))
            }
            b'a' => self.array(depth + 1),
            b'O' => self.object(depth + 1).map(EnvValue::Object),
            _ => None,
        }
    }

    fn key(&mut self) -> Option<ArrayKey> {
        match self.next()? {
            b'i' => {
                self.expect(b':')?;
                self.until(b';')?.parse().ok().map(ArrayKey::Index)
            }
            b's' => {
                self.expect(b':')?;
                let len = self.length(b':')?;
                let text = self.quoted(len)?;
                self.expect(b';')?;
                Some(ArrayKey::Name(text))
            }
            _ => None,
        }
    }

    /// Reads `<count>:{` and then `count` key/value pairs and `}`.
    fn entries(&mut self, depth: usize) -> Option<Vec<(ArrayKey, EnvValue)>> {
        if depth > MAX_DEPTH {
            return None;
        }
        let count = self.length(b':')?;
        self.expect(b'{')?;
        let mut entries = Vec::new();
        for _ in 0..count {
            let key = self.key()?;
            let value = self.value(depth)?;
            entries.push((key, value));
        }
        self.expect(b'}')?;
        Some(entries)
    }

    fn array(&mut self, depth: usize) -> Option<EnvValue> {
        self.expect(b':')?;
        let entries = self.entries(depth)?;
        let sequential = entries
            .iter()
            .enumerate()
            .all(|(i, (key, _))| matches!(key, ArrayKey::Index(n) if usize::try_from(*n).ok() == Some(i)));

        if sequential {
            Some(EnvValue::List(entries.into_iter().map(|(_, v)| v).collect()))
        } else {
            let map: BTreeMap<String, EnvValue> = entries
                .into_iter()
                .map(|(k, v)| (k.into_name(), v))
                .collect();
            Some(EnvValue::Map(map))
        }
    }

    /// Reads an object body; the leading `O` is already consumed.
    fn object(&mut self, depth: usize) -> Option<SerializedObject> {
        self.expect(b':')?;
        let len = self.length(b':')?;
        let class = self.quoted(len)?;
        if class.is_empty() {
            return None;
        }
        self.expect(b':')?;
        let entries = self.entries(depth)?;

        let mut object = SerializedObject::new(class);
        for (key, value) in entries {
            object = object.with_property(key.into_name(), value);
        }
        Some(object)
    }
}

fn parse_float(token: &str) -> Option<f64> {
    match token {
        "INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NAN" => Some(f64::NAN),
        _ => token.parse().ok(),
    }
}

// --- Encoding ---

fn encode_str(out: &mut String, text: &str) {
    let _ = write!(out, "s:{}:\"{text}\";", text.len());
}

fn encode_float(out: &mut String, f: f64) {
    if f.is_nan() {
        out.push_str("d:NAN;");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "d:INF;" } else { "d:-INF;" });
    } else {
        let _ = write!(out, "d:{f:?};");
    }
}

fn encode_value(out: &mut String, value: &EnvValue) {
    match value {
        EnvValue::Null => out.push_str("N;"),
        EnvValue::Bool(b) => {
            let _ = write!(out, "b:{};", u8::from(*b));
        }
        EnvValue::Int(n) => {
            let _ = write!(out, "i:{n};");
        }
        EnvValue::Float(f) => encode_float(out, *f),
        EnvValue::String(s) => encode_str(out, s),
        EnvValue::List(items) => {
            let _ = write!(out, "a:{}:{{", items.len());
            for (i, item) in items.iter().enumerate() {
                let _ = write!(out, "i:{i};");
                encode_value(out, item);
            }
            out.push('}');
        }
        EnvValue::Map(map) => {
            let _ = write!(out, "a:{}:{{", map.len());
            // String keys only; `i:` keys would decode back into a list.
            for (key, item) in map {
                encode_str(out, key);
                encode_value(out, item);
            }
            out.push('}');
        }
        EnvValue::Object(object) => encode_object(out, object),
    }
}

fn encode_object(out: &mut String, object: &SerializedObject) {
    let _ = write!(
        out,
        "O:{}:\"{}\":{}:{{",
        object.class.len(),
        object.class,
        object.properties.len()
    );
    for (name, value) in &object.properties {
        encode_str(out, name);
        encode_value(out, value);
    }
    out.push('}');
}
