// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Wire codec between typed resources and RouterOS API sentences
//!
//! Every resource type carries a static field table (generated by
//! `routeros_resource!`) that maps Rust fields to RouterOS attribute keys.
//! [`marshal`] turns a value into command words, [`unmarshal`] fills a fresh
//! value from a reply sentence.

mod value;

pub use value::WireValue;

use crate::error::{AppError, Result};
use crate::mikrotik::{Reply, Sentence};

/// How a boolean field is spelled on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolFormat {
    /// `yes` / `no`, used by most menus
    YesNo,
    /// `true` / `false`
    TrueFalse,
}

impl BoolFormat {
    #[must_use]
    pub const fn word(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::YesNo, true) => "yes",
            (Self::YesNo, false) => "no",
            (Self::TrueFalse, true) => "true",
            (Self::TrueFalse, false) => "false",
        }
    }
}

/// Wire metadata of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    /// Reported by the device but never sent
    pub readonly: bool,
    pub bools: BoolFormat,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            readonly: false,
            bools: BoolFormat::YesNo,
        }
    }

    #[must_use]
    pub const fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    #[must_use]
    pub const fn true_false(mut self) -> Self {
        self.bools = BoolFormat::TrueFalse;
        self
    }
}

/// Field table of a resource type
pub trait WireFields: Default {
    /// Every field with its metadata and encoded value (`None` when it must not be sent)
    fn fields(&self) -> Vec<(FieldSpec, Option<String>)>;

    /// Sets the field mapped to `key`; unknown keys are ignored
    fn assign(&mut self, key: &str, raw: &str) -> Result<()>;
}

/// Decodes one attribute, attaching the key and raw value to the error
pub fn decode_field<V: WireValue>(key: &str, raw: &str) -> Result<V> {
    V::decode(raw).map_err(|reason| AppError::Unmarshal {
        field: key.to_string(),
        value: raw.to_string(),
        reason,
    })
}

/// Builds the command words: the command path followed by `=key=value` for
/// every writable field that has a value
pub fn marshal<T: WireFields>(command: &str, value: &T) -> Vec<String> {
    let mut words = vec![command.to_string()];
    for (spec, encoded) in value.fields() {
        if spec.readonly {
            continue;
        }
        if let Some(v) = encoded {
            words.push(format!("={}={}", spec.key, v));
        }
    }
    words
}

/// Fills a default value from the attributes of one sentence
pub fn unmarshal<T: WireFields>(sentence: &Sentence) -> Result<T> {
    let mut value = T::default();
    for (key, raw) in sentence {
        value.assign(key, raw)?;
    }
    Ok(value)
}

/// Decodes the first `!re` record of a reply, if there is one
pub fn unmarshal_first<T: WireFields>(reply: &Reply) -> Result<Option<T>> {
    reply.re.first().map(unmarshal).transpose()
}

/// Decodes one value per `!re` record
pub fn unmarshal_all<T: WireFields>(reply: &Reply) -> Result<Vec<T>> {
    reply.re.iter().map(unmarshal).collect()
}
