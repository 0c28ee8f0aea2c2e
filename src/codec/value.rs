// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-type conversion between Rust field values and RouterOS attribute strings

use super::FieldSpec;

/// A field type that can travel as a RouterOS attribute value
///
/// `encode` returns `None` for values that must not be sent (the zero value of
/// the type), so RouterOS keeps its current setting on `/set` and applies its
/// default on `/add`.
pub trait WireValue: Sized {
    fn encode(&self, spec: &FieldSpec) -> Option<String>;
    fn decode(raw: &str) -> Result<Self, String>;
}

impl WireValue for String {
    fn encode(&self, _spec: &FieldSpec) -> Option<String> {
        (!self.is_empty()).then(|| self.clone())
    }

    fn decode(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_integer_wire_value {
    ($($ty:ty),*) => {
        $(
            impl WireValue for $ty {
                fn encode(&self, _spec: &FieldSpec) -> Option<String> {
                    (*self != 0).then(|| self.to_string())
                }

                fn decode(raw: &str) -> Result<Self, String> {
                    if raw.is_empty() {
                        return Ok(0);
                    }
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_integer_wire_value!(i64, u64, u32, u16, u8);

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "true" | "yes" => Ok(true),
        "false" | "no" | "" => Ok(false),
        other => Err(format!("expected true/false or yes/no, got '{other}'")),
    }
}

/// Plain flags are only sent when set
impl WireValue for bool {
    fn encode(&self, spec: &FieldSpec) -> Option<String> {
        self.then(|| spec.bools.word(true).to_string())
    }

    fn decode(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }
}

/// Tri-state flags: `Some(false)` is sent explicitly, `None` leaves the device value alone
impl WireValue for Option<bool> {
    fn encode(&self, spec: &FieldSpec) -> Option<String> {
        self.map(|b| spec.bools.word(b).to_string())
    }

    fn decode(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Ok(None);
        }
        parse_bool(raw).map(Some)
    }
}

/// Comma separated lists (interfaces, networks, connection states)
impl WireValue for Vec<String> {
    fn encode(&self, _spec: &FieldSpec) -> Option<String> {
        (!self.is_empty()).then(|| self.join(","))
    }

    fn decode(raw: &str) -> Result<Self, String> {
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}
