// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Parsed RouterOS API replies

use std::collections::HashMap;

/// Attribute words of one sentence (`=key=value` pairs)
pub type Sentence = HashMap<String, String>;

/// Complete reply to a command: every `!re` record plus the `!done` attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub re: Vec<Sentence>,
    pub done: Sentence,
}

impl Reply {
    /// Builds a reply from `!re` records with an empty `!done`
    #[must_use]
    pub fn with_records(re: Vec<Sentence>) -> Self {
        Self {
            re,
            done: Sentence::new(),
        }
    }

    /// Builds a reply that only carries `!done =ret=<value>`, as returned by `/add`
    #[must_use]
    pub fn with_ret(ret: impl Into<String>) -> Self {
        let mut done = Sentence::new();
        done.insert("ret".to_string(), ret.into());
        Self {
            re: Vec::new(),
            done,
        }
    }

    /// Value of the `ret` attribute on `!done`, if any
    #[must_use]
    pub fn ret(&self) -> Option<&str> {
        self.done.get("ret").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_ret() {
        let reply = Reply::with_ret("*1A");
        assert_eq!(reply.ret(), Some("*1A"));
        assert!(reply.re.is_empty());
    }

    #[test]
    fn test_reply_without_ret() {
        let mut record = Sentence::new();
        record.insert("name".to_string(), "peer1".to_string());
        let reply = Reply::with_records(vec![record]);
        assert_eq!(reply.ret(), None);
        assert_eq!(reply.re.len(), 1);
    }
}
