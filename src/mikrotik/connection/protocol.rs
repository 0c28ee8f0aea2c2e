// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS wire protocol helpers

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{AppError, Result};
use crate::mikrotik::reply::{Reply, Sentence};

// RouterOS protocol length encoding - intentional truncation is part of the wire format
#[allow(clippy::cast_possible_truncation)]
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else if len < 0x4000 {
        vec![((len >> 8) as u8) | 0x80, (len & 0xFF) as u8]
    } else if len < 0x0020_0000 {
        vec![
            ((len >> 16) as u8) | 0xC0,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    } else if len < 0x1000_0000 {
        vec![
            ((len >> 24) as u8) | 0xE0,
            ((len >> 16) & 0xFF) as u8,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    } else {
        vec![
            0xF0,
            ((len >> 24) & 0xFF) as u8,
            ((len >> 16) & 0xFF) as u8,
            ((len >> 8) & 0xFF) as u8,
            (len & 0xFF) as u8,
        ]
    }
}

pub(super) async fn read_length<R>(stream: &mut R) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let first = stream.read_u8().await?;
    let len = if first & 0x80 == 0 {
        first as usize
    } else if first & 0xC0 == 0x80 {
        let second = stream.read_u8().await?;
        (((first & 0x3F) as usize) << 8) + second as usize
    } else if first & 0xE0 == 0xC0 {
        let second = stream.read_u8().await?;
        let third = stream.read_u8().await?;
        (((first & 0x1F) as usize) << 16) + ((second as usize) << 8) + third as usize
    } else if first & 0xF0 == 0xE0 {
        let second = stream.read_u8().await?;
        let third = stream.read_u8().await?;
        let fourth = stream.read_u8().await?;
        (((first & 0x0F) as usize) << 24)
            + ((second as usize) << 16)
            + ((third as usize) << 8)
            + fourth as usize
    } else {
        // five byte length, the control byte carries no length bits
        let b2 = stream.read_u8().await?;
        let b3 = stream.read_u8().await?;
        let b4 = stream.read_u8().await?;
        let b5 = stream.read_u8().await?;
        (b2 as usize) << 24 | (b3 as usize) << 16 | (b4 as usize) << 8 | b5 as usize
    };
    Ok(len)
}

async fn read_word<R>(stream: &mut R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let len = read_length(stream).await?;
    if len == 0 {
        return Ok(String::new());
    }
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into())
}

/// Writes one sentence: every word length-prefixed, then the empty terminator word
pub async fn write_sentence<W>(stream: &mut W, words: &[String]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    for word in words {
        let bytes = word.as_bytes();
        buf.extend_from_slice(&encode_length(bytes.len()));
        buf.extend_from_slice(bytes);
    }
    // zero length word terminator
    buf.push(0);
    stream.write_all(&buf).await?;
    stream.flush().await?;
    Ok(())
}

/// Reads words up to the empty terminator word
async fn read_sentence<R>(stream: &mut R) -> Result<Vec<String>>
where
    R: AsyncRead + Unpin,
{
    let mut words = Vec::new();
    loop {
        let word = read_word(stream).await?;
        if word.is_empty() {
            if words.is_empty() {
                continue;
            }
            return Ok(words);
        }
        tracing::trace!("Received word: {}", word);
        words.push(word);
    }
}

/// Splits the attribute words of a sentence into a map, ignoring API words like `.tag`
fn attributes(words: &[String]) -> Sentence {
    let mut map = Sentence::new();
    for word in words {
        if let Some(stripped) = word.strip_prefix('=') {
            if let Some((k, v)) = stripped.split_once('=') {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }
    map
}

/// Reads sentences until `!done` and assembles the reply
///
/// A `!trap` is remembered and returned as [`AppError::Trap`] once the
/// closing `!done` arrives, so the stream stays in sync for the next command.
/// `!fatal` means the router is closing the connection.
pub async fn read_reply<R>(stream: &mut R) -> Result<Reply>
where
    R: AsyncRead + Unpin,
{
    let mut reply = Reply::default();
    let mut trap: Option<Sentence> = None;
    loop {
        let words = read_sentence(stream).await?;
        let Some((kind, rest)) = words.split_first() else {
            continue;
        };
        match kind.as_str() {
            "!re" => reply.re.push(attributes(rest)),
            "!done" => {
                reply.done = attributes(rest);
                break;
            }
            "!trap" => {
                tracing::trace!("Trap received");
                trap.get_or_insert_with(|| attributes(rest));
            }
            "!fatal" => {
                let msg = rest.first().cloned().unwrap_or_else(|| "fatal".to_string());
                return Err(AppError::RouterOs(format!("RouterOS fatal: {msg}")));
            }
            other => tracing::trace!("Ignoring reply word: {}", other),
        }
    }

    if let Some(mut trap) = trap {
        return Err(AppError::Trap {
            category: trap.remove("category"),
            message: trap.remove("message").unwrap_or_else(|| "trap".to_string()),
        });
    }

    tracing::trace!("Command complete, {} sentences received", reply.re.len());
    Ok(reply)
}
