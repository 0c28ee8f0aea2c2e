// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use mikrotik_provider::{AppError, encode_length, read_reply, write_sentence};
use tokio::io::AsyncWriteExt;

#[test]
fn test_encode_length() {
    assert_eq!(encode_length(0x7F), vec![0x7F]);
    assert_eq!(encode_length(0x80), vec![0x80, 0x80]);
    assert_eq!(encode_length(0x4000 - 1), vec![0xBF, 0xFF]);
    assert_eq!(encode_length(0x4000), vec![0xC0, 0x40, 0x00]);
}

#[test]
fn test_encode_length_boundary_values() {
    // 1-byte: 0..0x80
    assert_eq!(encode_length(0).len(), 1);
    assert_eq!(encode_length(0x7F).len(), 1);

    // 2-byte: 0x80..0x4000
    assert_eq!(encode_length(0x80).len(), 2);
    assert_eq!(encode_length(0x3FFF).len(), 2);

    // 3-byte: 0x4000..0x20_0000
    assert_eq!(encode_length(0x4000).len(), 3);
    assert_eq!(encode_length(0x1F_FFFF).len(), 3);

    // 4-byte: 0x20_0000..0x1000_0000
    assert_eq!(encode_length(0x0020_0000).len(), 4);
    assert_eq!(encode_length(0x0FFF_FFFF).len(), 4);

    // 5-byte: 0x1000_0000+
    assert_eq!(encode_length(0x1000_0000).len(), 5);
    assert_eq!(encode_length(0xFFFF_FFFF).len(), 5);
}

#[test]
fn test_encode_length_known_values() {
    assert_eq!(encode_length(0), vec![0x00]);
    assert_eq!(encode_length(1), vec![0x01]);
    assert_eq!(encode_length(127), vec![0x7F]);
    assert_eq!(encode_length(128), vec![0x80, 0x80]);
    assert_eq!(encode_length(256), vec![0x81, 0x00]);
    assert_eq!(encode_length(0x0020_0000), vec![0xE0, 0x20, 0x00, 0x00]);
}

fn words(sentence: &[&str]) -> Vec<String> {
    sentence.iter().map(|w| (*w).to_string()).collect()
}

/// Plays the device side of one print exchange over an in-memory pipe
#[tokio::test]
async fn test_print_exchange_over_duplex() {
    let (mut client, mut device) = tokio::io::duplex(4096);

    write_sentence(
        &mut client,
        &words(&["/routing/bgp/connection/print", "?name=peer1"]),
    )
    .await
    .unwrap();

    write_sentence(
        &mut device,
        &words(&["!re", "=.id=*1", "=name=peer1", "=remote.as=65531"]),
    )
    .await
    .unwrap();
    write_sentence(&mut device, &words(&["!done"])).await.unwrap();
    device.flush().await.unwrap();

    let reply = read_reply(&mut client).await.unwrap();
    assert_eq!(reply.re.len(), 1);
    assert_eq!(reply.re[0][".id"], "*1");
    assert_eq!(reply.re[0]["remote.as"], "65531");
    assert_eq!(reply.ret(), None);
}

#[tokio::test]
async fn test_long_word_uses_multi_byte_length() {
    let (mut client, mut device) = tokio::io::duplex(1 << 16);
    let comment = "x".repeat(300);

    write_sentence(&mut device, &words(&["!re", format!("=comment={comment}").as_str()]))
        .await
        .unwrap();
    write_sentence(&mut device, &words(&["!done", "=ret=*A"]))
        .await
        .unwrap();

    let reply = read_reply(&mut client).await.unwrap();
    assert_eq!(reply.re[0]["comment"].len(), 300);
    assert_eq!(reply.ret(), Some("*A"));
}

#[tokio::test]
async fn test_trap_reply_is_an_error() {
    let (mut client, mut device) = tokio::io::duplex(4096);
    write_sentence(
        &mut device,
        &words(&["!trap", "=message=failure: already have such name"]),
    )
    .await
    .unwrap();
    write_sentence(&mut device, &words(&["!done"])).await.unwrap();

    let err = read_reply(&mut client).await.unwrap_err();
    assert!(!err.is_not_found());
    match err {
        AppError::Trap { category, message } => {
            assert!(category.is_none());
            assert_eq!(message, "failure: already have such name");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
