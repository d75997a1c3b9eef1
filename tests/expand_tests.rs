// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use bin2txt::expand::expand;
use bin2txt::{BitWidth, Format, Options};
use std::io::Cursor;

fn run(input: &[u8], options: Options) -> (usize, String) {
    let mut out = Cursor::new(Vec::new());
    let count = expand(input, &mut out, &options).unwrap();
    (count, String::from_utf8(out.into_inner()).unwrap())
}

fn width(bits: u32) -> BitWidth {
    BitWidth::new(bits).unwrap()
}

#[test]
fn test_text_lines() {
    let input: Vec<u8> = (0..=255).collect();

    for w in 1..=8 {
        let (count, text) = run(&input, Options::new(width(w), Format::Text));
        assert_eq!(count, input.len());

        let lines: Vec<&str> = text.split_inclusive("\r\n").collect();
        assert_eq!(lines.len(), input.len());
        for line in lines {
            assert_eq!(line.len(), w as usize + 2);
            assert!(line.ends_with("\r\n"));
        }
    }
}

#[test]
fn test_text_single_byte() {
    let (_, text) = run(&[0b10110010], Options::default());
    assert_eq!(text, "10110010\r\n");

    let (_, text) = run(&[0xA5], Options::new(width(4), Format::Text));
    assert_eq!(text, "1010\r\n");
}

#[test]
fn test_coe() {
    let (count, text) = run(&[0x01, 0x02], Options::new(BitWidth::MAX, Format::Coe));
    assert_eq!(count, 2);
    assert_eq!(
        text,
        "memory_initialization_radix=2;\r\n\
         memory_initialization_vector=\r\n\
         00000001,\r\n\
         00000010;\r\n"
    );
}

#[test]
fn test_coe_single_byte() {
    let (_, text) = run(&[0xFF], Options::new(width(2), Format::Coe));
    assert_eq!(
        text,
        "memory_initialization_radix=2;\r\n\
         memory_initialization_vector=\r\n\
         11;\r\n"
    );
}

#[test]
fn test_coe_separators() {
    let input = [0x55u8; 100];
    let (_, text) = run(&input, Options::new(BitWidth::MAX, Format::Coe));

    let lines: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(lines.len(), 100);
    assert!(lines[..99].iter().all(|l| *l == "01010101,"));
    assert_eq!(lines[99], "01010101;");
}

#[test]
fn test_empty_input() {
    let (count, text) = run(&[], Options::default());
    assert_eq!(count, 0);
    assert_eq!(text, "");

    let (count, text) = run(&[], Options::new(BitWidth::MAX, Format::Coe));
    assert_eq!(count, 0);
    assert_eq!(
        text,
        "memory_initialization_radix=2;\r\nmemory_initialization_vector=\r\n"
    );
}

#[test]
fn test_clamped_width() {
    let (_, text) = run(&[0x80, 0x7F], Options::new(BitWidth::new(12).unwrap(), Format::Text));
    assert_eq!(text, "10000000\r\n01111111\r\n");
}
