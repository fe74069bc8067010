// Copyright (c) 2026 rezky_nightky

use std::char;

use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset(u32);

impl Charset {
    pub const LETTERS: Charset = Charset(0x1);
    pub const DIGITS: Charset = Charset(0x2);
    pub const PUNCTUATION: Charset = Charset(0x4);
    pub const KATAKANA: Charset = Charset(0x8);
    pub const GREEK: Charset = Charset(0x10);
    pub const CYRILLIC: Charset = Charset(0x20);
    pub const BINARY: Charset = Charset(0x40);
    pub const HEX: Charset = Charset(0x80);
    pub const BLOCKS: Charset = Charset(0x100);
    pub const SYMBOLS: Charset = Charset(0x200);
    pub const DNA: Charset = Charset(0x400);

    pub const ASCII: Charset = Charset(0x7);
    pub const MATRIX: Charset = Charset(0xB);

    pub fn contains(self, other: Charset) -> bool {
        (self.0 & other.0) != 0
    }
}

pub fn charset_from_str(spec: &str, default_to_ascii: bool) -> Result<Charset, String> {
    let spec = spec.trim().to_ascii_lowercase();
    match spec.as_str() {
        "auto" => Ok(if default_to_ascii {
            Charset::ASCII
        } else {
            Charset::MATRIX
        }),
        "matrix" => Ok(Charset::MATRIX),
        "ascii" => Ok(Charset::ASCII),
        "english" | "letters" => Ok(Charset::LETTERS),
        "digits" | "dec" | "decimal" => Ok(Charset::DIGITS),
        "punc" => Ok(Charset::PUNCTUATION),
        "bin" | "binary" | "01" => Ok(Charset::BINARY),
        "hex" | "hexadecimal" => Ok(Charset::HEX),
        "katakana" => Ok(Charset::KATAKANA),
        "greek" => Ok(Charset::GREEK),
        "cyrillic" => Ok(Charset::CYRILLIC),
        "blocks" => Ok(Charset::BLOCKS),
        "symbols" => Ok(Charset::SYMBOLS),
        "dna" => Ok(Charset::DNA),
        _ => Err(format!(
            "unsupported charset: {} (see --list-charsets)",
            spec
        )),
    }
}

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    for v in start..=end {
        if let Some(ch) = char::from_u32(v) {
            out.push(ch);
        }
    }
}

pub fn build_chars(charset: Charset) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();

    if charset.contains(Charset::BINARY) {
        push_range(&mut out, 0x30, 0x31);
    }
    if charset.contains(Charset::HEX) {
        push_range(&mut out, 0x30, 0x39);
        push_range(&mut out, 0x41, 0x46);
    }
    if charset.contains(Charset::LETTERS) {
        push_range(&mut out, 0x41, 0x5A);
        push_range(&mut out, 0x61, 0x7A);
    }
    if charset.contains(Charset::DIGITS) {
        push_range(&mut out, 0x30, 0x39);
    }
    if charset.contains(Charset::PUNCTUATION) {
        push_range(&mut out, 0x21, 0x2F);
        push_range(&mut out, 0x3A, 0x40);
        push_range(&mut out, 0x5B, 0x60);
        push_range(&mut out, 0x7B, 0x7E);
    }
    if charset.contains(Charset::KATAKANA) {
        push_range(&mut out, 0xFF66, 0xFF9D);
    }
    if charset.contains(Charset::GREEK) {
        push_range(&mut out, 0x0370, 0x03FF);
    }
    if charset.contains(Charset::CYRILLIC) {
        push_range(&mut out, 0x0410, 0x044F);
    }
    if charset.contains(Charset::BLOCKS) {
        push_range(&mut out, 0x2580, 0x259F);
    }
    if charset.contains(Charset::SYMBOLS) {
        out.extend("∞∑∫√π∆Ωµλ≈≠≤≥×÷±∂∇∈∉∩∪⊂⊃⊆⊇⊕⊗".chars());
    }
    if charset.contains(Charset::DNA) {
        out.extend("ACGTacgt".chars());
    }

    out
}

pub fn print_list_charsets() {
    println!("AVAILABLE CHARSET PRESETS:");
    println!();
    println!("VALUE        DESCRIPTION");
    println!("auto         Auto-select (ascii when non-UTF locale, otherwise matrix)");
    println!("matrix       Letters + digits + katakana");
    println!("ascii        Letters + digits + punctuation");
    println!("english      Letters only");
    println!("digits       Digits only (aliases: dec, decimal)");
    println!("punc         Punctuation only");
    println!("binary       0 and 1 (aliases: bin, 01)");
    println!("hex          0-9 and A-F (alias: hexadecimal)");
    println!("katakana     Katakana");
    println!("greek        Greek");
    println!("cyrillic     Cyrillic");
    println!("blocks       Block elements (shading blocks)");
    println!("symbols      Math/technical symbols");
    println!("dna          DNA bases (ACGT)");
}

/// Picks one glyph per call; trails re-roll each of their cells every tick.
pub struct GlyphSource {
    chars: Vec<char>,
}

impl GlyphSource {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn next(&self, rng: &mut dyn RandomSource) -> char {
        let last = self.chars.len().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.chars[rng.uniform(0, last) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedRandom;

    #[test]
    fn charset_auto_selects_ascii_when_non_utf() {
        assert_eq!(charset_from_str("auto", true).unwrap(), Charset::ASCII);
        assert_eq!(charset_from_str("auto", false).unwrap(), Charset::MATRIX);
    }

    #[test]
    fn build_chars_binary_has_only_0_and_1() {
        assert_eq!(build_chars(Charset::BINARY), vec!['0', '1']);
    }

    #[test]
    fn unknown_charset_is_rejected() {
        assert!(charset_from_str("klingon", false).is_err());
    }

    #[test]
    fn glyph_source_indexes_the_whole_set() {
        let src = GlyphSource::new(vec!['a', 'b', 'c']);
        let mut rng = ScriptedRandom::new([0, 2, 1]);
        assert_eq!(src.next(&mut rng), 'a');
        assert_eq!(src.next(&mut rng), 'c');
        assert_eq!(src.next(&mut rng), 'b');
    }
}
