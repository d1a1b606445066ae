//! Genome string helpers.
//!
//! A gene is an 8-hex-digit string (four bytes). The genome panel colors
//! each byte on a green-to-yellow ramp so related genes read as similar
//! color bands.

#[cfg(test)]
#[path = "genome_test.rs"]
mod genome_test;

/// Filter raw gene strings to valid genes: trimmed, exactly 8 hex digits,
/// uppercased. Anything else is dropped.
#[must_use]
pub fn normalize_genes(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|gene| gene.trim())
        .filter(|gene| gene.len() == 8 && gene.chars().all(|c| c.is_ascii_hexdigit()))
        .map(str::to_uppercase)
        .collect()
}

/// Split free-form textarea input into candidate genes on whitespace and
/// commas, then validate. This is what the setup form submits as the zoo.
#[must_use]
pub fn parse_genome(input: &str) -> Vec<String> {
    let candidates: Vec<String> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    normalize_genes(&candidates)
}

/// The four bytes of a valid gene, `None` for anything else.
#[must_use]
pub fn gene_bytes(gene: &str) -> Option<[u8; 4]> {
    let gene = gene.trim();
    if gene.len() != 8 {
        return None;
    }
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(gene.get(i * 2..i * 2 + 2)?, 16).ok()?;
    }
    Some(bytes)
}

/// CSS color for one gene byte: hue slides 140° → 80° and lightness
/// 35% → 65% as the byte grows, so 0x00 is deep green and 0xFF pale lime.
#[must_use]
pub fn color_for_byte(byte: u8) -> String {
    let t = f64::from(byte) / 255.0;
    let hue = 140.0 - 60.0 * t;
    let lightness = 35.0 + 30.0 * t;
    format!("hsl({hue}, 70%, {lightness}%)")
}
