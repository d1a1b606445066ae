use super::*;

#[test]
fn normalize_keeps_valid_genes_uppercased() {
    let raw = vec!["cafebabe".to_owned(), " 1A2B3C4D ".to_owned()];
    assert_eq!(normalize_genes(&raw), vec!["CAFEBABE".to_owned(), "1A2B3C4D".to_owned()]);
}

#[test]
fn normalize_drops_wrong_length_and_non_hex() {
    let raw = vec![
        "CAFEBAB".to_owned(),    // 7 digits
        "CAFEBABE0".to_owned(),  // 9 digits
        "CAFEBABG".to_owned(),   // not hex
        String::new(),
    ];
    assert!(normalize_genes(&raw).is_empty());
}

#[test]
fn parse_genome_splits_on_whitespace_and_commas() {
    let genes = parse_genome("cafebabe, 00ff00aa\nDEADBEEF");
    assert_eq!(
        genes,
        vec!["CAFEBABE".to_owned(), "00FF00AA".to_owned(), "DEADBEEF".to_owned()]
    );
}

#[test]
fn parse_genome_of_garbage_is_empty() {
    assert!(parse_genome("").is_empty());
    assert!(parse_genome("not a genome at all").is_empty());
}

#[test]
fn gene_bytes_decodes_pairs() {
    assert_eq!(gene_bytes("00FF7f10"), Some([0x00, 0xFF, 0x7F, 0x10]));
    assert_eq!(gene_bytes("xyz"), None);
    assert_eq!(gene_bytes("GGGGGGGG"), None);
}

#[test]
fn byte_color_ramp_endpoints() {
    assert_eq!(color_for_byte(0), "hsl(140, 70%, 35%)");
    assert_eq!(color_for_byte(255), "hsl(80, 70%, 65%)");
}

#[test]
fn byte_color_hue_falls_as_lightness_rises() {
    // Spot-check monotonicity at a midpoint rather than parsing CSS.
    let t = f64::from(128u8) / 255.0;
    let hue = 140.0 - 60.0 * t;
    let lightness = 35.0 + 30.0 * t;
    assert_eq!(color_for_byte(128), format!("hsl({hue}, 70%, {lightness}%)"));
    assert!(hue < 140.0 && hue > 80.0);
    assert!(lightness > 35.0 && lightness < 65.0);
}
