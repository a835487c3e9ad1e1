use super::*;

#[test]
fn size_bytes_rounds_and_clamps() {
    assert_eq!(size_bytes(4_194_304.0), 4_194_304);
    assert_eq!(size_bytes(10.6), 11);
    assert_eq!(size_bytes(-1.0), 0);
    assert_eq!(size_bytes(f64::NAN), 0);
}

#[test]
fn describe_picks_a_readable_unit() {
    assert_eq!(describe(&FileMeta::new("avaluo.pdf", "application/pdf", 4_194_304)), "avaluo.pdf (4.0 MB)");
    assert_eq!(describe(&FileMeta::new("foto.png", "image/png", 20_480)), "foto.png (20 KB)");
    assert_eq!(describe(&FileMeta::new("vacio.jpg", "image/jpeg", 12)), "vacio.jpg (12 B)");
}
