//! Integration tests for the star catalog loader.
//!
//! These tests exercise the full loading path: delimiter detection, header
//! normalization, column resolution, value validation and the non-fatal
//! magnitude warning channel.

use std::fs;
use std::io::Write;

use avc_rust::api::CatalogWarning;
use avc_rust::catalog::load_catalog;
use avc_rust::error::Error;

/// Helper to build a comma-separated catalog with `count` generated rows.
fn generated_catalog(count: usize) -> String {
    let mut text = String::from("star_name,ra,dec,mag_v\n");
    for i in 0..count {
        text.push_str(&format!(
            "Star {},{:.3},{:.3},{:.2}\n",
            i,
            (i as f64 * 7.3) % 360.0,
            (i as f64 * 3.1) % 80.0 - 40.0,
            (i % 12) as f64 * 0.5
        ));
    }
    text
}

#[test]
fn test_load_preserves_row_count_and_order() {
    let text = generated_catalog(50);
    let catalog = load_catalog(text.as_bytes()).unwrap();

    assert_eq!(catalog.len(), 50);
    for (i, star) in catalog.stars.iter().enumerate() {
        assert_eq!(star.name, format!("Star {}", i));
    }
    assert!(catalog.warnings.is_empty());
    assert!(catalog.has_magnitudes);
}

#[test]
fn test_load_comma_separated_catalog() {
    let data = b"star_name,ra,dec,mag_v\n\
                 Vega,279.234,38.784,0.03\n\
                 Sirius,101.287,-16.716,-1.46\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.stars[0].name, "Vega");
    assert_eq!(catalog.stars[0].ra_deg, 279.234);
    assert_eq!(catalog.stars[1].dec_deg, -16.716);
    assert_eq!(catalog.stars[1].mag, Some(-1.46));
}

#[test]
fn test_load_tab_separated_catalog() {
    let data = b"star_name\tra\tdec\nVega\t279.234\t38.784\nDeneb\t310.358\t45.280\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.stars[1].name, "Deneb");
    assert!(!catalog.has_magnitudes);
}

#[test]
fn test_load_semicolon_separated_catalog() {
    let data = b"star_name;ra;dec\nAltair;297.696;8.868\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.stars[0].ra_deg, 297.696);
}

#[test]
fn test_load_crlf_line_endings() {
    let data = b"star_name,ra,dec\r\nVega,279.234,38.784\r\nSirius,101.287,-16.716\r\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.stars[0].name, "Vega");
}

/// A `coord` column of "ra,dec" text must split into both coordinates.
#[test]
fn test_coord_column_splits_into_ra_and_dec() {
    let data = b"star_name\tcoord\nTarget\t10.5,-20.3\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.stars[0].ra_deg, 10.5);
    assert_eq!(catalog.stars[0].dec_deg, -20.3);
}

/// Explicit ra/dec columns win when a coord column is also present.
#[test]
fn test_explicit_columns_win_over_coord() {
    let data = b"star_name;ra;dec;coord\nVega;279.234;38.784;0.0,0.0\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.stars[0].ra_deg, 279.234);
    assert_eq!(catalog.stars[0].dec_deg, 38.784);
}

/// One non-numeric RA cell fails the whole load, not just that row.
#[test]
fn test_non_numeric_ra_fails_entire_load() {
    let data = b"star_name,ra,dec\n\
                 Vega,279.234,38.784\n\
                 Broken,not-a-number,10.0\n\
                 Sirius,101.287,-16.716\n";
    let err = load_catalog(data).unwrap_err();

    assert!(matches!(err, Error::InvalidValues(_)));
    assert!(err.to_string().contains("not-a-number"));
}

#[test]
fn test_empty_required_cell_fails_entire_load() {
    let data = b"star_name,ra,dec\nVega,,38.784\n";
    let err = load_catalog(data).unwrap_err();

    assert!(matches!(err, Error::InvalidValues(_)));
}

#[test]
fn test_missing_name_column_is_reported() {
    let data = b"ra,dec,mag_v\n279.234,38.784,0.03\n";
    let err = load_catalog(data).unwrap_err();

    assert!(matches!(err, Error::MissingColumns(_)));
    assert!(err.to_string().contains("star_name"));
}

#[test]
fn test_missing_coordinate_columns_is_reported() {
    let data = b"star_name,brightness\nVega,bright\n";
    let err = load_catalog(data).unwrap_err();

    assert!(matches!(err, Error::MissingColumns(_)));
}

/// Bad magnitudes warn but do not abort the load; the affected rows keep
/// an absent magnitude and all rows survive.
#[test]
fn test_invalid_magnitudes_are_a_warning_not_an_error() {
    let data = b"star_name,ra,dec,mag_v\n\
                 Vega,279.234,38.784,0.03\n\
                 Mystery,10.0,10.0,unknown\n\
                 Gap,20.0,20.0,\n";
    let catalog = load_catalog(data).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.stars[0].mag, Some(0.03));
    assert_eq!(catalog.stars[1].mag, None);
    assert_eq!(catalog.stars[2].mag, None);
    assert_eq!(
        catalog.warnings,
        vec![CatalogWarning::InvalidMagnitudes { count: 2 }]
    );
}

/// Upload path: bytes read back from a file on disk parse the same way.
#[test]
fn test_load_from_uploaded_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", generated_catalog(10)).unwrap();

    let bytes = fs::read(file.path()).unwrap();
    let catalog = load_catalog(&bytes).unwrap();

    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.stars[9].name, "Star 9");
}

#[test]
fn test_header_only_catalog_is_empty_not_an_error() {
    let catalog = load_catalog(b"star_name,ra,dec\n").unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.warnings.is_empty());
}

#[test]
fn test_unreadable_bytes_fail_with_file_read() {
    // Invalid UTF-8 in a record makes the csv reader error out
    let data = b"star_name,ra,dec\n\xff\xfe\x00,1.0,2.0\n";
    let err = load_catalog(data).unwrap_err();

    assert!(matches!(err, Error::FileRead(_)));
}
