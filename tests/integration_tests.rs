//! Integration tests for the well-report record extraction library

use wcr_parser::{
    classify, parse_native_table, parse_text, parse_text_with_vocabulary, ClassifyConfig, Mode,
    NativeTable, Vocabulary, CASING_VOCABULARY, TEXT_FIELD,
};

const CASING_TABLE: &str = "\
Hole Size     Depth MD KB     Casing Diameter     Casing Depth MD KB     Type     Test Fit LOT     Test Date     Test Result PPG     Test Depth MD KB
12 1/4\"        0                9 5/8\"              507.5                Surface  LOT            08.04.2014     11.4               507.5
7 7/8\"         507.5            4 1/2\"              1250.3               Int      LOT            15.05.2014     12.2               1250.3
5 7/8\"         2000.0           2 7/8\"              3500.0               Prod     LOT            20.06.2014     13.1               3500.0";

const WELLHEAD_BLOCK: &str = "\
Well Name: XYZ-001
Operator: ABC Oil Company
Location: Block 15, Offshore Field A
Spud Date: 2023-01-15
Total Depth: 2500 m
Water Depth: 85 m";

const TOOL_TABLE: &str = "\
Tool Type       Depth m       Manufacturer       Serial Number
Drill Collar    500           Smith Services     ABC-1001
Heavy Weight    750           Jones Drilling     XYZ-2002
Stabilizer      1200          Jones Drilling     XYZ-2003";

const NARRATIVE: &str = "\
The well was completed with a successful casing shoe cement job.
Multiple formation tops were identified through the drilling process.
The formation testing confirmed the presence of hydrocarbons.";

fn classify_text(text: &str) -> Mode {
    let lines = wcr_parser::segment::split_lines(text);
    classify(&lines, &ClassifyConfig::default())
}

// ============================================================================
// Casing Table Tests
// ============================================================================

#[test]
fn test_casing_table_row_count() {
    let records = parse_text(CASING_TABLE);
    assert_eq!(records.len(), 3);
}

#[test]
fn test_casing_table_schema_fields() {
    let records = parse_text(CASING_TABLE);
    let expected = [
        "hole_size",
        "depth_md_kb",
        "casing_diameter",
        "casing_depth_md_kb",
        "type",
        "test_fit_lot",
        "test_date",
        "test_result_ppg",
        "test_depth_md_kb",
    ];
    for (i, record) in records.iter().enumerate() {
        for field in &expected {
            assert!(
                record.contains_key(*field),
                "row {} missing field {}",
                i + 1,
                field
            );
        }
    }
}

#[test]
fn test_casing_table_values_verbatim() {
    let records = parse_text(CASING_TABLE);
    assert_eq!(records[0]["hole_size"], "12 1/4\"");
    assert_eq!(records[0]["depth_md_kb"], "0");
    assert_eq!(records[0]["casing_diameter"], "9 5/8\"");
    assert_eq!(records[0]["casing_depth_md_kb"], "507.5");
    assert_eq!(records[0]["type"], "Surface");
    assert_eq!(records[0]["test_fit_lot"], "LOT");
    assert_eq!(records[0]["test_date"], "08.04.2014");
    assert_eq!(records[0]["test_result_ppg"], "11.4");
    assert_eq!(records[0]["test_depth_md_kb"], "507.5");

    assert_eq!(records[2]["hole_size"], "5 7/8\"");
    assert_eq!(records[2]["test_date"], "20.06.2014");
    assert_eq!(records[2]["test_depth_md_kb"], "3500.0");
}

#[test]
fn test_casing_table_field_order_follows_columns() {
    let records = parse_text(CASING_TABLE);
    let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
    assert_eq!(keys[0], "hole_size");
    assert_eq!(keys[1], "depth_md_kb");
    assert_eq!(keys[8], "test_depth_md_kb");
}

#[test]
fn test_generic_table_unknown_headers_kept() {
    let records = parse_text(TOOL_TABLE);
    assert_eq!(records.len(), 3);
    // Unrecognized headers fall back to normalized names, never dropped
    assert_eq!(records[0]["manufacturer"], "Smith Services");
    assert_eq!(records[0]["serial_number"], "ABC-1001");
    assert_eq!(records[2]["depth_md_kb"], "1200");
}

#[test]
fn test_table_with_trailing_blank_lines() {
    let text = format!("{}\n\n\n", CASING_TABLE);
    let records = parse_text(&text);
    assert_eq!(records.len(), 3);
}

// ============================================================================
// Key-Value Tests
// ============================================================================

#[test]
fn test_wellhead_block_single_combined_record() {
    let records = parse_text(WELLHEAD_BLOCK);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.len(), 6);
    assert_eq!(record["well_name"], "XYZ-001");
    assert_eq!(record["operator"], "ABC Oil Company");
    assert_eq!(record["location"], "Block 15, Offshore Field A");
    assert_eq!(record["spud_date"], "2023-01-15");
    assert_eq!(record["total_depth"], "2500 m");
    assert_eq!(record["water_depth"], "85 m");
}

#[test]
fn test_key_value_values_keep_interior_colons() {
    let records = parse_text("Start Time: 06:30\nEnd Time: 18:45");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["start_time"], "06:30");
    assert_eq!(records[0]["end_time"], "18:45");
}

// ============================================================================
// Prose Fallback Tests
// ============================================================================

#[test]
fn test_narrative_yields_single_text_record() {
    let records = parse_text(NARRATIVE);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 1);
    assert_eq!(records[0][TEXT_FIELD], NARRATIVE);
}

#[test]
fn test_empty_input_yields_no_records() {
    assert!(parse_text("").is_empty());
    assert!(parse_text("   \n \t \n").is_empty());
}

// ============================================================================
// Layout Classification Tests
// ============================================================================

#[test]
fn test_classification_modes() {
    assert_eq!(classify_text(CASING_TABLE), Mode::Table);
    assert_eq!(classify_text(WELLHEAD_BLOCK), Mode::KeyValue);
    assert_eq!(classify_text(NARRATIVE), Mode::Prose);
}

#[test]
fn test_gap_width_boundary() {
    // Single spaces never separate columns; two spaces do
    assert_eq!(
        classify_text("Size Depth Type\n9 500 Surface"),
        Mode::Prose
    );
    assert_eq!(
        classify_text("Size  Depth  Type\n9     500    Surface"),
        Mode::Table
    );
}

// ============================================================================
// Mixed Document Tests
// ============================================================================

#[test]
fn test_mixed_document_per_segment_classification() {
    let text = "\
Well Information:
Name: Test Well #1
Date: 2024-01-01

Casing Records:

Size      Depth    Type
9 5/8\"    500      Surface
7\"        1500     Intermediate";

    let records = parse_text(text);
    assert_eq!(records.len(), 4);

    assert_eq!(records[0]["name"], "Test Well #1");
    assert_eq!(records[0]["date"], "2024-01-01");
    assert_eq!(records[1][TEXT_FIELD], "Casing Records:");
    assert_eq!(records[2]["depth_md_kb"], "500");
    assert_eq!(records[2]["type"], "Surface");
    assert_eq!(records[3]["type"], "Intermediate");
}

// ============================================================================
// Determinism and Round-Trip Tests
// ============================================================================

#[test]
fn test_parse_is_deterministic() {
    for text in [CASING_TABLE, WELLHEAD_BLOCK, TOOL_TABLE, NARRATIVE] {
        assert_eq!(parse_text(text), parse_text(text));
    }
}

#[test]
fn test_key_value_round_trip_keeps_field_set() {
    let records = parse_text(WELLHEAD_BLOCK);
    let reconstructed: String = records[0]
        .iter()
        .map(|(field, value)| format!("{}: {}\n", field, value))
        .collect();
    let reparsed = parse_text(&reconstructed);
    assert_eq!(reparsed.len(), 1);
    assert_eq!(
        records[0].keys().collect::<Vec<_>>(),
        reparsed[0].keys().collect::<Vec<_>>()
    );
}

// ============================================================================
// Custom Vocabulary Tests
// ============================================================================

#[test]
fn test_swappable_vocabulary() {
    let mud_vocab = Vocabulary::new([
        ("mud weight", "mud_weight_ppg"),
        ("funnel vis", "funnel_viscosity"),
        ("depth", "depth_m"),
    ]);
    let text = "Depth m    Mud Weight    Funnel Vis\n\
                500        9.2           45\n\
                1500       10.1          52";
    let records = parse_text_with_vocabulary(text, &mud_vocab);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["depth_m"], "500");
    assert_eq!(records[0]["mud_weight_ppg"], "9.2");
    assert_eq!(records[1]["funnel_viscosity"], "52");
}

// ============================================================================
// Native Table Tests
// ============================================================================

#[test]
fn test_native_table_maps_through_schema() {
    let table = NativeTable::new(vec![
        vec![
            "Hole Size".to_string(),
            "Depth MD KB".to_string(),
            "Casing Diameter".to_string(),
        ],
        vec!["12 1/4\"".to_string(), "507.5".to_string(), "9 5/8\"".to_string()],
        vec!["7 7/8\"".to_string(), "1250.3".to_string(), "4 1/2\"".to_string()],
    ]);
    let records = parse_native_table(&table, &CASING_VOCABULARY);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["hole_size"], "12 1/4\"");
    assert_eq!(records[1]["casing_diameter"], "4 1/2\"");
}

#[test]
fn test_native_table_empty_grid_yields_nothing() {
    let table = NativeTable::new(vec![vec!["".to_string(), " ".to_string()]]);
    assert!(parse_native_table(&table, &CASING_VOCABULARY).is_empty());
}

// ============================================================================
// PDF Extraction Tests
// ============================================================================

fn build_sample_pdf() -> lopdf::Document {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 750.into()]),
            Operation::new("Tj", vec![Object::string_literal("Well Name: XYZ-001")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);
    doc
}

#[test]
fn test_extract_pages_from_generated_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    build_sample_pdf().save(&path).unwrap();

    let pages = wcr_parser::pdftext::extract_pages(&path).unwrap();
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_process_report_mem_page_count() {
    let mut buffer = Vec::new();
    build_sample_pdf().save_to(&mut buffer).unwrap();

    let result = wcr_parser::process_report_mem(&buffer).unwrap();
    assert_eq!(result.page_count, 1);
}

// ============================================================================
// JSON Output Shape Tests
// ============================================================================

#[test]
fn test_records_serialize_in_column_order() {
    let records = parse_text("Size      Depth    Type\n9 5/8\"    500      Surface");
    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(
        json,
        r#"[{"size":"9 5/8\"","depth_md_kb":"500","type":"Surface"}]"#
    );
}

#[test]
fn test_prose_record_json_shape() {
    let records = parse_text("no structure here");
    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(json, r#"[{"text":"no structure here"}]"#);
}
