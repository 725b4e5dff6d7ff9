//! CLI tool for extracting structured records from well report PDFs

use std::env;
use std::fs;
use std::process;

use wcr_parser::{parse_text, process_report};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file> [output_file]", args[0]);
        eprintln!("       {} <pdf_file> --json", args[0]);
        eprintln!("       {} --text <text_file>", args[0]);
        eprintln!();
        eprintln!("Extracts structured records (casing tables, well header data,");
        eprintln!("narrative text) from drilling report PDFs or pre-extracted text.");
        process::exit(1);
    }

    if args[1] == "--text" {
        let Some(text_path) = args.get(2) else {
            eprintln!("Error: --text requires a file path");
            process::exit(1);
        };
        let text = match fs::read_to_string(text_path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", text_path, e);
                process::exit(1);
            }
        };
        let records = parse_text(&text);
        println!(
            "{}",
            serde_json::to_string_pretty(&records).expect("records serialize to JSON")
        );
        return;
    }

    let pdf_path = &args[1];
    let json_output = args.get(2).map(|a| a == "--json").unwrap_or(false);
    let output_file = if !json_output { args.get(2) } else { None };

    match process_report(pdf_path) {
        Ok(result) => {
            let records_json =
                serde_json::to_string_pretty(&result.records).expect("records serialize to JSON");

            if json_output {
                println!(
                    r#"{{"page_count":{},"record_count":{},"processing_time_ms":{},"records":{}}}"#,
                    result.page_count,
                    result.records.len(),
                    result.processing_time_ms,
                    serde_json::to_string(&result.records).expect("records serialize to JSON")
                );
            } else {
                println!("Well Report Extraction");
                println!("======================");
                println!("File: {}", pdf_path);
                println!("Pages: {}", result.page_count);
                println!("Records: {}", result.records.len());
                println!("Processing time: {}ms", result.processing_time_ms);
                println!();

                if let Some(output) = output_file {
                    fs::write(output, &records_json).expect("Failed to write output file");
                    println!("Records written to: {}", output);
                } else {
                    println!("--- Records ---");
                    println!();
                    println!("{}", records_json);
                }
            }
        }
        Err(e) => {
            if json_output {
                println!(r#"{{"error":"{}"}}"#, e);
            } else {
                eprintln!("Error: {}", e);
            }
            process::exit(1);
        }
    }
}
