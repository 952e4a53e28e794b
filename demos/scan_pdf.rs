use pdf_sig_detect::{DetectionResult, SignatureScanner};
use std::fs::File;

fn main() {
    env_logger::init();

    let pdf_file_name = std::env::args()
        .nth(1)
        .expect("Usage: scan_pdf <file.pdf>");
    let scanner = SignatureScanner::default();
    let result = match File::open(&pdf_file_name) {
        Ok(file) => scanner.scan_reader(file),
        Err(err) => DetectionResult::failure(format!("Failed to open `{}`: {}", pdf_file_name, err)),
    };

    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}
