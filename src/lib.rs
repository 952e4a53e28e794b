//! Detect digital signatures in pdf documents and read what can be read about them
//! without parsing the object graph or verifying anything cryptographically.
//!
//! Detection works on the raw bytes of the file. It is fast but best-effort:
//! unusually encoded or compressed signature dictionaries are missed, and only the
//! first signature dictionary and `/ByteRange` are reported.

mod byte_range;
mod config;
mod detection;
mod error;
mod patterns;
mod pdf_date;
mod pdf_string;
mod signature_info;

pub use byte_range::ByteRange;
pub use config::{Config, IssuerMarker};
pub use detection::{extract_metadata, scan, scan_reader, DetectionResult, SignatureScanner};
pub use error::Error;
pub use pdf_date::{parse_pdf_date, ParsedDate};
pub use pdf_string::decode_pdf_string;
pub use signature_info::{SignatureInfo, UNKNOWN};
