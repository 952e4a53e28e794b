use crate::config::{Config, DEFAULT_CONFIG};
use crate::patterns::{contains_binary_pattern, RE_SIG_DICT_TYPE, RE_SIG_FIELD_TYPE};
use crate::{ByteRange, Error, SignatureInfo};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Read;

const PKCS7_DETACHED_MARKER: &[u8] = b"adbe.pkcs7.detached";

/// Outcome of a single scan. Check `success` before using the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub success: bool,
    pub error: Option<String>,
    /// Any of the markers or a `/ByteRange` was found.
    /// Does not imply that `signatures` is non-empty.
    pub has_signatures: bool,
    pub signatures: Vec<SignatureInfo>,
    pub signature_count: usize,
    pub byte_range: Option<ByteRange>,
}

impl DetectionResult {
    fn new(has_signatures: bool, signatures: Vec<SignatureInfo>, byte_range: Option<ByteRange>) -> Self {
        DetectionResult {
            success: true,
            error: None,
            has_signatures,
            signature_count: signatures.len(),
            signatures,
            byte_range,
        }
    }

    /// Result for data that could not be read or scanned.
    pub fn failure<E: Display>(error: E) -> Self {
        DetectionResult {
            success: false,
            error: Some(error.to_string()),
            has_signatures: false,
            signatures: vec![],
            signature_count: 0,
            byte_range: None,
        }
    }
}

/// Looks for signature structures in raw pdf data.
///
/// Holds no state besides its `Config`, so one instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SignatureScanner {
    config: Config,
}

impl SignatureScanner {
    pub fn new(config: Config) -> Self {
        SignatureScanner { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scan(&self, bytes: &[u8]) -> DetectionResult {
        scan_with_config(bytes, &self.config)
    }

    pub fn scan_reader<R: Read>(&self, reader: R) -> DetectionResult {
        scan_reader_with_config(reader, &self.config)
    }

    pub fn extract_metadata(&self, bytes: &[u8]) -> SignatureInfo {
        SignatureInfo::extract(bytes, &self.config)
    }
}

/// Scan `bytes` for signature dictionaries, signature fields, PKCS#7 subfilters and
/// a `/ByteRange`. Never fails outward; a `/ByteRange` that can not be read is logged and
/// left out.
pub fn scan(bytes: &[u8]) -> DetectionResult {
    scan_with_config(bytes, &DEFAULT_CONFIG)
}

/// Read all data from `reader` and [`scan`] it.
pub fn scan_reader<R: Read>(reader: R) -> DetectionResult {
    scan_reader_with_config(reader, &DEFAULT_CONFIG)
}

/// Extract the metadata of the first signature dictionary in `bytes`.
pub fn extract_metadata(bytes: &[u8]) -> SignatureInfo {
    SignatureInfo::extract(bytes, &DEFAULT_CONFIG)
}

fn scan_reader_with_config<R: Read>(mut reader: R, config: &Config) -> DetectionResult {
    let mut pdf_file_data = Vec::new();
    if let Err(err) = reader.read_to_end(&mut pdf_file_data) {
        let err = Error::from(err);
        log::warn!("Failed to read PDF data: {}", err);
        return DetectionResult::failure(format!("Failed to read PDF data: {}", err));
    }
    scan_with_config(&pdf_file_data, config)
}

fn scan_with_config(bytes: &[u8], config: &Config) -> DetectionResult {
    let mut has_signatures = false;
    let mut signatures = Vec::new();

    if RE_SIG_DICT_TYPE.is_match(bytes) {
        log::debug!("Found signature dictionary.");
        has_signatures = true;
        signatures.push(SignatureInfo::extract(bytes, config));
    }

    if RE_SIG_FIELD_TYPE.is_match(bytes) {
        log::debug!("Found signature form field.");
        has_signatures = true;
    }

    if contains_binary_pattern(bytes, PKCS7_DETACHED_MARKER) {
        log::debug!("Found PKCS#7 detached subfilter.");
        has_signatures = true;
    }

    // A `/ByteRange` that matched but can not be read still counts as a signature marker.
    let byte_range = match ByteRange::find_first(bytes) {
        Ok(Some(byte_range)) => {
            has_signatures = true;
            Some(byte_range)
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("Ignoring unreadable ByteRange: {}", err);
            has_signatures = true;
            None
        }
    };

    DetectionResult::new(has_signatures, signatures, byte_range)
}
