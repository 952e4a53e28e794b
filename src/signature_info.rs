use crate::config::Config;
use crate::patterns::{
    contains_binary_pattern, find_name_string, RE_COMMON_NAME, RE_SIGNING_DATE,
};
use crate::pdf_date::{parse_pdf_date_with_format, ParsedDate};
use crate::pdf_string::decode_pdf_string;
use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

/// The info found about a signature dictionary.
///
/// Every field starts as `"Unknown"` or `None`, which means "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    #[serde(rename = "type")]
    pub signature_type: String,
    pub signer: String,
    pub date: Option<ParsedDate>,
    pub certificate_issuer: String,
    /// Never set by the scanner, no cryptographic check is done.
    pub valid: Option<bool>,
    /// `Some(true)` when a known OCSP responder is referenced, otherwise `None`.
    pub ocsp_validated: Option<bool>,
}

impl Default for SignatureInfo {
    fn default() -> Self {
        SignatureInfo {
            signature_type: UNKNOWN.to_owned(),
            signer: UNKNOWN.to_owned(),
            date: None,
            certificate_issuer: UNKNOWN.to_owned(),
            valid: None,
            ocsp_validated: None,
        }
    }
}

impl SignatureInfo {
    /// Extract signer, date, issuer and OCSP hints from the raw pdf data.
    ///
    /// Each attempt is independent; only the first match of every pattern is used.
    pub(crate) fn extract(bytes: &[u8], config: &Config) -> Self {
        let mut info = SignatureInfo::default();

        if let Some(name) = find_name_string(bytes) {
            info.signer = decode_pdf_string(&String::from_utf8_lossy(name));
            log::trace!("Signer from `/Name`: {}", info.signer);
        }

        if let Some(caps) = RE_SIGNING_DATE.captures(bytes) {
            info.date = parse_pdf_date_with_format(
                &String::from_utf8_lossy(&caps[1]),
                &config.date_display_format,
            );
        }

        if let Some(issuer) = config
            .issuers
            .iter()
            .find(|issuer| contains_binary_pattern(bytes, issuer.marker.as_bytes()))
        {
            info.certificate_issuer = issuer.display_name.clone();
            info.signature_type = config.qualified_signature_label.clone();
        }

        // `CN=` only fills in a missing `/Name`.
        if info.signer == UNKNOWN {
            if let Some(caps) = RE_COMMON_NAME.captures(bytes) {
                info.signer = decode_pdf_string(&String::from_utf8_lossy(&caps[1]));
                log::trace!("Signer from `CN=`: {}", info.signer);
            }
        }

        if config
            .ocsp_hosts
            .iter()
            .any(|host| contains_binary_pattern(bytes, host.as_bytes()))
        {
            info.ocsp_validated = Some(true);
        }

        info
    }

    pub fn is_qualified(&self, config: &Config) -> bool {
        self.signature_type == config.qualified_signature_label
    }
}
