use crate::Error;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub(crate) static ref DEFAULT_CONFIG: Config = Config::default();
}

/// An issuer name that marks a signature as qualified when it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerMarker {
    /// Substring searched for in the raw pdf data.
    pub marker: String,
    /// Value reported as `certificate_issuer` on a match.
    pub display_name: String,
}

/// Known issuers, OCSP responders and the display format for signing dates.
///
/// Missing keys fall back to the defaults when loaded from json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Checked in order, the first marker found wins.
    pub issuers: Vec<IssuerMarker>,
    pub qualified_signature_label: String,
    pub ocsp_hosts: Vec<String>,
    /// `chrono` format string used for `ParsedDate::formatted`.
    pub date_display_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            issuers: vec![IssuerMarker {
                marker: "PostSignum".to_owned(),
                display_name: "PostSignum Qualified CA".to_owned(),
            }],
            qualified_signature_label: "Qualified Electronic Signature".to_owned(),
            ocsp_hosts: vec!["ocsp.postsignum.cz".to_owned()],
            date_display_format: "%d.%m.%Y %H:%M:%S".to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config = serde_json::from_str(json)?;
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}
