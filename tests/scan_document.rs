//! Scans synthetic signed and unsigned pdf files through the public API.

use pdf_sig_detect::{
    decode_pdf_string, extract_metadata, parse_pdf_date, scan, ByteRange, Config, IssuerMarker,
    SignatureScanner,
};

fn signed_pdf(signature_dict: &str) -> Vec<u8> {
    let mut pdf = b"%PDF-1.7\n\
        1 0 obj\n<</Type /Catalog/Pages 2 0 R/AcroForm <</Fields [4 0 R]/SigFlags 3>>>>\nendobj\n\
        4 0 obj\n<</FT /Sig/T (Signature1)/V 5 0 R/Type /Annot/Subtype /Widget>>\nendobj\n"
        .to_vec();
    pdf.extend_from_slice(b"5 0 obj\n");
    pdf.extend_from_slice(signature_dict.as_bytes());
    pdf.extend_from_slice(b"\nendobj\n");
    // Binary noise like an embedded DER certificate.
    pdf.extend_from_slice(&[0x30, 0x82, 0x05, 0xA1, 0xFF, 0x00]);
    pdf.extend_from_slice(b"\n%%EOF\n");
    pdf
}

#[test]
fn test_unsigned_document() {
    let result = scan(b"%PDF-1.4\n1 0 obj\n<</Type /Catalog/Pages 2 0 R>>\nendobj\n%%EOF\n");
    assert!(result.success);
    assert!(!result.has_signatures);
    assert!(result.signatures.is_empty());
    assert_eq!(result.signature_count, 0);
    assert_eq!(result.byte_range, None);
}

#[test]
fn test_signed_document() {
    let pdf = signed_pdf(
        "<</Type /Sig/Filter /Adobe.PPKLite/SubFilter /adbe.pkcs7.detached\
         /ByteRange [0 840 19232 1101]/Contents <3082>\
         /M (D:20250115103045+02'00')/Name (John Doe)>>",
    );
    let result = scan(&pdf);
    assert!(result.success);
    assert!(result.has_signatures);
    assert_eq!(result.signature_count, 1);
    assert_eq!(result.signatures.len(), result.signature_count);

    let signature = &result.signatures[0];
    assert_eq!(signature.signer, "John Doe");
    assert_eq!(signature.signature_type, "Unknown");
    assert_eq!(signature.certificate_issuer, "Unknown");
    assert_eq!(signature.ocsp_validated, None);
    assert_eq!(signature.valid, None);
    let date = signature.date.as_ref().unwrap();
    assert_eq!(date.iso, "2025-01-15 10:30:45");
    assert_eq!(date.timezone, "+02:00");

    assert_eq!(
        result.byte_range,
        Some(ByteRange {
            start1: 0,
            length1: 840,
            start2: 19232,
            length2: 1101,
        })
    );
}

#[test]
fn test_qualified_signature() {
    let pdf = signed_pdf(
        "<</Type /Sig/SubFilter /adbe.pkcs7.detached/ByteRange [0 100 200 50]\
         /Contents <00>>> C=CZ, O=Ceska posta s.p., CN=PostSignum Qualified CA 4\n\
         http://ocsp.postsignum.cz/OCSP/QCA4/",
    );
    let signature = &scan(&pdf).signatures[0];
    assert_eq!(signature.certificate_issuer, "PostSignum Qualified CA");
    assert_eq!(signature.signature_type, "Qualified Electronic Signature");
    // No `/Name`, so the first common name is used.
    assert_eq!(signature.signer, "PostSignum Qualified CA 4");
    assert_eq!(signature.ocsp_validated, Some(true));
}

#[test]
fn test_name_wins_over_common_name() {
    let pdf = signed_pdf("<</Type /Sig/Name (Jan \\u010Cern\\u00FD)>> CN=Someone Else, O=PostSignum");
    let signature = &scan(&pdf).signatures[0];
    assert_eq!(signature.signer, "Jan Černý");
    assert_eq!(signature.certificate_issuer, "PostSignum Qualified CA");
}

#[test]
fn test_multiple_signatures_report_first_only() {
    let mut pdf = signed_pdf("<</Type /Sig/ByteRange [0 10 20 30]/Name (First)>>");
    pdf.extend_from_slice(b"6 0 obj\n<</Type /Sig/ByteRange [0 50 60 70]/Name (Second)>>\nendobj\n");
    let result = scan(&pdf);
    assert_eq!(result.signature_count, 1);
    assert_eq!(result.signatures[0].signer, "First");
    assert_eq!(result.byte_range.unwrap().length1, 10);
}

#[test]
fn test_extract_metadata_directly() {
    let info = extract_metadata(b"<</Type /Sig/Name (  Alice  )>>");
    assert_eq!(info.signer, "Alice");
}

#[test]
fn test_shared_helpers() {
    assert_eq!(decode_pdf_string("Jo\\(hn\\)"), "Jo(hn)");
    assert_eq!(decode_pdf_string("\\u010C"), "Č");
    assert!(parse_pdf_date("20250115103045+02'00").is_none());
}

#[test]
fn test_scanner_from_json_config() {
    let config = Config::from_json(
        r#"{
            "issuers": [{"marker": "I.CA Qualified", "displayName": "I.CA"}],
            "qualifiedSignatureLabel": "QES",
            "dateDisplayFormat": "%Y-%m-%d"
        }"#,
    )
    .unwrap();
    assert_eq!(
        config.issuers,
        vec![IssuerMarker {
            marker: "I.CA Qualified".to_owned(),
            display_name: "I.CA".to_owned(),
        }]
    );
    let scanner = SignatureScanner::new(config);
    let pdf = signed_pdf("<</Type /Sig/M (D:20240229080000-01'00')>> I.CA Qualified 2 CA");
    let signature = &scanner.scan(&pdf).signatures[0];
    assert_eq!(signature.signature_type, "QES");
    assert_eq!(signature.certificate_issuer, "I.CA");
    assert_eq!(signature.date.as_ref().unwrap().formatted, "2024-02-29");
    assert!(signature.is_qualified(scanner.config()));
}

#[test]
fn test_result_json_shape() {
    let result = scan(b"<</Type /Sig/Name (John Doe)/ByteRange [0 100 200 50]>>");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["error"], serde_json::Value::Null);
    assert_eq!(value["hasSignatures"], true);
    assert_eq!(value["signatureCount"], 1);
    assert_eq!(value["signatures"][0]["signer"], "John Doe");
    assert_eq!(value["signatures"][0]["type"], "Unknown");
    assert_eq!(
        value["byteRange"],
        serde_json::json!({"start1": 0, "length1": 100, "start2": 200, "length2": 50})
    );
}
