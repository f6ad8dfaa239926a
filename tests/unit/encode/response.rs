use base64::Engine as _;

use super::*;

#[test]
fn data_uri_round_trips() {
    let png = b"\x89PNG\r\n\x1a\nbody";
    let uri = png_data_uri(png);
    let encoded = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(decoded, png);
}

#[test]
fn envelopes_serialize_to_wire_shape() {
    let ok = serde_json::to_value(Base64Envelope::from_png(b"ab")).unwrap();
    assert_eq!(
        ok,
        serde_json::json!({ "code": 0, "base64": "data:image/png;base64,YWI=" })
    );

    let err = serde_json::to_value(ErrorEnvelope {
        code: 10051,
        msg: "nope".to_string(),
    })
    .unwrap();
    assert_eq!(err, serde_json::json!({ "code": 10051, "msg": "nope" }));
}
