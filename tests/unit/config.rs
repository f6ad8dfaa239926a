use super::*;

#[test]
fn bare_port_binds_all_interfaces() {
    assert_eq!(bind_addr(":8089"), "0.0.0.0:8089");
    assert_eq!(bind_addr("127.0.0.1:3000"), "127.0.0.1:3000");
    assert_eq!(bind_addr(" :1 "), "0.0.0.0:1");
}

#[test]
fn defaults_match_the_service_contract() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.host, ":8089");
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8089");
    assert_eq!(cfg.images_dir, PathBuf::from("images"));
    assert_eq!(cfg.binary_content_type.as_str(), "image/jpeg");
    assert_eq!(cfg.max_upload_bytes, 32 * 1024 * 1024);
    assert_eq!(BinaryContentType::Png.as_str(), "image/png");
}
