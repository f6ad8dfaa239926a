use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::upload_rejected("x")
            .to_string()
            .contains("upload rejected:")
    );
    assert!(
        AvatarError::unsupported_format("x")
            .to_string()
            .contains("unsupported format:")
    );
    assert!(
        AvatarError::decode(ImageRole::Foreground, "x")
            .to_string()
            .contains("foreground decode failure:")
    );
    assert!(
        AvatarError::asset_missing("images/hat.png", "x")
            .to_string()
            .contains("asset missing 'images/hat.png'")
    );
    assert!(
        AvatarError::encode("x")
            .to_string()
            .contains("encode failure:")
    );
    assert!(
        AvatarError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
