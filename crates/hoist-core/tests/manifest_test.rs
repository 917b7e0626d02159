use hoist_core::{DownloaderManifest, ManifestRenderer};

#[test]
fn render_round_trips_to_the_same_object() {
    let renderer = ManifestRenderer::new();
    let json = renderer.render("bucket-name", "revision-key").unwrap();

    let parsed: DownloaderManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        DownloaderManifest {
            bucket: "bucket-name".to_owned(),
            key: "revision-key".to_owned(),
        }
    );
}

#[test]
fn render_emits_only_the_two_wire_fields() {
    let json = ManifestRenderer::new().render("b", "k").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["bucket"], "b");
    assert_eq!(object["key"], "k");
}

#[test]
fn renderer_is_reusable_across_calls() {
    let renderer = ManifestRenderer::new();
    let first = renderer.render("a", "1").unwrap();
    let second = renderer.render("b", "2").unwrap();

    assert_eq!(first, r#"{"bucket":"a","key":"1"}"#);
    assert_eq!(second, r#"{"bucket":"b","key":"2"}"#);
}
