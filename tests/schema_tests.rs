mod common;

use common::TestResult;
use pretty_assertions::assert_eq;
use serde_json::json;
use tagstream::{AttributeKind, MarkupStream, Position, SchemaConfig, SchemaError, SchemaRegistry, Tag};

#[test]
fn test_introspection_of_builtin_element() {
    common::init_logging();
    let img = SchemaRegistry::xhtml().get("img").unwrap();
    assert_eq!(img.position(), Some(Position::Inline));
    assert!(img.is_empty());

    let src = img.attribute("src").unwrap();
    assert!(src.required());
    assert_eq!(src.kind(), AttributeKind::Uri);
    assert_eq!(img.attribute("ismap").unwrap().kind(), AttributeKind::Boolean);
}

#[test]
fn test_schema_serializes_to_json() -> TestResult {
    let param = SchemaRegistry::xhtml().get("param").unwrap();
    let value = serde_json::to_value(param)?;
    assert_eq!(
        value,
        json!({
            "name": "param",
            "position": "inline",
            "empty": true,
            "attributes": [
                { "name": "name", "required": true, "kind": "plain" },
                { "name": "value", "required": false, "kind": "plain" },
                {
                    "name": "valuetype",
                    "required": false,
                    "kind": "enumerated",
                    "options": ["data", "ref", "object"]
                },
                { "name": "type", "required": false, "kind": "content-type" }
            ]
        })
    );
    Ok(())
}

#[test]
fn test_custom_registry_from_json() -> TestResult {
    common::init_logging();
    let config = SchemaConfig::from_json(
        r#"{
            "elements": {
                "note": "block tone(info|warn)",
                "ref": "inline empty only target/*"
            },
            "groups": { "all": "id" }
        }"#,
    )?;
    let registry = config.compile()?;

    let mut s = MarkupStream::new(&registry);
    s.start(Tag::new("note").attr("tone", "WARN"))?;
    s.element(Tag::new("ref").attr("target", "#top"))?;
    s.end("note")?;
    assert_eq!(s.finish()?, r##"<note tone="warn"><ref target="#top" /></note>"##);

    assert!(s.is_finished());
    Ok(())
}

#[test]
fn test_mixed_case_custom_table_is_usable() -> TestResult {
    let registry = SchemaRegistry::compile(
        [("Note", "block only dataId* tone(Info|Warn)")],
        Vec::<(&str, &str)>::new(),
    )?;
    let mut s = MarkupStream::new(&registry);
    s.element(Tag::new("note").attr("dataId", "1").attr("tone", "Info"))?;
    s.start(Tag::new("NOTE").attr("DATAID", "2"))?;
    s.end("Note")?;
    assert_eq!(
        s.finish()?,
        r#"<note dataid="1" tone="info"></note><note dataid="2"></note>"#
    );
    Ok(())
}

#[test]
fn test_custom_registry_rejects_unknown_builtin_elements() {
    let registry = SchemaRegistry::compile([("note", "block")], [("all", "id")]).unwrap();
    let mut s = MarkupStream::new(&registry);
    assert!(s.element("p").is_err());
}

#[test]
fn test_malformed_table_fails_fast() {
    let err = SchemaRegistry::compile([("img", "inline src/* alt!")], Vec::<(&str, &str)>::new())
        .unwrap_err();
    assert!(matches!(err, SchemaError::MalformedToken { ref token, .. } if token == "alt!"));
    assert!(err.to_string().starts_with("<img>: malformed attribute token 'alt!'"));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = SchemaRegistry::xhtml();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut s = MarkupStream::new(registry);
                s.element(Tag::new("p").text(format!("thread {}", i))).unwrap();
                s.finish().unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<p>thread {}</p>", i));
    }
}

#[test]
fn test_elements_by_position() {
    let head: Vec<_> = SchemaRegistry::xhtml()
        .elements_at(Position::Head)
        .map(|e| e.name())
        .collect();
    assert_eq!(
        head,
        ["base", "body", "head", "html", "link", "meta", "style", "title"]
    );
}
