use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use xmldoc_lookup::{
    Assembly, DocumentationConfig, DocumentationProvider, PropertyInfo, TypeInfo, UsageDescriptor,
};

const BAR_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Foo</name>
    </assembly>
    <members>
        <member name="T:Foo.Bar">
            <summary>  Hello  </summary>
            <remarks>
                Use inside a form.
            </remarks>
        </member>
        <member name="P:Foo.Bar.Baz">
            <summary>The baz value.</summary>
        </member>
        <member name="P:Foo.Bar.Empty">
            <summary/>
        </member>
    </members>
</doc>"#;

fn provider_for(culture: &str) -> DocumentationProvider {
    DocumentationProvider::new(DocumentationConfig {
        culture: Some(culture.to_string()),
        ..DocumentationConfig::default()
    })
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn bar_in(dir: &Path) -> TypeInfo {
    let location = dir.join("Foo.dll").to_string_lossy().into_owned();
    TypeInfo::new("Foo.Bar", Arc::new(Assembly::new(location)))
}

#[test]
fn test_type_summary_is_trimmed() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = provider_for("en-US");

    let descriptor = provider.describe_type(&bar_in(dir.path())).unwrap();
    assert_eq!(descriptor.summary.as_deref(), Some("Hello"));
    assert_eq!(descriptor.remarks.as_deref(), Some("Use inside a form."));
}

#[test]
fn test_property_lookup_uses_declaring_type() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = provider_for("en-US");
    let baz = PropertyInfo::new("Baz", bar_in(dir.path()));

    assert_eq!(
        provider.describe_property(&baz),
        Some(UsageDescriptor::new(Some("The baz value.".to_string()), None))
    );
}

#[test]
fn test_member_with_empty_summary_still_described() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = provider_for("en-US");
    let empty = PropertyInfo::new("Empty", bar_in(dir.path()));

    let descriptor = provider.describe_property(&empty).unwrap();
    assert_eq!(descriptor.summary.as_deref(), Some(""));
    assert_eq!(descriptor.remarks, None);
}

#[test]
fn test_unknown_member_is_absent() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = provider_for("en-US");
    let missing = PropertyInfo::new("Missing", bar_in(dir.path()));

    assert_eq!(provider.describe_property(&missing), None);
    let file = provider
        .documentation_for(&dir.path().join("Foo.dll").to_string_lossy())
        .unwrap();
    assert!(!file.has_entry("P:Foo.Bar.Missing"));
    assert_eq!(file.summary("P:Foo.Bar.Missing"), None);
    assert_eq!(file.remarks("P:Foo.Bar.Missing"), None);
}

#[test]
fn test_blank_location_without_code_base_is_absent() {
    let provider = provider_for("en-US");
    let ty = TypeInfo::new("Foo.Bar", Arc::new(Assembly::new("")));
    assert_eq!(provider.describe_type(&ty), None);
}

#[test]
fn test_code_base_used_when_location_blank() {
    let dir = TempDir::new().unwrap();
    let bin = dir.path().join("my bin");
    write(&bin.join("Foo.xml"), BAR_DOCS);

    let dll = bin.join("Foo.dll").to_string_lossy().replace(' ', "%20");
    let assembly = Assembly::new("").with_code_base(format!("file://{dll}"));
    let ty = TypeInfo::new("Foo.Bar", Arc::new(assembly));

    let descriptor = provider_for("en-US").describe_type(&ty);
    #[cfg(unix)]
    assert_eq!(descriptor.unwrap().summary.as_deref(), Some("Hello"));
    #[cfg(not(unix))]
    let _ = descriptor;
}

#[test]
fn test_specific_culture_directory_used() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("en-US").join("Foo.xml"),
        &BAR_DOCS.replace("Hello", "Howdy"),
    );
    write(&dir.path().join("en").join("Foo.xml"), BAR_DOCS);

    let descriptor = provider_for("en-US")
        .describe_type(&bar_in(dir.path()))
        .unwrap();
    assert_eq!(descriptor.summary.as_deref(), Some("Howdy"));
}

#[test]
fn test_parent_culture_directory_used() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("en").join("Foo.xml"), BAR_DOCS);

    let descriptor = provider_for("en-US")
        .describe_type(&bar_in(dir.path()))
        .unwrap();
    assert_eq!(descriptor.summary.as_deref(), Some("Hello"));
}

#[test]
fn test_other_culture_directory_ignored() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("de").join("Foo.xml"), BAR_DOCS);

    assert_eq!(provider_for("en-US").describe_type(&bar_in(dir.path())), None);
}

#[test]
fn test_file_parsed_once_per_location() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = provider_for("en-US");
    let bar = bar_in(dir.path());
    let baz = PropertyInfo::new("Baz", bar.clone());

    assert!(provider.describe_type(&bar).is_some());
    assert!(provider.describe_property(&baz).is_some());
    assert!(provider.describe_type(&bar).is_some());
    assert_eq!(provider.files_parsed(), 1);
    assert_eq!(provider.cached_locations(), 1);
}

#[test]
fn test_malformed_xml_is_absent_and_cached() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), "<doc><members><member name=\"T:Foo.Bar\">");
    let provider = provider_for("en-US");
    let bar = bar_in(dir.path());

    assert_eq!(provider.describe_type(&bar), None);
    assert_eq!(provider.describe_type(&bar), None);
    assert_eq!(provider.files_parsed(), 1);
}

#[test]
fn test_illegal_path_character_is_absent() {
    let provider = provider_for("en-US");
    let ty = TypeInfo::new("Foo.Bar", Arc::new(Assembly::new("/app/bin/Fo\0o.dll")));
    assert_eq!(provider.describe_type(&ty), None);
}

#[test]
fn test_overlong_path_is_absent() {
    let provider = DocumentationProvider::new(DocumentationConfig {
        culture: Some("en-US".to_string()),
        max_path_length: 64,
    });
    let location = format!("/{}/Foo.dll", "x".repeat(100));
    let ty = TypeInfo::new("Foo.Bar", Arc::new(Assembly::new(location)));
    assert_eq!(provider.describe_type(&ty), None);
}

#[test]
fn test_concurrent_first_lookups_parse_once() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("Foo.xml"), BAR_DOCS);
    let provider = Arc::new(provider_for("en-US"));
    let bar = bar_in(dir.path());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            let bar = bar.clone();
            thread::spawn(move || provider.describe_type(&bar))
        })
        .collect();

    for handle in handles {
        let descriptor = handle.join().unwrap();
        assert_eq!(descriptor.unwrap().summary.as_deref(), Some("Hello"));
    }
    assert_eq!(provider.files_parsed(), 1);
}
