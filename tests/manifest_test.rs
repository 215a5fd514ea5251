use serde_json::json;
use stencil::config::parse_definition;
use stencil::manifest::{summarize, Manifest, TemplateSummary};

#[test]
fn test_summarize() {
    let definition =
        parse_definition("name: Simple\ndescription: A template\ncategory: web\n").unwrap();
    let summary = summarize(&definition, "simple");

    assert_eq!(
        summary,
        TemplateSummary {
            name: "Simple".to_string(),
            description: "A template".to_string(),
            category: "web".to_string(),
            path: "/simple".to_string(),
        }
    );
}

#[test]
fn test_summarize_defaults_missing_fields() {
    let definition = parse_definition("globalConfig: {}").unwrap();
    let summary = summarize(&definition, "bare");

    assert_eq!(summary.name, "");
    assert_eq!(summary.description, "");
    assert_eq!(summary.category, "");
    assert_eq!(summary.path, "/bare");
}

#[test]
fn test_manifest_keeps_insertion_order() {
    let mut manifest = Manifest::new();
    for namespace in ["zeta", "alpha", "mid"] {
        let definition = parse_definition(&format!("name: {}", namespace)).unwrap();
        manifest.push(summarize(&definition, namespace));
    }

    let paths: Vec<&str> = manifest.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec!["/zeta", "/alpha", "/mid"]);
    assert_eq!(manifest.len(), 3);
}

#[test]
fn test_manifest_serializes_as_array() {
    let manifest: Manifest = vec![TemplateSummary {
        name: "Simple".to_string(),
        description: String::new(),
        category: String::new(),
        path: "/simple".to_string(),
    }]
    .into_iter()
    .collect();

    assert_eq!(
        serde_json::to_value(&manifest).unwrap(),
        json!([{"name": "Simple", "description": "", "category": "", "path": "/simple"}])
    );
    assert_eq!(serde_json::to_value(Manifest::new()).unwrap(), json!([]));
}
