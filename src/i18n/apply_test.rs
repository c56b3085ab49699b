use super::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct FakeNode {
    key: Option<String>,
    kind: Option<TargetKind>,
    text: String,
    placeholder: Option<String>,
    value: String,
}

impl FakeNode {
    fn text(key: &str, text: &str) -> Self {
        Self { key: Some(key.into()), kind: Some(TargetKind::Text), text: text.into(), ..Self::default() }
    }

    fn input(key: &str, placeholder: Option<&str>) -> Self {
        Self {
            key: Some(key.into()),
            kind: Some(TargetKind::Field { has_placeholder: placeholder.is_some() }),
            placeholder: placeholder.map(str::to_owned),
            ..Self::default()
        }
    }
}

impl TranslationTarget for FakeNode {
    fn translation_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn kind(&self) -> TargetKind {
        self.kind.unwrap_or(TargetKind::Text)
    }

    fn set_placeholder(&mut self, text: &str) {
        self.placeholder = Some(text.to_owned());
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_owned();
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }
}

fn dictionary() -> Dictionary {
    Dictionary::from_json(
        r#"{ "about-us": "About Us", "name-placeholder": "Enter your full name", "submit": "Submit" }"#,
        r#"{ "about-us": "من نحن", "name-placeholder": "أدخل اسمك الكامل" }"#,
    )
    .unwrap()
}

// =============================================================
// Substitution rules
// =============================================================

#[test]
fn text_target_gets_dictionary_text() {
    let dict = dictionary();
    let mut nodes = vec![FakeNode::text("about-us", "About Us")];
    assert_eq!(translate_targets(&mut nodes, &dict, Language::Ar), 1);
    assert_eq!(nodes[0].text, "من نحن");
}

#[test]
fn field_with_placeholder_gets_placeholder_not_value() {
    let dict = dictionary();
    let mut nodes = vec![FakeNode::input("name-placeholder", Some("Enter your full name"))];
    translate_targets(&mut nodes, &dict, Language::Ar);
    assert_eq!(nodes[0].placeholder.as_deref(), Some("أدخل اسمك الكامل"));
    assert_eq!(nodes[0].value, "");
}

#[test]
fn field_without_placeholder_gets_value() {
    let dict = dictionary();
    let mut nodes = vec![FakeNode::input("submit", None)];
    translate_targets(&mut nodes, &dict, Language::En);
    assert_eq!(nodes[0].value, "Submit");
    assert_eq!(nodes[0].placeholder, None);
}

#[test]
fn missing_translation_leaves_content_untouched() {
    let dict = dictionary();
    let mut nodes = vec![FakeNode::text("submit", "Submit"), FakeNode::text("unknown", "Authored")];
    assert_eq!(translate_targets(&mut nodes, &dict, Language::Ar), 0);
    assert_eq!(nodes[0].text, "Submit");
    assert_eq!(nodes[1].text, "Authored");
}

#[test]
fn target_without_key_is_skipped() {
    let dict = dictionary();
    let mut nodes = vec![FakeNode { text: "plain".into(), ..FakeNode::default() }];
    assert_eq!(translate_targets(&mut nodes, &dict, Language::Ar), 0);
    assert_eq!(nodes[0].text, "plain");
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn every_key_has_text_in_both_languages() {
    let dict = Dictionary::builtin();
    for language in Language::ALL {
        for other in Language::ALL {
            for key in dict.keys(other) {
                assert!(dict.lookup(language, key).is_some(), "{language} has no text for {key}");
            }
        }
    }
}

#[test]
fn every_key_renders_dictionary_text_in_both_languages() {
    let dict = Dictionary::builtin();
    for language in Language::ALL {
        let mut nodes: Vec<FakeNode> = dict.keys(Language::En).map(|key| FakeNode::text(key, "")).collect();
        assert!(!nodes.is_empty());
        assert_eq!(translate_targets(&mut nodes, dict, language), nodes.len());
        for node in &nodes {
            let key = node.key.as_deref().unwrap();
            assert_eq!(Some(node.text.as_str()), dict.lookup(language, key));
        }
    }
}

#[test]
fn english_arabic_english_restores_original_text() {
    let dict = dictionary();
    let original = vec![
        FakeNode::text("about-us", "About Us"),
        FakeNode::input("name-placeholder", Some("Enter your full name")),
    ];
    let mut nodes = original.clone();
    translate_targets(&mut nodes, &dict, Language::Ar);
    assert_ne!(nodes, original);
    translate_targets(&mut nodes, &dict, Language::En);
    assert_eq!(nodes, original);
}
