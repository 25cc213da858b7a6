// Tests for TranslationDictionary parsing and ordering

use super::*;

#[test]
fn test_parse_flat_mapping() {
    let json = r#"{"Brandschutz": "Fire protection", "Bau": "Construction"}"#;
    let dictionary = TranslationDictionary::from_json(json).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.get("Brandschutz"), Some("Fire protection"));
    assert_eq!(dictionary.get("Bau"), Some("Construction"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let dictionary: TranslationDictionary = [("Bau", "Construction")].into_iter().collect();

    assert_eq!(dictionary.get("bau"), None);
    assert_eq!(dictionary.get("BAU"), None);
}

#[test]
fn test_nested_values_are_rejected() {
    let json = r#"{"Bau": {"en": "Construction"}}"#;
    let result = TranslationDictionary::from_json(json);

    assert!(matches!(result, Err(DictionaryError::ParseError(_))));
}

#[test]
fn test_non_object_root_is_rejected() {
    assert!(matches!(
        TranslationDictionary::from_json(r#"["Bau", "Construction"]"#),
        Err(DictionaryError::ParseError(_))
    ));
    assert!(matches!(
        TranslationDictionary::from_json(""),
        Err(DictionaryError::ParseError(_))
    ));
}

#[test]
fn test_empty_object_parses_to_empty_dictionary() {
    let dictionary = TranslationDictionary::from_json("{}").unwrap();
    assert!(dictionary.is_empty());
}

#[test]
fn test_terms_longest_first_orders_by_char_count() {
    let dictionary: TranslationDictionary = [
        ("in", "X"),
        ("in Betrieb", "Y"),
        ("Gebäude", "building"),
        ("ab", "from"),
    ]
    .into_iter()
    .collect();

    let terms: Vec<&str> = dictionary
        .terms_longest_first()
        .into_iter()
        .map(|(term, _)| term)
        .collect();

    // "Gebäude" is 7 chars but 8 bytes; ordering must count chars
    assert_eq!(terms, vec!["in Betrieb", "Gebäude", "ab", "in"]);
}

#[test]
fn test_json_output_is_sorted_and_reparses() {
    let dictionary: TranslationDictionary =
        [("Schutz", "protection"), ("Bau", "Construction")].into_iter().collect();

    let json = dictionary.to_json_pretty().unwrap();
    assert!(json.find("Bau").unwrap() < json.find("Schutz").unwrap());
    assert_eq!(TranslationDictionary::from_json(&json).unwrap(), dictionary);
}
