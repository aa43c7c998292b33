use super::*;
use crate::error::{NO_ENTITY_DECLARATION_MSG, NO_ENTITY_KEY_MSG, NO_MODEL_NAME_MSG};

// Each test declares its own local model type, so parallel tests never
// collide in the global registry.

#[test]
fn declare_then_read_options() {
    struct Widget;
    declare_entity::<Widget>(EntityOptions::new("Widget"));

    let opts = entity_options::<Widget>().expect("declared options");
    assert_eq!(opts.model_name, "Widget");
}

#[test]
fn unregistered_type_reads_none() {
    struct Ghost;

    assert_eq!(entity_options::<Ghost>(), None);
    assert_eq!(key_names::<Ghost>(), None);
    assert_eq!(key_map::<Ghost>(), None);
}

#[test]
fn redeclaration_overwrites() {
    struct Widget;
    declare_entity::<Widget>(EntityOptions::new("First"));
    declare_entity::<Widget>(EntityOptions::new("Second"));

    let opts = entity_options::<Widget>().expect("declared options");
    assert_eq!(opts.model_name, "Second", "last declaration wins");
}

#[test]
fn key_names_preserve_declaration_order() {
    struct OrderLine;
    declare_keys::<OrderLine>(&["order_id", "line_no"]);

    let names = key_names::<OrderLine>().expect("declared keys");
    assert_eq!(names, vec!["order_id", "line_no"]);
}

#[test]
fn key_map_marks_declared_fields() {
    struct Widget;
    declare_keys::<Widget>(&["id"]);

    let map = key_map::<Widget>().expect("declared keys");
    assert_eq!(map.get("id"), Some(&true));
    assert_eq!(map.get("name"), None);

    let meta = key_metadata::<Widget>().expect("declared keys");
    assert_eq!(meta.names(), &["id"]);
    assert!(meta.is_key("id"));
    assert!(!meta.is_key("name"));
}

#[test]
fn declaration_checks_pass_for_complete_models() {
    struct Widget;
    declare_entity::<Widget>(EntityOptions::new("Widget"));
    declare_keys::<Widget>(&["id"]);

    let opts = ensure_entity_declared::<Widget>().expect("entity check");
    ensure_key_declared::<Widget>(&opts).expect("key check");
    ensure_model_name(&opts).expect("name check");
}

#[test]
fn missing_entity_declaration_is_fatal() {
    struct Ghost;

    let err = ensure_entity_declared::<Ghost>().expect_err("undeclared model must fail");
    assert_eq!(err, Error::MissingEntityDeclaration);
    assert_eq!(err.to_string(), NO_ENTITY_DECLARATION_MSG);
}

#[test]
fn missing_key_declaration_is_fatal() {
    struct Keyless;
    declare_entity::<Keyless>(EntityOptions::new("Keyless"));

    let opts = ensure_entity_declared::<Keyless>().expect("entity check");
    let err = ensure_key_declared::<Keyless>(&opts).expect_err("keyless model must fail");

    assert_eq!(
        err,
        Error::MissingKeyDeclaration {
            model: "Keyless".to_string()
        }
    );
    assert_eq!(err.to_string(), NO_ENTITY_KEY_MSG);
}

#[test]
fn empty_key_list_counts_as_missing() {
    struct Hollow;
    declare_entity::<Hollow>(EntityOptions::new("Hollow"));
    declare_keys::<Hollow>(&[]);

    let opts = ensure_entity_declared::<Hollow>().expect("entity check");
    let err = ensure_key_declared::<Hollow>(&opts).expect_err("empty key list must fail");
    assert_eq!(err.to_string(), NO_ENTITY_KEY_MSG);
}

#[test]
fn missing_model_name_is_fatal() {
    let opts = EntityOptions::new("");

    let err = ensure_model_name(&opts).expect_err("empty model name must fail");
    assert_eq!(err, Error::MissingModelName);
    assert_eq!(err.to_string(), NO_MODEL_NAME_MSG);
}
