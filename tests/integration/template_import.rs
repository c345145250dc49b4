use pdf_objstore::{Dictionary, Error, Name, Object, ObjectId, ObjectStore, StoreOptions, TemplateError};

use crate::fixtures::{TestFixtures, CONTENT};

fn reference_at(store: &ObjectStore, id: ObjectId, key: &str) -> ObjectId {
    store
        .get(id)
        .and_then(|r| r.data.get(key))
        .and_then(Object::as_reference)
        .unwrap_or_else(|| panic!("object {} has no reference under /{}", id, key))
}

#[test]
fn test_page_tree_import() {
    let doc = TestFixtures::page_tree();
    let store = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap();

    // info, catalog, pages, section, three pages, resources, font, contents
    assert_eq!(store.len(), 10);
    assert_eq!(store.info().data.get("Title"), Some(&Object::string("Quarterly Report")));
    assert_eq!(store.root().data.type_name(), Some("Catalog"));
    assert_eq!(store.page_count(), 3);

    let pages = store.pages().and_then(Object::as_reference).unwrap();
    let kids = store.get(pages).unwrap().data.get("Kids").unwrap().as_array().unwrap().to_vec();
    let first = kids[0].as_reference().unwrap();
    let section = kids[1].as_reference().unwrap();
    let section_kids = store.get(section).unwrap().data.get("Kids").unwrap().as_array().unwrap().to_vec();
    let second = section_kids[0].as_reference().unwrap();
    let third = section_kids[1].as_reference().unwrap();

    assert_eq!(store.page_ids(), vec![first, second, third]);
    assert_eq!(store.page_identifier_at(0), Some(first));
    assert_eq!(store.page_identifier_at(-1), Some(third));
    assert_eq!(store.page_identifier_at(3), None);
    assert_eq!(store.page_identifier_at(-4), None);
}

#[test]
fn test_parent_links_point_at_local_nodes() {
    let doc = TestFixtures::page_tree();
    let store = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap();

    let pages = store.pages().and_then(Object::as_reference).unwrap();
    let first = store.page_identifier_at(0).unwrap();
    let last = store.page_identifier_at(-1).unwrap();

    assert_eq!(reference_at(&store, first, "Parent"), pages);
    let section = reference_at(&store, last, "Parent");
    assert_eq!(reference_at(&store, section, "Parent"), pages);
}

#[test]
fn test_shared_objects_imported_once() {
    let doc = TestFixtures::page_tree();
    let store = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap();

    let pages = store.page_ids();
    let resources: Vec<ObjectId> = pages.iter().map(|&p| reference_at(&store, p, "Resources")).collect();
    let contents: Vec<ObjectId> = pages.iter().map(|&p| reference_at(&store, p, "Contents")).collect();

    assert!(resources.iter().all(|&r| r == resources[0]));
    assert!(contents.iter().all(|&c| c == contents[0]));

    let fonts = store.get(resources[0]).unwrap().data.get("Font").unwrap();
    let font = fonts.get("F1").and_then(Object::as_reference).unwrap();
    assert_eq!(
        store.get(font).unwrap().data.get("BaseFont"),
        Some(&Object::name("Helvetica"))
    );
}

#[test]
fn test_stream_bytes_survive_and_differ_from_strings() {
    let doc = TestFixtures::page_tree();
    let store = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap();

    let first = store.page_identifier_at(0).unwrap();
    let contents = store.get(reference_at(&store, first, "Contents")).unwrap();
    assert_eq!(contents.stream.as_deref(), Some(CONTENT));
    assert!(contents.data.as_dict().is_some());

    let title = store.info().data.get("Title").unwrap();
    assert!(matches!(title, Object::LiteralString(_)));
    assert!(!store.info().is_stream());
}

#[test]
fn test_allocation_continues_after_import() {
    let doc = TestFixtures::page_tree();
    let mut store = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap();

    let next = store.allocate(Dictionary::new()).identifier;
    assert_eq!(next, 11);
    assert_eq!(store.iter().last().map(|r| r.identifier), Some(11));
}

#[test]
fn test_missing_pages_and_info_are_bootstrapped() {
    let doc = TestFixtures::bare_catalog();
    let info = Dictionary::from([(Name::from("Producer"), Object::string("objstore"))]);
    let store = ObjectStore::from_source(&doc, &StoreOptions::default().with_info(info.clone())).unwrap();

    // catalog, info, pages
    assert_eq!(store.len(), 3);
    assert_eq!(store.root_id(), 1);
    assert_eq!(store.info().data, Object::Dictionary(info));

    let pages = store.pages().and_then(Object::as_reference).unwrap();
    let pages = &store.get(pages).unwrap().data;
    assert_eq!(pages.get("Count"), Some(&Object::Integer(0)));
    assert_eq!(pages.get("Kids"), Some(&Object::Array(Vec::new())));
}

#[test]
fn test_scalar_root_is_rejected() {
    let doc = TestFixtures::scalar_root();
    let err = ObjectStore::from_source(&doc, &StoreOptions::default()).unwrap_err();
    assert!(matches!(err, Error::TemplateError(TemplateError::Malformed(_))));
}

#[test]
fn test_template_loaded_from_disk() {
    let mut doc = TestFixtures::page_tree();
    let path = TestFixtures::save(&mut doc, "page-tree.pdf");

    let store = ObjectStore::with_options(&StoreOptions::default().with_template(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(store.page_count(), 3);
    assert_eq!(store.info().data.get("Title"), Some(&Object::string("Quarterly Report")));
    let first = store.page_identifier_at(0).unwrap();
    let contents = store.get(reference_at(&store, first, "Contents")).unwrap();
    assert_eq!(contents.stream.as_deref(), Some(CONTENT));
}

#[test]
fn test_garbage_template_is_template_error() {
    let path = TestFixtures::write_bytes(&TestFixtures::get_malformed_pdf(), "garbage.pdf");
    let err = ObjectStore::with_options(&StoreOptions::default().with_template(&path)).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(err.is_template_error());
    assert!(err.to_string().contains("Error reading template file"));
}

#[test]
fn test_missing_template_is_usage_error() {
    let options = StoreOptions::default().with_template("/no/such/template.pdf");
    let err = ObjectStore::with_options(&options).unwrap_err();
    assert!(matches!(err, Error::UsageError(_)));
}
