use std::path::PathBuf;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

pub const CONTENT: &[u8] = b"BT /F1 12 Tf 72 712 Td (Hello) Tj ET\n\x00\xff";

pub struct TestFixtures;

impl TestFixtures {
    fn name(value: &str) -> Object {
        Object::Name(value.as_bytes().to_vec())
    }

    fn page(parent: ObjectId, resources: ObjectId, contents: ObjectId) -> Dictionary {
        let mut page = Dictionary::new();
        page.set("Type", Self::name("Page"));
        page.set("Parent", Object::Reference(parent));
        page.set("Resources", Object::Reference(resources));
        page.set("Contents", Object::Reference(contents));
        page.set(
            "MediaBox",
            Object::Array(vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)]),
        );
        page
    }

    /// Catalog → Pages [page, Pages [page, page]] with `Parent` back-links, one
    /// resource dictionary and one content stream shared by every page, and an
    /// Info dictionary with a title.
    pub fn page_tree() -> Document {
        let mut doc = Document::with_version("1.5");

        let pages = doc.new_object_id();
        let section = doc.new_object_id();

        let mut font = Dictionary::new();
        font.set("Type", Self::name("Font"));
        font.set("Subtype", Self::name("Type1"));
        font.set("BaseFont", Self::name("Helvetica"));
        let font = doc.add_object(font);

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));
        let resources = doc.add_object(resources);

        let contents = doc.add_object(Stream::new(Dictionary::new(), CONTENT.to_vec()));

        let first = doc.add_object(Self::page(pages, resources, contents));
        let second = doc.add_object(Self::page(section, resources, contents));
        let third = doc.add_object(Self::page(section, resources, contents));

        let mut node = Dictionary::new();
        node.set("Type", Self::name("Pages"));
        node.set("Parent", Object::Reference(pages));
        node.set("Kids", Object::Array(vec![Object::Reference(second), Object::Reference(third)]));
        node.set("Count", Object::Integer(2));
        doc.objects.insert(section, Object::Dictionary(node));

        let mut root_pages = Dictionary::new();
        root_pages.set("Type", Self::name("Pages"));
        root_pages.set("Kids", Object::Array(vec![Object::Reference(first), Object::Reference(section)]));
        root_pages.set("Count", Object::Integer(3));
        doc.objects.insert(pages, Object::Dictionary(root_pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Self::name("Catalog"));
        catalog.set("Pages", Object::Reference(pages));
        let catalog = doc.add_object(catalog);

        let mut info = Dictionary::new();
        info.set("Title", Object::String(b"Quarterly Report".to_vec(), StringFormat::Literal));
        let info = doc.add_object(info);

        doc.trailer.set("Root", Object::Reference(catalog));
        doc.trailer.set("Info", Object::Reference(info));

        doc
    }

    /// A catalog without a `Pages` entry and no Info in the trailer.
    pub fn bare_catalog() -> Document {
        let mut doc = Document::with_version("1.5");
        let mut catalog = Dictionary::new();
        catalog.set("Type", Self::name("Catalog"));
        let catalog = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog));
        doc
    }

    /// A trailer whose Root points at an integer.
    pub fn scalar_root() -> Document {
        let mut doc = Document::with_version("1.5");
        let root = doc.add_object(Object::Integer(42));
        doc.trailer.set("Root", Object::Reference(root));
        doc
    }

    /// Writes `doc` to a fresh file in the temp dir.
    pub fn save(doc: &mut Document, name: &str) -> PathBuf {
        let path = Self::temp_path(name);
        doc.save(&path).unwrap();
        path
    }

    pub fn write_bytes(bytes: &[u8], name: &str) -> PathBuf {
        let path = Self::temp_path(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pdf-objstore-{}-{}", std::process::id(), name))
    }

    pub fn get_malformed_pdf() -> Vec<u8> {
        b"This is not a valid PDF file".to_vec()
    }
}
