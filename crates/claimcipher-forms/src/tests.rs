//! Integration tests for the Forms crate

#[cfg(test)]
mod tests {
    use crate::{fill, fill_template, FormError, PdfForm};
    use claimcipher_domain::{CanonicalClaimRecord, ClaimField};
    use lopdf::{dictionary, Dictionary, Document, Object, Stream};
    use std::fs;
    use std::path::Path;

    /// Widget with a name, a value and a cached appearance stream
    fn widget(doc: &mut Document, name: &str, value: &str) -> Object {
        let appearance = doc.add_object(Stream::new(dictionary! {}, b"q Q".to_vec()));
        doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::string_literal(name),
            "V" => Object::string_literal(value),
            "Rect" => vec![0.into(), 0.into(), 100.into(), 20.into()],
            "AP" => dictionary! { "N" => appearance },
        })
        .into()
    }

    /// Two-page template: page one holds `vin`, `make` and an unrelated
    /// `office` field plus a link, page two holds `claim_number` and an
    /// unnamed widget
    fn build_template(with_acroform: bool) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let vin = widget(&mut doc, "vin", "");
        let make = widget(&mut doc, "make", "");
        let office = widget(&mut doc, "office", "Main St");
        let link: Object = doc
            .add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "T" => Object::string_literal("vin"),
            })
            .into();
        let claim_number = widget(&mut doc, "claim_number", "");
        let unnamed: Object = doc
            .add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Widget",
            })
            .into();

        let first_fields = vec![vin, make, office];
        let mut first_annots = first_fields.clone();
        first_annots.push(link);
        let second_annots = vec![claim_number.clone(), unnamed];

        let mut kids: Vec<Object> = Vec::new();
        for annots in [first_annots, second_annots] {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Annots" => annots,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => 2,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if with_acroform {
            let mut fields = first_fields;
            fields.push(claim_number);
            let acroform_id = doc.add_object(dictionary! { "Fields" => fields });
            catalog.set("AcroForm", acroform_id);
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn record() -> CanonicalClaimRecord {
        CanonicalClaimRecord::from_values([
            (ClaimField::Vin, "1HGCM82633A004352"),
            (ClaimField::Make, "Honda"),
            (ClaimField::CustomerName, "John Doe"),
        ])
    }

    /// Find a widget dictionary by name in a serialized document
    fn find_widget(doc: &Document, name: &str) -> Dictionary {
        doc.objects
            .values()
            .filter_map(|object| match object {
                Object::Dictionary(dict) => Some(dict),
                _ => None,
            })
            .find(|dict| {
                matches!(dict.get(b"Subtype"), Ok(Object::Name(n)) if n == b"Widget")
                    && matches!(dict.get(b"T"), Ok(Object::String(t, _)) if t == name.as_bytes())
            })
            .cloned()
            .unwrap()
    }

    fn acroform(doc: &Document) -> Dictionary {
        let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
        let catalog = doc.get_dictionary(root).unwrap();
        let id = catalog.get(b"AcroForm").unwrap().as_reference().unwrap();
        doc.get_dictionary(id).unwrap().clone()
    }

    #[test]
    fn test_fields_lists_named_widgets_in_page_order() {
        let form = PdfForm::from_bytes(&build_template(true)).unwrap();
        let names: Vec<String> = form.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["vin", "make", "office", "claim_number"]);
    }

    #[test]
    fn test_fields_reads_template_values() {
        let form = PdfForm::from_bytes(&build_template(true)).unwrap();
        let office = form
            .fields()
            .into_iter()
            .find(|f| f.name == "office")
            .unwrap();
        assert_eq!(office.value.as_deref(), Some("Main St"));
    }

    #[test]
    fn test_apply_sets_values_and_drops_appearances() {
        let mut form = PdfForm::from_bytes(&build_template(true)).unwrap();
        let mapping = fill(&form.fields(), &record());

        assert_eq!(form.apply(&mapping), 2);
        let doc = Document::load_mem(&form.to_bytes().unwrap()).unwrap();

        let vin = find_widget(&doc, "vin");
        assert!(matches!(vin.get(b"V"), Ok(Object::String(v, _)) if v == b"1HGCM82633A004352"));
        assert!(vin.get(b"AP").is_err());

        let make = find_widget(&doc, "make");
        assert!(matches!(make.get(b"V"), Ok(Object::String(v, _)) if v == b"Honda"));
        assert!(make.get(b"AP").is_err());

        assert!(matches!(
            acroform(&doc).get(b"NeedAppearances"),
            Ok(Object::Boolean(true))
        ));
    }

    #[test]
    fn test_apply_leaves_unmatched_fields_untouched() {
        let mut form = PdfForm::from_bytes(&build_template(true)).unwrap();
        let mapping = fill(&form.fields(), &record());
        form.apply(&mapping);
        let doc = Document::load_mem(&form.to_bytes().unwrap()).unwrap();

        let office = find_widget(&doc, "office");
        assert!(matches!(office.get(b"V"), Ok(Object::String(v, _)) if v == b"Main St"));
        assert!(office.get(b"AP").is_ok());

        let claim_number = find_widget(&doc, "claim_number");
        assert!(claim_number.get(b"AP").is_ok());
    }

    #[test]
    fn test_apply_without_acroform() {
        let mut form = PdfForm::from_bytes(&build_template(false)).unwrap();
        let mapping = fill(&form.fields(), &record());

        assert_eq!(form.apply(&mapping), 2);
        assert!(form.to_bytes().is_ok());
    }

    /// One page whose widgets are stored inline: `vin` directly in the page's
    /// `/Annots`, `make` in an `/Annots` array held in its own object
    fn build_inline_template() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let inline = |name: &str| -> Object {
            Object::Dictionary(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Widget",
                "FT" => "Tx",
                "T" => Object::string_literal(name),
                "V" => Object::string_literal(""),
                "AP" => dictionary! {},
            })
        };

        let first = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Annots" => vec![inline("vin")],
        });
        let annots_id = doc.add_object(Object::Array(vec![inline("make")]));
        let second = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Annots" => annots_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![first.into(), second.into()],
                "Count" => 2,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_inline_widgets_are_filled() {
        let mut form = PdfForm::from_bytes(&build_inline_template()).unwrap();
        let names: Vec<String> = form.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["vin", "make"]);

        let mapping = fill(&form.fields(), &record());
        assert_eq!(form.apply(&mapping), 2);

        let doc = Document::load_mem(&form.to_bytes().unwrap()).unwrap();
        let vin = find_widget(&doc, "vin");
        assert!(matches!(vin.get(b"V"), Ok(Object::String(v, _)) if v == b"1HGCM82633A004352"));
        assert!(vin.get(b"AP").is_err());
        let make = find_widget(&doc, "make");
        assert!(matches!(make.get(b"V"), Ok(Object::String(v, _)) if v == b"Honda"));
    }

    #[test]
    fn test_fill_template_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CCC BCIF.pdf");
        fs::write(&path, build_template(true)).unwrap();

        let filled = fill_template(&path, &record()).unwrap();
        assert_eq!(filled.mapping.updated_count(), 2);
        assert_eq!(filled.mapping.get("office"), Some("Main St"));

        let reloaded = PdfForm::from_bytes(&filled.bytes).unwrap();
        let vin = reloaded
            .fields()
            .into_iter()
            .find(|f| f.name == "vin")
            .unwrap();
        assert_eq!(vin.value.as_deref(), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("filled_bcif.pdf");

        let mut form = PdfForm::from_bytes(&build_template(true)).unwrap();
        form.save(&output).unwrap();
        assert!(PdfForm::load(&output).is_ok());
    }

    #[test]
    fn test_fill_template_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        assert!(matches!(
            fill_template(&path, &record()),
            Err(FormError::TemplateUnreadable { .. })
        ));
        assert!(matches!(
            fill_template(Path::new("/nonexistent/template.pdf"), &record()),
            Err(FormError::TemplateUnreadable { .. })
        ));
    }
}
