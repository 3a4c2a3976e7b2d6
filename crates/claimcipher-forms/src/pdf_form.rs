//! PDF form templates backed by `lopdf`

use crate::error::FormError;
use crate::filler::{fill, FormFieldMapping, TemplateField};
use claimcipher_domain::CanonicalClaimRecord;
use lopdf::{Document, Object, ObjectId, StringFormat};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A form template loaded into memory
///
/// Fields are widget annotations (`/Subtype /Widget`) that carry a `/T`
/// name. Other annotations and unnamed widgets are ignored.
pub struct PdfForm {
    document: Document,
    source: String,
}

/// A filled template ready to be written out
#[derive(Debug, Clone)]
pub struct FilledForm {
    /// Field values after filling
    pub mapping: FormFieldMapping,

    /// Serialized PDF
    pub bytes: Vec<u8>,
}

impl PdfForm {
    /// Load a template from disk
    ///
    /// # Errors
    ///
    /// Returns `FormError::TemplateUnreadable` if the file is missing or is
    /// not a parsable PDF.
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let mut document =
            Document::load(path).map_err(|e| FormError::unreadable(path.display(), e))?;
        promote_inline_annotations(&mut document);
        Ok(Self {
            document,
            source: path.display().to_string(),
        })
    }

    /// Load a template from memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormError> {
        let mut document =
            Document::load_mem(bytes).map_err(|e| FormError::unreadable("<memory>", e))?;
        promote_inline_annotations(&mut document);
        Ok(Self {
            document,
            source: "<memory>".to_string(),
        })
    }

    /// Named widget fields across all pages, in page order
    pub fn fields(&self) -> Vec<TemplateField> {
        self.widgets().into_iter().map(|(_, field)| field).collect()
    }

    /// Write the record-derived values of `mapping` into the template
    ///
    /// Every widget that receives a value loses its cached `/AP` appearance
    /// and the form is flagged `/NeedAppearances` so viewers redraw it.
    /// Returns the number of widgets written.
    pub fn apply(&mut self, mapping: &FormFieldMapping) -> usize {
        let updates: HashMap<&str, &str> = mapping
            .updated()
            .filter_map(|f| f.value.as_deref().map(|v| (f.name.as_str(), v)))
            .collect();

        let mut written = 0;
        for (id, field) in self.widgets() {
            let Some(value) = updates.get(field.name.as_str()) else {
                continue;
            };
            if let Ok(Object::Dictionary(widget)) = self.document.get_object_mut(id) {
                widget.set("V", encode_text(value));
                widget.remove(b"AP");
                written += 1;
            }
        }

        if written > 0 {
            self.request_appearance_refresh();
        }
        debug!("Wrote {} widget(s) in {}", written, self.source);
        written
    }

    /// Serialize the document
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, FormError> {
        let mut bytes = Vec::new();
        self.document
            .save_to(&mut bytes)
            .map_err(|e| FormError::Write(e.to_string()))?;
        Ok(bytes)
    }

    /// Serialize the document to `path`
    pub fn save(&mut self, path: &Path) -> Result<(), FormError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes)
            .map_err(|e| FormError::Write(format!("{}: {}", path.display(), e)))
    }

    fn widgets(&self) -> Vec<(ObjectId, TemplateField)> {
        let mut widgets = Vec::new();

        for (_, page_id) in self.document.get_pages() {
            for id in self.annotation_ids(page_id) {
                let Ok(Object::Dictionary(annotation)) = self.document.get_object(id) else {
                    continue;
                };
                if !matches!(annotation.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Widget")
                {
                    continue;
                }
                let Some(name) = annotation.get(b"T").ok().and_then(text_value) else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                let value = annotation.get(b"V").ok().and_then(text_value);
                widgets.push((id, TemplateField::new(name, value)));
            }
        }

        widgets
    }

    fn annotation_ids(&self, page_id: ObjectId) -> Vec<ObjectId> {
        let Ok(Object::Dictionary(page)) = self.document.get_object(page_id) else {
            return Vec::new();
        };
        let annotations = match page.get(b"Annots") {
            Ok(Object::Reference(id)) => self.document.get_object(*id).ok(),
            Ok(object) => Some(object),
            Err(_) => None,
        };

        match annotations {
            Some(Object::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Object::Reference(id) => Some(*id),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn request_appearance_refresh(&mut self) {
        let root_id = match self.document.trailer.get(b"Root") {
            Ok(Object::Reference(id)) => *id,
            _ => return,
        };
        let acroform = match self.document.get_object(root_id) {
            Ok(Object::Dictionary(catalog)) => catalog.get(b"AcroForm").ok().cloned(),
            _ => None,
        };

        match acroform {
            Some(Object::Reference(id)) => {
                if let Ok(Object::Dictionary(form)) = self.document.get_object_mut(id) {
                    form.set("NeedAppearances", Object::Boolean(true));
                }
            }
            Some(Object::Dictionary(_)) => {
                if let Ok(Object::Dictionary(catalog)) = self.document.get_object_mut(root_id) {
                    if let Ok(Object::Dictionary(form)) = catalog.get_mut(b"AcroForm") {
                        form.set("NeedAppearances", Object::Boolean(true));
                    }
                }
            }
            _ => debug!("{} has no AcroForm dictionary", self.source),
        }
    }
}

/// Load a template, fill it from the record and serialize the result
pub fn fill_template(
    path: &Path,
    record: &CanonicalClaimRecord,
) -> Result<FilledForm, FormError> {
    let mut form = PdfForm::load(path)?;
    let mapping = fill(&form.fields(), record);
    let written = form.apply(&mapping);
    let bytes = form.to_bytes()?;

    info!(
        "Filled {} of {} template field(s) from {}",
        written,
        mapping.len(),
        path.display()
    );
    Ok(FilledForm { mapping, bytes })
}

/// Move annotation dictionaries stored inline in `/Annots` into their own
/// objects so every widget can be addressed by id
fn promote_inline_annotations(document: &mut Document) -> usize {
    let mut promoted = 0;
    let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();

    for page_id in page_ids {
        let annots_id = match document.get_object(page_id) {
            Ok(Object::Dictionary(page)) => match page.get(b"Annots") {
                Ok(Object::Reference(id)) => Some(*id),
                Ok(Object::Array(_)) => None,
                _ => continue,
            },
            _ => continue,
        };
        let items = match annots_id {
            Some(id) => document.get_object(id).ok(),
            None => match document.get_object(page_id) {
                Ok(Object::Dictionary(page)) => page.get(b"Annots").ok(),
                _ => None,
            },
        };
        let Some(Object::Array(items)) = items.cloned() else {
            continue;
        };
        if !items.iter().any(|item| matches!(item, Object::Dictionary(_))) {
            continue;
        }

        let items: Vec<Object> = items
            .into_iter()
            .map(|item| match item {
                Object::Dictionary(annotation) => {
                    promoted += 1;
                    document.add_object(annotation).into()
                }
                other => other,
            })
            .collect();

        match annots_id {
            Some(id) => {
                document.objects.insert(id, Object::Array(items));
            }
            None => {
                if let Ok(Object::Dictionary(page)) = document.get_object_mut(page_id) {
                    page.set("Annots", items);
                }
            }
        }
    }

    if promoted > 0 {
        debug!("Moved {} inline annotation(s) into their own objects", promoted);
    }
    promoted
}

/// Decode a PDF text string or name
fn text_value(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

fn decode_text(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(utf16) => {
            let units: Vec<u16> = utf16
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        None => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// ASCII stays a literal string, anything else is UTF-16BE with a BOM
fn encode_text(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}
