//! PDF serialization of a `DocumentLayout` using the two standard Helvetica fonts.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::render::font_metrics::{win_ansi_byte, FontFace};
use crate::render::layout::{DocumentLayout, PageLayout, TextRun};
use crate::render::RenderError;

/// Writes `layout` as a complete PDF file.
pub fn write_pdf(layout: &DocumentLayout) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = add_font(&mut doc, FontFace::Helvetica);
    let bold_id = add_font(&mut doc, FontFace::HelveticaBold);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontFace::Helvetica.resource_name() => regular_id,
            FontFace::HelveticaBold.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let content = page_content(page)
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(layout.width_pt),
            real(layout.height_pt),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn add_font(doc: &mut Document, face: FontFace) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => face.base_font(),
        "Encoding" => "WinAnsiEncoding",
    })
}

fn page_content(page: &PageLayout) -> Content {
    let operations = page.runs.iter().flat_map(text_run_operations).collect();
    Content { operations }
}

fn text_run_operations(run: &TextRun) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "rg",
            vec![real(run.color.0), real(run.color.1), real(run.color.2)],
        ),
        Operation::new(
            "Tf",
            vec![run.face.resource_name().into(), real(run.size)],
        ),
        Operation::new("Td", vec![real(run.x), real(run.y)]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().filter_map(win_ansi_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::Rgb;

    fn single_page(text: &str) -> DocumentLayout {
        DocumentLayout {
            width_pt: 595.28,
            height_pt: 841.89,
            pages: vec![PageLayout {
                runs: vec![TextRun {
                    x: 50.0,
                    y: 791.89,
                    size: 12.0,
                    face: FontFace::Helvetica,
                    color: Rgb(0.0, 0.0, 0.0),
                    text: text.to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = write_pdf(&single_page("Career Goal:")).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_output_reloads_with_expected_page_count() {
        let mut layout = single_page("page one");
        layout.pages.push(PageLayout::default());

        let bytes = write_pdf(&layout).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_bullet_encoded_as_single_byte() {
        assert_eq!(encode_win_ansi("• a"), vec![0x95, b' ', b'a']);
    }
}
