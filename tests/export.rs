mod common;

use common::BlockFace;
use handnote::layout::Margins;
use handnote::{
    export, render_with, ImageFormat, NoJitter, NotesError, PaperStyle, Px, RenderConfig, Surface,
};

fn rendered(text: &str, paper: PaperStyle) -> Surface {
    let mut config = RenderConfig::new(text);
    config.font_size(Px(20.0)).paper_style(paper).size((240, 160));

    let mut surface = Surface::new(240, 160);
    render_with(&mut surface, &config, &BlockFace, &mut NoJitter, &Margins::note())
        .expect("can render");
    surface
}

#[test]
fn never_rendered_surfaces_are_empty() {
    let surface = Surface::new(240, 160);
    for format in [ImageFormat::Png, ImageFormat::Jpeg] {
        let err = export(&surface, format).unwrap_err();
        assert!(matches!(err, NotesError::EmptyCanvas));
        assert!(err.is_retryable());
    }
}

#[test]
fn renders_without_any_marks_are_empty() {
    let surface = rendered("", PaperStyle::Plain);
    assert!(surface.has_rendered());
    assert!(matches!(
        export(&surface, ImageFormat::Png),
        Err(NotesError::EmptyCanvas)
    ));
}

#[test]
fn png_exports_are_lossless() {
    let surface = rendered("Hello there", PaperStyle::Lined);
    let png = export(&surface, ImageFormat::Png).expect("can export");

    assert_eq!(png.format, ImageFormat::Png);
    assert!(png.bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    assert!(png.filename.starts_with("handnote-"));
    assert!(png.filename.ends_with(".png"));

    let decoded = image::load_from_memory(&png.bytes)
        .expect("can decode")
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (240, 160));
    assert_eq!(
        decoded.as_raw(),
        surface.to_rgba_image().expect("surface has pixels").as_raw()
    );
}

#[test]
fn jpeg_exports_decode_to_the_same_size() {
    let surface = rendered("Hello there", PaperStyle::Grid);
    let jpeg = export(&surface, ImageFormat::Jpeg).expect("can export");

    assert!(jpeg.bytes.starts_with(&[0xff, 0xd8]));
    assert!(jpeg.filename.ends_with(".jpg"));

    let decoded = image::load_from_memory(&jpeg.bytes).expect("can decode");
    assert_eq!((decoded.width(), decoded.height()), (240, 160));
}

#[test]
fn paper_alone_counts_as_content() {
    let surface = rendered("", PaperStyle::Lined);
    assert!(export(&surface, ImageFormat::Png).is_ok());
}

#[test]
fn zero_area_surfaces_cannot_be_exported() {
    let mut config = RenderConfig::new("hi");
    config.size((0, 0));
    let mut surface = Surface::new(10, 10);
    render_with(&mut surface, &config, &BlockFace, &mut NoJitter, &Margins::note())
        .expect("zero-area renders succeed");

    assert!(matches!(
        export(&surface, ImageFormat::Jpeg),
        Err(NotesError::EmptyCanvas)
    ));
}
