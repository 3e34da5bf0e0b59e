use handnote::surfacesize::{self, SurfaceOrientation};
use handnote::{FontLibrary, ImageFormat, PaperStyle, RenderConfig, Renderer};

fn main() {
    env_logger::init();

    // graph paper has no text, so the renderer never needs a font
    let mut config = RenderConfig::default();
    config
        .paper_style(PaperStyle::Grid)
        .size(surfacesize::LETTER.landscape());

    let mut renderer = Renderer::new(FontLibrary::new());
    let mut surface = handnote::Surface::new(config.width, config.height);
    let png = renderer
        .render_and_export(&mut surface, &config, ImageFormat::Png)
        .expect("can render graph paper");
    std::fs::write("graph-paper.png", &png.bytes).expect("can write graph paper");
}
