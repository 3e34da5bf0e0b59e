use handnote::surfacesize;
use handnote::{FontLibrary, ImageFormat, PaperStyle, Px, RenderConfig, Renderer, Surface};

fn main() {
    env_logger::init();

    let mut fonts = FontLibrary::new().with_system_fonts();
    if let Some(dir) = std::env::args().nth(1) {
        fonts.add_font_dir(dir);
    }
    let mut renderer = Renderer::new(fonts);

    let text = format!("{}\n\n{}", lipsum::lipsum(60), lipsum::lipsum_words(40));
    let mut config = RenderConfig::new(text);
    config
        .font_size(Px(22.0))
        .line_height(1.45)
        .paper_style(PaperStyle::Lined)
        .size(surfacesize::A4);

    let mut surface = Surface::new(config.width, config.height);
    renderer.render(&mut surface, &config).expect("can render notes");

    let jpeg = handnote::export(&surface, ImageFormat::Jpeg).expect("can export notes");
    std::fs::write("lorem-ipsum.jpg", &jpeg.bytes).expect("can write notes");
}
