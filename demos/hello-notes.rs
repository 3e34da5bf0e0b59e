use handnote::colours;
use handnote::{FontLibrary, ImageFormat, PaperStyle, Px, RenderConfig, Renderer, Surface};

fn main() {
    env_logger::init();

    // pick up whatever handwriting-ish fonts the system has
    let fonts = FontLibrary::new().with_system_fonts();
    let mut renderer = Renderer::new(fonts);

    let mut config = RenderConfig::new("Hello, world!\n\nThis note was typed, not written.");
    config
        .font_family("Caveat")
        .font_size(Px(32.0))
        .pen_colour(colours::INK_BLUE)
        .paper_style(PaperStyle::Lined)
        .size((640, 320));

    let mut surface = Surface::new(config.width, config.height);
    let export = renderer
        .render_and_export(&mut surface, &config, ImageFormat::Png)
        .expect("can render notes");
    std::fs::write(&export.filename, &export.bytes).expect("can write notes");
    println!("wrote {}", export.filename);
}
