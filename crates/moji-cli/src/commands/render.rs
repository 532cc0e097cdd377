//! Render command implementation
//!
//! Text in, PNG out: the classic single-line emoji render.

use std::time::Instant;

use moji::prelude::*;

use super::get_input_text;
use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let started = Instant::now();

    // 1. Input text
    let text = get_input_text(
        args.text.as_deref(),
        args.text_arg.as_deref(),
        args.text_file.as_deref(),
    )?;

    // 2. Parameters
    let params = RenderParams {
        canvas_width: args.width,
        canvas_height: args.height,
        font_size: args.font_size,
        foreground: Color::from_hex(&args.foreground)?,
        background: Color::from_hex(&args.background)?,
    };
    params.validate()?;

    // 3. Resources: a bad sequence file or font is fatal
    let pairs = Arc::new(ModifierPairTable::from_path(&args.sequences)?);
    log::info!("Loaded {} modifier pair bases", pairs.len());
    let font = Arc::new(Font::from_file_index(&args.font_file, args.face_index)?);

    // 4. Pipeline
    let pipeline = Pipeline::builder()
        .segmenter(Arc::new(EmojiSegmenter::new(pairs)))
        .metrics(Arc::new(SkrifaMetrics::new(font.clone(), params.font_size)?))
        .assets(Arc::new(DirAssetStore::new(&args.emoji_dir)))
        .codec(Arc::new(StdImageCodec::new()))
        .exporter(Arc::new(PngExporter::new()))
        .emoji_cache((args.cache_size > 0).then_some(args.cache_size))
        .build()?;

    if args.verbose {
        let doc = pipeline.segment(&text);
        eprintln!("Normalized: {:?}", doc.text);
        eprintln!("Emoji: {}", doc.keys.len());
    }

    // 5. Render and write
    let mut canvas = SkiaCanvas::new(font, &params)?;
    let png = pipeline.process(&text, &mut canvas)?;
    moji::export::write_output(&args.output_file, &png)?;

    if !args.quiet {
        eprintln!("Rendered to {}", args.output_file.display());
        eprintln!("  Size: {}x{}, {} bytes", params.canvas_width, params.canvas_height, png.len());
        eprintln!("  Took {:?}", started.elapsed());
    }

    Ok(())
}
