//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// moji - render text with inline emoji bitmaps
#[derive(Parser, Debug)]
#[command(name = "moji")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to a PNG file
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Show the normalized text and asset keys without rendering
    #[command(alias = "s")]
    Segment(SegmentArgs),

    /// Display classifier ranges and default render settings
    #[command(alias = "i")]
    Info,
}

impl Commands {
    /// Default log filter for this invocation
    pub fn log_level(&self) -> &'static str {
        let (quiet, verbose) = match self {
            Commands::Render(args) => (args.quiet, args.verbose),
            Commands::Segment(args) => (false, args.verbose),
            Commands::Info => (false, false),
        };
        match (quiet, verbose) {
            (true, _) => "error",
            (false, true) => "debug",
            (false, false) => "warn",
        }
    }
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Input text (alternative to positional argument)
    #[arg(short = 't', long = "text", conflicts_with = "text_file")]
    pub text_arg: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text_arg")]
    pub text_file: Option<PathBuf>,

    /// Font file path (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,

    /// Directory of emoji bitmaps named emoji_u<hex>[_<hex>...].png
    #[arg(short = 'e', long = "emoji-dir")]
    pub emoji_dir: PathBuf,

    /// JSON file of combinable modifier pairs
    #[arg(short = 'q', long = "sequences")]
    pub sequences: PathBuf,

    /// Output file path
    #[arg(short = 'o', long = "output-file", default_value = "out.png")]
    pub output_file: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'W', long = "width", default_value = "512")]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long = "height", default_value = "512")]
    pub height: u32,

    /// Font size in pixels
    #[arg(short = 's', long = "font-size", default_value = "50")]
    pub font_size: f32,

    /// Text color (RRGGBB or RRGGBBAA)
    #[arg(short = 'c', long = "foreground", default_value = "FFFFFF")]
    pub foreground: String,

    /// Background color (RRGGBB or RRGGBBAA)
    #[arg(short = 'b', long = "background", default_value = "000000")]
    pub background: String,

    /// Emoji bitmap cache capacity (0 disables the cache)
    #[arg(long = "cache-size", default_value = "64")]
    pub cache_size: usize,

    /// Silent mode (no progress info)
    #[arg(long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the segment command
#[derive(Parser, Debug)]
pub struct SegmentArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file")]
    pub text_file: Option<PathBuf>,

    /// JSON file of combinable modifier pairs
    #[arg(short = 'q', long = "sequences")]
    pub sequences: PathBuf,

    /// Print a JSON object instead of plain text
    #[arg(long = "json")]
    pub json: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from([
            "moji", "render", "hi", "-f", "font.ttf", "-e", "emojis", "-q", "seq.json",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.text.as_deref(), Some("hi"));
        assert_eq!(args.output_file, PathBuf::from("out.png"));
        assert_eq!((args.width, args.height), (512, 512));
        assert_eq!(args.font_size, 50.0);
        assert_eq!(args.cache_size, 64);
        assert!(!args.quiet);
    }

    #[test]
    fn test_render_requires_resources() {
        assert!(Cli::try_parse_from(["moji", "render", "hi"]).is_err());
    }

    #[test]
    fn test_text_and_text_file_conflict() {
        let result = Cli::try_parse_from([
            "moji", "render", "-t", "a", "-T", "a.txt", "-f", "f.ttf", "-e", "e", "-q", "s.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_levels() {
        let quiet = Cli::try_parse_from([
            "moji", "r", "-f", "f.ttf", "-e", "e", "-q", "s.json", "--quiet", "--verbose",
        ])
        .unwrap();
        assert_eq!(quiet.command.log_level(), "error");

        let verbose =
            Cli::try_parse_from(["moji", "segment", "-q", "s.json", "--verbose"]).unwrap();
        assert_eq!(verbose.command.log_level(), "debug");

        let info = Cli::try_parse_from(["moji", "info"]).unwrap();
        assert_eq!(info.command.log_level(), "warn");
    }

    #[test]
    fn test_segment_json_flag() {
        let cli = Cli::try_parse_from(["moji", "s", "x", "-q", "s.json", "--json"]).unwrap();
        let Commands::Segment(args) = cli.command else {
            panic!("expected segment");
        };
        assert!(args.json);
        assert_eq!(args.text.as_deref(), Some("x"));
    }
}
