use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pictor image generation client
#[derive(Debug, Parser)]
#[command(name = "pictor", about = "Generate images from text with an OpenAI-compatible provider")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "pictor.toml", env = "PICTOR_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one image and print its URL
    Generate {
        /// Text description of the image
        description: String,

        /// Image width in pixels (256, 512 or 1024)
        #[arg(long, default_value_t = 1024)]
        width: u32,

        /// Image height in pixels, must equal the width
        #[arg(long, default_value_t = 1024)]
        height: u32,

        /// Rendering quality (standard or hd)
        #[arg(long, default_value = "standard")]
        quality: String,

        /// Rendering style (vivid or natural)
        #[arg(long, default_value = "vivid")]
        style: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn generate_uses_defaults() {
        let args = Args::try_parse_from(["pictor", "generate", "a red fox"]).unwrap();

        let Command::Generate {
            description,
            width,
            height,
            quality,
            style,
        } = args.command;

        assert_eq!(description, "a red fox");
        assert_eq!((width, height), (1024, 1024));
        assert_eq!(quality, "standard");
        assert_eq!(style, "vivid");
    }

    #[test]
    fn generate_accepts_overrides() {
        let args = Args::try_parse_from([
            "pictor",
            "--config",
            "other.toml",
            "generate",
            "a red fox",
            "--width",
            "512",
            "--height",
            "512",
            "--quality",
            "hd",
            "--style",
            "natural",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("other.toml"));

        let Command::Generate { width, quality, style, .. } = args.command;
        assert_eq!(width, 512);
        assert_eq!(quality, "hd");
        assert_eq!(style, "natural");
    }
}
