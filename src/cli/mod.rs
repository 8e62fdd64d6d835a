pub mod completions;
pub mod render;
pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};

/// stampcard - monthly stamp-card image renderer and service
#[derive(Parser, Debug)]
#[command(name = "stampcard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a stamp card to a PNG file
    Render(render::RenderArgs),

    /// Serve stamp cards over HTTP
    Serve(serve::ServeArgs),

    /// Validate an asset directory without rendering
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
