//! aside CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "aside")]
#[command(version, about = "Render markdown callout quotes as <aside> elements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML
    Render {
        /// Input file (reads stdin when omitted or '-')
        input: Option<String>,

        /// Write output to FILE (use '--output -' for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Configuration file (defaults to _aside.yml in the current directory)
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Enable GitHub-flavored strikethrough and autolinks
        #[arg(long)]
        gfm: bool,

        /// Pass raw HTML through to the output
        #[arg(long)]
        allow_dangerous_html: bool,

        /// Element name callouts render as
        #[arg(long, value_name = "NAME")]
        element: Option<String>,
    },

    /// Print the document tree as JSON
    Ast {
        /// Input file (reads stdin when omitted or '-')
        input: Option<String>,

        /// Configuration file (defaults to _aside.yml in the current directory)
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Print the tree as parsed, before callouts are rewritten
        #[arg(long)]
        no_transform: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for document output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aside=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            gfm,
            allow_dangerous_html,
            element,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            output,
            config,
            gfm,
            allow_dangerous_html,
            element,
        }),
        Commands::Ast {
            input,
            config,
            no_transform,
        } => commands::ast::execute(commands::ast::AstArgs {
            input,
            config,
            no_transform,
        }),
    }
}
