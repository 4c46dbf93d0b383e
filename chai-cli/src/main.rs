use anyhow::Result;
use chai_cli::{Demo, OutputFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chai", version, about = "Build and render virtual element trees")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RenderOpts {
    /// Id of the container element the tree is mounted into
    #[arg(long, env = "CHAI_MOUNT_ID", default_value = "root")]
    mount_id: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
    /// Write output here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled demos.
    List,
    /// Render one of the bundled demos.
    Render {
        #[arg(value_enum)]
        demo: Demo,
        #[command(flatten)]
        opts: RenderOpts,
    },
    /// Parse a JSX file (or `-` for stdin) and render it.
    Jsx {
        input: PathBuf,
        /// Bind an identifier usable as `{NAME}` in the source
        #[arg(long = "bind", value_name = "NAME=VALUE", value_parser = chai_cli::parse_binding)]
        bindings: Vec<(String, String)>,
        #[command(flatten)]
        opts: RenderOpts,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    chai_cli::init_logging(cli.verbose);
    match cli.command {
        Commands::List => {
            for demo in Demo::value_variants() {
                println!("{:<16} {}", demo.name(), demo.help());
            }
        }
        Commands::Render { demo, opts } => {
            let nodes = demo.build()?;
            let output = chai_cli::format_output(&nodes, &opts.mount_id, opts.format)?;
            chai_cli::emit(&output, opts.out.as_deref())?;
        }
        Commands::Jsx {
            input,
            bindings,
            opts,
        } => {
            let nodes = chai_cli::load_jsx(&input, &bindings)?;
            let output = chai_cli::format_output(&nodes, &opts.mount_id, opts.format)?;
            chai_cli::emit(&output, opts.out.as_deref())?;
        }
    }
    Ok(())
}
