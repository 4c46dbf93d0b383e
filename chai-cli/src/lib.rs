use anyhow::{Context, Result};
use chai_dom::VNode;
use chai_renderer::{create_root, Document, MountTarget};
use clap::ValueEnum;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod demos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A heading inside a div
    CustomApp,
    /// A link built with explicit create_element calls
    GoogleLink,
    /// The same link written as JSX
    GoogleLinkJsx,
    /// Styled heading and two profile cards
    TailwindCards,
}

impl Demo {
    pub fn build(self) -> Result<Vec<VNode>> {
        let nodes = match self {
            Demo::CustomApp => demos::custom_app()?,
            Demo::GoogleLink => demos::google_link()?,
            Demo::GoogleLinkJsx => demos::google_link_jsx()?,
            Demo::TailwindCards => demos::tailwind_cards()?,
        };
        Ok(nodes)
    }

    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    pub fn help(self) -> String {
        self.to_possible_value()
            .and_then(|v| v.get_help().map(ToString::to_string))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The whole rendered document
    #[default]
    Html,
    /// The descriptor tree as JSON
    Json,
    /// Text content of the mount point
    Text,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Render `nodes` into a fresh document with an empty `#mount_id` container.
pub fn render_document(nodes: &[VNode], mount_id: &str) -> Result<Document> {
    let mut doc = Document::new().with_container(mount_id);
    let tree = create_root(&mut doc, MountTarget::id(mount_id))
        .render_many(nodes)
        .with_context(|| format!("failed to render into #{mount_id}"))?;
    tracing::info!(
        mount_id,
        nodes = tree.node_count,
        texts = tree.text_count,
        "rendered"
    );
    Ok(doc)
}

/// Produce the requested output for `nodes`.
pub fn format_output(nodes: &[VNode], mount_id: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(nodes).context("failed to serialize descriptor")
        }
        OutputFormat::Html => Ok(render_document(nodes, mount_id)?.to_html()),
        OutputFormat::Text => {
            let doc = render_document(nodes, mount_id)?;
            let mount = doc
                .get_element_by_id(mount_id)
                .with_context(|| format!("#{mount_id} vanished after render"))?;
            Ok(doc.text_content(mount))
        }
    }
}

/// Split a `NAME=VALUE` binding.
pub fn parse_binding(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {s:?}")),
    }
}

/// Read JSX from `input` (`-` for stdin) and parse it with the demo scope
/// plus `bindings`.
pub fn load_jsx(input: &Path, bindings: &[(String, String)]) -> Result<Vec<VNode>> {
    let src = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?
    };
    let ctx = bindings
        .iter()
        .fold(demos::demo_context(), |ctx, (k, v)| ctx.bind(k, v));
    ctx.parse(&src)
        .with_context(|| format!("failed to parse {}", input.display()))
}

/// Print to stdout, or write to `out` when given.
pub fn emit(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{output}"),
    }
    Ok(())
}
