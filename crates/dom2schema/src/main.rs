//! Convert an HTML page or a captured element tree into a design schema.
//!
//! ```text
//! dom2schema page.html --selector '#toolbar' --type-prefix ia.
//! dom2schema capture.json --selected --compact
//! ```

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use log::{debug, info};
use page::{Page, Snapshot};
use schema::{
    ConvertOptions, Converter, ElementTree, SchemaNode, SelectionSource, StyleProvider, Target,
};

#[derive(Debug, Parser)]
#[command(name = "dom2schema")]
#[command(about = "Convert an element tree with resolved styles into a design schema", long_about = None)]
struct Cli {
    /// HTML file, or a JSON snapshot of a live page
    input: PathBuf,

    /// CSS selector of the element to convert
    #[arg(short, long, default_value = "body")]
    selector: String,

    /// Convert the inspected element instead; for HTML the selector picks it
    #[arg(long)]
    selected: bool,

    /// Read INPUT as a snapshot whatever its extension
    #[arg(long)]
    snapshot: bool,

    /// Prefix for every component type, e.g. `ia.`
    #[arg(long)]
    type_prefix: Option<String>,

    /// Icon placeholder path
    #[arg(long)]
    icon_path: Option<String>,

    /// JSON file with converter options; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the schema on one line
    #[arg(long)]
    compact: bool,

    /// Write the schema here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn reads_snapshot(&self) -> bool {
        self.snapshot
            || self
                .input
                .extension()
                .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
    }

    /// Options from the config file, then overridden by flags.
    fn options(&self) -> Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => ConvertOptions::default(),
        };
        if let Some(prefix) = &self.type_prefix {
            options.type_prefix.clone_from(prefix);
        }
        if let Some(icon_path) = &self.icon_path {
            options.icon_path.clone_from(icon_path);
        }
        Ok(options)
    }
}

fn load_options(path: &Path) -> Result<ConvertOptions> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn convert<T>(source: &T, cli: &Cli, options: ConvertOptions) -> Result<Vec<SchemaNode>>
where
    T: ElementTree
        + StyleProvider<Handle = <T as ElementTree>::Handle>
        + SelectionSource<Handle = <T as ElementTree>::Handle>,
{
    let converter = Converter::with_options(source, source, options);
    let nodes = if cli.selected {
        converter.convert_selected(source)?
    } else {
        converter.convert(Target::Selector(&cli.selector))?
    };
    Ok(nodes)
}

fn run(cli: &Cli) -> Result<Vec<SchemaNode>> {
    let options = cli.options()?;
    debug!("converter options: {options:?}");
    if cli.reads_snapshot() {
        let snapshot = Snapshot::open(&cli.input)?;
        return convert(&snapshot, cli, options);
    }
    let mut page = Page::open(&cli.input)?;
    if cli.selected {
        let inspected = page.resolve(&cli.selector);
        page.inspect(inspected);
    }
    convert(&page, cli, options)
}

fn render(nodes: &[SchemaNode], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(nodes)?
    } else {
        serde_json::to_string_pretty(nodes)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let nodes = run(&cli)?;
    let json = render(&nodes, cli.compact)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} nodes to {}", nodes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use schema::{ConvertError, DEFAULT_ICON_PATH};
    use tempfile::NamedTempFile;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["dom2schema"].iter().chain(args)).unwrap()
    }

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn flags_override_the_config_file() {
        let config = temp_file(".json", r#"{ "typePrefix": "x.", "iconPath": "a/b" }"#);
        let path = config.path().to_str().unwrap();
        let options = cli(&["page.html", "--config", path, "--type-prefix", "ia."])
            .options()
            .unwrap();
        assert_eq!(options.type_prefix, "ia.");
        assert_eq!(options.icon_path, "a/b");

        let defaults = cli(&["page.html"]).options().unwrap();
        assert_eq!(defaults.icon_path, DEFAULT_ICON_PATH);
    }

    #[test]
    fn json_inputs_are_snapshots() {
        assert!(cli(&["capture.JSON"]).reads_snapshot());
        assert!(cli(&["capture.txt", "--snapshot"]).reads_snapshot());
        assert!(!cli(&["page.html"]).reads_snapshot());
    }

    #[test]
    fn html_selection_comes_from_the_selector() {
        let html = temp_file(".html", "<div id=a><p class=lead>Hi</p></div>");
        let path = html.path().to_str().unwrap();

        let nodes = run(&cli(&[path, "--selector", ".lead", "--selected"])).unwrap();
        assert_eq!(nodes[0].meta.name, "lead");

        let missing = run(&cli(&[path, "--selector", "#nope", "--selected"])).unwrap_err();
        assert_eq!(
            missing.downcast_ref::<ConvertError>(),
            Some(&ConvertError::NoSelection)
        );
    }

    #[test]
    fn compact_output_is_one_line() {
        let html = temp_file(".html", "<p id=x>Hi</p>");
        let args = cli(&[html.path().to_str().unwrap(), "--selector", "#x", "--compact"]);
        let json = render(&run(&args).unwrap(), args.compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"[{"type":"display.label""#));
    }
}
