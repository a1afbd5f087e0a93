// src/cli.rs
use crate::generator;
use crate::printers::dot_printer::{
    self, DEF_EDGE_COLOR, DEF_EDGE_SHAPE, DEF_FILE_NAME, DEF_GRAPH_NAME, DEF_NODE_COLOR,
    DEF_NODE_NAME, DEF_NODE_SHAPE,
};
use clap::{
    Parser, ValueEnum, ValueHint,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use std::path::PathBuf;

const HELP_STR: &str = r#"
{before-help}{name} {version}
{author-with-newline}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"#;

// Custom styles for clap
pub fn custom_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightMagenta.on_default() | Effects::BOLD)
        .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
        .valid(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .invalid(AnsiColor::BrightYellow.on_default() | Effects::BOLD | Effects::UNDERLINE)
        .placeholder(AnsiColor::BrightBlue.on_default())
        .usage(AnsiColor::BrightCyan.on_default() | Effects::BOLD | Effects::UNDERLINE)
}

/// The graph kinds the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Cfg,
    DomTree,
    JoinGraph,
    DomFrontier,
}

/// Which output files a target emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormats {
    pub txt: bool,
    pub dot: bool,
    pub png: bool,
}

/// A graph kind plus output format. A bare kind emits every format for
/// that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphTarget {
    Cfg,
    CfgTxt,
    CfgDot,
    CfgPng,
    DomTree,
    DomTreeDot,
    DomTreePng,
    JoinGraph,
    JoinGraphDot,
    JoinGraphPng,
    DomFrontier,
    DomFrontierDot,
    DomFrontierPng,
}

impl GraphTarget {
    #[must_use]
    pub const fn kind(self) -> GraphKind {
        match self {
            Self::Cfg | Self::CfgTxt | Self::CfgDot | Self::CfgPng => GraphKind::Cfg,
            Self::DomTree | Self::DomTreeDot | Self::DomTreePng => GraphKind::DomTree,
            Self::JoinGraph | Self::JoinGraphDot | Self::JoinGraphPng => GraphKind::JoinGraph,
            Self::DomFrontier | Self::DomFrontierDot | Self::DomFrontierPng => {
                GraphKind::DomFrontier
            }
        }
    }

    #[must_use]
    pub const fn formats(self) -> OutputFormats {
        match self {
            Self::Cfg => OutputFormats { txt: true, dot: true, png: true },
            Self::CfgTxt => OutputFormats { txt: true, dot: false, png: false },
            Self::CfgDot | Self::DomTreeDot | Self::JoinGraphDot | Self::DomFrontierDot => {
                OutputFormats { txt: false, dot: true, png: false }
            }
            Self::CfgPng | Self::DomTreePng | Self::JoinGraphPng | Self::DomFrontierPng => {
                OutputFormats { txt: false, dot: false, png: true }
            }
            Self::DomTree | Self::JoinGraph | Self::DomFrontier => {
                OutputFormats { txt: false, dot: true, png: true }
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version = clap::crate_version!(),
    author = clap::crate_authors!("\n"),
    about,
    long_about = None,
    help_template = HELP_STR,
    styles = custom_styles()
)]
pub struct Args {
    /// Graph to produce; a bare kind (e.g. `cfg`) emits all of its formats
    #[arg(short = 'g', long = "graph", value_enum, value_name = "TARGET")]
    pub graph: GraphTarget,

    /// Analyse an existing edge-list file instead of generating one
    #[arg(long = "arg", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Directory where output files are created
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath, default_value = ".")]
    pub path: PathBuf,

    /// Name of the rendered digraph
    #[arg(long = "graph-name", value_name = "NAME", default_value = DEF_GRAPH_NAME)]
    pub graph_name: String,

    /// Number of nodes for the generated graph
    #[arg(long = "num-nodes", value_name = "N", default_value_t = generator::DEF_NODE_COUNT)]
    pub num_nodes: usize,

    /// Limit on the number of edges leaving a generated node
    #[arg(long = "num-edges", value_name = "N", default_value_t = generator::DEF_EDGE_LIMIT)]
    pub num_edges: usize,

    /// Node fill color (any Graphviz color, RGB included)
    #[arg(long = "node-color", value_name = "COLOR", default_value = DEF_NODE_COLOR)]
    pub node_color: String,

    /// Edge color (any Graphviz color, RGB included)
    #[arg(long = "edge-color", value_name = "COLOR", default_value = DEF_EDGE_COLOR)]
    pub edge_color: String,

    /// Node shape; see graphviz.org for the full list
    #[arg(long = "node-shape", value_name = "SHAPE", default_value = DEF_NODE_SHAPE)]
    pub node_shape: String,

    /// Edge arrowhead shape; see graphviz.org for the full list
    #[arg(long = "edge-shape", value_name = "SHAPE", default_value = DEF_EDGE_SHAPE)]
    pub edge_shape: String,

    /// Base name for generated files
    #[arg(long = "file-name", value_name = "NAME", default_value = DEF_FILE_NAME)]
    pub file_name: String,

    /// Name prefix for generated nodes
    #[arg(long = "node-name", value_name = "NAME", default_value = DEF_NODE_NAME)]
    pub node_name: String,

    /// Open rendered PNGs with `display`
    #[arg(long)]
    pub show: bool,
}

impl Args {
    #[must_use]
    pub fn style(&self) -> dot_printer::DotStyle {
        dot_printer::DotStyle {
            graph_name: self.graph_name.clone(),
            node_shape: self.node_shape.clone(),
            node_color: self.node_color.clone(),
            edge_shape: self.edge_shape.clone(),
            edge_color: self.edge_color.clone(),
            file_name: self.file_name.clone(),
            node_name_prefix: self.node_name.clone(),
        }
    }
}
