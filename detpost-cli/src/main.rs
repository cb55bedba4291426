use clap::Parser;
use detpost::{classes, wire, Detection, OutputView, PostConfig, Postprocessor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "DetPost CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Emit the legacy wire string instead of JSON records.
    #[arg(long)]
    wire: bool,
    /// Enable tracing output for per-frame diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PostConfigJson {
    input_size: u32,
    confidence_threshold: f32,
    nms_threshold: f32,
    subpixel: bool,
}

impl Default for PostConfigJson {
    fn default() -> Self {
        let cfg = PostConfig::default();
        Self {
            input_size: cfg.input_size,
            confidence_threshold: cfg.confidence_threshold,
            nms_threshold: cfg.nms_threshold,
            subpixel: cfg.subpixel,
        }
    }
}

impl From<PostConfigJson> for PostConfig {
    fn from(value: PostConfigJson) -> Self {
        Self {
            input_size: value.input_size,
            confidence_threshold: value.confidence_threshold,
            nms_threshold: value.nms_threshold,
            subpixel: value.subpixel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    tensor_path: String,
    rows: usize,
    cols: usize,
    output_path: Option<String>,
    post: PostConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tensor_path: String::new(),
            rows: 84,
            cols: 8400,
            output_path: None,
            post: PostConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    class_id: usize,
    label: String,
    confidence: f32,
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
}

impl From<Detection> for DetectionRecord {
    fn from(det: Detection) -> Self {
        Self {
            class_id: det.class_id,
            label: classes::name(det.class_id).unwrap_or("unknown").to_string(),
            confidence: det.confidence,
            cx: det.cx,
            cy: det.cy,
            width: det.width,
            height: det.height,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
}

/// Reads a raw little-endian f32 tensor dump.
fn load_tensor(path: &str) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;
    if bytes.len() % 4 != 0 {
        return Err(format!("{path}: length {} is not a multiple of 4", bytes.len()).into());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("detpost=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.tensor_path.is_empty() {
        return Err("tensor_path must be set in the config".into());
    }

    let data = load_tensor(&config.tensor_path)?;
    let view = OutputView::new(&data, config.rows, config.cols)?;
    let post = Postprocessor::new().with_config(config.post.into());
    let detections = post.run(&view);

    let text = if cli.wire {
        wire::encode(&detections)
    } else {
        let output = Output {
            detections: detections.into_iter().map(DetectionRecord::from).collect(),
        };
        serde_json::to_string_pretty(&output)?
    };

    match config.output_path {
        Some(path) => fs::write(path, text)?,
        None => println!("{text}"),
    }

    Ok(())
}
