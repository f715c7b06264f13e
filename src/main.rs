use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tablegrid::export::OutputFormat;
use tablegrid::ocr::{load_detections, OcrBridge};
use tablegrid::pipeline::{build_table, detect_structure, scan_table, write_table, PipelineConfig};
use tablegrid::TableConfig;

#[derive(Parser, Debug)]
#[command(name = "tablegrid")]
#[command(version, about = "Recover table grids from OCR text boxes", long_about = None)]
struct Cli {
    /// Log every pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a table from a JSON file of detected text boxes
    Extract {
        /// Detections file: [{"text": ..., "bbox": [x, y, w, h]}, ...]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Run an OCR script on an image, then build the table
    Scan {
        /// Input image path
        image: PathBuf,

        /// OCR script printing detections as JSON
        #[arg(long)]
        script: PathBuf,

        /// Interpreter used to run the script
        #[arg(long, default_value = "python3")]
        program: String,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Print the inferred rows and column assignments
    Structure {
        /// Detections file
        input: PathBuf,

        #[command(flatten)]
        table: TableArgs,
    },
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Minimum expected number of rows
    #[arg(long, default_value_t = 3)]
    min_rows: usize,

    /// Minimum expected number of columns
    #[arg(long, default_value_t = 2)]
    min_cols: usize,
}

impl TableArgs {
    fn config(&self) -> TableConfig {
        TableConfig::new(self.min_rows, self.min_cols)
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn pipeline(self, input: PathBuf, table: &TableArgs) -> PipelineConfig {
        PipelineConfig::new(input, table.config())
            .with_output(self.output)
            .with_format(self.format)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            output,
            table,
        } => {
            let config = output.pipeline(input, &table);
            let grid = build_table(&config)?;
            write_table(&grid, &config, &mut std::io::stdout().lock())
        }
        Commands::Scan {
            image,
            script,
            program,
            output,
            table,
        } => {
            if !image.is_file() {
                anyhow::bail!("Input image does not exist: {}", image.display());
            }
            let config = output.pipeline(image, &table);
            let bridge = OcrBridge::new(script).with_program(program);
            let grid = scan_table(&bridge, &config.input, &config.table)?;
            write_table(&grid, &config, &mut std::io::stdout().lock())
        }
        Commands::Structure { input, table } => show_structure(input, table.config()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_structure(input: PathBuf, config: TableConfig) -> Result<()> {
    let detections = load_detections(&input)?;
    let structure = detect_structure(&detections, &config)
        .with_context(|| format!("Failed to infer table structure: {}", input.display()))?;

    println!("Rows: {}", structure.num_rows);
    println!("Columns: {}", structure.num_cols);
    for (idx, boundary) in structure.boundaries.iter().enumerate() {
        println!("Column {idx}: x {:.1}..{:.1}", boundary.low, boundary.high);
    }
    for (idx, row) in structure.rows.iter().enumerate() {
        let cells = row
            .cells
            .iter()
            .map(|cell| {
                let bbox = cell.text_box.bbox;
                format!(
                    "{}:({:.0}, {:.0}, {:.0}, {:.0})",
                    cell.column, bbox.x, bbox.y, bbox.w, bbox.h
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("Row {idx}: {cells}");
    }

    Ok(())
}
