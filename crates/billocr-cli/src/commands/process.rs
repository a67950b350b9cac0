//! Process command - extract data from a single bill text dump.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use billocr_core::models::bill::{BillExtraction, ExtractResponse};
use billocr_core::models::config::BillocrConfig;
use billocr_core::source::{PageSource, TextDocument};
use billocr_core::BillExtractor;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input: path to an OCR text dump, or an http(s) URL to fetch one
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit the bare extraction result without the response envelope
    #[arg(long)]
    data_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV of unique line items
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        BillocrConfig::from_file(Path::new(path))?
    } else {
        BillocrConfig::default()
    };

    info!("Processing document: {}", args.input);

    // Acquire the page text (URL or local file)
    let document = if args.input.starts_with("http://") || args.input.starts_with("https://") {
        fetch_document(&args.input).await?
    } else {
        TextDocument::open(Path::new(&args.input))
            .map_err(|e| anyhow::anyhow!("failed to load {}: {}", args.input, e))?
    };

    let pages = document.pages()?;
    debug!("Document has {} pages", pages.len());

    let extractor = BillExtractor::new(&config);
    let result = extractor.extract_document(&pages);

    // Format output
    let output = format_extraction(&result, args.format, args.data_only)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Fetch a text dump over HTTP, mirroring the URL acquisition path of the
/// hosted extraction service.
async fn fetch_document(url: &str) -> anyhow::Result<TextDocument> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Fetching {}", url));

    let response = reqwest::get(url)
        .await
        .map_err(|e| anyhow::anyhow!("failed to download document: {}", e))?
        .error_for_status()
        .map_err(|e| anyhow::anyhow!("failed to download document: {}", e))?;

    let text = response.text().await?;
    pb.finish_and_clear();

    Ok(TextDocument::from_text(&text))
}

fn format_extraction(
    result: &BillExtraction,
    format: OutputFormat,
    data_only: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if data_only {
                Ok(serde_json::to_string_pretty(result)?)
            } else {
                let response = ExtractResponse::success(result.clone());
                Ok(serde_json::to_string_pretty(&response)?)
            }
        }
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &BillExtraction) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "item_name",
        "item_quantity",
        "item_rate",
        "item_amount",
        "page_no",
    ])?;

    for unique in &result.unique_line_items {
        wtr.write_record([
            unique.item.item_name.as_str(),
            &unique
                .item
                .item_quantity
                .map(|v| v.to_string())
                .unwrap_or_default(),
            &unique
                .item
                .item_rate
                .map(|v| v.to_string())
                .unwrap_or_default(),
            &unique
                .item
                .item_amount
                .map(|v| v.to_string())
                .unwrap_or_default(),
            unique.page_no.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &BillExtraction) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Pages with bill content: {}\n",
        result.pagewise_line_items.len()
    ));
    output.push_str(&format!("Unique items: {}\n", result.total_items_count));
    output.push('\n');

    for unique in &result.unique_line_items {
        let amount = unique
            .item
            .item_amount
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "  [p{}] {}  {}\n",
            unique.page_no, unique.item.item_name, amount
        ));
    }

    output.push('\n');
    output.push_str(&format!("Sum total: {:.2}\n", result.sum_total));

    output
}
