use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use url::Url;

use hrefs::{get_all_hrefs, rel_to_abs, unique, url_depth, LinkError, DEFAULT_ENCODING};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "hrefs")]
#[command(about = "Extract, resolve and output all hyperlinks on a website", long_about = None)]
struct Args {
    /// URL(s) to extract links from (can provide multiple)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Fallback charset for decoding the fetched HTML
    #[arg(short, long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Output format: json, csv, or text
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Resolve relative hrefs against the page URL
    #[arg(short, long)]
    resolve: bool,

    /// Drop duplicate links, keeping first-occurrence order
    #[arg(short, long)]
    unique: bool,

    /// Save output to file
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    quiet: bool,
}

/// Links collected from one page
#[derive(Debug, Serialize, Clone)]
struct PageLinks {
    url: String,
    depth: usize,
    links: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("🔗 hrefs v0.2.0");
    log::info!("📋 Extracting links from {} URL(s)", args.urls.len());

    // Validate URLs
    for url in &args.urls {
        if let Err(e) = Url::parse(url) {
            return Err(LinkError::InvalidUrl(format!("{}: {}", url, e)).into());
        }
    }

    let mut pages = Vec::new();
    for url in &args.urls {
        log::info!("Fetching: {}", url);
        match collect_page(url, &args) {
            Ok(page) => pages.push(page),
            Err(e) => {
                log::error!("Failed to extract from {}: {}", url, e);
                if !args.quiet {
                    eprintln!("Error extracting from {}: {}", url, e);
                }
            }
        }
    }

    output_results(&pages, &args)?;

    log::info!("✅ Extracted links from {} page(s)", pages.len());
    Ok(())
}

/// Fetch one page and post-process its links per the CLI flags
fn collect_page(url: &str, args: &Args) -> Result<PageLinks> {
    let mut links = get_all_hrefs(url, &args.encoding)?;

    if args.resolve {
        links = links.iter().map(|href| rel_to_abs(href, url)).collect();
    }

    // The deduplicator rejects empty input, so a page without links skips it
    if args.unique && !links.is_empty() {
        links = unique(&links)?;
    }

    Ok(PageLinks {
        url: url.to_string(),
        depth: url_depth(url),
        links,
    })
}

/// Output results in the requested format
fn output_results(pages: &[PageLinks], args: &Args) -> Result<()> {
    let output_str = match args.format.to_lowercase().as_str() {
        "json" => format_json(pages)?,
        "csv" => format_csv(pages)?,
        "text" | "txt" => format_text(pages),
        other => {
            log::error!("Unknown format: {}", other);
            return Err(anyhow::anyhow!(
                "Unknown format '{}'. Use: json, csv, or text",
                other
            ));
        }
    };

    // Write to file or stdout
    if let Some(output_file) = &args.output {
        std::fs::write(output_file, &output_str)?;
        log::info!("💾 Output saved to: {}", output_file);
    } else if !args.quiet {
        println!("{}", output_str);
    }

    Ok(())
}

/// Format results as JSON
fn format_json(pages: &[PageLinks]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pages)?)
}

/// Format results as CSV (one row per link)
fn format_csv(pages: &[PageLinks]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["page", "depth", "link"])?;
    for page in pages {
        let depth = page.depth.to_string();
        for link in &page.links {
            writer.write_record([&page.url, &depth, link])?;
        }
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

/// Format results as plain text
fn format_text(pages: &[PageLinks]) -> String {
    let mut output = String::new();

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        output.push_str(&format!("URL: {}\n", page.url));
        output.push_str(&format!("Depth: {}\n", page.depth));
        output.push_str(&format!("Links ({}):\n", page.links.len()));
        for link in &page.links {
            output.push_str(&format!("  - {}\n", link));
        }
    }

    output
}
