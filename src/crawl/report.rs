use std::fmt::Write as _;

use crate::crawl::analyzer::{is_waste_path, CrawlStats};

/// Visit count past which a path is throttled in the generated robots.txt.
const ROBOTS_VISIT_CUTOFF: u64 = 20;

const CRAWL_DELAY_SECS: u32 = 1;
// Placeholder host; the site substitutes its own domain before publishing.
const SITEMAP_URL: &str = "https://example.com/sitemap.xml";

/// Human-readable Markdown report over one analysis pass.
pub fn markdown_report(stats: &CrawlStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Crawl Log Analysis\n");
    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "- Total requests: {}", stats.total_requests);
    let _ = writeln!(out, "- Googlebot requests: {}", stats.googlebot_requests);
    let _ = writeln!(out, "- Other bot requests: {}", stats.other_bot_requests);
    let _ = writeln!(out, "- Wasted crawl requests: {}", stats.waste_count);
    let _ = writeln!(
        out,
        "- Mean response time: {:.0}ms",
        stats.mean_response_time()
    );
    let _ = writeln!(
        out,
        "- Optimization score: {:.0}/100\n",
        stats.optimization_score
    );

    if !stats.status_code_counts.is_empty() {
        let _ = writeln!(out, "## Status codes\n");
        let _ = writeln!(out, "| Code | Count |");
        let _ = writeln!(out, "|------|-------|");
        for (code, count) in &stats.status_code_counts {
            let _ = writeln!(out, "| {code} | {count} |");
        }
        out.push('\n');
    }

    if !stats.url_visit_counts.is_empty() {
        let _ = writeln!(out, "## Crawled URLs\n");
        let _ = writeln!(out, "| Path | Visits |");
        let _ = writeln!(out, "|------|--------|");
        for (path, count) in &stats.url_visit_counts {
            let _ = writeln!(out, "| {path} | {count} |");
        }
        out.push('\n');
    }

    if !stats.recommendations.is_empty() {
        let _ = writeln!(out, "## Recommendations\n");
        for rec in &stats.recommendations {
            let _ = writeln!(
                out,
                "- **{}**: {} ({})",
                rec.priority.label(),
                rec.message,
                rec.action
            );
        }
    }

    out
}

/// Robots.txt tuned to the analyzed crawl behavior: disallows wasted paths
/// and over-crawled ones, then appends the fixed crawl-delay and sitemap
/// directives. BTreeMap iteration keeps the output deterministic.
pub fn optimized_robots_txt(stats: &CrawlStats) -> String {
    let mut out = String::from("User-agent: *\n");

    for (path, count) in &stats.url_visit_counts {
        if is_waste_path(path) || *count > ROBOTS_VISIT_CUTOFF {
            let _ = writeln!(out, "Disallow: {path}");
        }
    }

    let _ = writeln!(out, "\nCrawl-delay: {CRAWL_DELAY_SECS}");
    let _ = writeln!(out, "Sitemap: {SITEMAP_URL}");

    out
}
