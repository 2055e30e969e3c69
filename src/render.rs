//! HTML rendering of a dashboard snapshot in either theme.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardSnapshot;
use crate::export::{bundle_file_name, export_file_name};
use crate::format::{format_millions_usd, format_number, format_percent, format_thousands};
use crate::model::ALL_TABLES;
use crate::source::DataOrigin;
use crate::summary::{
    genre_series, region_growth_series, region_share_series, revenue_series,
    title_revenue_series, us_share_series, GenreMetric, SeriesPoint,
};

pub const DASHBOARD_TITLE: &str = "🎬 Micro-Drama Market Intelligence";

pub const RANKING_HEADERS: [&str; 11] = [
    "Rank", "Δ", "Platform", "Company", "Origin", "Downloads", "Q1 Revenue", "Rating",
    "US Share", "Titles", "Status",
];

pub const PLATFORM_COLORS: [(&str, &str); 10] = [
    ("ReelShort", "#ef4444"),
    ("DramaBox", "#8b5cf6"),
    ("ShortMax", "#f59e0b"),
    ("GoodShort", "#10b981"),
    ("FlexTV", "#3b82f6"),
    ("My Drama", "#ec4899"),
    ("PineDrama", "#000000"),
    ("GammaTime", "#6366f1"),
    ("Vigloo", "#14b8a6"),
    ("MoboReels", "#f97316"),
];

const GROUP_COLORS: [&str; 5] = ["#667eea", "#764ba2", "#f59e0b", "#10b981", "#ef4444"];
const SHARE_COLORS: [&str; 8] = [
    "#f0f921", "#fdb42f", "#ed7953", "#cc4778", "#9c179e", "#5c01a6", "#0d0887", "#6b7280",
];

// Headline figures from industry reports; revenue in USD millions.
const MARKET_Q1_2025_REVENUE: f64 = 700.0;
const MARKET_PROJECTED_2025_USD: u64 = 11_000_000_000;
const MARKET_US_SHARE: f64 = 49.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: "linear-gradient(180deg,#0f1419 0%,#1a1f2e 100%)",
                card: "#1e293b",
                ink: "#e2e8f0",
                heading: "#f8fafc",
                muted: "#94a3b8",
                line: "#334155",
                accent: "#667eea",
                hero: "linear-gradient(135deg,#667eea 0%,#764ba2 100%)",
                track: "#0f172a",
            },
            Self::Light => Palette {
                bg: "#f8fafc",
                card: "#ffffff",
                ink: "#1e293b",
                heading: "#0f172a",
                muted: "#64748b",
                line: "#e2e8f0",
                accent: "#2563eb",
                hero: "linear-gradient(135deg,#1e3a8a 0%,#2563eb 100%)",
                track: "#f1f5f9",
            },
        }
    }
}

struct Palette {
    bg: &'static str,
    card: &'static str,
    ink: &'static str,
    heading: &'static str,
    muted: &'static str,
    line: &'static str,
    accent: &'static str,
    hero: &'static str,
    track: &'static str,
}

pub fn platform_color(platform: &str) -> Option<&'static str> {
    PLATFORM_COLORS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, color)| *color)
}

pub fn render_dashboard_html(snapshot: &DashboardSnapshot, theme: Theme) -> String {
    let mut out = String::new();
    push_head(&mut out, theme);
    out.push_str(&format!(
        "<body class=\"theme-{}\"><div class=\"layout\">\n",
        theme.as_str()
    ));
    push_sidebar(&mut out, snapshot);
    out.push_str("<main class=\"shell\">\n");

    out.push_str("<section class=\"hero\"><h1>");
    out.push_str(DASHBOARD_TITLE);
    out.push_str("</h1><p>Real-time monitoring of the global short-form drama industry</p></section>\n");

    if let Some(warning) = &snapshot.warning {
        out.push_str("<div class=\"banner banner-warning\" role=\"alert\">⚠️ ");
        out.push_str(&escape_html(warning));
        out.push_str("</div>\n");
    }

    push_metrics(&mut out, snapshot);
    push_rankings(&mut out, snapshot);
    push_trending(&mut out, snapshot);
    push_genres(&mut out, snapshot);
    push_regions(&mut out, snapshot);
    out.push_str(COMPETITIVE_INTEL_HTML);
    push_exports(&mut out, snapshot);

    out.push_str("<footer class=\"footer\"><p><strong>Micro-Drama Market Intelligence Dashboard</strong></p>");
    out.push_str("<p>Data Sources: Google Play, App Store, Sensor Tower, Media Partners Asia, Variety, Deadline</p>");
    out.push_str("<p>Update Schedule: Rankings weekly • Market metrics monthly • Competitive intel as available</p>");
    out.push_str("<p class=\"fingerprint\">Dataset fingerprint: <code>");
    out.push_str(&escape_html(&snapshot.fingerprint));
    out.push_str("</code></p></footer>\n");
    out.push_str("</main></div></body></html>\n");
    out
}

fn push_head(out: &mut String, theme: Theme) {
    let p = theme.palette();
    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>Micro-Drama Intelligence</title>\n");
    out.push_str(&format!(
        "<style>:root{{--bg:{};--card:{};--ink:{};--heading:{};--muted:{};--line:{};--accent:{};--hero:{};--track:{}}}",
        p.bg, p.card, p.ink, p.heading, p.muted, p.line, p.accent, p.hero, p.track
    ));
    out.push_str("*{box-sizing:border-box}body{margin:0;color:var(--ink);background:var(--bg);font-family:\"DM Sans\",\"Segoe UI\",sans-serif;min-height:100vh}.layout{display:flex;gap:20px;max-width:1500px;margin:0 auto;padding:20px}.sidebar{width:260px;flex-shrink:0;background:var(--card);border:1px solid var(--line);border-radius:14px;padding:16px;font-size:.88rem}.sidebar h2,.sidebar h3{color:var(--heading);margin:.6rem 0}.shell{flex:1;min-width:0}.hero{background:var(--hero);color:#fff;border-radius:16px;padding:18px 22px}.hero h1{margin:0 0 6px;font-size:1.8rem}.hero p{margin:0;opacity:.85;font-style:italic}.banner{margin-top:14px;padding:12px 16px;border-radius:10px;font-weight:600}.banner-warning{background:#fef3c7;color:#92400e;border:1px solid #f59e0b}.banner-info{background:#dbeafe;color:#1e40af}.banner-success{background:#dcfce7;color:#166534}.metrics{display:grid;grid-template-columns:repeat(5,1fr);gap:12px;margin-top:16px}.metric{background:var(--card);border:1px solid var(--line);border-radius:12px;padding:14px}.metric .label{color:var(--muted);font-size:.8rem;text-transform:uppercase;letter-spacing:.04em}.metric .value{font-size:1.5rem;font-weight:700;color:var(--heading);margin:4px 0}.metric .delta{color:#10b981;font-size:.8rem}.card{margin-top:16px;background:var(--card);border:1px solid var(--line);border-radius:14px;padding:16px;overflow:auto}.card h2{margin:0 0 12px;color:var(--heading);font-size:1.25rem}.grid2{display:grid;grid-template-columns:repeat(2,1fr);gap:16px}.grid3{display:grid;grid-template-columns:repeat(3,1fr);gap:16px}table{width:100%;border-collapse:collapse}th{text-align:left;color:var(--muted);font-size:.78rem;text-transform:uppercase;padding:8px;border-bottom:2px solid var(--line)}td{padding:8px;border-bottom:1px solid var(--line);font-size:.86rem;white-space:nowrap}.change-up{color:#16a34a}.change-down{color:#dc2626}.change-neutral{color:var(--muted)}.chart h3{font-size:.95rem;color:var(--heading);margin:0 0 8px}.bar-row{display:grid;grid-template-columns:140px 1fr 70px;gap:8px;align-items:center;margin:4px 0;font-size:.8rem}.bar-track{background:var(--track);border-radius:6px;height:14px;overflow:hidden}.bar{height:100%;border-radius:6px}.bar-value{text-align:right;color:var(--muted)}.share{display:flex;height:22px;border-radius:8px;overflow:hidden}.legend{display:flex;flex-wrap:wrap;gap:10px;margin-top:8px;font-size:.78rem}.swatch{display:inline-block;width:10px;height:10px;border-radius:2px;margin-right:4px}.insight{margin-top:12px;padding:12px;border-left:4px solid var(--accent);background:var(--track);border-radius:6px}.intel h3{color:var(--heading)}.exports a{display:inline-block;margin:4px 8px 4px 0;padding:8px 12px;border-radius:8px;background:var(--accent);color:#fff;text-decoration:none;font-weight:600;font-size:.82rem}.footer{text-align:center;color:var(--muted);font-size:.8rem;margin:24px 0}.empty{color:var(--muted);font-style:italic}@media (max-width:900px){.layout{flex-direction:column}.sidebar{width:auto}.metrics,.grid2,.grid3{grid-template-columns:1fr}}</style>\n");
    out.push_str("</head>");
}

fn push_sidebar(out: &mut String, snapshot: &DashboardSnapshot) {
    out.push_str("<aside class=\"sidebar\"><h2>🎬 Micro-Drama Intel</h2><p><em>Market Intelligence Dashboard</em></p>\n");

    let (class, label) = match snapshot.origin {
        DataOrigin::Remote => ("banner-success", "📊 Live data from Google Sheets"),
        DataOrigin::Cached => ("banner-success", "📊 Cached data from Google Sheets"),
        DataOrigin::Default => ("banner-info", "📋 Using default dataset"),
    };
    out.push_str(&format!(
        "<div class=\"banner {class}\" data-origin=\"{}\">{label}</div>\n",
        snapshot.origin.as_str()
    ));

    out.push_str("<h3>📅 Data Status</h3>");
    out.push_str(&format!(
        "<p><strong>Last Updated:</strong> {}<br><strong>Week:</strong> {} of {}</p>\n",
        snapshot.generated_on.format("%B %d, %Y"),
        snapshot.generated_on.format("%U"),
        snapshot.generated_on.format("%Y")
    ));
    out.push_str("<p><strong>Data Sources:</strong> Google Play, App Store, Sensor Tower, Media Partners Asia</p>\n");

    out.push_str("<h3>📊 Market Snapshot</h3>");
    push_metric(
        out,
        "Q1 2025 Revenue",
        &format_millions_usd(MARKET_Q1_2025_REVENUE),
        "+380% YoY",
    );
    push_metric(
        out,
        "2025 Projected",
        &format!("${}", format_number(MARKET_PROJECTED_2025_USD)),
        "Omdia",
    );
    push_metric(out, "US Market Share", &format_percent(MARKET_US_SHARE), "Largest");
    out.push_str("</aside>\n");
}

fn push_metric(out: &mut String, label: &str, value: &str, delta: &str) {
    out.push_str("<div class=\"metric\"><div class=\"label\">");
    out.push_str(&escape_html(label));
    out.push_str("</div><div class=\"value\">");
    out.push_str(&escape_html(value));
    out.push_str("</div><div class=\"delta\">");
    out.push_str(&escape_html(delta));
    out.push_str("</div></div>\n");
}

fn push_metrics(out: &mut String, snapshot: &DashboardSnapshot) {
    let summary = &snapshot.summary;
    out.push_str("<section class=\"metrics\">\n");
    push_metric(
        out,
        "Platforms Tracked",
        &summary.platforms_tracked.to_string(),
        "2 new this quarter",
    );
    push_metric(
        out,
        "Total Downloads",
        &format_number(summary.total_installs),
        "+18% MoM",
    );
    push_metric(
        out,
        "Q1 2025 Revenue",
        &format_millions_usd(summary.total_q1_revenue),
        "+380% YoY",
    );
    push_metric(
        out,
        "Titles in Market",
        &format!("{}+", format_thousands(summary.total_content)),
        "+25% QoQ",
    );
    let rating = summary
        .average_rating
        .map(|avg| format!("{avg:.2} ⭐"))
        .unwrap_or_else(|| "-".to_string());
    push_metric(out, "Avg Rating", &rating, "+0.1");
    out.push_str("</section>\n");
}

fn push_rankings(out: &mut String, snapshot: &DashboardSnapshot) {
    out.push_str("<section class=\"card\" id=\"rankings\"><h2>📱 Platform Rankings</h2>\n");
    out.push_str("<table id=\"rankings-table\"><thead><tr>");
    for header in RANKING_HEADERS {
        out.push_str("<th>");
        out.push_str(&escape_html(header));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>\n");

    for row in &snapshot.rankings {
        let cells = [
            row.platform.as_str(),
            row.company.as_str(),
            row.origin.as_str(),
            row.downloads.as_str(),
            row.q1_revenue.as_str(),
            row.rating.as_str(),
            row.us_share.as_str(),
        ];
        out.push_str(&format!(
            "<tr data-rank=\"{}\"><td>{}</td><td class=\"{}\">{}</td>",
            row.rank,
            row.rank,
            row.change.css_class(),
            escape_html(&row.change.to_string())
        ));
        for cell in cells {
            out.push_str("<td>");
            out.push_str(&escape_html(cell));
            out.push_str("</td>");
        }
        out.push_str(&format!(
            "<td>{}</td><td>{}</td></tr>\n",
            row.titles,
            escape_html(&row.status)
        ));
    }
    out.push_str("</tbody></table>\n");

    let platforms = &snapshot.tables.platforms;
    out.push_str("<div class=\"grid2\">");
    let revenue = revenue_series(platforms);
    let origin_colors = group_colors(&revenue);
    push_bar_chart(
        out,
        "Q1 2025 Revenue by Platform ($M)",
        &revenue,
        format_millions_usd,
        |point| lookup_group_color(&origin_colors, point),
    );
    push_share_chart(out, "US Market Share by Platform", &us_share_series(platforms));
    out.push_str("</div></section>\n");
}

fn push_trending(out: &mut String, snapshot: &DashboardSnapshot) {
    out.push_str("<section class=\"card\" id=\"trending\"><h2>🔥 Trending Content</h2><div class=\"grid2\">\n");
    push_bar_chart(
        out,
        "Top Performing Titles - Estimated Revenue ($M)",
        &title_revenue_series(&snapshot.tables.titles),
        format_millions_usd,
        |point| {
            point
                .group
                .as_deref()
                .and_then(platform_color)
                .unwrap_or(GROUP_COLORS[0])
        },
    );

    let breakdown = &snapshot.title_breakdown;
    out.push_str("<div><h3>📋 Content Breakdown</h3>");
    let mix: Vec<SeriesPoint> = breakdown
        .genre_mix
        .iter()
        .map(|g| SeriesPoint {
            label: g.genre.clone(),
            value: g.count as f64,
            group: None,
        })
        .collect();
    push_share_chart(out, "Genre Mix", &mix);
    out.push_str(&format!(
        "<p><strong>Avg Episodes:</strong> {}<br><strong>Avg Revenue:</strong> {}<br><strong>Top Genre:</strong> {}</p>",
        breakdown
            .average_episodes
            .map(|v| format!("{v:.0}"))
            .unwrap_or_else(|| "-".to_string()),
        breakdown
            .average_revenue
            .map(|v| format!("${v:.1}M"))
            .unwrap_or_else(|| "-".to_string()),
        escape_html(breakdown.top_genre.as_deref().unwrap_or("-"))
    ));
    out.push_str("</div></div></section>\n");
}

fn push_genres(out: &mut String, snapshot: &DashboardSnapshot) {
    let genres = &snapshot.tables.genres;
    out.push_str("<section class=\"card\" id=\"genres\"><h2>📊 Genre Analysis</h2><div class=\"grid3\">\n");
    for metric in [
        GenreMetric::MarketShare,
        GenreMetric::GrowthRate,
        GenreMetric::Completion,
    ] {
        push_bar_chart(
            out,
            metric.title(),
            &genre_series(genres, metric),
            format_percent,
            |_| GROUP_COLORS[0],
        );
    }
    out.push_str("</div>\n");

    if let Some(top) = &snapshot.fastest_growing_genre {
        let best_completion = genres
            .iter()
            .map(|g| g.avg_completion)
            .fold(f64::MIN, f64::max);
        let completion = if top.avg_completion >= best_completion {
            format!(
                "the highest completion rates ({})",
                format_percent(top.avg_completion)
            )
        } else {
            format!(
                "an average completion rate of {}",
                format_percent(top.avg_completion)
            )
        };
        out.push_str(&format!(
            "<div class=\"insight\"><strong>💡 Key Insight:</strong> {} content is the fastest-growing genre (+{} YoY) with {}, suggesting strong audience demand. Consider prioritizing this genre for licensing.</div>\n",
            escape_html(&top.genre),
            format_percent(top.growth_rate),
            completion
        ));
    }
    out.push_str("</section>\n");
}

fn push_regions(out: &mut String, snapshot: &DashboardSnapshot) {
    let regions = &snapshot.tables.regions;
    out.push_str("<section class=\"card\" id=\"regions\"><h2>🌍 Regional Breakdown</h2><div class=\"grid2\">\n");
    push_share_chart(out, "Global Market Share by Region", &region_share_series(regions));
    push_bar_chart(
        out,
        "YoY Growth Rate by Region (%)",
        &region_growth_series(regions),
        format_percent,
        |_| GROUP_COLORS[1],
    );
    out.push_str("</div>\n<table id=\"regions-table\"><thead><tr><th>Region</th><th>Market Share %</th><th>Q1 Revenue ($M)</th><th>YoY Growth %</th><th>Leading Platform</th></tr></thead><tbody>\n");
    for region in regions {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&region.region),
            format_percent(region.market_share),
            format_millions_usd(region.revenue_q1),
            format_percent(region.growth),
            escape_html(&region.top_platform)
        ));
    }
    out.push_str("</tbody></table></section>\n");
}

fn push_exports(out: &mut String, snapshot: &DashboardSnapshot) {
    out.push_str("<section class=\"card exports\" id=\"exports\"><h2>📋 View &amp; Export Raw Data</h2>\n");
    for table in ALL_TABLES {
        let file_name = export_file_name(table, snapshot.generated_on);
        out.push_str(&format!(
            "<a href=\"/dashboard/export/{}\" download=\"{}\">📥 {} ({} rows)</a>",
            table.as_str(),
            escape_html(&file_name),
            escape_html(&file_name),
            snapshot.tables.row_count(table)
        ));
    }
    let bundle = bundle_file_name(snapshot.generated_on);
    out.push_str(&format!(
        "<a href=\"/dashboard/export.zip\" download=\"{}\">🗜️ {}</a>",
        escape_html(&bundle),
        escape_html(&bundle)
    ));
    out.push_str("</section>\n");
}

fn push_bar_chart<'a>(
    out: &mut String,
    title: &str,
    points: &[SeriesPoint],
    format_value: fn(f64) -> String,
    color: impl Fn(&SeriesPoint) -> &'a str,
) {
    out.push_str("<div class=\"chart\"><h3>");
    out.push_str(&escape_html(title));
    out.push_str("</h3>");
    if points.is_empty() {
        out.push_str("<p class=\"empty\">No data</p></div>\n");
        return;
    }

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    // Largest value on top, like a horizontal bar chart sorted ascending.
    for point in points.iter().rev() {
        let width = if max > 0.0 {
            (point.value / max * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        out.push_str(&format!(
            "<div class=\"bar-row\"><span>{}</span><div class=\"bar-track\"><div class=\"bar\" style=\"width:{width:.1}%;background:{}\"></div></div><span class=\"bar-value\">{}</span></div>",
            escape_html(&point.label),
            color(point),
            escape_html(&format_value(point.value))
        ));
    }
    out.push_str("</div>\n");
}

fn push_share_chart(out: &mut String, title: &str, points: &[SeriesPoint]) {
    out.push_str("<div class=\"chart\"><h3>");
    out.push_str(&escape_html(title));
    out.push_str("</h3>");
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        out.push_str("<p class=\"empty\">No data</p></div>\n");
        return;
    }

    out.push_str("<div class=\"share\">");
    for (idx, point) in points.iter().enumerate() {
        out.push_str(&format!(
            "<div style=\"width:{:.1}%;background:{}\" title=\"{}\"></div>",
            point.value.max(0.0) / total * 100.0,
            SHARE_COLORS[idx % SHARE_COLORS.len()],
            escape_html(&point.label)
        ));
    }
    out.push_str("</div><div class=\"legend\">");
    for (idx, point) in points.iter().enumerate() {
        out.push_str(&format!(
            "<span><i class=\"swatch\" style=\"background:{}\"></i>{} {:.1}%</span>",
            SHARE_COLORS[idx % SHARE_COLORS.len()],
            escape_html(&point.label),
            point.value.max(0.0) / total * 100.0
        ));
    }
    out.push_str("</div></div>\n");
}

/// Assigns palette colors to series groups in order of first appearance.
fn group_colors(points: &[SeriesPoint]) -> HashMap<String, &'static str> {
    let mut colors = HashMap::new();
    for point in points {
        if let Some(group) = &point.group {
            let next = GROUP_COLORS[colors.len() % GROUP_COLORS.len()];
            colors.entry(group.clone()).or_insert(next);
        }
    }
    colors
}

fn lookup_group_color(colors: &HashMap<String, &'static str>, point: &SeriesPoint) -> &'static str {
    point
        .group
        .as_ref()
        .and_then(|group| colors.get(group).copied())
        .unwrap_or(GROUP_COLORS[0])
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const COMPETITIVE_INTEL_HTML: &str = r#"<section class="card intel" id="competitive-intel"><h2>🎯 Competitive Intelligence</h2>
<h3>⚠️ New Entrants</h3>
<div class="grid3">
<div><h3>🖤 PineDrama (ByteDance)</h3><p><strong>Launched:</strong> January 2026<br><strong>Threat Level:</strong> 🔴 CRITICAL</p>
<p><strong>Strategy:</strong></p><ul><li>Free content (no coins)</li><li>Ad-free viewing</li><li>TikTok cross-promotion (150M+ US users)</li><li>Aggressive content acquisition</li></ul>
<p><strong>Watch For:</strong></p><ul><li>Exclusive content deals</li><li>Creator partnerships</li><li>Super Bowl ad campaign rumored</li></ul>
<p><strong>Our Response:</strong></p><ul><li>Monitor weekly ranking changes</li><li>Track content library growth</li><li>Identify their supplier relationships</li></ul></div>
<div><h3>✨ GammaTime</h3><p><strong>Launched:</strong> October 2025<br><strong>Threat Level:</strong> 🟠 HIGH</p>
<p><strong>Strategy:</strong></p><ul><li>"Hollywood quality" positioning</li><li>Celebrity investors (Kardashians, Ohanian)</li><li>Premium subscription model</li><li>Higher production budgets</li></ul>
<p><strong>Differentiation:</strong></p><ul><li>US-produced content</li><li>A-list talent attached</li><li>Premium pricing ($9.99/mo)</li></ul>
<p><strong>Our Response:</strong></p><ul><li>Track content quality benchmarks</li><li>Monitor subscriber growth</li><li>Evaluate co-production opportunities</li></ul></div>
<div><h3>🦊 Fox + Holywater</h3><p><strong>Announced:</strong> November 2025<br><strong>Threat Level:</strong> 🟠 MEDIUM-HIGH</p>
<p><strong>Deal Terms:</strong></p><ul><li>Equity stake in Holywater</li><li>200 shows commitment</li><li>US market focus</li></ul>
<p><strong>Competitive Edge:</strong></p><ul><li>Hollywood IP access</li><li>Ukraine production efficiency</li><li>Established My Drama platform</li></ul>
<p><strong>Our Response:</strong></p><ul><li>Track My Drama ranking trajectory</li><li>Identify content slate</li><li>Evaluate similar studio partnerships</li></ul></div>
</div>
<h3>🤝 Partnership Opportunities</h3>
<div class="grid2">
<div><h3>🎬 Content Supply Partners</h3>
<table><thead><tr><th>Company</th><th>Strength</th><th>Status</th></tr></thead><tbody>
<tr><td>Crazy Maple Studio</td><td>#1 producer, ReelShort parent</td><td>Exclusive to ReelShort</td></tr>
<tr><td>StoryMatrix</td><td>High volume, quality</td><td>DramaBox exclusive</td></tr>
<tr><td>Vertical Film (Vancouver)</td><td>Western production</td><td>Open to deals</td></tr>
<tr><td>COL Group</td><td>Novel adaptations</td><td>Seeking partners</td></tr>
<tr><td>Wattpad / WEBTOON</td><td>IP pipeline</td><td>Open to licensing</td></tr>
</tbody></table>
<h3>📚 IP Sources</h3><ul><li><strong>Tomato Novel</strong>: 80% of ReelShort content</li><li><strong>Korean Webtoons</strong>: untapped for micro-drama</li><li><strong>Wattpad</strong>: 90M+ monthly users, romance focus</li><li><strong>AO3/Fan communities</strong>: trend identification</li></ul></div>
<div><h3>📺 Distribution Partners</h3>
<table><thead><tr><th>Platform</th><th>Opportunity</th><th>Fit</th></tr></thead><tbody>
<tr><td>Tubi</td><td>FAST channel</td><td>High</td></tr>
<tr><td>Pluto TV</td><td>Dedicated channel</td><td>High</td></tr>
<tr><td>YouTube Shorts</td><td>Discovery funnel</td><td>Medium</td></tr>
<tr><td>Roku Channel</td><td>Growing FAST</td><td>Medium</td></tr>
<tr><td>Amazon Freevee</td><td>Ad-supported</td><td>Medium</td></tr>
</tbody></table>
<h3>🏢 Studio Relationships</h3><ul><li><strong>Holywater</strong>: Fox deal may limit availability</li><li><strong>Jiuzhou</strong>: ShortMax parent, aggressive</li><li><strong>Chengdu Yuewen</strong>: FlexTV, China Literature backing</li><li><strong>SpoonLabs</strong>: K-drama expertise, niche</li></ul></div>
</div>
<h3>📋 Strategic Recommendations</h3>
<div class="grid2">
<div><h3>🎯 Immediate Actions (Next 30 Days)</h3><ol>
<li><strong>Set Weekly Monitoring Cadence</strong>: track PineDrama downloads and rankings daily; report significant movements to leadership.</li>
<li><strong>Evaluate Non-Exclusive Suppliers</strong>: Vertical Film Vancouver, independent Korean studios, Wattpad IP licensing.</li>
<li><strong>Genre Diversification</strong>: revenge content growing fastest; thriller and horror underserved; true crime adaptation opportunities.</li>
<li><strong>Competitive Response Planning</strong>: draft scenarios for PineDrama's growth; identify defensive content moves.</li>
</ol></div>
<div><h3>📈 Strategic Initiatives (90 Days)</h3><ol>
<li><strong>Content Strategy</strong>: increase revenge/justice content mix; pilot a true crime micro-drama format; explore K-content adaptation rights.</li>
<li><strong>Distribution Expansion</strong>: FAST channel pilot on Tubi/Pluto; YouTube Shorts promotional strategy.</li>
<li><strong>Partnership Development</strong>: explore studio equity/JV models; evaluate production partnerships.</li>
<li><strong>Competitive Positioning</strong>: differentiation from free (PineDrama); quality vs. volume strategy.</li>
</ol></div>
</div>
</section>
"#;
