//! Derived aggregates and chart series, recomputed on every render pass.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::format::{
    format_millions_usd, format_number, format_percent, format_rating, RankChange,
};
use crate::model::{Dataset, GenreRecord, PlatformRecord, RegionRecord, TitleRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    pub platforms_tracked: usize,
    pub total_installs: u64,
    pub total_q1_revenue: f64,
    pub total_content: u64,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleBreakdown {
    pub genre_mix: Vec<GenreCount>,
    pub average_episodes: Option<f64>,
    pub average_revenue: Option<f64>,
    pub top_genre: Option<String>,
}

/// One row of the rankings table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: u32,
    pub change: RankChange,
    pub platform: String,
    pub company: String,
    pub origin: String,
    pub downloads: String,
    pub q1_revenue: String,
    pub rating: String,
    pub us_share: String,
    pub titles: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub group: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreMetric {
    MarketShare,
    GrowthRate,
    Completion,
}

impl GenreMetric {
    pub fn title(self) -> &'static str {
        match self {
            Self::MarketShare => "Market Share (%)",
            Self::GrowthRate => "YoY Growth Rate (%)",
            Self::Completion => "Completion Rate (%)",
        }
    }

    fn value(self, genre: &GenreRecord) -> f64 {
        match self {
            Self::MarketShare => genre.market_share,
            Self::GrowthRate => genre.growth_rate,
            Self::Completion => genre.avg_completion,
        }
    }
}

pub fn market_summary(data: &Dataset) -> MarketSummary {
    let platforms = &data.platforms;
    MarketSummary {
        platforms_tracked: platforms.len(),
        total_installs: platforms.iter().map(|p| p.installs).sum(),
        total_q1_revenue: platforms.iter().map(|p| p.revenue_q1_2025).sum(),
        total_content: platforms.iter().map(|p| u64::from(p.content_count)).sum(),
        average_rating: mean(platforms.iter().map(|p| p.score)),
    }
}

pub fn title_breakdown(titles: &[TitleRecord]) -> TitleBreakdown {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for t in titles {
        *counts.entry(t.genre.as_str()).or_default() += 1;
    }

    // First key in ascending order wins ties.
    let mut top: Option<(&str, usize)> = None;
    for (genre, count) in &counts {
        if top.map(|(_, best)| *count > best).unwrap_or(true) {
            top = Some((*genre, *count));
        }
    }

    TitleBreakdown {
        genre_mix: counts
            .iter()
            .map(|(genre, count)| GenreCount {
                genre: (*genre).to_string(),
                count: *count,
            })
            .collect(),
        average_episodes: mean(titles.iter().map(|t| f64::from(t.episodes))),
        average_revenue: mean(titles.iter().map(|t| t.revenue_est)),
        top_genre: top.map(|(genre, _)| genre.to_string()),
    }
}

pub fn ranking_rows(platforms: &[PlatformRecord]) -> Vec<RankingRow> {
    let mut sorted: Vec<&PlatformRecord> = platforms.iter().collect();
    sorted.sort_by_key(|p| p.rank_current);
    sorted
        .into_iter()
        .map(|p| RankingRow {
            rank: p.rank_current,
            change: p.rank_change(),
            platform: p.platform.clone(),
            company: p.company.clone(),
            origin: p.origin.clone(),
            downloads: format_number(p.installs),
            q1_revenue: format_millions_usd(p.revenue_q1_2025),
            rating: format_rating(p.score),
            us_share: format_percent(p.us_share),
            titles: p.content_count,
            status: p.threat_level.clone(),
        })
        .collect()
}

/// Q1 revenue per platform, ascending, platforms without revenue dropped.
pub fn revenue_series(platforms: &[PlatformRecord]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = platforms
        .iter()
        .filter(|p| p.revenue_q1_2025 > 0.0)
        .map(|p| SeriesPoint {
            label: p.platform.clone(),
            value: p.revenue_q1_2025,
            group: Some(p.origin.clone()),
        })
        .collect();
    sort_ascending(&mut points);
    points
}

pub fn us_share_series(platforms: &[PlatformRecord]) -> Vec<SeriesPoint> {
    platforms
        .iter()
        .filter(|p| p.us_share > 0.0)
        .map(|p| SeriesPoint {
            label: p.platform.clone(),
            value: p.us_share,
            group: None,
        })
        .collect()
}

pub fn title_revenue_series(titles: &[TitleRecord]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = titles
        .iter()
        .map(|t| SeriesPoint {
            label: t.title.clone(),
            value: t.revenue_est,
            group: Some(t.platform.clone()),
        })
        .collect();
    sort_ascending(&mut points);
    points
}

pub fn genre_series(genres: &[GenreRecord], metric: GenreMetric) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = genres
        .iter()
        .map(|g| SeriesPoint {
            label: g.genre.clone(),
            value: metric.value(g),
            group: None,
        })
        .collect();
    sort_ascending(&mut points);
    points
}

pub fn region_growth_series(regions: &[RegionRecord]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = regions
        .iter()
        .map(|r| SeriesPoint {
            label: r.region.clone(),
            value: r.growth,
            group: Some(r.top_platform.clone()),
        })
        .collect();
    sort_ascending(&mut points);
    points
}

pub fn region_share_series(regions: &[RegionRecord]) -> Vec<SeriesPoint> {
    regions
        .iter()
        .map(|r| SeriesPoint {
            label: r.region.clone(),
            value: r.market_share,
            group: None,
        })
        .collect()
}

/// Genre with the highest YoY growth; earliest row wins ties.
pub fn fastest_growing_genre(genres: &[GenreRecord]) -> Option<&GenreRecord> {
    genres.iter().fold(None, |best: Option<&GenreRecord>, g| match best {
        Some(b) if b.growth_rate >= g.growth_rate => Some(b),
        _ => Some(g),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

// Stable, so equal values keep table order.
fn sort_ascending(points: &mut [SeriesPoint]) {
    points.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
}
