//! Market tables tracked by the dashboard and the dataset that bundles them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::RankChange;

pub const PLATFORM_COLUMNS: [&str; 16] = [
    "platform",
    "company",
    "origin",
    "launched",
    "score",
    "installs",
    "revenue_2024",
    "revenue_q1_2025",
    "rank_current",
    "rank_last_week",
    "us_share",
    "top_genres",
    "avg_episode_count",
    "content_count",
    "monetization",
    "threat_level",
];

pub const TITLE_COLUMNS: [&str; 9] = [
    "title",
    "platform",
    "genre",
    "sub_genre",
    "episodes",
    "revenue_est",
    "views_est",
    "weeks_trending",
    "status",
];

pub const GENRE_COLUMNS: [&str; 4] = ["genre", "market_share", "growth_rate", "avg_completion"];

pub const REGION_COLUMNS: [&str; 5] = [
    "region",
    "market_share",
    "revenue_q1",
    "growth",
    "top_platform",
];

/// One micro-drama app. Revenue figures are in millions of USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub platform: String,
    pub company: String,
    pub origin: String,
    #[serde(default)]
    pub launched: Option<u16>,
    pub score: f64,
    pub installs: u64,
    pub revenue_2024: f64,
    pub revenue_q1_2025: f64,
    pub rank_current: u32,
    pub rank_last_week: u32,
    pub us_share: f64,
    #[serde(default, with = "pipe_list")]
    pub top_genres: Vec<String>,
    #[serde(default)]
    pub avg_episode_count: Option<u32>,
    pub content_count: u32,
    pub monetization: String,
    pub threat_level: String,
}

impl PlatformRecord {
    pub fn rank_change(&self) -> RankChange {
        RankChange::from_ranks(self.rank_current, self.rank_last_week)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub title: String,
    pub platform: String,
    pub genre: String,
    pub sub_genre: String,
    pub episodes: u32,
    pub revenue_est: f64,
    pub views_est: String,
    pub weeks_trending: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRecord {
    pub genre: String,
    pub market_share: f64,
    pub growth_rate: f64,
    pub avg_completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub region: String,
    pub market_share: f64,
    pub revenue_q1: f64,
    pub growth: f64,
    pub top_platform: String,
}

/// The four tables loaded together. Either every table came from the remote
/// sheet or every table is the built-in default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub platforms: Vec<PlatformRecord>,
    pub titles: Vec<TitleRecord>,
    pub genres: Vec<GenreRecord>,
    pub regions: Vec<RegionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Platforms,
    Titles,
    Genres,
    Regions,
}

pub const ALL_TABLES: [TableKind; 4] = [
    TableKind::Platforms,
    TableKind::Titles,
    TableKind::Genres,
    TableKind::Regions,
];

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platforms => "platforms",
            Self::Titles => "titles",
            Self::Genres => "genres",
            Self::Regions => "regions",
        }
    }

    /// Name fragment used in downloaded file names.
    pub fn export_stem(self) -> &'static str {
        match self {
            Self::Platforms => "platforms",
            Self::Titles => "titles",
            Self::Genres => "genres",
            Self::Regions => "regional",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Platforms => &PLATFORM_COLUMNS,
            Self::Titles => &TITLE_COLUMNS,
            Self::Genres => &GENRE_COLUMNS,
            Self::Regions => &REGION_COLUMNS,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix(".csv").unwrap_or(&lowered);
        match name {
            "platforms" => Some(Self::Platforms),
            "titles" => Some(Self::Titles),
            "genres" => Some(Self::Genres),
            "regions" | "regional" => Some(Self::Regions),
            _ => None,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    NonPositiveRank { platform: String },
    DuplicateRank { rank: u32, platforms: Vec<String> },
    UsShareOutOfRange { platform: String, us_share: String },
    DuplicateKey { table: TableKind, key: String },
    UnknownTitlePlatform { title: String, platform: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRank { platform } => {
                write!(f, "platform {platform} has a non-positive current rank")
            }
            Self::DuplicateRank { rank, platforms } => {
                write!(f, "rank {rank} is shared by {}", platforms.join(", "))
            }
            Self::UsShareOutOfRange { platform, us_share } => {
                write!(f, "platform {platform} has us_share {us_share} outside [0, 100]")
            }
            Self::DuplicateKey { table, key } => write!(f, "duplicate {table} key {key}"),
            Self::UnknownTitlePlatform { title, platform } => {
                write!(f, "title {title} references unknown platform {platform}")
            }
        }
    }
}

impl Dataset {
    pub fn row_count(&self, table: TableKind) -> usize {
        match table {
            TableKind::Platforms => self.platforms.len(),
            TableKind::Titles => self.titles.len(),
            TableKind::Genres => self.genres.len(),
            TableKind::Regions => self.regions.len(),
        }
    }

    /// Checks the table invariants. Findings are informational; a dataset
    /// with issues is still served as loaded.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        let mut by_rank: HashMap<u32, Vec<String>> = HashMap::new();
        for p in &self.platforms {
            if p.rank_current == 0 {
                issues.push(IntegrityIssue::NonPositiveRank {
                    platform: p.platform.clone(),
                });
            } else {
                by_rank
                    .entry(p.rank_current)
                    .or_default()
                    .push(p.platform.clone());
            }
            if !(0.0..=100.0).contains(&p.us_share) {
                issues.push(IntegrityIssue::UsShareOutOfRange {
                    platform: p.platform.clone(),
                    us_share: p.us_share.to_string(),
                });
            }
        }
        let mut shared: Vec<(u32, Vec<String>)> = by_rank
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .collect();
        shared.sort_by_key(|(rank, _)| *rank);
        issues.extend(
            shared
                .into_iter()
                .map(|(rank, platforms)| IntegrityIssue::DuplicateRank { rank, platforms }),
        );

        duplicate_keys(
            TableKind::Platforms,
            self.platforms.iter().map(|p| p.platform.as_str()),
            &mut issues,
        );
        duplicate_keys(
            TableKind::Genres,
            self.genres.iter().map(|g| g.genre.as_str()),
            &mut issues,
        );
        duplicate_keys(
            TableKind::Regions,
            self.regions.iter().map(|r| r.region.as_str()),
            &mut issues,
        );

        let known: HashSet<&str> = self.platforms.iter().map(|p| p.platform.as_str()).collect();
        for t in &self.titles {
            if !known.contains(t.platform.as_str()) {
                issues.push(IntegrityIssue::UnknownTitlePlatform {
                    title: t.title.clone(),
                    platform: t.platform.clone(),
                });
            }
        }

        issues
    }
}

fn duplicate_keys<'a>(
    table: TableKind,
    keys: impl Iterator<Item = &'a str>,
    issues: &mut Vec<IntegrityIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            issues.push(IntegrityIssue::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
}

/// Genre tags travel through CSV as a single `|`-separated cell.
mod pipe_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&values.join("|"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw
            .split('|')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect())
    }
}
