//! Built-in market tables, served whenever remote data is disabled or fails.

use crate::model::{Dataset, GenreRecord, PlatformRecord, RegionRecord, TitleRecord};

pub fn default_dataset() -> Dataset {
    Dataset {
        platforms: default_platforms(),
        titles: default_titles(),
        genres: default_genres(),
        regions: default_regions(),
    }
}

pub fn default_platforms() -> Vec<PlatformRecord> {
    vec![
        PlatformRecord {
            platform: "ReelShort".to_string(),
            company: "Crazy Maple Studio".to_string(),
            origin: "China".to_string(),
            launched: Some(2022),
            score: 4.2,
            installs: 50_000_000,
            revenue_2024: 400.0,
            revenue_q1_2025: 180.0,
            rank_current: 1,
            rank_last_week: 1,
            us_share: 55.0,
            top_genres: tags(&["Romance", "Thriller", "Revenge"]),
            avg_episode_count: Some(68),
            content_count: 500,
            monetization: "Coins + Subscription".to_string(),
            threat_level: "Market Leader".to_string(),
        },
        PlatformRecord {
            platform: "DramaBox".to_string(),
            company: "StoryMatrix (Tencent-backed)".to_string(),
            origin: "Singapore".to_string(),
            launched: Some(2023),
            score: 4.6,
            installs: 100_000_000,
            revenue_2024: 323.0,
            revenue_q1_2025: 145.0,
            rank_current: 2,
            rank_last_week: 2,
            us_share: 30.0,
            top_genres: tags(&["Romance", "Paranormal", "Family Drama"]),
            avg_episode_count: Some(75),
            content_count: 400,
            monetization: "Coins + Ads".to_string(),
            threat_level: "Strong Challenger".to_string(),
        },
        PlatformRecord {
            platform: "ShortMax".to_string(),
            company: "Jiuzhou Cultural Group".to_string(),
            origin: "China".to_string(),
            launched: Some(2023),
            score: 4.4,
            installs: 20_000_000,
            revenue_2024: 85.0,
            revenue_q1_2025: 52.0,
            rank_current: 3,
            rank_last_week: 4,
            us_share: 8.0,
            top_genres: tags(&["Romance", "CEO", "Revenge"]),
            avg_episode_count: Some(70),
            content_count: 300,
            monetization: "Coins + Subscription".to_string(),
            threat_level: "Rising Fast".to_string(),
        },
        PlatformRecord {
            platform: "GoodShort".to_string(),
            company: "Nice New".to_string(),
            origin: "China".to_string(),
            launched: Some(2023),
            score: 4.3,
            installs: 10_000_000,
            revenue_2024: 50.0,
            revenue_q1_2025: 28.0,
            rank_current: 4,
            rank_last_week: 3,
            us_share: 5.0,
            top_genres: tags(&["Romance", "Comedy", "Drama"]),
            avg_episode_count: Some(65),
            content_count: 250,
            monetization: "Coins".to_string(),
            threat_level: "Established".to_string(),
        },
        PlatformRecord {
            platform: "FlexTV".to_string(),
            company: "Chengdu Yuewen".to_string(),
            origin: "China".to_string(),
            launched: Some(2023),
            score: 4.1,
            installs: 15_000_000,
            revenue_2024: 65.0,
            revenue_q1_2025: 38.0,
            rank_current: 5,
            rank_last_week: 5,
            us_share: 4.0,
            top_genres: tags(&["Romance", "Werewolf", "Billionaire"]),
            avg_episode_count: Some(72),
            content_count: 280,
            monetization: "Coins + Ads".to_string(),
            threat_level: "Stable".to_string(),
        },
        PlatformRecord {
            platform: "My Drama".to_string(),
            company: "Holywater / Fox".to_string(),
            origin: "Ukraine".to_string(),
            launched: Some(2022),
            score: 4.3,
            installs: 10_000_000,
            revenue_2024: 40.0,
            revenue_q1_2025: 25.0,
            rank_current: 6,
            rank_last_week: 7,
            us_share: 3.0,
            top_genres: tags(&["Romance", "Mafia", "LGBTQ+"]),
            avg_episode_count: Some(70),
            content_count: 180,
            monetization: "Subscription".to_string(),
            threat_level: "Fox-Backed Growth".to_string(),
        },
        PlatformRecord {
            platform: "PineDrama".to_string(),
            company: "ByteDance".to_string(),
            origin: "China/TikTok".to_string(),
            launched: Some(2026),
            score: 4.7,
            installs: 2_000_000,
            revenue_2024: 0.0,
            revenue_q1_2025: 5.0,
            rank_current: 7,
            rank_last_week: 10,
            us_share: 1.0,
            top_genres: tags(&["Romance", "Comedy", "Drama"]),
            avg_episode_count: Some(60),
            content_count: 50,
            monetization: "Free (Ad-supported)".to_string(),
            threat_level: "⚠️ WATCH CLOSELY".to_string(),
        },
        PlatformRecord {
            platform: "GammaTime".to_string(),
            company: "GammaTime Inc".to_string(),
            origin: "USA".to_string(),
            launched: Some(2025),
            score: 4.5,
            installs: 1_000_000,
            revenue_2024: 0.0,
            revenue_q1_2025: 3.0,
            rank_current: 8,
            rank_last_week: 8,
            us_share: 1.0,
            top_genres: tags(&["Premium Drama", "Thriller", "Horror"]),
            avg_episode_count: Some(45),
            content_count: 25,
            monetization: "Premium Subscription".to_string(),
            threat_level: "Celebrity-Backed".to_string(),
        },
        PlatformRecord {
            platform: "Vigloo".to_string(),
            company: "SpoonLabs".to_string(),
            origin: "South Korea".to_string(),
            launched: Some(2023),
            score: 4.4,
            installs: 1_000_000,
            revenue_2024: 15.0,
            revenue_q1_2025: 8.0,
            rank_current: 9,
            rank_last_week: 9,
            us_share: 1.0,
            top_genres: tags(&["K-Drama Style", "Romance", "Fantasy"]),
            avg_episode_count: Some(55),
            content_count: 120,
            monetization: "Coins".to_string(),
            threat_level: "K-Content Edge".to_string(),
        },
        PlatformRecord {
            platform: "MoboReels".to_string(),
            company: "Times Internet".to_string(),
            origin: "India".to_string(),
            launched: Some(2024),
            score: 4.0,
            installs: 5_000_000,
            revenue_2024: 20.0,
            revenue_q1_2025: 12.0,
            rank_current: 10,
            rank_last_week: 11,
            us_share: 0.5,
            top_genres: tags(&["Bollywood-style", "Romance", "Family"]),
            avg_episode_count: Some(80),
            content_count: 150,
            monetization: "Ads + Coins".to_string(),
            threat_level: "Regional Player".to_string(),
        },
    ]
}

pub fn default_titles() -> Vec<TitleRecord> {
    [
        ("The Double Life of My Billionaire Husband", "ReelShort", "Romance", "Billionaire", 92, 22.0, "180M", 12, "🔥 #1 Overall"),
        ("Satisfying Justice", "ReelShort", "Revenge", "Family Drama", 85, 18.0, "150M", 8, "📈 Rising"),
        ("Love at First Bite", "DramaBox", "Paranormal", "Vampire Romance", 80, 15.0, "120M", 10, "⭐ Steady"),
        ("Trapped with the CEO", "ShortMax", "Romance", "CEO", 78, 12.0, "95M", 6, "📈 Rising"),
        ("My Secret Mafia Husband", "My Drama", "Thriller", "Mafia Romance", 70, 8.0, "65M", 5, "🆕 New Entry"),
        ("The Alpha's Rejected Mate", "FlexTV", "Paranormal", "Werewolf", 88, 10.0, "80M", 7, "⭐ Steady"),
        ("Revenge of the Discarded Wife", "DramaBox", "Revenge", "Divorce Drama", 65, 9.0, "70M", 4, "📈 Rising"),
        ("Pregnant and Abandoned", "GoodShort", "Drama", "Secret Baby", 72, 7.0, "55M", 9, "⭐ Steady"),
    ]
    .into_iter()
    .map(
        |(title, platform, genre, sub_genre, episodes, revenue_est, views_est, weeks_trending, status)| {
            TitleRecord {
                title: title.to_string(),
                platform: platform.to_string(),
                genre: genre.to_string(),
                sub_genre: sub_genre.to_string(),
                episodes,
                revenue_est,
                views_est: views_est.to_string(),
                weeks_trending,
                status: status.to_string(),
            }
        },
    )
    .collect()
}

pub fn default_genres() -> Vec<GenreRecord> {
    [
        ("Romance", 45.0, 25.0, 78.0),
        ("Revenge", 18.0, 85.0, 82.0),
        ("Paranormal", 12.0, 45.0, 75.0),
        ("Thriller", 10.0, 60.0, 80.0),
        ("Comedy", 8.0, 30.0, 65.0),
        ("Family Drama", 7.0, 40.0, 72.0),
    ]
    .into_iter()
    .map(|(genre, market_share, growth_rate, avg_completion)| GenreRecord {
        genre: genre.to_string(),
        market_share,
        growth_rate,
        avg_completion,
    })
    .collect()
}

pub fn default_regions() -> Vec<RegionRecord> {
    [
        ("United States", 49.0, 343.0, 380.0, "ReelShort"),
        ("Southeast Asia", 18.0, 126.0, 450.0, "DramaBox"),
        ("Latin America", 12.0, 84.0, 520.0, "ReelShort"),
        ("Europe", 10.0, 70.0, 280.0, "DramaBox"),
        ("Middle East", 6.0, 42.0, 350.0, "ShortMax"),
        ("Other", 5.0, 35.0, 200.0, "Various"),
    ]
    .into_iter()
    .map(
        |(region, market_share, revenue_q1, growth, top_platform)| RegionRecord {
            region: region.to_string(),
            market_share,
            revenue_q1,
            growth,
            top_platform: top_platform.to_string(),
        },
    )
    .collect()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_have_expected_sizes() {
        let data = default_dataset();
        assert_eq!(data.platforms.len(), 10);
        assert_eq!(data.titles.len(), 8);
        assert_eq!(data.genres.len(), 6);
        assert_eq!(data.regions.len(), 6);
    }

    #[test]
    fn default_ranks_are_one_through_ten_in_order() {
        let ranks: Vec<u32> = default_platforms().iter().map(|p| p.rank_current).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u32>>());
    }
}
