//! Display formatting shared by every dashboard view.

use std::fmt;

use serde::{Serialize, Serializer};

/// Compact magnitude: `1.5e3 -> "2K"`, `5e7 -> "50M"`, `1.1e10 -> "11.0B"`.
pub fn format_number(value: u64) -> String {
    let v = value as f64;
    if v >= 1_000_000_000.0 {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if v >= 1_000_000.0 {
        format!("{:.0}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.0}K", v / 1_000.0)
    } else {
        value.to_string()
    }
}

/// `180.0 -> "$180M"`. Inputs are already in millions.
pub fn format_millions_usd(value: f64) -> String {
    format!("${}M", trim_float(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_float(value))
}

pub fn format_rating(score: f64) -> String {
    format!("{score:.1} ⭐")
}

/// Thousands separators: `2255 -> "2,255"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_float(value: f64) -> String {
    // f64 Display already drops a trailing ".0"; this only guards "-0".
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Week-over-week movement of a platform in the rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankChange {
    Up(u64),
    Down(u64),
    Unchanged,
}

impl RankChange {
    /// Positive delta means the platform climbed.
    pub fn from_delta(delta: i64) -> Self {
        match delta {
            d if d > 0 => Self::Up(d.unsigned_abs()),
            d if d < 0 => Self::Down(d.unsigned_abs()),
            _ => Self::Unchanged,
        }
    }

    pub fn from_ranks(current: u32, prior: u32) -> Self {
        Self::from_delta(i64::from(prior) - i64::from(current))
    }

    /// Signed movement, saturating at the `i64` bounds.
    pub fn delta(self) -> i64 {
        match self {
            Self::Up(n) => i64::try_from(n).unwrap_or(i64::MAX),
            Self::Down(n) => i64::try_from(n).map_or(i64::MIN, |v| -v),
            Self::Unchanged => 0,
        }
    }

    /// CSS class hook for the rendered indicator.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up(_) => "change-up",
            Self::Down(_) => "change-down",
            Self::Unchanged => "change-neutral",
        }
    }
}

impl fmt::Display for RankChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up(n) => write!(f, "🟢 +{n}"),
            Self::Down(n) => write!(f, "🔴 -{n}"),
            Self::Unchanged => f.write_str("⚪ —"),
        }
    }
}

impl Serialize for RankChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_uses_magnitude_suffixes() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "2K");
        assert_eq!(format_number(50_000_000), "50M");
        assert_eq!(format_number(214_000_000), "214M");
        assert_eq!(format_number(11_000_000_000), "11.0B");
    }

    #[test]
    fn format_number_boundaries_switch_suffix() {
        assert_eq!(format_number(1_000), "1K");
        assert_eq!(format_number(999_999), "1000K");
        assert_eq!(format_number(1_000_000), "1M");
        assert_eq!(format_number(1_000_000_000), "1.0B");
    }

    #[test]
    fn rank_change_from_delta_and_ranks_agree() {
        assert_eq!(RankChange::from_delta(3), RankChange::Up(3));
        assert_eq!(RankChange::from_delta(0), RankChange::Unchanged);
        assert_eq!(RankChange::from_delta(-1), RankChange::Down(1));
        assert_eq!(RankChange::from_ranks(7, 10), RankChange::Up(3));
        assert_eq!(RankChange::from_ranks(4, 3), RankChange::Down(1));
        assert_eq!(RankChange::from_ranks(5, 5).delta(), 0);
    }

    #[test]
    fn rank_change_is_total_at_integer_extremes() {
        let lowest = RankChange::from_delta(i64::MIN);
        assert_eq!(lowest, RankChange::Down(1 << 63));
        assert_eq!(lowest.delta(), i64::MIN);
        assert_eq!(lowest.to_string(), "🔴 -9223372036854775808");

        let highest = RankChange::from_delta(i64::MAX);
        assert_eq!(highest.delta(), i64::MAX);
        assert_eq!(highest.to_string(), "🟢 +9223372036854775807");

        assert_eq!(RankChange::Up(u64::MAX).delta(), i64::MAX);
        assert_eq!(RankChange::Down(u64::MAX).delta(), i64::MIN);
        assert_eq!(RankChange::from_ranks(u32::MAX, 0).delta(), -i64::from(u32::MAX));
    }

    #[test]
    fn rank_change_display_markers() {
        let up = RankChange::from_delta(3).to_string();
        assert!(up.contains("+3"));
        assert!(up.starts_with('🟢'));

        let down = RankChange::from_delta(-1).to_string();
        assert!(down.contains('1'));
        assert!(down.starts_with('🔴'));

        assert_eq!(RankChange::Unchanged.to_string(), "⚪ —");
    }

    #[test]
    fn display_helpers_match_table_cells() {
        assert_eq!(format_millions_usd(180.0), "$180M");
        assert_eq!(format_millions_usd(12.5), "$12.5M");
        assert_eq!(format_percent(0.5), "0.5%");
        assert_eq!(format_rating(4.0), "4.0 ⭐");
        assert_eq!(format_thousands(2_255), "2,255");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
    }
}
