use std::collections::HashSet;

use serde::Serialize;

use crate::data::Award;
use crate::filters::{AwardsFilter, ALL};

pub const LEVEL_GOLD: &str = "金牌";
pub const LEVEL_SILVER: &str = "银牌";
pub const LEVEL_BRONZE: &str = "铜牌";

/// Canonical season display order; anything unrecognized sorts after all
/// known seasons and keeps its input order.
fn season_rank(season: &str) -> u32 {
    match season {
        "WC" => 1,
        "CTSC" => 2,
        "APIO" => 3,
        "NOI" => 4,
        "IOI" => 5,
        _ => 999,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGroup<'a> {
    pub season: &'a str,
    pub awards: Vec<&'a Award>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGroup<'a> {
    pub year: i32,
    pub seasons: Vec<SeasonGroup<'a>>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub total_awards: usize,
    pub total_students: usize,
    pub gold_count: usize,
    pub silver_count: usize,
    pub bronze_count: usize,
}

pub fn matches_award(award: &Award, filter: &AwardsFilter) -> bool {
    if filter.selected_year != ALL {
        match filter.selected_year.parse::<i32>() {
            Ok(year) if award.year == year => {}
            _ => return false,
        }
    }
    // A level filter keeps the whole award as long as that bucket is
    // non-empty; the other buckets stay visible to the display layer.
    match filter.selected_level.as_str() {
        LEVEL_GOLD => !award.students.gold.is_empty(),
        LEVEL_SILVER => !award.students.silver.is_empty(),
        LEVEL_BRONZE => !award.students.bronze.is_empty(),
        _ => true,
    }
}

/// Filtered two-level timeline: years descending, seasons in canonical
/// order within each year, awards in input order within each season.
/// Years left with no surviving group are dropped entirely.
pub fn build_timeline<'a>(awards: &'a [Award], filter: &AwardsFilter) -> Vec<YearGroup<'a>> {
    let surviving: Vec<&Award> = awards.iter().filter(|a| matches_award(a, filter)).collect();

    let mut years: Vec<i32> = surviving.iter().map(|a| a.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    years
        .into_iter()
        .map(|year| {
            let mut seasons: Vec<SeasonGroup> = Vec::new();
            for award in surviving.iter().filter(|a| a.year == year) {
                match seasons.iter_mut().find(|g| g.season == award.season) {
                    Some(group) => group.awards.push(award),
                    None => seasons.push(SeasonGroup {
                        season: &award.season,
                        awards: vec![award],
                    }),
                }
            }
            // Stable: unknown seasons keep first-appearance order.
            seasons.sort_by_key(|g| season_rank(g.season));
            YearGroup { year, seasons }
        })
        .collect()
}

pub fn timeline_stats(timeline: &[YearGroup]) -> TimelineStats {
    let mut stats = TimelineStats {
        total_awards: 0,
        total_students: 0,
        gold_count: 0,
        silver_count: 0,
        bronze_count: 0,
    };
    let mut students: HashSet<i64> = HashSet::new();
    for year in timeline {
        for season in &year.seasons {
            for award in &season.awards {
                stats.total_awards += 1;
                students.extend(&award.students.gold);
                students.extend(&award.students.silver);
                students.extend(&award.students.bronze);
                if !award.students.gold.is_empty() {
                    stats.gold_count += 1;
                }
                if !award.students.silver.is_empty() {
                    stats.silver_count += 1;
                }
                if !award.students.bronze.is_empty() {
                    stats.bronze_count += 1;
                }
            }
        }
    }
    stats.total_students = students.len();
    stats
}

/// Distinct award years, newest first (filter option list).
pub fn year_options(awards: &[Award]) -> Vec<i32> {
    let mut years: Vec<i32> = awards.iter().map(|a| a.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// All awards a student appears in, any bucket, input order. Award ids are
/// unique so no deduplication is needed.
pub fn awards_for_student(awards: &[Award], student_id: i64) -> Vec<&Award> {
    awards
        .iter()
        .filter(|a| {
            a.students.gold.contains(&student_id)
                || a.students.silver.contains(&student_id)
                || a.students.bronze.contains(&student_id)
        })
        .collect()
}

/// Medal level of one student in one award, gold > silver > bronze.
pub fn student_level(award: &Award, student_id: i64) -> Option<&'static str> {
    if award.students.gold.contains(&student_id) {
        Some(LEVEL_GOLD)
    } else if award.students.silver.contains(&student_id) {
        Some(LEVEL_SILVER)
    } else if award.students.bronze.contains(&student_id) {
        Some(LEVEL_BRONZE)
    } else {
        None
    }
}
