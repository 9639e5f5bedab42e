
use serde_json::json;
use test_support::{request_ok, spawn_sidecar};

fn timeline_awards(timeline: &serde_json::Value) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    for year in timeline.as_array().expect("timeline array") {
        for season in year.get("seasons").and_then(|v| v.as_array()).expect("seasons") {
            for award in season.get("awards").and_then(|v| v.as_array()).expect("awards") {
                out.push(award.clone());
            }
        }
    }
    out
}

#[test]
fn unfiltered_timeline_contains_every_award_once() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let result = request_ok(&mut stdin, &mut reader, "1", "awards.timeline", json!({}));

    let timeline = result.get("timeline").expect("timeline");
    let mut ids: Vec<i64> = timeline_awards(timeline)
        .iter()
        .map(|a| a.get("id").and_then(|v| v.as_i64()).expect("id"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=41).collect::<Vec<i64>>());

    let years: Vec<i64> = timeline
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y.get("year").and_then(|v| v.as_i64()).expect("year"))
        .collect();
    assert!(years.windows(2).all(|w| w[0] > w[1]), "years must descend");

    assert_eq!(
        result.get("stats").cloned().expect("stats"),
        json!({
            "totalAwards": 41,
            "totalStudents": 46,
            "goldCount": 20,
            "silverCount": 32,
            "bronzeCount": 40,
        })
    );

    let options: Vec<i64> = result
        .get("yearOptions")
        .and_then(|v| v.as_array())
        .expect("yearOptions")
        .iter()
        .map(|v| v.as_i64().expect("year option"))
        .collect();
    assert_eq!(options.first(), Some(&2025));
    assert_eq!(options.last(), Some(&2013));
}

#[test]
fn gold_filter_keeps_only_awards_with_gold_medalists() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.awards.update",
        json!({ "selectedLevel": "金牌" }),
    );
    let result = request_ok(&mut stdin, &mut reader, "2", "awards.timeline", json!({}));

    let awards = timeline_awards(result.get("timeline").expect("timeline"));
    assert_eq!(awards.len(), 20);
    for award in &awards {
        let gold = award
            .pointer("/students/gold")
            .and_then(|v| v.as_array())
            .expect("gold bucket");
        assert!(!gold.is_empty(), "award {:?} kept without gold", award.get("id"));
    }

    // Years with no gold at all (2013, 2014, 2022, 2025) disappear.
    let years: Vec<i64> = result
        .get("timeline")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .map(|y| y.get("year").and_then(|v| v.as_i64()).expect("year"))
        .collect();
    assert_eq!(years, vec![2024, 2023, 2021, 2020, 2019, 2018, 2017, 2016, 2015]);

    let stats = result.get("stats").expect("stats");
    assert_eq!(stats.get("totalAwards").and_then(|v| v.as_u64()), Some(20));
    assert_eq!(stats.get("goldCount").and_then(|v| v.as_u64()), Some(20));
}

#[test]
fn year_filter_groups_seasons_in_canonical_order() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.awards.update",
        json!({ "selectedYear": "2021" }),
    );
    let result = request_ok(&mut stdin, &mut reader, "2", "awards.timeline", json!({}));

    let timeline = result.get("timeline").and_then(|v| v.as_array()).unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(
        timeline[0].get("year").and_then(|v| v.as_i64()),
        Some(2021)
    );
    let seasons: Vec<&str> = timeline[0]
        .get("seasons")
        .and_then(|v| v.as_array())
        .expect("seasons")
        .iter()
        .map(|s| s.get("season").and_then(|v| v.as_str()).expect("season"))
        .collect();
    assert_eq!(seasons, vec!["WC", "APIO", "NOI"]);
}
