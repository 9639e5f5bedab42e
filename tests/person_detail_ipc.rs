
use serde_json::json;
use test_support::{request_err, request_ok, spawn_sidecar};

#[test]
fn student_detail_lists_awards_with_levels() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "person.get",
        json!({ "personType": "student", "id": 55 }),
    );

    assert_eq!(
        result.pointer("/person/realName").and_then(|v| v.as_str()),
        Some("杜昆泰")
    );
    assert_eq!(
        result.get("returnUrl").and_then(|v| v.as_str()),
        Some("/")
    );
    assert_eq!(
        result.get("returnLabel").and_then(|v| v.as_str()),
        Some("同学列表")
    );

    let awards = result.get("awards").and_then(|v| v.as_array()).expect("awards");
    let ids: Vec<i64> = awards
        .iter()
        .map(|a| a.get("id").and_then(|v| v.as_i64()).expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    for a in awards {
        assert_eq!(a.get("level").and_then(|v| v.as_str()), Some("铜牌"));
    }
}

#[test]
fn from_hint_picks_return_page_and_keeps_its_filters() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.awards.update",
        json!({ "selectedYear": "2015" }),
    );
    let result = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "person.get",
        json!({ "personType": "student", "id": 3, "from": "awards" }),
    );
    assert_eq!(
        result.get("returnUrl").and_then(|v| v.as_str()),
        Some("/awards?year=2015")
    );
    assert_eq!(
        result.get("returnLabel").and_then(|v| v.as_str()),
        Some("获奖墙")
    );
}

#[test]
fn teacher_detail_has_no_awards() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "person.get",
        json!({ "personType": "teacher", "id": 1 }),
    );
    assert_eq!(
        result.pointer("/person/school").and_then(|v| v.as_str()),
        Some("东北师范大学附属中学")
    );
    assert_eq!(
        result.get("returnUrl").and_then(|v| v.as_str()),
        Some("/teachers")
    );
    assert_eq!(
        result.get("returnLabel").and_then(|v| v.as_str()),
        Some("老师列表")
    );
    assert!(result.get("awards").is_none());

    let avatar = result
        .pointer("/person/avatarUrl")
        .and_then(|v| v.as_str())
        .expect("avatar");
    assert!(avatar.contains("dst_uin=23058720"), "{avatar}");
}

#[test]
fn unknown_person_is_not_found_with_a_way_back() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let error = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "person.get",
        json!({ "personType": "student", "id": 9999 }),
    );
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("not_found"));
    assert_eq!(
        error.pointer("/details/returnUrl").and_then(|v| v.as_str()),
        Some("/")
    );
}

#[test]
fn unknown_person_type_is_rejected() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let error = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "person.get",
        json!({ "personType": "alumni", "id": 1 }),
    );
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("bad_params"));
}
