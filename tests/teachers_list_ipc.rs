
use serde_json::json;
use test_support::{request_ok, spawn_sidecar};

#[test]
fn default_filters_list_every_teacher_in_input_order() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let list = request_ok(&mut stdin, &mut reader, "1", "teachers.list", json!({}));

    let teachers = list.get("teachers").and_then(|v| v.as_array()).expect("teachers");
    let ids: Vec<i64> = teachers
        .iter()
        .map(|t| t.get("id").and_then(|v| v.as_i64()).expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let schools: Vec<&str> = list
        .get("schoolOptions")
        .and_then(|v| v.as_array())
        .expect("schoolOptions")
        .iter()
        .map(|v| v.as_str().expect("school"))
        .collect();
    assert_eq!(schools, vec!["东北师范大学附属中学"]);
}

#[test]
fn search_matches_name_nickname_or_signature() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.teachers.update",
        json!({ "searchQuery": "王" }),
    );
    let list = request_ok(&mut stdin, &mut reader, "2", "teachers.list", json!({}));
    let ids: Vec<i64> = list
        .get("teachers")
        .and_then(|v| v.as_array())
        .expect("teachers")
        .iter()
        .map(|t| t.get("id").and_then(|v| v.as_i64()).expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(list.get("total").and_then(|v| v.as_u64()), Some(2));
}

#[test]
fn specific_school_filter_requires_exact_match() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.teachers.update",
        json!({ "selectedSchool": "不存在中学" }),
    );
    let list = request_ok(&mut stdin, &mut reader, "2", "teachers.list", json!({}));
    assert_eq!(list.get("total").and_then(|v| v.as_u64()), Some(0));
}
