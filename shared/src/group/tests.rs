use super::*;
use chrono::{TimeZone, Utc};

// =========================================================
// 辅助函数
// =========================================================

fn supplier(id: u64, name: &str, cats: &[&str]) -> Supplier {
    Supplier {
        id,
        name: name.to_string(),
        cat_names: cats.iter().map(|c| c.to_string()).collect(),
        phone_number: "09123456".to_string(),
        note: String::new(),
        latitude: "16.8".to_string(),
        longitude: "96.1".to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap(),
    }
}

// =========================================================
// 扇出分组测试
// =========================================================

#[test]
fn test_item_with_n_categories_appears_in_n_groups() {
    let items = vec![supplier(1, "Aye", &["Food", "Water", "Shelter"])];

    let grouped = group_by_category(&items);

    assert_eq!(grouped.len(), 3);
    for cat in ["Food", "Water", "Shelter"] {
        let group = grouped.get(cat).expect("missing group");
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].id, 1);
    }
}

#[test]
fn test_items_sharing_a_category_land_in_the_same_group() {
    let items = vec![
        supplier(1, "Aye", &["Food"]),
        supplier(2, "Mya", &["Food", "Water"]),
    ];

    let grouped = group_by_category(&items);

    assert_eq!(grouped.get("Food").unwrap().len(), 2);
    assert_eq!(grouped.get("Water").unwrap().len(), 1);
}

#[test]
fn test_item_without_categories_goes_to_unknown() {
    let items = vec![supplier(7, "Anonymous", &[])];

    let grouped = group_by_category(&items);

    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped.get(UNKNOWN_CATEGORY).unwrap()[0].id, 7);
}

#[test]
fn test_empty_input_produces_no_groups() {
    let grouped = group_by_category(&[]);
    assert!(grouped.is_empty());
}

#[test]
fn test_groups_are_ordered_by_name() {
    let items = vec![
        supplier(1, "a", &["Water"]),
        supplier(2, "b", &["Food"]),
        supplier(3, "c", &["Medicine"]),
    ];

    let grouped = group_by_category(&items);
    let keys: Vec<&String> = grouped.keys().collect();

    assert_eq!(keys, ["Food", "Medicine", "Water"]);
}

#[test]
fn test_total_memberships_equals_category_count_sum() {
    // 一条记录属于 N 个分类就出现 N 次，分组总成员数等于分类数之和
    let items = vec![
        supplier(1, "a", &["Food", "Water"]),
        supplier(2, "b", &["Food"]),
        supplier(3, "c", &[]),
    ];

    let grouped = group_by_category(&items);
    let memberships: usize = grouped.values().map(Vec::len).sum();

    assert_eq!(memberships, 4);
}
