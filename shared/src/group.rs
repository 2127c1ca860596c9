//! 分类分组模块
//!
//! 把援助提供者列表按分类名扇出分组：一条记录属于几个分类，
//! 就在几个分组里各出现一次。纯函数，不依赖任何渲染层。

use crate::{Supplier, UNKNOWN_CATEGORY};
use std::collections::BTreeMap;

/// 按分类名扇出分组
///
/// 没有任何分类的记录归入 [`UNKNOWN_CATEGORY`] 分组。
/// 分组按分类名字典序排列，保证渲染顺序稳定。
pub fn group_by_category(items: &[Supplier]) -> BTreeMap<String, Vec<Supplier>> {
    let mut grouped: BTreeMap<String, Vec<Supplier>> = BTreeMap::new();

    for item in items {
        if item.cat_names.is_empty() {
            grouped
                .entry(UNKNOWN_CATEGORY.to_string())
                .or_default()
                .push(item.clone());
            continue;
        }
        for cat in &item.cat_names {
            grouped.entry(cat.clone()).or_default().push(item.clone());
        }
    }

    grouped
}

#[cfg(test)]
mod tests;
