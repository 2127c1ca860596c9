//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求载荷的转换（校验在 shared 层的纯函数里）

use leptos::prelude::*;
use myansafe_shared::validate::{ValidationError, build_supplier_payload};
use myansafe_shared::{CreateSupplierPayload, GeoCoordinate};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件与闭包间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    /// 选中的城市 id（下拉框的 value，原样进 address 字段）
    pub address: RwSignal<String>,
    pub comment: RwSignal<String>,
    /// 选中的分类 id 集合，提交时逗号拼接
    pub selected_categories: RwSignal<Vec<u32>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
            selected_categories: RwSignal::new(Vec::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.phone.set(String::new());
        self.address.set(String::new());
        self.comment.set(String::new());
        self.selected_categories.set(Vec::new());
    }

    /// 勾选/取消一个分类
    pub fn toggle_category(&self, id: u32) {
        self.selected_categories.update(|current| {
            if let Some(pos) = current.iter().position(|c| *c == id) {
                current.remove(pos);
            } else {
                current.push(id);
            }
        });
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_categories.with(|c| c.contains(&id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected_categories.with(Vec::len)
    }

    /// 将表单状态转换为登记载荷
    pub fn to_payload(
        &self,
        coordinate: Option<GeoCoordinate>,
    ) -> Result<CreateSupplierPayload, ValidationError> {
        self.selected_categories.with(|categories| {
            build_supplier_payload(
                &self.name.get(),
                &self.phone.get(),
                &self.address.get(),
                &self.comment.get(),
                categories,
                coordinate,
            )
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
