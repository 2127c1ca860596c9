//! 表单校验模块
//!
//! 客户端只做"必填项非空"层面的存在性校验，语义正确性由后端裁决。
//! 全部是接受普通字符串的纯函数，校验失败时绝不允许发出网络请求。

use crate::{CreateSupplierPayload, GeoCoordinate, SubmitHelpPayload};
use std::fmt;

/// 校验失败的种类，Display 输出直接用于页面内联提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 有必填字段为空
    MissingRequiredFields,
    /// 援助提供者表单没有选择任何分类
    NoCategorySelected,
    /// 援助提供者表单缺少已解析的坐标
    NoLocation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredFields => {
                write!(f, "Please fill in all required fields")
            }
            ValidationError::NoCategorySelected => {
                write!(f, "ကျေးဇူးပြု၍ အနည်းဆုံး အကူအညီအမျိုးအစားတစ်ခု ရွေးချယ်ပါ။")
            }
            ValidationError::NoLocation => {
                write!(f, "တည်နေရာရယူရန် မအောင်မြင်ပါ။ ကျေးဇူးပြု၍ ထပ်မံကြိုးစားပါ။")
            }
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 坐标转成载荷字段：取不到坐标时两个字段都是空字符串
pub fn coordinate_fields(coordinate: Option<GeoCoordinate>) -> (String, String) {
    match coordinate {
        Some(c) => (c.latitude.to_string(), c.longitude.to_string()),
        None => (String::new(), String::new()),
    }
}

/// 逗号拼接分类 id 列表，与后端约定的 `cat` 字段格式一致
pub fn join_category_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 构造求助提交载荷
///
/// 必填：name、phone、address。comment 可空。
/// 坐标可缺省——定位失败不阻塞求助提交。
pub fn build_help_payload(
    name: &str,
    phone: &str,
    address: &str,
    comment: &str,
    coordinate: Option<GeoCoordinate>,
) -> Result<SubmitHelpPayload, ValidationError> {
    if !present(name) || !present(phone) || !present(address) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let (lat, lon) = coordinate_fields(coordinate);
    Ok(SubmitHelpPayload {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        comment: comment.to_string(),
        lat,
        lon,
    })
}

/// 构造援助提供者登记载荷
///
/// 在求助表单的必填项之外，还要求至少选择一个分类、并且坐标已解析
/// （这张表单是"无定位不可提交"的例外）。
pub fn build_supplier_payload(
    name: &str,
    phone: &str,
    address: &str,
    comment: &str,
    selected_categories: &[u32],
    coordinate: Option<GeoCoordinate>,
) -> Result<CreateSupplierPayload, ValidationError> {
    if selected_categories.is_empty() {
        return Err(ValidationError::NoCategorySelected);
    }
    let Some(coordinate) = coordinate else {
        return Err(ValidationError::NoLocation);
    };
    if !present(name) || !present(phone) || !present(address) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let (lat, lon) = coordinate_fields(Some(coordinate));
    Ok(CreateSupplierPayload {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        comment: comment.to_string(),
        cat: join_category_ids(selected_categories),
        lat,
        lon,
    })
}

/// 博客表单：标题与正文必填
pub fn validate_blog_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    if present(title) && present(content) {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields)
    }
}

/// 登录表单：用户名与密码必填
pub fn validate_login_fields(username: &str, password: &str) -> Result<(), ValidationError> {
    if present(username) && present(password) {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields)
    }
}

/// 留言表单：正文必填
pub fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    if present(text) {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields)
    }
}

#[cfg(test)]
mod tests;
