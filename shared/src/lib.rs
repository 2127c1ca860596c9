use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod group;
pub mod serde_helper;
pub mod validate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// 没有分类信息的条目归入这个分组
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// =========================================================
// 参照数据 (Reference Data)
// =========================================================

/// 城市/市镇，用于地址下拉框
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
}

/// 求助分类标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 地理坐标对，由浏览器定位能力产生，仅存在于单次表单会话
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// 求助记录（列表视图返回的形状）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// 分类显示文本
    #[serde(default)]
    pub cat: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub latitude: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub longitude: String,
    pub timestamp: DateTime<Utc>,
}

/// 求助记录（详情接口返回的形状——后端在这条路由上用不同的字段名）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpDetailRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub lat: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub lon: String,
}

impl HelpDetailRecord {
    /// 坐标对，两个字段都能解析时才有值
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        let latitude = self.lat.trim().parse().ok()?;
        let longitude = self.lon.trim().parse().ok()?;
        Some(GeoCoordinate {
            latitude,
            longitude,
        })
    }
}

/// 援助提供者记录，比求助记录多出已解析的分类名列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cat_names: Vec<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub latitude: String,
    #[serde(default, deserialize_with = "serde_helper::string_or_number")]
    pub longitude: String,
    pub timestamp: DateTime<Utc>,
}

/// 情况通报（博客文章）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    /// 一篇文章可以带多张图片
    #[serde(default)]
    pub images: Vec<String>,
    /// 旧版单图字段，仅部分历史数据携带
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// 首选展示图：新版多图优先，回退到旧版单图
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.image_url.as_deref())
    }
}

/// 附加在求助记录上的留言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

// =========================================================
// 请求载荷 (Request Payloads)
// =========================================================

/// 求助表单提交载荷。坐标取不到时发送空字符串，提交不因定位失败而受阻。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitHelpPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
    pub lat: String,
    pub lon: String,
}

/// 援助提供者登记载荷。`cat` 是逗号拼接的分类 id 列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSupplierPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
    pub cat: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录成功后返回的不透明 bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommentPayload {
    pub text: String,
}

// =========================================================
// 响应外壳 (Response Envelopes)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    #[serde(default)]
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// 分页列表响应。`next`/`previous` 是服务端给出的不透明页引用，
/// 客户端原样回传，绝不自行构造分页参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpListResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    /// 服务端已按分类名分好组
    #[serde(default)]
    pub results: BTreeMap<String, Vec<HelpRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppliersResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Supplier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpDetailResponse {
    pub request: HelpDetailRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// 提交留言后返回的回执，客户端用它把新留言追加进列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreated {
    pub id: u64,
    #[serde(default)]
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostsResponse {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// 登录失败等错误响应里可能携带的说明文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
