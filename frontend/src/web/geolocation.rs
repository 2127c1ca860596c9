//! 浏览器定位封装模块
//!
//! 使用 `web_sys` 的 Geolocation API，每次调用发起一次定位请求。
//! 结果通过回调送回：成功得到坐标对，失败得到可展示的错误描述，
//! 任何情况下都不抛异常——表单页据此决定是否阻塞提交。

use leptos::prelude::*;
use myansafe_shared::GeoCoordinate;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// 定位失败时的展示文本
const FAILED_TEXT: &str = "တည်နေရာရယူရန် မအောင်မြင်ပါ။ ကျေးဇူးပြု၍ ခွင့်ပြုချက်စစ်ဆေးပါ။";

/// 一次定位请求的状态，表单页用它渲染定位横幅
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    /// 正在请求定位
    Loading,
    /// 已取得坐标
    Ready(GeoCoordinate),
    /// 定位失败或浏览器不支持，携带展示文本
    Failed(String),
}

impl LocationStatus {
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match self {
            LocationStatus::Ready(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LocationStatus::Failed(_))
    }
}

/// 定位请求器
pub struct Geolocator;

impl Geolocator {
    /// 发起一次定位请求
    ///
    /// 重试按钮直接再次调用本方法即可——没有内建重试策略。
    pub fn acquire<F>(on_result: F)
    where
        F: Fn(Result<GeoCoordinate, String>) + 'static,
    {
        let Some(window) = web_sys::window() else {
            on_result(Err("Geolocation is not supported by this browser.".to_string()));
            return;
        };

        let geolocation = match window.navigator().geolocation() {
            Ok(g) => g,
            Err(_) => {
                on_result(Err("Geolocation is not supported by this browser.".to_string()));
                return;
            }
        };

        // 成功与失败两个回调共享同一个结果通道
        let on_result = Rc::new(on_result);

        let success_cb = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
                let coords = position.coords();
                on_result(Ok(GeoCoordinate {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }));
            })
        };

        let error_cb = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn FnMut(web_sys::PositionError)>::new(move |err: web_sys::PositionError| {
                on_result(Err(err.message()));
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                success_cb.as_ref().unchecked_ref(),
                Some(error_cb.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            on_result(Err("Geolocation is not supported by this browser.".to_string()));
        }

        // 泄漏闭包以保持回调存活（每次请求一对，一次性）
        success_cb.forget();
        error_cb.forget();
    }
}

/// 发起一次定位并把结果写入状态信号
///
/// 底层失败原因只进控制台；横幅展示固定文本（浏览器不支持时例外）。
/// 写入用 `try_set`：视图已卸载时落地的结果被静默丢弃。
pub fn acquire_location(set_status: WriteSignal<LocationStatus>) {
    set_status.set(LocationStatus::Loading);
    Geolocator::acquire(move |result| match result {
        Ok(coordinate) => {
            let _ = set_status.try_set(LocationStatus::Ready(coordinate));
        }
        Err(cause) => {
            web_sys::console::error_1(&format!("Geolocation error: {cause}").into());
            let text = if cause.contains("not supported") {
                cause
            } else {
                FAILED_TEXT.to_string()
            };
            let _ = set_status.try_set(LocationStatus::Failed(text));
        }
    });
}
