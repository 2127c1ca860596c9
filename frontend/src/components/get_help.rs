use leptos::prelude::*;

use super::location_banner::LocationBanner;
use super::location_form::LocationForm;
use crate::web::geolocation::{LocationStatus, acquire_location};

/// 求助页：进入时发起一次定位，表单提交不因定位失败而受阻
#[component]
pub fn GetHelpPage() -> impl IntoView {
    let (status, set_status) = signal(LocationStatus::Loading);

    // 视图激活时取一次定位
    acquire_location(set_status);

    let coordinate = Signal::derive(move || status.get().coordinate());

    view! {
        <div class="bg-white shadow-md rounded-lg p-6">
            <h2 class="text-2xl font-bold text-blue-800 mb-6">
                "Request Emergency Help"
            </h2>
            <LocationBanner status=status on_retry=move |_| acquire_location(set_status) />
            <LocationForm coordinate=coordinate />
        </div>
    }
}
