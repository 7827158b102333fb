//! 加载态组件：整页 spinner 与卡片骨架屏

use leptos::prelude::*;

/// 整页居中的加载指示
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-base-content/70">{message}</p>
        </div>
    }
}

/// 列表加载中的占位卡片
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="skeleton h-6 w-2/3"></div>
                <div class="skeleton h-4 w-full"></div>
                <div class="skeleton h-4 w-full"></div>
                <div class="skeleton h-4 w-1/2"></div>
            </div>
        </div>
    }
}
