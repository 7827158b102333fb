//! 搜索栏组件
//!
//! 防抖的搜索输入（单定时器，默认 300ms 静默后才回调），
//! 过滤器下拉由调用方通过 children 注入。清除按钮立即生效
//! 并丢弃尚未触发的防抖回调。

use leptos::prelude::*;

use crate::components::icons::{Search, XMark};
use crate::web::Debounce;

#[component]
pub fn SearchBar(
    /// 输入框占位文字
    #[prop(into)]
    placeholder: String,
    /// 防抖窗口（毫秒）
    #[prop(default = 300)]
    debounce_ms: u32,
    /// 静默结束后收到最新搜索词
    #[prop(into)]
    on_search: Callback<String>,
    /// 过滤器下拉等附加控件
    children: Children,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let debounce = Debounce::new(debounce_ms);

    let on_input = {
        let debounce = debounce.clone();
        move |ev| {
            let value = event_target_value(&ev);
            set_term.set(value.clone());
            debounce.fire(move || on_search.run(value.clone()));
        }
    };

    let on_clear = move |_| {
        debounce.cancel();
        set_term.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="flex flex-wrap items-center gap-2 w-full">
            <label class="input input-bordered flex items-center gap-2 flex-1 min-w-64">
                <Search attr:class="h-4 w-4 opacity-50" />
                <input
                    type="text"
                    class="grow"
                    placeholder=placeholder
                    prop:value=term
                    on:input=on_input
                />
                // 始终挂载，避免把 on_clear 移进会重建的子闭包
                <button
                    type="button"
                    class="btn btn-ghost btn-xs btn-circle"
                    class:hidden=move || term.get().is_empty()
                    title="Clear search"
                    on:click=on_clear
                >
                    <XMark attr:class="h-3 w-3" />
                </button>
            </label>
            {children()}
        </div>
    }
}
