//! 确认对话框：删除职位 / 删除候选人前的二次确认

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    /// 是否显示
    open: Signal<bool>,
    /// 标题
    #[prop(into)]
    title: String,
    /// 说明文字
    #[prop(into)]
    message: String,
    /// 用户点击确认
    #[prop(into)]
    on_confirm: Callback<()>,
    /// 用户取消或点击遮罩
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open" role="dialog">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{title.clone()}</h3>
                    <p class="py-4 text-base-content/80">{message.clone()}</p>
                    <div class="modal-action">
                        <button class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-error" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
                <div class="modal-backdrop" on:click=move |_| on_cancel.run(())></div>
            </div>
        </Show>
    }
}
