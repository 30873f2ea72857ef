use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface. Content renders its own header and buttons.
#[component]
pub fn ModalFrame(
    /// Overlay click (press and release both on the overlay)
    on_close: Callback<()>,
    #[prop(optional, default = true)] close_on_overlay: bool,
    #[prop(optional, default = 1000)] z_index: i32,
    /// Extra class for `div.modal`
    #[prop(optional)]
    modal_class: &'static str,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // the overlay is removed by on_close, so leave the current dispatch first
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", modal_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                style="position: relative;"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
