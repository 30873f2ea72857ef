use leptos::prelude::*;
use thaw::*;

use super::config::ConfirmConfig;
use crate::shared::modal_frame::ModalFrame;

/// Delete confirmation; closing by overlay counts as cancel
#[component]
pub fn ConfirmDialog(
    texts: ConfirmConfig,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_cancel modal_class="modal--confirm">
            <div class="modal__header">
                <h3 class="modal__title">{texts.title}</h3>
            </div>
            <div class="modal__body">
                <p>{texts.description}</p>
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {texts.cancel_label}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {texts.confirm_label}
                </Button>
            </div>
        </ModalFrame>
    }
}
