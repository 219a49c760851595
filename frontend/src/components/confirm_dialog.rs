use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    /// Question shown to the user, already localized.
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Blocking confirmation step in front of irreversible operations.
/// Nothing is issued until the user explicitly confirms; the backdrop and
/// the cancel button both abort.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_dialog_click = Callback::from(|event: MouseEvent| {
        event.stop_propagation();
    });

    html! {
        <div class="confirm-backdrop" onclick={on_cancel.clone()}>
            <div class="confirm-dialog" role="alertdialog" aria-modal="true" onclick={on_dialog_click}>
                <p class="confirm-message">{ props.message.clone() }</p>
                <div class="confirm-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel}>
                        { props.cancel_label.clone() }
                    </button>
                    <button type="button" class="btn-danger" onclick={on_confirm}>
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
