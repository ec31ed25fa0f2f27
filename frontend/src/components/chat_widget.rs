use yew::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::chat::responses::ResponseTable;
use crate::chat::{self, ChatAction, ChatState};
use crate::timing::TimerDelay;

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let chat = use_reducer(ChatState::default);
    let input = use_state(String::new);
    let responses = use_memo(|_| ResponseTable::default(), ());
    let input_ref = use_node_ref();
    let messages_ref = use_node_ref();

    // Focus the input whenever the panel opens
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            chat.open,
        );
    }

    // Keep the newest bubble in view
    {
        let messages_ref = messages_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(messages) = messages_ref.cast::<HtmlElement>() {
                    messages.set_scroll_top(messages.scroll_height());
                }
                || ()
            },
            chat.transcript.len(),
        );
    }

    let toggle = {
        let chat = chat.clone();
        Callback::from(move |_: MouseEvent| chat.dispatch(ChatAction::Toggle))
    };

    let send = {
        let chat = chat.clone();
        let input = input.clone();
        let responses = responses.clone();
        Callback::from(move |_: ()| {
            let dispatch = {
                let chat = chat.clone();
                Callback::from(move |action| chat.dispatch(action))
            };
            if chat::send_message(&input, responses.clone(), &TimerDelay, dispatch) {
                input.set(String::new());
            }
        })
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onkeypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let onclick_send = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let panel_style = if chat.open { "display: block;" } else { "display: none;" };

    html! {
        <>
            <div class="position-fixed bottom-0 start-0 p-3 chat-launcher">
                <button class="btn btn-primary rounded-circle" onclick={toggle.clone()} aria-label="Chat with us">
                    {"💬"}
                </button>
            </div>
            <div id="chatbot" class="card chat-panel" style={panel_style}>
                <div class="card-header d-flex justify-content-between align-items-center">
                    <strong>{"Empire Builders Assistant"}</strong>
                    <button type="button" class="btn-close" onclick={toggle}></button>
                </div>
                <div id="chatbotMessages" class="card-body chat-messages" ref={messages_ref}>
                    { for chat.transcript.iter().map(|message| html! {
                        <div class={message.bubble_class()}>{ &message.text }</div>
                    }) }
                </div>
                <div class="card-footer d-flex gap-2">
                    <input
                        id="userInput"
                        ref={input_ref}
                        type="text"
                        class="form-control"
                        placeholder="Type your message..."
                        value={(*input).clone()}
                        {oninput}
                        {onkeypress}
                    />
                    <button class="btn btn-primary" onclick={onclick_send}>{"Send"}</button>
                </div>
            </div>
            <style>
                {r#"
                .chat-panel {
                    position: fixed;
                    bottom: 90px;
                    left: 20px;
                    width: 320px;
                    max-width: calc(100vw - 40px);
                    z-index: 1050;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.2);
                }
                .chat-messages {
                    height: 300px;
                    overflow-y: auto;
                }
                .chat-launcher {
                    z-index: 1050;
                }
                .chat-launcher .btn {
                    width: 56px;
                    height: 56px;
                    font-size: 1.5rem;
                }
                "#}
            </style>
        </>
    }
}
