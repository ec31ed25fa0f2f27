pub mod responses;

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;
use crate::timing::Delay;
use responses::ResponseTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            sender: Sender::User,
            text: text.to_string(),
        }
    }

    pub fn bot(text: &str) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.to_string(),
        }
    }

    pub fn bubble_class(&self) -> &'static str {
        match self.sender {
            Sender::User => "alert alert-primary text-end mb-2",
            Sender::Bot => "alert alert-info mb-2",
        }
    }
}

/// Panel visibility plus the append-only transcript.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub open: bool,
    pub transcript: Vec<ChatMessage>,
}

pub enum ChatAction {
    Toggle,
    Append(ChatMessage),
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Toggle => next.open = !next.open,
            ChatAction::Append(message) => next.transcript.push(message),
        }
        Rc::new(next)
    }
}

/// Posts the user's message now and the canned reply after the bot delay.
///
/// Returns `false` without touching the transcript when `input` is blank.
pub fn send_message(
    input: &str,
    responses: Rc<ResponseTable>,
    delay: &dyn Delay,
    dispatch: Callback<ChatAction>,
) -> bool {
    let text = input.trim();
    if text.is_empty() {
        return false;
    }

    dispatch.emit(ChatAction::Append(ChatMessage::user(text)));

    let text = text.to_string();
    delay.after(
        config::BOT_REPLY_DELAY_MS,
        Box::new(move || {
            let reply = responses.resolve(&text);
            debug!("Chat reply for {:?}: {:?}", text, reply);
            dispatch.emit(ChatAction::Append(ChatMessage::bot(reply)));
        }),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualDelay, Store};

    #[test]
    fn panel_starts_hidden_and_toggles() {
        let store = Store::<ChatState>::new();
        assert!(!store.state().open);

        store.dispatcher().emit(ChatAction::Toggle);
        assert!(store.state().open);
        store.dispatcher().emit(ChatAction::Toggle);
        assert!(!store.state().open);
    }

    #[test]
    fn blank_input_leaves_transcript_unchanged() {
        let store = Store::<ChatState>::new();
        let delay = ManualDelay::default();
        let table = Rc::new(ResponseTable::default());

        assert!(!send_message("", table.clone(), &delay, store.dispatcher()));
        assert!(!send_message("   \t", table, &delay, store.dispatcher()));
        delay.run_all();

        assert!(store.state().transcript.is_empty());
        assert_eq!(delay.pending(), 0);
    }

    #[test]
    fn user_message_shows_before_delayed_reply() {
        let store = Store::<ChatState>::new();
        let delay = ManualDelay::default();

        assert!(send_message(
            "  Where is your location?  ",
            Rc::new(ResponseTable::default()),
            &delay,
            store.dispatcher(),
        ));
        assert_eq!(
            store.state().transcript,
            vec![ChatMessage::user("Where is your location?")]
        );
        assert_eq!(delay.pending_delays(), vec![config::BOT_REPLY_DELAY_MS]);

        delay.run_all();
        let transcript = &store.state().transcript;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].sender, Sender::Bot);
        assert_eq!(
            transcript[1].text,
            "We are located at 123 Eco Street, Green City, 12345."
        );
    }

    #[test]
    fn transcript_keeps_insertion_order_and_duplicates() {
        let store = Store::<ChatState>::new();
        let delay = ManualDelay::default();
        let table = Rc::new(ResponseTable::default());

        send_message("bye", table.clone(), &delay, store.dispatcher());
        send_message("bye", table, &delay, store.dispatcher());
        delay.run_all();

        let senders: Vec<Sender> = store.state().transcript.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::User, Sender::Bot, Sender::Bot]);
    }

    #[test]
    fn bubbles_are_styled_by_sender() {
        assert!(ChatMessage::user("x").bubble_class().contains("text-end"));
        assert!(ChatMessage::bot("x").bubble_class().contains("alert-info"));
    }
}
