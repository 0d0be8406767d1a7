//! Chat service
//!
//! Entry point for everything typed into the chat box: classifies the
//! submission and routes commands to their handlers.

use chatroom_core::entities::User;
use chatroom_core::{parse_input, ChatCommand, ChatInput, DomainError, UserId, HELP_TEXT};
use tracing::{debug, instrument};

use crate::dto::{ChannelResponse, ChatViewResponse, MessageResponse, Notification, SubmitResponse};

use super::account::AccountService;
use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::message::MessageService;

/// Path of the account page
const ACCOUNT_PAGE: &str = "/account";

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle one chat submission from the signed-in user
    #[instrument(skip(self, raw))]
    pub async fn submit(&self, user_id: UserId, raw: &str) -> ServiceResult<SubmitResponse> {
        let user = AccountService::new(self.ctx).current_user(user_id).await?;

        match parse_input(raw).map_err(DomainError::from)? {
            ChatInput::Plain(text) => {
                let (_, message) = MessageService::new(self.ctx)
                    .post_to_channel(&user, &text, false)
                    .await?;
                Ok(SubmitResponse::new(None, Notification::success("Message sent!"))
                    .with_message(MessageResponse::from(message)))
            }
            ChatInput::Command(command) => self.dispatch(&user, command).await,
        }
    }

    /// Chat page contents for the signed-in user
    pub async fn view(&self, user_id: UserId) -> ServiceResult<ChatViewResponse> {
        let user = AccountService::new(self.ctx).current_user(user_id).await?;
        MessageService::new(self.ctx).chat_view(&user).await
    }

    async fn dispatch(&self, user: &User, command: ChatCommand) -> ServiceResult<SubmitResponse> {
        debug!(command = %command, "Dispatching chat command");
        let name = Some(command.name());

        let response = match command {
            ChatCommand::Help => SubmitResponse::new(name, Notification::info(HELP_TEXT)),

            ChatCommand::Account => SubmitResponse::new(
                name,
                Notification::info("Opening your account page.").with_redirect(ACCOUNT_PAGE),
            ),

            ChatCommand::SwapChannel(channel_id) => {
                let channel = ChannelService::new(self.ctx)
                    .swap_channel(user, channel_id)
                    .await?;
                SubmitResponse::new(
                    name,
                    Notification::success(format!("Swapped to channel {}", channel.id)),
                )
                .with_channel(ChannelResponse::from(channel))
            }

            ChatCommand::Whisper { target, message } => {
                let (target, message) = MessageService::new(self.ctx)
                    .whisper(user, &target, &message)
                    .await?;
                SubmitResponse::new(
                    name,
                    Notification::success(format!("Whispered to {}", target.username)),
                )
                .with_message(MessageResponse::from(message))
            }

            ChatCommand::Silent(text) => {
                let (_, message) = MessageService::new(self.ctx)
                    .post_to_channel(user, &text, true)
                    .await?;
                SubmitResponse::new(name, Notification::success("Silent message sent."))
                    .with_message(MessageResponse::from(message))
            }

            ChatCommand::SetSlowmode(seconds) => {
                let channel = ChannelService::new(self.ctx)
                    .set_slowmode(user, seconds)
                    .await?;
                SubmitResponse::new(
                    name,
                    Notification::success(format!("Slowmode set to {seconds} seconds.")),
                )
                .with_channel(ChannelResponse::from(channel))
            }
        };

        Ok(response)
    }
}
