//! Handler output and its rendering into a Discord message.

use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;

use crate::constants::{
    MAX_EMBED_DESCRIPTION_CHARS, MAX_EMBED_FIELD_NAME_CHARS, MAX_EMBED_FIELD_VALUE_CHARS,
    MAX_EMBED_FOOTER_CHARS, MAX_EMBED_TITLE_CHARS, MAX_EMBED_TOTAL_CHARS, MAX_MESSAGE_CHARS,
};
use crate::error::CommandError;
use crate::ui::style::{COLOR_ALERT, clip};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReply {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub image_url: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(EmbedReply),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn embed(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self::Embed(EmbedReply {
            title: title.into(),
            description: description.into(),
            color,
            image_url: None,
            fields: Vec::new(),
            footer: None,
        })
    }

    /// Attaches an image. No-op on plain text replies.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        if let Self::Embed(embed) = &mut self {
            embed.image_url = Some(url.into());
        }
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Embed(embed) = &mut self {
            embed.fields.push(EmbedField {
                name: name.into(),
                value: value.into(),
            });
        }
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        if let Self::Embed(embed) = &mut self {
            embed.footer = Some(footer.into());
        }
        self
    }

    /// The main textual payload: the message content or the embed description.
    pub fn body(&self) -> &str {
        match self {
            Self::Text(content) => content,
            Self::Embed(embed) => &embed.description,
        }
    }

    /// Clips every part to Discord's size limits. Embeds that still exceed the
    /// overall limit give up description space first.
    pub fn within_limits(self) -> Self {
        match self {
            Self::Text(content) => Self::Text(clip(&content, MAX_MESSAGE_CHARS)),
            Self::Embed(embed) => {
                let title = clip(&embed.title, MAX_EMBED_TITLE_CHARS);
                let fields: Vec<EmbedField> = embed
                    .fields
                    .iter()
                    .map(|f| EmbedField {
                        name: clip(&f.name, MAX_EMBED_FIELD_NAME_CHARS),
                        value: clip(&f.value, MAX_EMBED_FIELD_VALUE_CHARS),
                    })
                    .collect();
                let footer = embed.footer.as_deref().map(|f| clip(f, MAX_EMBED_FOOTER_CHARS));
                let fixed = title.chars().count()
                    + fields
                        .iter()
                        .map(|f| f.name.chars().count() + f.value.chars().count())
                        .sum::<usize>()
                    + footer.as_deref().map_or(0, |f| f.chars().count());
                let room = MAX_EMBED_TOTAL_CHARS
                    .saturating_sub(fixed)
                    .min(MAX_EMBED_DESCRIPTION_CHARS);
                Self::Embed(EmbedReply {
                    description: clip(&embed.description, room),
                    title,
                    fields,
                    footer,
                    ..embed
                })
            }
        }
    }

    /// Builds the outgoing message as a reply to `origin`, clipped to Discord's limits.
    pub fn to_message(&self, origin: &Message) -> CreateMessage {
        let builder = CreateMessage::new().reference_message(origin);
        match self.clone().within_limits() {
            Self::Text(content) => builder.content(content),
            Self::Embed(embed) => builder.embed(build_embed(&embed)),
        }
    }
}

fn build_embed(reply: &EmbedReply) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&reply.title)
        .color(reply.color);
    if !reply.description.is_empty() {
        embed = embed.description(&reply.description);
    }
    if let Some(url) = &reply.image_url {
        embed = embed.image(url);
    }
    for field in &reply.fields {
        embed = embed.field(&field.name, &field.value, false);
    }
    if let Some(footer) = &reply.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

impl From<&CommandError> for Reply {
    fn from(err: &CommandError) -> Self {
        if err.is_fault() {
            Reply::embed("Something went wrong", err.user_message(), COLOR_ALERT)
        } else {
            Reply::text(err.user_message())
        }
    }
}
