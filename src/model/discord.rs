use serde::{Deserialize, Serialize};

use crate::model::review::ReviewDto;

/// A Discord server that can be reviewed.
///
/// Snowflakes exceed JavaScript's safe integer range, so `guild_id` is sent as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordGuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
}

impl DiscordGuildDto {
    /// CDN URL of the guild icon, if it has one.
    pub fn icon_url(&self) -> Option<String> {
        self.icon_hash.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png",
                self.guild_id, hash
            )
        })
    }
}

/// A guild together with its review statistics and reviews, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordGuildDetailDto {
    pub guild: DiscordGuildDto,
    pub review_count: u64,
    /// `None` when the guild has no reviews yet.
    pub average_rating: Option<f64>,
    pub reviews: Vec<ReviewDto>,
}

pub(crate) fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub(crate) fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_id_is_sent_as_string() {
        let dto = DiscordGuildDto {
            guild_id: 1_234_567_890_123_456_789,
            name: "Rust Poland".to_string(),
            icon_hash: None,
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["guild_id"], "1234567890123456789");

        let parsed: DiscordGuildDto = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, dto);
    }

    #[test]
    fn icon_url_requires_icon_hash() {
        let mut dto = DiscordGuildDto {
            guild_id: 42,
            name: "Guild".to_string(),
            icon_hash: None,
        };
        assert_eq!(dto.icon_url(), None);

        dto.icon_hash = Some("abc".to_string());
        assert_eq!(
            dto.icon_url().as_deref(),
            Some("https://cdn.discordapp.com/icons/42/abc.png")
        );
    }
}
