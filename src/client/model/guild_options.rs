use crate::{client::model::error::ApiError, model::discord::DiscordGuildDto};

/// HTTP status of a successful guild list fetch.
pub const STATUS_OK: u64 = 200;

/// Servers offered by the review form's server selector.
///
/// Mirrors the outcome of fetching the guild list: the HTTP status plus whatever guilds
/// arrived. The selector is only usable when the status is 200.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildOptions {
    pub status: u64,
    pub guilds: Vec<DiscordGuildDto>,
}

impl GuildOptions {
    pub fn is_available(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Guilds to list as options; none unless the fetch succeeded.
    pub fn selectable(&self) -> &[DiscordGuildDto] {
        if self.is_available() {
            &self.guilds
        } else {
            &[]
        }
    }

    /// Text shown in the selector before a server is picked.
    pub fn placeholder(&self) -> &'static str {
        if self.is_available() {
            "Select a server"
        } else {
            "Failed to load servers"
        }
    }
}

impl From<Result<Vec<DiscordGuildDto>, ApiError>> for GuildOptions {
    fn from(result: Result<Vec<DiscordGuildDto>, ApiError>) -> Self {
        match result {
            Ok(guilds) => Self {
                status: STATUS_OK,
                guilds,
            },
            Err(err) => Self {
                status: err.status,
                guilds: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(id: u64, name: &str) -> DiscordGuildDto {
        DiscordGuildDto {
            guild_id: id,
            name: name.to_string(),
            icon_hash: None,
        }
    }

    #[test]
    fn successful_fetch_is_available() {
        let options = GuildOptions::from(Ok(vec![guild(1, "One"), guild(2, "Two")]));

        assert!(options.is_available());
        assert_eq!(options.placeholder(), "Select a server");
        assert_eq!(options.selectable().len(), 2);
    }

    #[test]
    fn failed_fetch_keeps_error_status() {
        let options = GuildOptions::from(Err(ApiError::new(503, "Service unavailable")));

        assert_eq!(options.status, 503);
        assert!(!options.is_available());
        assert_eq!(options.placeholder(), "Failed to load servers");
        assert!(options.guilds.is_empty());
    }

    #[test]
    fn non_ok_status_is_unavailable_regardless_of_contents() {
        let options = GuildOptions {
            status: 500,
            guilds: vec![guild(1, "One")],
        };

        assert!(!options.is_available());
        assert_eq!(options.placeholder(), "Failed to load servers");
        assert!(options.selectable().is_empty());
    }
}
