pub const SITE_NAME: &str = "Guild Review";
