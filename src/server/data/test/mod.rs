mod discord_guild;
mod review;
