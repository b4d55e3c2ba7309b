//! Maps each subcommand onto one client call.

use crate::cli::Command;
use crate::error::CliError;
use crate::output::Output;

use common::ErrorLocation;

use popcat_core::config::{API_KEY_ENV, api_key_from_env};
use popcat_core::{
    CodeClient, DataLookup, ImageFilter, InputFailure, PairMeme, PopcatClient, PopcatError, RandomData,
    RandomText, Shortener, TextMeme, TextTransform,
};

use std::io::{read_to_string, stdin};
use std::panic::Location;
use std::path::Path;

use log::info;

/// Run one subcommand against `client`.
pub async fn execute(command: Command, client: &PopcatClient) -> Result<Output, CliError> {
    let output: Output = match command {
        Command::Image { filter, image } => {
            let filter: ImageFilter = filter.parse()?;
            client.filter(filter, &image).await?.into()
        }
        Command::Colorify { image, color } => client.colorify(&image, &color).await?.into(),
        Command::Gun { image, text } => client.gun(&image, text.as_deref()).await?.into(),

        Command::Meme { template, text } => {
            let template: TextMeme = template.parse()?;
            client.text_meme(template, &text).await?.into()
        }
        Command::Pair {
            template,
            text1,
            text2,
        } => {
            let template: PairMeme = template.parse()?;
            client.pair_meme(template, &text1, &text2).await?.into()
        }
        Command::Ship { user1, user2 } => client.ship(&user1, &user2).await?.into(),
        Command::Opinion { image, text } => client.opinion(&image, &text).await?.into(),
        Command::Quote { image, text, name } => client.quote(&image, &text, &name).await?.into(),
        Command::Discord {
            username,
            content,
            avatar,
            color,
            timestamp,
        } => client
            .discord_message(
                &username,
                &content,
                avatar.as_deref(),
                color.as_deref(),
                timestamp.as_deref(),
            )
            .await?
            .into(),
        Command::Lulcat { text } => client.lulcat(&text).await?.into(),

        Command::Text { transform, text } => {
            let transform: TextTransform = transform.parse()?;
            client.transform(transform, &text).await?.into()
        }
        Command::Translate { text, to } => client.translate(&text, &to).await?.into(),
        Command::Decode { binary } => client.decode(&binary).await?.into(),

        Command::Lookup { kind, query } => {
            let lookup: DataLookup = kind.parse()?;
            client.lookup(lookup, &query).await?.into()
        }
        Command::Subreddit { name } => client.subreddit(&name).await?.into(),
        Command::RandomColor => client.randomcolor().await?.into(),
        Command::Random { kind } => random(client, &kind).await?,

        Command::Lyrics { song } => client.lyrics(&song).await?.into(),
        Command::Screenshot { url } => client.screenshot(&url).await?.into(),
        Command::Chatbot {
            message,
            owner,
            botname,
        } => client.chatbot(&message, &owner, &botname).await?.into(),
        Command::Welcome {
            background,
            avatar,
            text1,
            text2,
            text3,
        } => client
            .welcomecard(&background, &avatar, &text1, &text2, &text3)
            .await?
            .into(),

        Command::Shorten { url, extension } => Shortener::with_client(client.clone())
            .shorten(&url, &extension)
            .await?
            .into(),
        Command::ShortenInfo { extension } => Shortener::with_client(client.clone())
            .get_info(&extension)
            .await?
            .into(),

        Command::Paste {
            title,
            description,
            file,
            theme,
            language,
            api_key,
        } => {
            let api_key = resolve_api_key(api_key)?;
            let code = read_code(file.as_deref())?;
            info!("Uploading {} characters as '{}'", code.chars().count(), title);

            CodeClient::with_client(client.clone(), api_key)?
                .create_bin(&title, &description, &code, &theme, &language)
                .await?
                .into()
        }
        Command::Themes => Output::List(CodeClient::available_themes()),
        Command::Languages => Output::List(CodeClient::available_languages()),
    };

    Ok(output)
}

/// `random` accepts both the text and the JSON kinds under one name space.
async fn random(client: &PopcatClient, kind: &str) -> Result<Output, PopcatError> {
    if let Ok(endpoint) = kind.parse::<RandomText>() {
        return Ok(client.random_text(endpoint).await?.into());
    }

    let endpoint: RandomData = kind.parse().map_err(|_| {
        PopcatError::invalid_input("random", InputFailure::UnknownEndpoint(kind.to_string()))
    })?;
    Ok(client.random_data(endpoint).await?.into())
}

/// `--api-key` first, then `POPCAT_API_KEY`.
#[track_caller]
pub fn resolve_api_key(flag: Option<String>) -> Result<String, CliError> {
    flag.filter(|key| !key.is_empty())
        .or_else(api_key_from_env)
        .ok_or(CliError::MissingApiKey {
            variable: API_KEY_ENV,
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn read_code(file: Option<&Path>) -> Result<String, CliError> {
    let result = match file {
        Some(path) => std::fs::read_to_string(path),
        None => read_to_string(stdin()),
    };

    result.map_err(|e| CliError::Cli {
        message: format!("Failed to read code: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
