//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "popcat")]
#[command(about = "Command-line client for the Popcat API")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/popcat/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API origin for this run
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Append logs to this file as well as stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply an image filter (jail, blur, invert, greyscale, drip, clown,
    /// wanted, ad, uncover, communism, jokeoverhead, mnm)
    Image { filter: String, image: String },

    /// Tint an image with a colour
    Colorify { image: String, color: String },

    /// Hold a gun to an image, optionally with a caption
    Gun {
        image: String,
        #[arg(long)]
        text: Option<String>,
    },

    /// Single-text meme template (supreme, oogway, biden, pikachu, sadcat,
    /// unforgivable, couldread, facts, alert, caution)
    Meme { template: String, text: String },

    /// Two-panel meme template (drake, pooh, happysad)
    Pair {
        template: String,
        text1: String,
        text2: String,
    },

    /// Ship two avatars
    Ship { user1: String, user2: String },

    /// Someone's opinion about an image
    Opinion { image: String, text: String },

    /// Quote card (text up to 125 characters)
    Quote {
        image: String,
        text: String,
        name: String,
    },

    /// Fake Discord message
    Discord {
        username: String,
        content: String,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Translate text to lolcat
    Lulcat { text: String },

    /// Text transform (reverse, mock, doublestruck, texttomorse, encode)
    Text { transform: String, text: String },

    /// Translate text into a language code
    Translate { text: String, to: String },

    /// Decode space-separated binary octets
    Decode { binary: String },

    /// Data lookup (weather, github, npm, steam, imdb, country,
    /// periodic_table, colorinfo, itunes)
    Lookup { kind: String, query: String },

    /// Subreddit details (a leading r/ is accepted)
    Subreddit { name: String },

    /// A random colour
    RandomColor,

    /// Random content (joke, fact, 8ball, randommeme, car, showerthought,
    /// wouldyourather)
    Random { kind: String },

    /// Song lyrics
    Lyrics { song: String },

    /// Screenshot a web page
    Screenshot { url: String },

    /// Talk to the chatbot
    Chatbot {
        message: String,
        #[arg(long, default_value = "Popcat")]
        owner: String,
        #[arg(long, default_value = "Popcat")]
        botname: String,
    },

    /// Welcome card (background must be an HTTPS .png)
    Welcome {
        background: String,
        avatar: String,
        text1: String,
        text2: String,
        text3: String,
    },

    /// Create a short link
    Shorten { url: String, extension: String },

    /// Look up a short link
    ShortenInfo { extension: String },

    /// Create a code paste (needs POPCAT_API_KEY or --api-key)
    Paste {
        title: String,
        description: String,
        /// File with the code; read from stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "GitHub Dark")]
        theme: String,
        #[arg(long, default_value = "PlainText")]
        language: String,
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List paste themes
    Themes,

    /// List paste languages
    Languages,
}
