mod cli;
mod config;
mod logger;
mod output;
