mod config;
mod endpoints;
mod request;
