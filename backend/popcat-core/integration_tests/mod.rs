mod endpoints;
mod helpers;
mod services;
