mod client;
mod submit_guard;
